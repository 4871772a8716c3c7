//! Scenario runner
//!
//! Walks the backend's feature areas in a fixed order. Each phase is a
//! straight-line script over the shared [`ScenarioContext`]: calls whose
//! prerequisites (a token, a captured record) are missing are skipped and
//! counted, never failed. A phase only returns an error when a response has
//! a shape the rest of the scenario cannot work with; that ends the run.

mod account;
mod auth;
mod context;
mod courses;
mod dashboards;
mod enrollment;
pub mod fixtures;
mod progress;
mod quiz;

pub use context::{RunStats, ScenarioContext};

use colored::Colorize;

use crate::client::{trace, ApiClient};
use crate::common::config::Fixtures;
use crate::common::Result;

/// Named block of the scenario testing one feature area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Authentication,
    CourseManagement,
    Enrollment,
    ProgressTracking,
    QuizSystem,
    AdminDashboard,
    InstructorDashboard,
    StudentDashboard,
    EmailVerification,
    Logout,
}

impl Phase {
    /// All phases, in run order
    pub const ALL: [Phase; 10] = [
        Phase::Authentication,
        Phase::CourseManagement,
        Phase::Enrollment,
        Phase::ProgressTracking,
        Phase::QuizSystem,
        Phase::AdminDashboard,
        Phase::InstructorDashboard,
        Phase::StudentDashboard,
        Phase::EmailVerification,
        Phase::Logout,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Phase::Authentication => "AUTHENTICATION",
            Phase::CourseManagement => "COURSE MANAGEMENT",
            Phase::Enrollment => "ENROLLMENT",
            Phase::ProgressTracking => "PROGRESS TRACKING",
            Phase::QuizSystem => "QUIZ SYSTEM",
            Phase::AdminDashboard => "ADMIN DASHBOARD",
            Phase::InstructorDashboard => "INSTRUCTOR DASHBOARD",
            Phase::StudentDashboard => "STUDENT DASHBOARD",
            Phase::EmailVerification => "EMAIL VERIFICATION",
            Phase::Logout => "LOGOUT",
        }
    }

    fn emoji(&self) -> &'static str {
        match self {
            Phase::Authentication => "🔐",
            Phase::CourseManagement => "📚",
            Phase::Enrollment => "🎓",
            Phase::ProgressTracking => "📈",
            Phase::QuizSystem => "🧩",
            Phase::AdminDashboard => "👑",
            Phase::InstructorDashboard => "👨‍🏫",
            Phase::StudentDashboard => "🎒",
            Phase::EmailVerification => "📧",
            Phase::Logout => "🚪",
        }
    }
}

/// Run a single phase against the context
pub async fn execute_phase(ctx: &mut ScenarioContext, phase: Phase) -> Result<()> {
    println!("{}", trace::format_banner(phase.emoji(), phase.title()));
    tracing::debug!(phase = phase.title(), "Entering phase");

    match phase {
        Phase::Authentication => auth::run(ctx).await,
        Phase::CourseManagement => courses::run(ctx).await,
        Phase::Enrollment => enrollment::run(ctx).await,
        Phase::ProgressTracking => progress::run(ctx).await,
        Phase::QuizSystem => quiz::run(ctx).await,
        Phase::AdminDashboard => dashboards::admin(ctx).await,
        Phase::InstructorDashboard => dashboards::instructor(ctx).await,
        Phase::StudentDashboard => dashboards::student(ctx).await,
        Phase::EmailVerification => account::email_verification(ctx).await,
        Phase::Logout => account::logout(ctx).await,
    }
}

/// Individual steps, for driving parts of a phase on their own
pub mod steps {
    pub use super::auth::{fetch_profiles, login_users, register_users, request_password_reset};
    pub use super::courses::{browse_catalog, create_course, show_course, update_course};
    pub use super::quiz::{create_quiz, list_lesson_quizzes, take_quiz};
}

/// Outcome of a full run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Roles holding a token at the end of the run
    pub tokens_obtained: usize,
    /// Records captured across all kinds
    pub entities_captured: usize,
    /// Phases that ran to completion
    pub phases_completed: usize,
    pub stats: RunStats,
    /// Error that ended the run early
    pub aborted: Option<String>,
}

impl RunSummary {
    pub fn completed(&self) -> bool {
        self.aborted.is_none()
    }
}

/// Owns the run state and drives the phases in order
pub struct Runner {
    ctx: ScenarioContext,
}

impl Runner {
    pub fn new(client: ApiClient, fixtures: Fixtures) -> Self {
        Self {
            ctx: ScenarioContext::new(client, fixtures),
        }
    }

    pub fn context(&self) -> &ScenarioContext {
        &self.ctx
    }

    /// Run every phase in order
    ///
    /// An error escaping a phase is reported here and stops the run; the
    /// summary is returned either way.
    pub async fn run_all(&mut self) -> RunSummary {
        println!("{}", "🚀 Starting Comprehensive LMS API Testing".bold());
        println!("{}", "=".repeat(60));
        println!("Base URL: {}", self.ctx.client.base_url());
        println!("{}", "=".repeat(60));

        let mut phases_completed = 0;
        let mut aborted = None;

        for phase in Phase::ALL {
            match execute_phase(&mut self.ctx, phase).await {
                Ok(()) => phases_completed += 1,
                Err(e) => {
                    tracing::error!(phase = phase.title(), error = %e, "Scenario aborted");
                    println!("{} {}", "❌ Test execution failed:".red(), e);
                    aborted = Some(e.to_string());
                    break;
                }
            }
        }

        let summary = RunSummary {
            tokens_obtained: self.ctx.credentials.count(),
            entities_captured: self.ctx.captures.len(),
            phases_completed,
            stats: self.ctx.stats,
            aborted,
        };

        if summary.completed() {
            print_summary(&summary);
        }
        summary
    }
}

fn print_summary(summary: &RunSummary) {
    println!("\n{}", "✅ All tests completed!".green().bold());
    println!("\n📊 TEST SUMMARY");
    println!("{}", "=".repeat(30));
    println!("Tokens obtained: {}", summary.tokens_obtained);
    println!("Test data created: {}", summary.entities_captured);
    println!(
        "Requests: {} sent, {} succeeded, {} rejected, {} unreachable, {} skipped",
        summary.stats.sent,
        summary.stats.succeeded.to_string().green(),
        summary.stats.rejected.to_string().yellow(),
        summary.stats.transport_failures.to_string().red(),
        summary.stats.skipped
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_order_starts_with_auth_and_ends_with_logout() {
        assert_eq!(Phase::ALL.first(), Some(&Phase::Authentication));
        assert_eq!(Phase::ALL.last(), Some(&Phase::Logout));
    }

    #[test]
    fn test_phase_titles_are_unique() {
        let mut titles: Vec<&str> = Phase::ALL.iter().map(Phase::title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), Phase::ALL.len());
    }
}
