//! Per-role dashboards

use crate::client::Method;
use crate::common::Result;
use crate::session::{EntityKind, Role};

use super::context::ScenarioContext;
use super::fixtures::{self, QUIZ_KEY};

pub async fn admin(ctx: &mut ScenarioContext) -> Result<()> {
    if !ctx.has_token(Role::Admin) {
        ctx.skip(3, "admin dashboard", "no admin token");
        return Ok(());
    }
    let role = Some(Role::Admin);

    ctx.call(Method::Get, "/admin/dashboard", None, role).await;
    ctx.call(Method::Get, "/admin/users", None, role).await;

    let body = fixtures::empty();
    let promote = format!("/admin/users/{}/promote", ctx.fixtures.promote_user_id);
    ctx.call(Method::Post, &promote, Some(&body), role).await;
    Ok(())
}

pub async fn instructor(ctx: &mut ScenarioContext) -> Result<()> {
    if !ctx.has_token(Role::Instructor) {
        ctx.skip(4, "instructor dashboard", "no instructor token");
        return Ok(());
    }
    let role = Some(Role::Instructor);

    ctx.call(Method::Get, "/instructor/dashboard", None, role).await;
    ctx.call(Method::Get, "/instructor/courses", None, role).await;
    ctx.call(Method::Get, "/instructor/students", None, role).await;

    match ctx.entity_id(EntityKind::Quiz, QUIZ_KEY)? {
        Some(quiz_id) => {
            let analytics = format!(
                "/instructor/lessons/{}/quizzes/{quiz_id}/analytics",
                ctx.fixtures.lesson_id
            );
            ctx.call(Method::Get, &analytics, None, role).await;
        }
        None => ctx.skip(1, "quiz analytics", "no quiz captured"),
    }
    Ok(())
}

pub async fn student(ctx: &mut ScenarioContext) -> Result<()> {
    if !ctx.has_token(Role::Student) {
        ctx.skip(2, "student dashboard", "no student token");
        return Ok(());
    }
    let role = Some(Role::Student);

    ctx.call(Method::Get, "/student/dashboard", None, role).await;
    ctx.call(Method::Get, "/student/courses", None, role).await;
    Ok(())
}
