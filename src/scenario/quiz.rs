//! Quiz lifecycle: listing, creation, attempt, answer and submission

use crate::client::Method;
use crate::common::{Error, Result};
use crate::session::{EntityId, EntityKind, Role};

use super::context::ScenarioContext;
use super::fixtures::{self, QUIZ_KEY};

pub async fn run(ctx: &mut ScenarioContext) -> Result<()> {
    list_lesson_quizzes(ctx).await;
    create_quiz(ctx).await?;
    take_quiz(ctx).await?;
    Ok(())
}

pub async fn list_lesson_quizzes(ctx: &mut ScenarioContext) {
    let path = format!("/test/lessons/{}/quizzes", ctx.fixtures.lesson_id);
    ctx.call(Method::Get, &path, None, None).await;
}

pub async fn create_quiz(ctx: &mut ScenarioContext) -> Result<()> {
    if !ctx.has_token(Role::Instructor) {
        ctx.skip(1, "quiz creation", "no instructor token");
        return Ok(());
    }

    let endpoint = format!("/instructor/lessons/{}/quizzes", ctx.fixtures.lesson_id);
    let body = fixtures::quiz();
    let response = ctx
        .call(Method::Post, &endpoint, Some(&body), Some(Role::Instructor))
        .await;

    if response.success {
        let quiz = response.record(&endpoint)?.clone();
        ctx.capture(EntityKind::Quiz, QUIZ_KEY, quiz);
    }
    Ok(())
}

/// View the captured quiz as the student, start an attempt, answer and submit
///
/// Answer and submission only run when the attempt was created.
pub async fn take_quiz(ctx: &mut ScenarioContext) -> Result<()> {
    if !ctx.has_token(Role::Student) {
        ctx.skip(4, "quiz attempt", "no student token");
        return Ok(());
    }
    let Some(quiz_id) = ctx.entity_id(EntityKind::Quiz, QUIZ_KEY)? else {
        ctx.skip(4, "quiz attempt", "no quiz captured");
        return Ok(());
    };
    let quiz_path = format!("/student/lessons/{}/quizzes/{quiz_id}", ctx.fixtures.lesson_id);

    ctx.call(Method::Get, &quiz_path, None, Some(Role::Student))
        .await;

    let attempts = format!("{quiz_path}/attempts");
    let body = fixtures::empty();
    let response = ctx
        .call(Method::Post, &attempts, Some(&body), Some(Role::Student))
        .await;
    if !response.success {
        ctx.skip(2, "quiz answer and submission", "attempt was not started");
        return Ok(());
    }

    let attempt_id = EntityId::from_record(response.record(&attempts)?)
        .ok_or_else(|| Error::unexpected_response(&attempts, "attempt has no 'id'"))?;

    let answer = fixtures::quiz_answer(&ctx.fixtures);
    ctx.call(
        Method::Post,
        &format!("/student/quiz-attempts/{attempt_id}/answers"),
        Some(&answer),
        Some(Role::Student),
    )
    .await;

    ctx.call(
        Method::Post,
        &format!("/student/quiz-attempts/{attempt_id}/submit"),
        Some(&body),
        Some(Role::Student),
    )
    .await;
    Ok(())
}
