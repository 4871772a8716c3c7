//! Lesson completion and progress analytics

use crate::client::Method;
use crate::common::Result;
use crate::session::{EntityId, EntityKind, Role};

use super::context::ScenarioContext;
use super::fixtures::{self, COURSE_KEY};

pub async fn run(ctx: &mut ScenarioContext) -> Result<()> {
    let course_id = ctx.entity_id(EntityKind::Course, COURSE_KEY)?;
    student_progress(ctx, course_id.as_ref()).await;
    instructor_progress(ctx, course_id.as_ref()).await;
    Ok(())
}

async fn student_progress(ctx: &mut ScenarioContext, course_id: Option<&EntityId>) {
    let Some(course_id) = course_id.filter(|_| ctx.has_token(Role::Student)) else {
        ctx.skip(3, "student progress", "needs student token and course");
        return;
    };

    ctx.call(
        Method::Get,
        &format!("/student/courses/{course_id}/progress"),
        None,
        Some(Role::Student),
    )
    .await;

    let body = fixtures::empty();
    ctx.call(
        Method::Post,
        &format!("/student/lessons/{}/complete", ctx.fixtures.lesson_id),
        Some(&body),
        Some(Role::Student),
    )
    .await;

    ctx.call(Method::Get, "/student/analytics", None, Some(Role::Student))
        .await;
}

async fn instructor_progress(ctx: &mut ScenarioContext, course_id: Option<&EntityId>) {
    let Some(course_id) = course_id.filter(|_| ctx.has_token(Role::Instructor)) else {
        ctx.skip(2, "instructor progress", "needs instructor token and course");
        return;
    };

    ctx.call(Method::Get, "/instructor/analytics", None, Some(Role::Instructor))
        .await;
    ctx.call(
        Method::Get,
        &format!("/instructor/courses/{course_id}/students/progress"),
        None,
        Some(Role::Instructor),
    )
    .await;
}
