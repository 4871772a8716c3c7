//! Student enrollment in the captured course

use crate::client::Method;
use crate::common::Result;
use crate::session::{EntityKind, Role};

use super::context::ScenarioContext;
use super::fixtures::{self, COURSE_KEY};

pub async fn run(ctx: &mut ScenarioContext) -> Result<()> {
    if !ctx.has_token(Role::Student) {
        ctx.skip(2, "enrollment", "no student token");
        return Ok(());
    }
    let Some(course_id) = ctx.entity_id(EntityKind::Course, COURSE_KEY)? else {
        ctx.skip(2, "enrollment", "no course captured");
        return Ok(());
    };

    let body = fixtures::enrollment();
    let response = ctx
        .call(
            Method::Post,
            &format!("/student/courses/{course_id}/enroll"),
            Some(&body),
            Some(Role::Student),
        )
        .await;
    if response.success {
        ctx.capture(EntityKind::Enrollment, COURSE_KEY, response.data);
    }

    ctx.call(Method::Get, "/student/enrollments", None, Some(Role::Student))
        .await;
    Ok(())
}
