//! Catalog browsing and instructor course CRUD

use crate::client::Method;
use crate::common::Result;
use crate::session::{EntityKind, Role};

use super::context::ScenarioContext;
use super::fixtures::{self, COURSE_KEY};

pub async fn run(ctx: &mut ScenarioContext) -> Result<()> {
    browse_catalog(ctx).await;
    create_course(ctx).await?;
    show_course(ctx).await?;
    update_course(ctx).await?;
    Ok(())
}

/// Public listings: categories, all courses, search and category filter
pub async fn browse_catalog(ctx: &mut ScenarioContext) {
    ctx.call(Method::Get, "/categories", None, None).await;
    ctx.call(Method::Get, "/courses", None, None).await;

    let search = ctx.fixtures.search_term.clone();
    ctx.call_with_query(Method::Get, "/courses", &[("search", search.as_str())], None)
        .await;

    let category_id = ctx.fixtures.category_id.to_string();
    ctx.call_with_query(Method::Get, "/courses", &[("category_id", category_id.as_str())], None)
        .await;
}

pub async fn create_course(ctx: &mut ScenarioContext) -> Result<()> {
    if !ctx.has_token(Role::Instructor) {
        ctx.skip(1, "course creation", "no instructor token");
        return Ok(());
    }

    let endpoint = "/instructor/courses";
    let body = fixtures::course(&ctx.fixtures);
    let response = ctx
        .call(Method::Post, endpoint, Some(&body), Some(Role::Instructor))
        .await;

    if response.success {
        let course = response.record(endpoint)?.clone();
        ctx.capture(EntityKind::Course, COURSE_KEY, course);
    }
    Ok(())
}

pub async fn show_course(ctx: &mut ScenarioContext) -> Result<()> {
    match ctx.entity_id(EntityKind::Course, COURSE_KEY)? {
        Some(course_id) => {
            ctx.call(Method::Get, &format!("/courses/{course_id}"), None, None)
                .await;
        }
        None => ctx.skip(1, "course details", "no course captured"),
    }
    Ok(())
}

/// Update the captured course; makes no request unless both the instructor
/// token and the course are present
pub async fn update_course(ctx: &mut ScenarioContext) -> Result<()> {
    if !ctx.has_token(Role::Instructor) {
        ctx.skip(1, "course update", "no instructor token");
        return Ok(());
    }
    let Some(course_id) = ctx.entity_id(EntityKind::Course, COURSE_KEY)? else {
        ctx.skip(1, "course update", "no course captured");
        return Ok(());
    };

    let body = fixtures::course_update();
    ctx.call(
        Method::Put,
        &format!("/instructor/courses/{course_id}"),
        Some(&body),
        Some(Role::Instructor),
    )
    .await;
    Ok(())
}
