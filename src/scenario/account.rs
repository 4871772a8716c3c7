//! Email verification and logout

use crate::client::Method;
use crate::common::Result;
use crate::session::Role;

use super::context::ScenarioContext;
use super::fixtures;

pub async fn email_verification(ctx: &mut ScenarioContext) -> Result<()> {
    if !ctx.has_token(Role::Student) {
        ctx.skip(2, "email verification", "no student token");
        return Ok(());
    }
    let role = Some(Role::Student);

    let body = fixtures::empty();
    ctx.call(
        Method::Post,
        "/auth/email/verification-notification",
        Some(&body),
        role,
    )
    .await;
    ctx.call(Method::Get, "/verified-only", None, role).await;
    Ok(())
}

pub async fn logout(ctx: &mut ScenarioContext) -> Result<()> {
    let body = fixtures::empty();
    for role in Role::ALL {
        if ctx.has_token(role) {
            ctx.call(Method::Post, "/auth/logout", Some(&body), Some(role))
                .await;
        } else {
            ctx.skip(1, "logout", &format!("no {role} token"));
        }
    }
    Ok(())
}
