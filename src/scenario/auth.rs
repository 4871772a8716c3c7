//! Registration, login, profile and password reset

use crate::client::Method;
use crate::common::Result;
use crate::session::{EntityKind, Role};

use super::context::ScenarioContext;
use super::fixtures;

pub async fn run(ctx: &mut ScenarioContext) -> Result<()> {
    register_users(ctx).await;
    login_users(ctx).await;
    fetch_profiles(ctx).await;
    request_password_reset(ctx).await;
    Ok(())
}

/// Register one account per role, keeping the payload and any token returned
pub async fn register_users(ctx: &mut ScenarioContext) {
    for role in Role::ALL {
        let user = fixtures::registration(role, &ctx.fixtures);
        let response = ctx
            .call(Method::Post, "/auth/register", Some(&user), None)
            .await;

        if response.success {
            if let Some(token) = response.token() {
                ctx.credentials.set(role, token);
            } else {
                tracing::warn!(%role, "Registration succeeded without a token");
            }
            ctx.capture(EntityKind::User, role.as_str(), user);
        }
    }
}

/// Log in every registered account, replacing the registration token
pub async fn login_users(ctx: &mut ScenarioContext) {
    for role in Role::ALL {
        let Some(user) = ctx.captures.get(EntityKind::User, role.as_str()) else {
            ctx.skip(1, "login", &format!("{role} was not registered"));
            continue;
        };
        let body = fixtures::login(user);

        let response = ctx.call(Method::Post, "/auth/login", Some(&body), None).await;
        if response.success {
            match response.token() {
                Some(token) => ctx.credentials.set(role, token),
                None => tracing::warn!(%role, "Login succeeded without a token"),
            }
        }
    }
}

pub async fn fetch_profiles(ctx: &mut ScenarioContext) {
    for role in Role::ALL {
        if ctx.has_token(role) {
            ctx.call(Method::Get, "/auth/user", None, Some(role)).await;
        } else {
            ctx.skip(1, "profile", &format!("no {role} token"));
        }
    }
}

pub async fn request_password_reset(ctx: &mut ScenarioContext) {
    let body = fixtures::forgot_password(&ctx.fixtures);
    ctx.call(Method::Post, "/auth/forgot-password", Some(&body), None)
        .await;
}
