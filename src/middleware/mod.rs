use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use url::form_urlencoded;

use crate::{
    AppState,
    utils::{jwt::SessionKeys, session_cookie::session_token},
};

pub const ADMIN_PREFIX: &str = "/admin";
pub const LOGIN_PATH: &str = "/admin/login";
pub const LOGIN_API_PATH: &str = "/api/admin/login";

/// Where a request ends up after the guard has looked at it.
#[derive(Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Not an admin path, or one of the login routes.
    Exempt,
    Authenticated,
    /// No cookie, or a cookie that failed verification.
    Rejected { location: String },
}

pub fn is_admin_path(path: &str) -> bool {
    path == ADMIN_PREFIX
        || path
            .strip_prefix(ADMIN_PREFIX)
            .is_some_and(|rest| rest.starts_with('/'))
}

pub fn login_redirect(callback_path: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("callbackUrl", callback_path)
        .finish();

    format!("{}?{}", LOGIN_PATH, query)
}

pub fn evaluate(path: &str, token: Option<&str>, keys: &SessionKeys) -> GuardOutcome {
    if path == LOGIN_PATH || path == LOGIN_API_PATH || !is_admin_path(path) {
        return GuardOutcome::Exempt;
    }

    let Some(token) = token else {
        tracing::debug!("No session cookie for {}", path);
        return GuardOutcome::Rejected {
            location: login_redirect(path),
        };
    };

    if keys.verify(token) {
        GuardOutcome::Authenticated
    } else {
        tracing::debug!("Invalid session cookie for {}", path);
        GuardOutcome::Rejected {
            location: login_redirect(path),
        }
    }
}

pub async fn admin_guard(
    State(state): State<AppState>,
    jar: CookieJar,
    req: Request,
    next: Next,
) -> Response {
    let outcome = evaluate(req.uri().path(), session_token(&jar), &state.sessions);

    match outcome {
        GuardOutcome::Exempt | GuardOutcome::Authenticated => next.run(req).await,
        GuardOutcome::Rejected { location } => Redirect::temporary(&location).into_response(),
    }
}
