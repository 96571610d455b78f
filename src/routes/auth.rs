use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::header,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use crate::{
    AppState,
    error::{AppError, Result},
    middleware::{LOGIN_API_PATH, is_admin_path},
    models::{LoginPage, LoginPageQuery, LoginRequest, SessionStatus, SuccessResponse},
    utils::session_cookie::{cleared_session_cookie, session_cookie, session_token},
};

const DEFAULT_LANDING: &str = "/admin/dashboard";
const WRONG_PASSWORD: &str = "كلمة المرور غير صحيحة";

pub async fn login(
    State(state): State<AppState>,
    payload: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Response> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::warn!("Malformed login body: {}", rejection.body_text());
        AppError::BadRequest("طلب تسجيل الدخول غير صالح".to_string())
    })?;

    if payload.password.as_deref() != Some(&*state.admin_password) {
        tracing::warn!("Rejected admin login attempt");
        return Err(AppError::Unauthorized(WRONG_PASSWORD.to_string()));
    }

    let token = state.sessions.issue()?;
    tracing::info!("Admin session issued");

    Ok((
        [(header::SET_COOKIE, session_cookie(&token, state.secure_cookies))],
        Json(SuccessResponse { success: true }),
    )
        .into_response())
}

pub async fn logout(State(state): State<AppState>) -> Response {
    (
        [(header::SET_COOKIE, cleared_session_cookie(state.secure_cookies))],
        Json(SuccessResponse { success: true }),
    )
        .into_response()
}

pub async fn check_session(State(state): State<AppState>, jar: CookieJar) -> Json<SessionStatus> {
    let logged_in = session_token(&jar).is_some_and(|token| state.sessions.verify(token));

    Json(SessionStatus { logged_in })
}

/// Login entry point for the admin area. An already-authenticated visitor is sent
/// straight on to the callback destination.
pub async fn login_page(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<LoginPageQuery>,
) -> Response {
    let callback_url = query
        .callback_url
        .filter(|url| is_admin_destination(url))
        .unwrap_or_else(|| DEFAULT_LANDING.to_string());

    if session_token(&jar).is_some_and(|token| state.sessions.verify(token)) {
        return Redirect::to(&callback_url).into_response();
    }

    Json(LoginPage {
        login_endpoint: LOGIN_API_PATH,
        callback_url,
    })
    .into_response()
}

// Only local admin paths are accepted as callbacks.
fn is_admin_destination(url: &str) -> bool {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    is_admin_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callbacks_are_limited_to_admin_paths() {
        assert!(is_admin_destination("/admin/products"));
        assert!(!is_admin_destination("https://evil.example/admin"));
        assert!(!is_admin_destination("//evil.example"));
        assert!(!is_admin_destination("/api/products"));
        assert!(is_admin_destination("/admin/contact?tab=social"));
    }
}
