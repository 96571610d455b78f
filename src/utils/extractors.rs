use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;

use crate::{
    AppState,
    error::{AppError, Result},
    utils::{jwt::SessionKeys, session_cookie::session_token},
};

/// Proof that the current request carries a valid admin session cookie.
///
/// Every mutating operation takes one of these, so writes re-check the cookie on
/// their own instead of relying on the admin route guard having run.
#[derive(Debug, Clone, Copy)]
pub struct AdminSession {
    _verified: (),
}

impl AdminSession {
    pub fn from_jar(jar: &CookieJar, keys: &SessionKeys) -> Result<Self> {
        let token = session_token(jar).ok_or_else(AppError::unauthorized)?;

        if !keys.verify(token) {
            return Err(AppError::unauthorized());
        }

        Ok(Self { _verified: () })
    }
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self> {
        let jar = CookieJar::from_headers(&parts.headers);
        AdminSession::from_jar(&jar, &state.sessions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::session_cookie::SESSION_COOKIE;
    use axum_extra::extract::cookie::Cookie;

    #[test]
    fn missing_cookie_is_unauthorized() {
        let keys = SessionKeys::new("secret");

        let result = AdminSession::from_jar(&CookieJar::new(), &keys);
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn invalid_cookie_is_unauthorized() {
        let keys = SessionKeys::new("secret");
        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, "forged"));

        let result = AdminSession::from_jar(&jar, &keys);
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn valid_cookie_yields_a_session() {
        let keys = SessionKeys::new("secret");
        let token = keys.issue().unwrap();
        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, token));

        assert!(AdminSession::from_jar(&jar, &keys).is_ok());
    }
}
