pub mod extractors;
pub mod jwt;
pub mod session_cookie;
pub mod validation;
