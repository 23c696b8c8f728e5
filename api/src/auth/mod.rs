pub mod claims;
pub mod cookies;
pub mod extractors;
pub mod guards;
pub mod middleware;

pub use claims::{AuthUser, Claims};

/// Name of the cookie that carries the session token.
pub const TOKEN_COOKIE: &str = "token";
