pub use util::token::Claims;

/// Verified identity of the caller, attached to the request by the auth guard.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn email(&self) -> &str {
        &self.0.email
    }
}
