//! Authentication principal derived from a user account.

use serde::Serialize;
use uuid::Uuid;

use super::user::{Role, User};

/// Identity object handed to an authentication layer.
///
/// Plain data: identifier, stored credential hash, and granted
/// authorities. Nothing here depends on a security framework.
#[derive(Clone, Serialize)]
pub struct Principal {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub credential: String,
    pub authorities: Vec<Role>,
}

// Keep the credential hash out of debug output
impl std::fmt::Debug for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Principal")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("credential", &"[REDACTED]")
            .field("authorities", &self.authorities)
            .finish()
    }
}

impl Principal {
    /// Check whether the principal holds a given authority
    pub fn has_authority(&self, role: Role) -> bool {
        self.authorities.contains(&role)
    }
}

impl From<User> for Principal {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            credential: user.password_hash,
            authorities: vec![user.role],
        }
    }
}
