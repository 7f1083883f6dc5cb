//! Admin authorization.
//!
//! The role is read from the credential store on every call, so a demotion
//! takes effect on the caller's very next request. Token issuance grants nothing.

use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use crate::auth::domain::AuthUser;
use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;

#[derive(Clone)]
pub struct AdminGate {
    users: Arc<dyn AuthRepository>,
}

impl AdminGate {
    pub fn new(users: Arc<dyn AuthRepository>) -> Self { Self { users } }

    /// `Ok` with the stored user iff it exists and its role is admin.
    pub async fn require_admin(&self, user_id: Uuid) -> Result<AuthUser, AuthError> {
        match self.users.find_user_by_id(user_id).await? {
            Some(user) if user.is_admin() => Ok(user),
            Some(_) => {
                warn!(%user_id, "admin operation refused for non-admin");
                Err(AuthError::Forbidden("administrator role required".into()))
            }
            None => {
                warn!(%user_id, "admin operation refused for unknown user");
                Err(AuthError::Forbidden("administrator role required".into()))
            }
        }
    }
}
