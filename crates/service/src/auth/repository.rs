use async_trait::async_trait;
use uuid::Uuid;

use super::domain::{AuthUser, Credentials, Role};
use super::errors::AuthError;

/// Repository abstraction over the credential store.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// Exact, case-sensitive match.
    async fn find_user_by_email(&self, email: &str) -> Result<Option<AuthUser>, AuthError>;
    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<AuthUser>, AuthError>;

    /// Create the user row and its credentials as one unit; `Conflict` when
    /// the email is taken, including when a concurrent registration wins.
    async fn create_user(
        &self,
        name: &str,
        email: &str,
        role: Role,
        password_hash: String,
        password_algorithm: &str,
    ) -> Result<AuthUser, AuthError>;

    async fn get_credentials(&self, user_id: Uuid) -> Result<Option<Credentials>, AuthError>;
    async fn set_role(&self, user_id: Uuid, role: Role) -> Result<AuthUser, AuthError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct Inner {
        users: HashMap<Uuid, AuthUser>,
        creds: HashMap<Uuid, Credentials>,
    }

    #[derive(Default)]
    pub struct MockAuthRepository {
        inner: Mutex<Inner>,
    }

    impl MockAuthRepository {
        /// Number of stored users, for asserting that failed writes left nothing behind.
        pub async fn user_count(&self) -> usize {
            self.inner.lock().await.users.len()
        }
    }

    #[async_trait]
    impl AuthRepository for MockAuthRepository {
        async fn find_user_by_email(&self, email: &str) -> Result<Option<AuthUser>, AuthError> {
            let inner = self.inner.lock().await;
            Ok(inner.users.values().find(|u| u.email == email).cloned())
        }

        async fn find_user_by_id(&self, id: Uuid) -> Result<Option<AuthUser>, AuthError> {
            Ok(self.inner.lock().await.users.get(&id).cloned())
        }

        async fn create_user(
            &self,
            name: &str,
            email: &str,
            role: Role,
            password_hash: String,
            password_algorithm: &str,
        ) -> Result<AuthUser, AuthError> {
            let mut inner = self.inner.lock().await;
            if inner.users.values().any(|u| u.email == email) {
                return Err(AuthError::Conflict);
            }
            let user = AuthUser { id: Uuid::new_v4(), name: name.to_string(), email: email.to_string(), role };
            inner.creds.insert(
                user.id,
                Credentials { user_id: user.id, password_hash, password_algorithm: password_algorithm.to_string() },
            );
            inner.users.insert(user.id, user.clone());
            Ok(user)
        }

        async fn get_credentials(&self, user_id: Uuid) -> Result<Option<Credentials>, AuthError> {
            Ok(self.inner.lock().await.creds.get(&user_id).cloned())
        }

        async fn set_role(&self, user_id: Uuid, role: Role) -> Result<AuthUser, AuthError> {
            let mut inner = self.inner.lock().await;
            let user = inner.users.get_mut(&user_id).ok_or(AuthError::NotFound)?;
            user.role = role;
            Ok(user.clone())
        }
    }
}
