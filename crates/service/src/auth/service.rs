use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header as JwtHeader, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::domain::{AuthSession, AuthUser, Identity, LoginInput, RegisterInput, Role};
use super::errors::AuthError;
use super::password;
use super::repository::AuthRepository;

/// Auth service configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl: Duration,
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<String>, token_ttl_hours: i64) -> Self {
        Self { jwt_secret: jwt_secret.into(), token_ttl: Duration::hours(token_ttl_hours) }
    }
}

/// Token claims. Identity only; the role is never embedded.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// Auth business service independent of web framework
pub struct AuthService<R: AuthRepository + ?Sized> {
    repo: Arc<R>,
    cfg: AuthConfig,
}

impl<R: AuthRepository + ?Sized> AuthService<R> {
    pub fn new(repo: Arc<R>, cfg: AuthConfig) -> Self { Self { repo, cfg } }

    /// Register a new customer with a hashed password.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::mock::MockAuthRepository};
    /// use service::auth::domain::{RegisterInput, Role};
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAuthRepository::default());
    /// let svc = AuthService::new(repo, AuthConfig::new("secret", 24));
    /// let input = RegisterInput { name: "Test".into(), email: "user@example.com".into(), password: "Secret123".into() };
    /// let user = tokio_test::block_on(svc.register(input)).unwrap();
    /// assert_eq!(user.email, "user@example.com");
    /// assert_eq!(user.role, Role::Customer);
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: RegisterInput) -> Result<AuthUser, AuthError> {
        self.create_account(input, Role::Customer).await
    }

    async fn create_account(&self, input: RegisterInput, role: Role) -> Result<AuthUser, AuthError> {
        models::user::validate_email(&input.email)?;
        models::user::validate_name(&input.name)?;
        if input.password.len() < 8 {
            return Err(AuthError::Validation("password too short (>=8)".into()));
        }
        if let Some(existing) = self.repo.find_user_by_email(&input.email).await? {
            debug!("user exists: {}", existing.email);
            return Err(AuthError::Conflict);
        }

        let hash = password::hash_password(&input.password)?;
        let user = self.repo
            .create_user(input.name.trim(), &input.email, role, hash, password::ALGORITHM)
            .await?;
        info!(user_id = %user.id, email = %user.email, role = %user.role, "user_registered");
        Ok(user)
    }

    /// Authenticate a user and issue a bearer token.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::mock::MockAuthRepository};
    /// use service::auth::domain::{RegisterInput, LoginInput};
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAuthRepository::default());
    /// let svc = AuthService::new(repo.clone(), AuthConfig::new("secret", 24));
    /// let _ = tokio_test::block_on(svc.register(RegisterInput { name: "N".into(), email: "u@e.com".into(), password: "Passw0rd".into() }));
    /// let session = tokio_test::block_on(svc.login(LoginInput { email: "u@e.com".into(), password: "Passw0rd".into() })).unwrap();
    /// assert_eq!(session.user.email, "u@e.com");
    /// assert_eq!(tokio_test::block_on(svc.resolve_identity(&session.token)).unwrap().user_id, session.user.id);
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        let Some(user) = self.repo.find_user_by_email(&input.email).await? else {
            return Err(Self::reject_login());
        };
        let Some(cred) = self.repo.get_credentials(user.id).await? else {
            return Err(Self::reject_login());
        };
        if !password::verify_password(&input.password, &cred.password_hash)? {
            return Err(Self::reject_login());
        }

        let token = self.issue_token(user.id)?;
        info!(user_id = %user.id, "user_logged_in");
        Ok(AuthSession { user, token })
    }

    fn reject_login() -> AuthError {
        common::metrics::LOGINS_FAILED_TOTAL.inc();
        AuthError::Unauthorized
    }

    fn issue_token(&self, user_id: Uuid) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.cfg.token_ttl).timestamp(),
        };
        encode(&JwtHeader::default(), &claims, &EncodingKey::from_secret(self.cfg.jwt_secret.as_bytes()))
            .map_err(|e| AuthError::TokenError(e.to_string()))
    }

    /// Map a bearer credential back to the caller's identity.
    pub async fn resolve_identity(&self, token: &str) -> Result<Identity, AuthError> {
        let key = DecodingKey::from_secret(self.cfg.jwt_secret.as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        let data = decode::<Claims>(token, &key, &validation).map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => {
                warn!(err = %e, "token validation failed");
                AuthError::Unauthorized
            }
        })?;
        let user_id = Uuid::parse_str(&data.claims.sub).map_err(|_| AuthError::Unauthorized)?;
        Ok(Identity { user_id })
    }

    /// Current stored view of the caller, role included.
    pub async fn me(&self, identity: Identity) -> Result<AuthUser, AuthError> {
        self.repo.find_user_by_id(identity.user_id).await?.ok_or(AuthError::NotFound)
    }

    /// Create the configured administrator unless that email already exists.
    /// An existing account keeps whatever role it has.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn ensure_admin(&self, input: RegisterInput) -> Result<AuthUser, AuthError> {
        if let Some(existing) = self.repo.find_user_by_email(&input.email).await? {
            if !existing.is_admin() {
                warn!(user_id = %existing.id, "bootstrap admin email belongs to a non-admin account");
            }
            return Ok(existing);
        }
        self.create_account(input, Role::Admin).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::repository::mock::MockAuthRepository;

    fn svc() -> (Arc<MockAuthRepository>, AuthService<MockAuthRepository>) {
        let repo = Arc::new(MockAuthRepository::default());
        (repo.clone(), AuthService::new(repo, AuthConfig::new("test-secret", 24)))
    }

    fn input(email: &str) -> RegisterInput {
        RegisterInput { name: "Ana".into(), email: email.into(), password: "Passw0rd!".into() }
    }

    #[tokio::test]
    async fn register_stores_hash_not_plaintext() {
        let (repo, svc) = svc();
        let user = svc.register(input("ana@example.com")).await.unwrap();
        let cred = repo.get_credentials(user.id).await.unwrap().unwrap();
        assert_ne!(cred.password_hash, "Passw0rd!");
        assert_eq!(cred.password_algorithm, "argon2");
    }

    #[tokio::test]
    async fn duplicate_email_conflicts_without_new_row() {
        let (repo, svc) = svc();
        svc.register(input("ana@example.com")).await.unwrap();
        let err = svc.register(input("ana@example.com")).await.unwrap_err();
        assert!(matches!(err, AuthError::Conflict));
        assert_eq!(repo.user_count().await, 1);
    }

    #[tokio::test]
    async fn email_equality_is_case_sensitive() {
        let (repo, svc) = svc();
        svc.register(input("ana@example.com")).await.unwrap();
        svc.register(input("Ana@example.com")).await.unwrap();
        assert_eq!(repo.user_count().await, 2);
    }

    #[tokio::test]
    async fn register_validates_input() {
        let (_, svc) = svc();
        let short = RegisterInput { password: "short".into(), ..input("a@b.com") };
        assert!(matches!(svc.register(short).await, Err(AuthError::Validation(_))));
        let no_at = input("not-an-email");
        assert!(matches!(svc.register(no_at).await, Err(AuthError::Validation(_))));
        let blank = RegisterInput { name: "  ".into(), ..input("c@d.com") };
        assert!(matches!(svc.register(blank).await, Err(AuthError::Validation(_))));
    }

    #[tokio::test]
    async fn login_rejects_wrong_password_and_unknown_email_alike() {
        let (_, svc) = svc();
        svc.register(input("ana@example.com")).await.unwrap();
        let wrong = svc.login(LoginInput { email: "ana@example.com".into(), password: "nope-nope".into() }).await;
        assert!(matches!(wrong, Err(AuthError::Unauthorized)));
        let unknown = svc.login(LoginInput { email: "bob@example.com".into(), password: "Passw0rd!".into() }).await;
        assert!(matches!(unknown, Err(AuthError::Unauthorized)));
    }

    #[tokio::test]
    async fn token_round_trips_to_identity() {
        let (_, svc) = svc();
        let user = svc.register(input("ana@example.com")).await.unwrap();
        let session = svc.login(LoginInput { email: "ana@example.com".into(), password: "Passw0rd!".into() }).await.unwrap();
        let identity = svc.resolve_identity(&session.token).await.unwrap();
        assert_eq!(identity.user_id, user.id);
    }

    #[tokio::test]
    async fn token_signed_with_other_secret_is_rejected() {
        let (repo, svc) = svc();
        svc.register(input("ana@example.com")).await.unwrap();
        let other = AuthService::new(repo, AuthConfig::new("other-secret", 24));
        let session = other.login(LoginInput { email: "ana@example.com".into(), password: "Passw0rd!".into() }).await.unwrap();
        assert!(matches!(svc.resolve_identity(&session.token).await, Err(AuthError::Unauthorized)));
        assert!(matches!(svc.resolve_identity("garbage").await, Err(AuthError::Unauthorized)));
    }

    #[tokio::test]
    async fn expired_token_is_reported_as_expired() {
        let repo = Arc::new(MockAuthRepository::default());
        let svc = AuthService::new(repo, AuthConfig::new("test-secret", -1));
        let token = svc.issue_token(Uuid::new_v4()).unwrap();
        assert!(matches!(svc.resolve_identity(&token).await, Err(AuthError::TokenExpired)));
    }

    #[tokio::test]
    async fn ensure_admin_is_idempotent() {
        let (repo, svc) = svc();
        let first = svc.ensure_admin(input("root@example.com")).await.unwrap();
        assert!(first.is_admin());
        let again = svc.ensure_admin(input("root@example.com")).await.unwrap();
        assert_eq!(first.id, again.id);
        assert_eq!(repo.user_count().await, 1);
    }
}
