use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};
use uuid::Uuid;

use crate::auth::domain::{AuthUser, Credentials, Role};
use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;

pub struct SeaOrmAuthRepository {
    pub db: DatabaseConnection,
}

fn to_domain(u: models::user::Model) -> Result<AuthUser, AuthError> {
    Ok(AuthUser { id: u.id, name: u.name, email: u.email, role: u.role.parse()? })
}

#[async_trait::async_trait]
impl AuthRepository for SeaOrmAuthRepository {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<AuthUser>, AuthError> {
        models::user::find_by_email(&self.db, email).await?.map(to_domain).transpose()
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<AuthUser>, AuthError> {
        let res = models::user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        res.map(to_domain).transpose()
    }

    async fn create_user(
        &self,
        name: &str,
        email: &str,
        role: Role,
        password_hash: String,
        password_algorithm: &str,
    ) -> Result<AuthUser, AuthError> {
        let txn = self.db.begin().await.map_err(|e| AuthError::Repository(e.to_string()))?;
        // the unique index on email decides races; ModelError::Duplicate maps to Conflict
        let created = models::user::create(&txn, name, email, role.as_str()).await?;
        models::user_credentials::upsert_password(&txn, created.id, password_hash, password_algorithm).await?;
        txn.commit().await.map_err(|e| AuthError::Repository(e.to_string()))?;
        to_domain(created)
    }

    async fn get_credentials(&self, user_id: Uuid) -> Result<Option<Credentials>, AuthError> {
        let res = models::user_credentials::find_by_user(&self.db, user_id).await?;
        Ok(res.map(|c| Credentials { user_id: c.user_id, password_hash: c.password_hash, password_algorithm: c.password_algorithm }))
    }

    async fn set_role(&self, user_id: Uuid, role: Role) -> Result<AuthUser, AuthError> {
        let found = models::user::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        if found.is_none() {
            return Err(AuthError::NotFound);
        }
        let updated = models::user::set_role(&self.db, user_id, role.as_str()).await?;
        to_domain(updated)
    }
}
