use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{appointment, user_credentials};

pub const ROLE_CUSTOMER: &str = "customer";
pub const ROLE_ADMIN: &str = "admin";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub role: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Credentials,
    Appointment,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Credentials => Entity::has_one(user_credentials::Entity).into(),
            Relation::Appointment => Entity::has_many(appointment::Entity).into(),
        }
    }
}

impl Related<appointment::Entity> for Entity {
    fn to() -> RelationDef { Relation::Appointment.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    if !email.contains('@') || email.trim() != email || email.len() > 255 {
        return Err(ModelError::Validation("invalid email".into()));
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() { return Err(ModelError::Validation("name required".into())); }
    if name.len() > 128 { return Err(ModelError::Validation("name too long (<=128)".into())); }
    Ok(())
}

pub fn validate_role(role: &str) -> Result<(), ModelError> {
    match role {
        ROLE_CUSTOMER | ROLE_ADMIN => Ok(()),
        _ => Err(ModelError::Validation(format!("unknown role {role}"))),
    }
}

pub async fn create<C: ConnectionTrait>(db: &C, name: &str, email: &str, role: &str) -> Result<Model, ModelError> {
    validate_email(email)?;
    validate_name(name)?;
    validate_role(role)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        role: Set(role.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}

/// Exact (case-sensitive) email lookup.
pub async fn find_by_email<C: ConnectionTrait>(db: &C, email: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find().filter(Column::Email.eq(email)).one(db).await?)
}

pub async fn set_role<C: ConnectionTrait>(db: &C, id: Uuid, role: &str) -> Result<Model, ModelError> {
    validate_role(role)?;
    let mut found: ActiveModel = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ModelError::Validation("user not found".into()))?
        .into();
    found.role = Set(role.to_string());
    found.updated_at = Set(Utc::now().into());
    Ok(found.update(db).await?)
}
