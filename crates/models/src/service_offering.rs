use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder};
use serde::{Deserialize, Serialize};

use crate::appointment;
use crate::errors::ModelError;

/// A wash offering from the catalog. Seeded by migration, read-mostly.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,
    pub duration: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Appointment }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Appointment => Entity::has_many(appointment::Entity).into() }
    }
}

impl Related<appointment::Entity> for Entity {
    fn to() -> RelationDef { Relation::Appointment.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}
