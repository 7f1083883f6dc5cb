use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder, QuerySelect, Set};
use uuid::Uuid;
use chrono::{NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{service_offering, user};

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_CONFIRMED: &str = "confirmed";
pub const STATUS_CANCELLED: &str = "cancelled";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "appointment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub service_id: i32,
    pub date: Date,
    pub time: Time,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    Service,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity)
                .from(Column::UserId)
                .to(user::Column::Id)
                .into(),
            Relation::Service => Entity::belongs_to(service_offering::Entity)
                .from(Column::ServiceId)
                .to(service_offering::Column::Id)
                .into(),
        }
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl Related<service_offering::Entity> for Entity {
    fn to() -> RelationDef { Relation::Service.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a pending appointment. Slot uniqueness is left to the caller's
/// transaction and the partial unique index.
pub async fn create<C: ConnectionTrait>(
    db: &C,
    user_id: Uuid,
    service_id: i32,
    date: NaiveDate,
    time: NaiveTime,
) -> Result<Model, ModelError> {
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        service_id: Set(service_id),
        date: Set(date),
        time: Set(time),
        status: Set(STATUS_PENDING.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}

/// The non-cancelled appointment holding (date, time), ignoring `exclude`.
pub async fn live_holder<C: ConnectionTrait>(
    db: &C,
    date: NaiveDate,
    time: NaiveTime,
    exclude: Option<Uuid>,
) -> Result<Option<Model>, ModelError> {
    let mut q = Entity::find()
        .filter(Column::Date.eq(date))
        .filter(Column::Time.eq(time))
        .filter(Column::Status.ne(STATUS_CANCELLED));
    if let Some(id) = exclude {
        q = q.filter(Column::Id.ne(id));
    }
    Ok(q.one(db).await?)
}

/// Times on `date` held by non-cancelled appointments, ascending.
pub async fn occupied_times<C: ConnectionTrait>(
    db: &C,
    date: NaiveDate,
    exclude: Option<Uuid>,
) -> Result<Vec<NaiveTime>, ModelError> {
    let mut q = Entity::find()
        .select_only()
        .column(Column::Time)
        .filter(Column::Date.eq(date))
        .filter(Column::Status.ne(STATUS_CANCELLED));
    if let Some(id) = exclude {
        q = q.filter(Column::Id.ne(id));
    }
    let times = q
        .order_by_asc(Column::Time)
        .into_tuple::<NaiveTime>()
        .all(db)
        .await?;
    Ok(times)
}
