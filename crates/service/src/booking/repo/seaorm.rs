use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};
use tracing::debug;
use uuid::Uuid;

use models::errors::ModelError;
use models::{appointment, service_offering, user};

use crate::booking::domain::{
    AdminAppointmentView, Appointment, AppointmentChange, AppointmentFilter, AppointmentStatus, AppointmentView,
    NewAppointment, ServiceOffering,
};
use crate::booking::errors::BookingError;
use crate::booking::repository::BookingRepository;
use crate::pagination::Pagination;

pub struct SeaOrmBookingRepository {
    pub db: DatabaseConnection,
}

fn db_err(e: DbErr) -> BookingError { ModelError::from(e).into() }

fn to_service(s: service_offering::Model) -> ServiceOffering {
    ServiceOffering { id: s.id, name: s.name, price: s.price, duration: s.duration }
}

fn to_domain(a: appointment::Model) -> Result<Appointment, BookingError> {
    Ok(Appointment {
        id: a.id,
        user_id: a.user_id,
        service_id: a.service_id,
        date: a.date,
        time: a.time,
        status: a.status.parse().map_err(|_| BookingError::Repository(format!("unknown stored status {:?}", a.status)))?,
    })
}

fn to_view(pair: (appointment::Model, Option<service_offering::Model>)) -> Result<AppointmentView, BookingError> {
    let (a, s) = pair;
    let s = s.ok_or_else(|| BookingError::Repository(format!("appointment {} references a missing service", a.id)))?;
    Ok(AppointmentView::compose(to_domain(a)?, &to_service(s)))
}

#[async_trait::async_trait]
impl BookingRepository for SeaOrmBookingRepository {
    async fn list_services(&self) -> Result<Vec<ServiceOffering>, BookingError> {
        Ok(service_offering::list(&self.db).await?.into_iter().map(to_service).collect())
    }

    async fn find_service(&self, id: i32) -> Result<Option<ServiceOffering>, BookingError> {
        Ok(service_offering::find(&self.db, id).await?.map(to_service))
    }

    async fn occupied_times(&self, date: NaiveDate, exclude: Option<Uuid>) -> Result<Vec<NaiveTime>, BookingError> {
        Ok(appointment::occupied_times(&self.db, date, exclude).await?)
    }

    async fn insert_if_free(&self, new: NewAppointment) -> Result<Appointment, BookingError> {
        let txn = self.db.begin().await.map_err(db_err)?;
        if appointment::live_holder(&txn, new.date, new.time, None).await?.is_some() {
            return Err(BookingError::slot_taken());
        }
        // a concurrent insert that slipped past the check trips the partial unique index
        let created = appointment::create(&txn, new.user_id, new.service_id, new.date, new.time).await?;
        txn.commit().await.map_err(db_err)?;
        debug!(appointment_id = %created.id, "appointment row inserted");
        to_domain(created)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Appointment>, BookingError> {
        appointment::Entity::find_by_id(id).one(&self.db).await.map_err(db_err)?.map(to_domain).transpose()
    }

    async fn apply_change(&self, id: Uuid, change: AppointmentChange) -> Result<Appointment, BookingError> {
        let txn = self.db.begin().await.map_err(db_err)?;
        let row = appointment::Entity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or_else(|| BookingError::NotFound("appointment".into()))?;
        let current = to_domain(row.clone())?;
        if change.only_if_pending && current.status != AppointmentStatus::Pending {
            return Err(BookingError::not_pending(current.status));
        }

        let next_time = change.time.unwrap_or(current.time);
        let next_status = change.status.unwrap_or(current.status);
        let reclaims = next_time != current.time || !current.status.is_live();
        if next_status.is_live()
            && reclaims
            && appointment::live_holder(&txn, current.date, next_time, Some(id)).await?.is_some()
        {
            return Err(BookingError::slot_taken());
        }

        let mut am: appointment::ActiveModel = row.into();
        if let Some(sid) = change.service_id {
            if service_offering::find(&txn, sid).await?.is_none() {
                return Err(BookingError::NotFound("service".into()));
            }
            am.service_id = Set(sid);
        }
        am.time = Set(next_time);
        am.status = Set(next_status.as_str().to_string());
        am.updated_at = Set(Utc::now().into());
        let updated = am.update(&txn).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;
        to_domain(updated)
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<AppointmentView>, BookingError> {
        appointment::Entity::find()
            .filter(appointment::Column::UserId.eq(user_id))
            .find_also_related(service_offering::Entity)
            .order_by_asc(appointment::Column::Date)
            .order_by_asc(appointment::Column::Time)
            .all(&self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(to_view)
            .collect()
    }

    async fn list_all(
        &self,
        filter: AppointmentFilter,
        page: Pagination,
    ) -> Result<Vec<AdminAppointmentView>, BookingError> {
        let (_, per_page) = page.normalize();
        let mut q = appointment::Entity::find();
        if let Some(date) = filter.date {
            q = q.filter(appointment::Column::Date.eq(date));
        }
        let rows = q
            .find_also_related(service_offering::Entity)
            .order_by_asc(appointment::Column::Date)
            .order_by_asc(appointment::Column::Time)
            .order_by_asc(appointment::Column::Id)
            .offset(page.offset())
            .limit(per_page)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let user_ids: Vec<Uuid> = rows.iter().map(|(a, _)| a.user_id).collect();
        let customers: HashMap<Uuid, user::Model> = user::Entity::find()
            .filter(user::Column::Id.is_in(user_ids))
            .all(&self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        rows.into_iter()
            .map(|pair| -> Result<AdminAppointmentView, BookingError> {
                let owner = customers.get(&pair.0.user_id).ok_or_else(|| {
                    BookingError::Repository(format!("appointment {} has no owner", pair.0.id))
                })?;
                Ok(AdminAppointmentView {
                    customer_name: owner.name.clone(),
                    customer_email: owner.email.clone(),
                    appointment: to_view(pair)?,
                })
            })
            .collect()
    }
}
