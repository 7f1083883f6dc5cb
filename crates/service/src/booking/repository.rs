use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use super::domain::{
    AdminAppointmentView, Appointment, AppointmentChange, AppointmentFilter, AppointmentView, NewAppointment,
    ServiceOffering,
};
use super::errors::BookingError;
use crate::pagination::Pagination;

/// Repository abstraction over the catalog and the booking ledger.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Catalog ordered by id.
    async fn list_services(&self) -> Result<Vec<ServiceOffering>, BookingError>;
    async fn find_service(&self, id: i32) -> Result<Option<ServiceOffering>, BookingError>;

    /// Times on `date` held by non-cancelled appointments other than `exclude`.
    async fn occupied_times(&self, date: NaiveDate, exclude: Option<Uuid>) -> Result<Vec<NaiveTime>, BookingError>;

    /// Check and insert as one unit. `Conflict` if a live appointment already
    /// holds the slot, including one committed by a concurrent caller.
    async fn insert_if_free(&self, new: NewAppointment) -> Result<Appointment, BookingError>;

    async fn find(&self, id: Uuid) -> Result<Option<Appointment>, BookingError>;

    /// Apply `change` atomically; see [`AppointmentChange`] for the rules.
    async fn apply_change(&self, id: Uuid, change: AppointmentChange) -> Result<Appointment, BookingError>;

    /// All of a user's appointments, ordered by (date, time).
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<AppointmentView>, BookingError>;

    /// Every appointment, optionally for one date, ordered by (date, time).
    async fn list_all(
        &self,
        filter: AppointmentFilter,
        page: Pagination,
    ) -> Result<Vec<AdminAppointmentView>, BookingError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use crate::auth::repository::AuthRepository;
    use crate::booking::domain::AppointmentStatus;
    use rust_decimal::Decimal;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    struct Inner {
        services: Vec<ServiceOffering>,
        appointments: HashMap<Uuid, Appointment>,
    }

    impl Inner {
        fn slot_holder(&self, date: NaiveDate, time: NaiveTime, exclude: Option<Uuid>) -> Option<&Appointment> {
            self.appointments
                .values()
                .find(|a| a.date == date && a.time == time && a.status.is_live() && Some(a.id) != exclude)
        }

        fn service(&self, id: i32) -> Result<&ServiceOffering, BookingError> {
            self.services
                .iter()
                .find(|s| s.id == id)
                .ok_or_else(|| BookingError::NotFound("service".into()))
        }

        fn view(&self, a: &Appointment) -> Result<AppointmentView, BookingError> {
            Ok(AppointmentView::compose(a.clone(), self.service(a.service_id)?))
        }

        fn sorted(&self) -> Vec<&Appointment> {
            let mut all: Vec<_> = self.appointments.values().collect();
            all.sort_by_key(|a| (a.date, a.time, a.id));
            all
        }
    }

    /// Mirrors the seeded catalog.
    pub fn default_catalog() -> Vec<ServiceOffering> {
        vec![
            ServiceOffering { id: 1, name: "Basic Wash".into(), price: Decimal::new(3000, 2), duration: "30 minutes".into() },
            ServiceOffering { id: 2, name: "Full Wash".into(), price: Decimal::new(5000, 2), duration: "1 hour".into() },
            ServiceOffering { id: 3, name: "Premium Wash".into(), price: Decimal::new(8000, 2), duration: "1.5 hours".into() },
        ]
    }

    /// Owners are resolved through `users`, the same credential store the
    /// auth service writes to.
    pub struct MockBookingRepository {
        inner: Mutex<Inner>,
        users: Arc<dyn AuthRepository>,
    }

    impl MockBookingRepository {
        pub fn new(users: Arc<dyn AuthRepository>) -> Self { Self::with_catalog(default_catalog(), users) }

        pub fn with_catalog(services: Vec<ServiceOffering>, users: Arc<dyn AuthRepository>) -> Self {
            Self { inner: Mutex::new(Inner { services, appointments: HashMap::new() }), users }
        }

        pub async fn appointment_count(&self) -> usize {
            self.inner.lock().await.appointments.len()
        }
    }

    #[async_trait]
    impl BookingRepository for MockBookingRepository {
        async fn list_services(&self) -> Result<Vec<ServiceOffering>, BookingError> {
            let mut out = self.inner.lock().await.services.clone();
            out.sort_by_key(|s| s.id);
            Ok(out)
        }

        async fn find_service(&self, id: i32) -> Result<Option<ServiceOffering>, BookingError> {
            Ok(self.inner.lock().await.services.iter().find(|s| s.id == id).cloned())
        }

        async fn occupied_times(&self, date: NaiveDate, exclude: Option<Uuid>) -> Result<Vec<NaiveTime>, BookingError> {
            let inner = self.inner.lock().await;
            let mut times: Vec<_> = inner
                .appointments
                .values()
                .filter(|a| a.date == date && a.status.is_live() && Some(a.id) != exclude)
                .map(|a| a.time)
                .collect();
            times.sort();
            Ok(times)
        }

        async fn insert_if_free(&self, new: NewAppointment) -> Result<Appointment, BookingError> {
            // one lock covers check and insert
            let mut inner = self.inner.lock().await;
            inner.service(new.service_id)?;
            if inner.slot_holder(new.date, new.time, None).is_some() {
                return Err(BookingError::slot_taken());
            }
            let a = Appointment {
                id: Uuid::new_v4(),
                user_id: new.user_id,
                service_id: new.service_id,
                date: new.date,
                time: new.time,
                status: AppointmentStatus::Pending,
            };
            inner.appointments.insert(a.id, a.clone());
            Ok(a)
        }

        async fn find(&self, id: Uuid) -> Result<Option<Appointment>, BookingError> {
            Ok(self.inner.lock().await.appointments.get(&id).cloned())
        }

        async fn apply_change(&self, id: Uuid, change: AppointmentChange) -> Result<Appointment, BookingError> {
            let mut inner = self.inner.lock().await;
            let current = inner
                .appointments
                .get(&id)
                .cloned()
                .ok_or_else(|| BookingError::NotFound("appointment".into()))?;
            if change.only_if_pending && current.status != AppointmentStatus::Pending {
                return Err(BookingError::not_pending(current.status));
            }

            let mut next = current.clone();
            if let Some(sid) = change.service_id {
                inner.service(sid)?;
                next.service_id = sid;
            }
            if let Some(t) = change.time { next.time = t; }
            if let Some(s) = change.status { next.status = s; }

            let reclaims = next.time != current.time || !current.status.is_live();
            if next.status.is_live() && reclaims && inner.slot_holder(next.date, next.time, Some(id)).is_some() {
                return Err(BookingError::slot_taken());
            }
            inner.appointments.insert(id, next.clone());
            Ok(next)
        }

        async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<AppointmentView>, BookingError> {
            let inner = self.inner.lock().await;
            inner
                .sorted()
                .into_iter()
                .filter(|a| a.user_id == user_id)
                .map(|a| inner.view(a))
                .collect()
        }

        async fn list_all(
            &self,
            filter: AppointmentFilter,
            page: Pagination,
        ) -> Result<Vec<AdminAppointmentView>, BookingError> {
            let rows: Vec<AppointmentView> = {
                let inner = self.inner.lock().await;
                let (_, per_page) = page.normalize();
                let rows = inner
                    .sorted()
                    .into_iter()
                    .filter(|a| filter.date.map_or(true, |d| a.date == d))
                    .skip(page.offset() as usize)
                    .take(per_page as usize)
                    .map(|a| inner.view(a))
                    .collect::<Result<_, _>>()?;
                rows
            };

            let mut out = Vec::with_capacity(rows.len());
            for appointment in rows {
                let owner = self
                    .users
                    .find_user_by_id(appointment.user_id)
                    .await
                    .map_err(|e| BookingError::Repository(e.to_string()))?
                    .ok_or_else(|| {
                        BookingError::Repository(format!("appointment {} has no owner", appointment.id))
                    })?;
                out.push(AdminAppointmentView { appointment, customer_name: owner.name, customer_email: owner.email });
            }
            Ok(out)
        }
    }
}
