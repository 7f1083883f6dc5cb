use std::sync::Arc;

use tracing::{info, instrument, warn};
use uuid::Uuid;

use common::metrics::{APPOINTMENTS_CREATED_TOTAL, SLOT_CONFLICTS_TOTAL};

use super::domain::{
    AdminAppointmentView, Appointment, AppointmentChange, AppointmentFilter, AppointmentStatus, AppointmentView,
    CreateAppointmentInput, NewAppointment, ServiceOffering, UpdateAppointmentInput,
};
use super::errors::BookingError;
use super::repository::BookingRepository;
use crate::authz::AdminGate;
use crate::pagination::Pagination;
use crate::slots::{parse_date, parse_time, SlotTemplate, TimeSlot};

/// Booking business service independent of web framework
pub struct BookingService<R: BookingRepository + ?Sized> {
    repo: Arc<R>,
    gate: AdminGate,
    template: SlotTemplate,
}

impl<R: BookingRepository + ?Sized> BookingService<R> {
    pub fn new(repo: Arc<R>, gate: AdminGate, template: SlotTemplate) -> Self { Self { repo, gate, template } }

    pub fn template(&self) -> &SlotTemplate { &self.template }

    pub async fn list_services(&self) -> Result<Vec<ServiceOffering>, BookingError> {
        self.repo.list_services().await
    }

    /// Template slots for `date`, each tagged available or occupied.
    ///
    /// `exclude` names an appointment being edited; its own slot is reported
    /// available, but only when `requestor` owns it. Any other value is ignored,
    /// as is `exclude` from anonymous callers.
    ///
    /// # Examples
    /// ```
    /// use service::auth::repository::mock::MockAuthRepository;
    /// use service::authz::AdminGate;
    /// use service::booking::{BookingService, repository::mock::MockBookingRepository};
    /// use service::slots::{SlotStatus, SlotTemplate};
    /// use std::sync::Arc;
    /// let users = Arc::new(MockAuthRepository::default());
    /// let svc = BookingService::new(
    ///     Arc::new(MockBookingRepository::new(users.clone())),
    ///     AdminGate::new(users),
    ///     SlotTemplate::default(),
    /// );
    /// let slots = tokio_test::block_on(svc.available_slots("2024-05-01", None, None)).unwrap();
    /// assert_eq!(slots.len(), 8);
    /// assert!(slots.iter().all(|s| s.status == SlotStatus::Available));
    /// ```
    #[instrument(skip(self))]
    pub async fn available_slots(
        &self,
        date: &str,
        requestor: Option<Uuid>,
        exclude: Option<Uuid>,
    ) -> Result<Vec<TimeSlot>, BookingError> {
        let date = parse_date(date)?;
        let exclude = match (exclude, requestor) {
            (Some(id), Some(owner)) => self.repo.find(id).await?.filter(|a| a.user_id == owner).map(|a| a.id),
            _ => None,
        };
        let occupied = self.repo.occupied_times(date, exclude).await?;
        Ok(self.template.availability(&occupied))
    }

    /// Book a free template slot as `user_id`. The new appointment is pending.
    #[instrument(skip(self, input), fields(service_id = input.service_id, date = %input.date, time = %input.time))]
    pub async fn create_appointment(
        &self,
        user_id: Uuid,
        input: CreateAppointmentInput,
    ) -> Result<AppointmentView, BookingError> {
        let date = parse_date(&input.date)?;
        let time = parse_time(&input.time)?;
        if !self.template.contains(time) {
            return Err(BookingError::Validation(format!("{} is not a bookable time", time.format("%H:%M"))));
        }
        let service = self.require_service(input.service_id).await?;

        let created = self
            .repo
            .insert_if_free(NewAppointment { user_id, service_id: service.id, date, time })
            .await
            .map_err(Self::note_conflict)?;
        APPOINTMENTS_CREATED_TOTAL.inc();
        info!(appointment_id = %created.id, %user_id, "appointment_created");
        Ok(AppointmentView::compose(created, &service))
    }

    /// Owner-only edit of a pending appointment: another time on the same day
    /// and/or another service.
    #[instrument(skip(self, input))]
    pub async fn update_appointment(
        &self,
        id: Uuid,
        requestor: Uuid,
        input: UpdateAppointmentInput,
    ) -> Result<AppointmentView, BookingError> {
        let current = self.owned_pending(id, requestor).await?;

        let time = match input.time.as_deref() {
            Some(raw) => {
                let t = parse_time(raw)?;
                if !self.template.contains(t) {
                    return Err(BookingError::Validation(format!("{} is not a bookable time", t.format("%H:%M"))));
                }
                Some(t)
            }
            None => None,
        };
        if let Some(sid) = input.service_id {
            self.require_service(sid).await?;
        }

        let change = AppointmentChange { time, service_id: input.service_id, status: None, only_if_pending: true };
        let updated = self.repo.apply_change(current.id, change).await.map_err(Self::note_conflict)?;
        info!(appointment_id = %id, user_id = %requestor, "appointment_updated");
        self.view(updated).await
    }

    /// Owner-only cancellation of a pending appointment. The row stays; its slot frees up.
    /// Anything no longer pending is `Forbidden` to the owner.
    #[instrument(skip(self))]
    pub async fn cancel_appointment(&self, id: Uuid, requestor: Uuid) -> Result<AppointmentView, BookingError> {
        let current = self.owned_pending(id, requestor).await?;
        let change = AppointmentChange {
            status: Some(AppointmentStatus::Cancelled),
            only_if_pending: true,
            ..Default::default()
        };
        let cancelled = self.repo.apply_change(current.id, change).await?;
        info!(appointment_id = %id, user_id = %requestor, "appointment_cancelled");
        self.view(cancelled).await
    }

    pub async fn list_my_appointments(&self, user_id: Uuid) -> Result<Vec<AppointmentView>, BookingError> {
        self.repo.list_by_user(user_id).await
    }

    /// Admin check alone, for callers that must refuse non-admins before
    /// looking at their input.
    pub async fn require_admin(&self, user_id: Uuid) -> Result<(), BookingError> {
        self.gate.require_admin(user_id).await?;
        Ok(())
    }

    /// Admin listing, optionally restricted to one `YYYY-MM-DD` date.
    #[instrument(skip(self))]
    pub async fn list_all_appointments(
        &self,
        requestor: Uuid,
        date: Option<&str>,
        page: Pagination,
    ) -> Result<Vec<AdminAppointmentView>, BookingError> {
        self.gate.require_admin(requestor).await?;
        let filter = AppointmentFilter { date: date.map(parse_date).transpose()? };
        self.repo.list_all(filter, page).await
    }

    /// Admin override: any status from any status. Reopening a cancelled
    /// appointment still fails if its slot has been taken meanwhile.
    #[instrument(skip(self))]
    pub async fn set_status(&self, requestor: Uuid, id: Uuid, status: &str) -> Result<AppointmentView, BookingError> {
        let admin = self.gate.require_admin(requestor).await?;
        let status: AppointmentStatus = status.parse()?;
        let change = AppointmentChange { status: Some(status), ..Default::default() };
        let updated = self.repo.apply_change(id, change).await.map_err(Self::note_conflict)?;
        info!(appointment_id = %id, admin_id = %admin.id, status = %status, "appointment_status_set");
        self.view(updated).await
    }

    async fn owned_pending(&self, id: Uuid, requestor: Uuid) -> Result<Appointment, BookingError> {
        let current = self
            .repo
            .find(id)
            .await?
            .ok_or_else(|| BookingError::NotFound("appointment".into()))?;
        if current.user_id != requestor {
            warn!(appointment_id = %id, user_id = %requestor, "appointment access refused for non-owner");
            return Err(BookingError::Forbidden("not your appointment".into()));
        }
        if current.status != AppointmentStatus::Pending {
            return Err(BookingError::not_pending(current.status));
        }
        Ok(current)
    }

    async fn require_service(&self, id: i32) -> Result<ServiceOffering, BookingError> {
        self.repo.find_service(id).await?.ok_or_else(|| BookingError::NotFound("service".into()))
    }

    async fn view(&self, a: Appointment) -> Result<AppointmentView, BookingError> {
        let service = self.require_service(a.service_id).await?;
        Ok(AppointmentView::compose(a, &service))
    }

    fn note_conflict(e: BookingError) -> BookingError {
        if matches!(e, BookingError::Conflict(_)) {
            SLOT_CONFLICTS_TOTAL.inc();
            warn!(err = %e, "slot_conflict");
        }
        e
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::domain::Role;
    use crate::auth::repository::mock::MockAuthRepository;
    use crate::auth::repository::AuthRepository;
    use crate::booking::repository::mock::MockBookingRepository;
    use crate::slots::SlotStatus;
    use chrono::NaiveTime;

    struct Fixture {
        users: Arc<MockAuthRepository>,
        repo: Arc<MockBookingRepository>,
        svc: BookingService<MockBookingRepository>,
    }

    fn t(h: u32) -> NaiveTime { NaiveTime::from_hms_opt(h, 0, 0).unwrap() }

    fn fixture_with(template: SlotTemplate) -> Fixture {
        let users = Arc::new(MockAuthRepository::default());
        let repo = Arc::new(MockBookingRepository::new(users.clone()));
        let svc = BookingService::new(repo.clone(), AdminGate::new(users.clone()), template);
        Fixture { users, repo, svc }
    }

    fn fixture() -> Fixture { fixture_with(SlotTemplate::default()) }

    async fn user(f: &Fixture, email: &str, role: Role) -> Uuid {
        let name = email.split('@').next().unwrap_or("someone");
        f.users.create_user(name, email, role, "h".into(), "argon2").await.unwrap().id
    }

    fn booking(service_id: i32, date: &str, time: &str) -> CreateAppointmentInput {
        CreateAppointmentInput { service_id, date: date.into(), time: time.into() }
    }

    fn occupied(slots: &[TimeSlot]) -> Vec<NaiveTime> {
        slots.iter().filter(|s| s.status == SlotStatus::Occupied).map(|s| s.time).collect()
    }

    #[tokio::test]
    async fn cancelling_frees_the_slot_again() {
        let f = fixture_with(SlotTemplate::new(vec![t(8), t(9), t(10)]).unwrap());
        let me = user(&f, "me@example.com", Role::Customer).await;

        let a = f.svc.create_appointment(me, booking(1, "2024-05-01", "09:00")).await.unwrap();
        let slots = f.svc.available_slots("2024-05-01", Some(me), None).await.unwrap();
        assert_eq!(slots.len(), 3);
        assert_eq!(occupied(&slots), vec![t(9)]);
        // other dates are untouched
        assert!(occupied(&f.svc.available_slots("2024-05-02", Some(me), None).await.unwrap()).is_empty());

        f.svc.cancel_appointment(a.id, me).await.unwrap();
        let slots = f.svc.available_slots("2024-05-01", Some(me), None).await.unwrap();
        assert!(occupied(&slots).is_empty());
        assert_eq!(slots.iter().map(|s| s.time).collect::<Vec<_>>(), vec![t(8), t(9), t(10)]);
    }

    #[tokio::test]
    async fn second_booking_of_a_slot_conflicts() {
        let f = fixture();
        let a = user(&f, "a@example.com", Role::Customer).await;
        let b = user(&f, "b@example.com", Role::Customer).await;

        let first = f.svc.create_appointment(a, booking(2, "2024-05-01", "08:00")).await.unwrap();
        assert_eq!(first.status, AppointmentStatus::Pending);
        assert_eq!(first.service_name, "Full Wash");
        let second = f.svc.create_appointment(b, booking(1, "2024-05-01", "08:00:00")).await;
        assert!(matches!(second, Err(BookingError::Conflict(_))));
        assert_eq!(f.repo.appointment_count().await, 1);
    }

    #[tokio::test]
    async fn create_validates_input() {
        let f = fixture();
        let me = user(&f, "me@example.com", Role::Customer).await;

        let bad_date = f.svc.create_appointment(me, booking(1, "01-05-2024", "08:00")).await;
        assert!(matches!(bad_date, Err(BookingError::Validation(_))));
        let lunch = f.svc.create_appointment(me, booking(1, "2024-05-01", "12:00")).await;
        assert!(matches!(lunch, Err(BookingError::Validation(_))));
        let no_service = f.svc.create_appointment(me, booking(42, "2024-05-01", "08:00")).await;
        assert!(matches!(no_service, Err(BookingError::NotFound(_))));
        assert_eq!(f.repo.appointment_count().await, 0);

        assert!(matches!(f.svc.available_slots("2024-13-01", Some(me), None).await, Err(BookingError::Validation(_))));
    }

    #[tokio::test]
    async fn editing_to_own_current_time_succeeds() {
        let f = fixture();
        let me = user(&f, "me@example.com", Role::Customer).await;
        let a = f.svc.create_appointment(me, booking(1, "2024-05-01", "09:00")).await.unwrap();

        let same = UpdateAppointmentInput { time: Some("09:00".into()), service_id: Some(3) };
        let updated = f.svc.update_appointment(a.id, me, same).await.unwrap();
        assert_eq!(updated.time, t(9));
        assert_eq!(updated.service_name, "Premium Wash");
    }

    #[tokio::test]
    async fn moving_into_a_taken_slot_conflicts() {
        let f = fixture();
        let me = user(&f, "me@example.com", Role::Customer).await;
        let other = user(&f, "other@example.com", Role::Customer).await;
        let mine = f.svc.create_appointment(me, booking(1, "2024-05-01", "09:00")).await.unwrap();
        f.svc.create_appointment(other, booking(1, "2024-05-01", "10:00")).await.unwrap();

        let taken = UpdateAppointmentInput { time: Some("10:00".into()), service_id: None };
        assert!(matches!(f.svc.update_appointment(mine.id, me, taken).await, Err(BookingError::Conflict(_))));

        let free = UpdateAppointmentInput { time: Some("11:00".into()), service_id: None };
        assert_eq!(f.svc.update_appointment(mine.id, me, free).await.unwrap().time, t(11));
        assert_eq!(
            occupied(&f.svc.available_slots("2024-05-01", Some(me), None).await.unwrap()),
            vec![t(10), t(11)]
        );
    }

    #[tokio::test]
    async fn non_owner_cannot_touch_appointment() {
        let f = fixture();
        let owner = user(&f, "owner@example.com", Role::Customer).await;
        let intruder = user(&f, "intruder@example.com", Role::Customer).await;
        let a = f.svc.create_appointment(owner, booking(1, "2024-05-01", "09:00")).await.unwrap();

        let edit = UpdateAppointmentInput { time: Some("10:00".into()), service_id: None };
        assert!(matches!(f.svc.update_appointment(a.id, intruder, edit).await, Err(BookingError::Forbidden(_))));
        assert!(matches!(f.svc.cancel_appointment(a.id, intruder).await, Err(BookingError::Forbidden(_))));

        let stored = f.repo.find(a.id).await.unwrap().unwrap();
        assert_eq!((stored.time, stored.status), (t(9), AppointmentStatus::Pending));
        assert!(matches!(f.svc.cancel_appointment(Uuid::new_v4(), owner).await, Err(BookingError::NotFound(_))));
    }

    #[tokio::test]
    async fn only_pending_appointments_change() {
        let f = fixture();
        let me = user(&f, "me@example.com", Role::Customer).await;
        let a = f.svc.create_appointment(me, booking(1, "2024-05-01", "09:00")).await.unwrap();

        let cancelled = f.svc.cancel_appointment(a.id, me).await.unwrap();
        assert_eq!(cancelled.status, AppointmentStatus::Cancelled);
        assert!(matches!(f.svc.cancel_appointment(a.id, me).await, Err(BookingError::Forbidden(_))));
        let edit = UpdateAppointmentInput { time: Some("10:00".into()), service_id: None };
        assert!(matches!(f.svc.update_appointment(a.id, me, edit).await, Err(BookingError::Forbidden(_))));
    }

    #[tokio::test]
    async fn owner_cannot_cancel_confirmed_appointment() {
        let f = fixture();
        let admin = user(&f, "root@example.com", Role::Admin).await;
        let me = user(&f, "me@example.com", Role::Customer).await;
        let a = f.svc.create_appointment(me, booking(1, "2024-05-01", "09:00")).await.unwrap();
        f.svc.set_status(admin, a.id, "confirmed").await.unwrap();

        assert!(matches!(f.svc.cancel_appointment(a.id, me).await, Err(BookingError::Forbidden(_))));
        let edit = UpdateAppointmentInput { time: None, service_id: Some(2) };
        assert!(matches!(f.svc.update_appointment(a.id, me, edit).await, Err(BookingError::Forbidden(_))));
        assert_eq!(f.repo.find(a.id).await.unwrap().unwrap().status, AppointmentStatus::Confirmed);
    }

    #[tokio::test]
    async fn exclude_only_applies_to_own_appointment() {
        let f = fixture();
        let owner = user(&f, "owner@example.com", Role::Customer).await;
        let other = user(&f, "other@example.com", Role::Customer).await;
        let a = f.svc.create_appointment(owner, booking(1, "2024-05-01", "09:00")).await.unwrap();

        let for_owner = f.svc.available_slots("2024-05-01", Some(owner), Some(a.id)).await.unwrap();
        assert!(occupied(&for_owner).is_empty());
        let for_other = f.svc.available_slots("2024-05-01", Some(other), Some(a.id)).await.unwrap();
        assert_eq!(occupied(&for_other), vec![t(9)]);
        let unknown = f.svc.available_slots("2024-05-01", Some(owner), Some(Uuid::new_v4())).await.unwrap();
        assert_eq!(occupied(&unknown), vec![t(9)]);
        let anonymous = f.svc.available_slots("2024-05-01", None, Some(a.id)).await.unwrap();
        assert_eq!(occupied(&anonymous), vec![t(9)]);
    }

    #[tokio::test]
    async fn admin_operations_require_stored_admin_role() {
        let f = fixture();
        let customer = user(&f, "c@example.com", Role::Customer).await;
        let a = f.svc.create_appointment(customer, booking(1, "2024-05-01", "09:00")).await.unwrap();

        let r = f.svc.set_status(customer, a.id, "confirmed").await;
        assert!(matches!(r, Err(BookingError::Forbidden(_))));
        // refused before the input is even looked at
        let r = f.svc.set_status(customer, a.id, "bogus").await;
        assert!(matches!(r, Err(BookingError::Forbidden(_))));
        let r = f.svc.list_all_appointments(customer, Some("not-a-date"), Pagination::default()).await;
        assert!(matches!(r, Err(BookingError::Forbidden(_))));
        assert!(matches!(
            f.svc.list_all_appointments(Uuid::new_v4(), None, Pagination::default()).await,
            Err(BookingError::Forbidden(_))
        ));
        assert_eq!(f.repo.find(a.id).await.unwrap().unwrap().status, AppointmentStatus::Pending);
    }

    #[tokio::test]
    async fn admin_sets_any_status() {
        let f = fixture();
        let admin = user(&f, "root@example.com", Role::Admin).await;
        let customer = user(&f, "c@example.com", Role::Customer).await;
        let a = f.svc.create_appointment(customer, booking(1, "2024-05-01", "09:00")).await.unwrap();

        assert_eq!(f.svc.set_status(admin, a.id, "confirmed").await.unwrap().status, AppointmentStatus::Confirmed);
        assert_eq!(f.svc.set_status(admin, a.id, "cancelled").await.unwrap().status, AppointmentStatus::Cancelled);
        assert_eq!(f.svc.set_status(admin, a.id, "pending").await.unwrap().status, AppointmentStatus::Pending);
        assert!(matches!(f.svc.set_status(admin, a.id, "done").await, Err(BookingError::Validation(_))));
        assert!(matches!(f.svc.set_status(admin, Uuid::new_v4(), "confirmed").await, Err(BookingError::NotFound(_))));
    }

    #[tokio::test]
    async fn reopening_into_a_retaken_slot_conflicts() {
        let f = fixture();
        let admin = user(&f, "root@example.com", Role::Admin).await;
        let a_user = user(&f, "a@example.com", Role::Customer).await;
        let b_user = user(&f, "b@example.com", Role::Customer).await;
        let a = f.svc.create_appointment(a_user, booking(1, "2024-05-01", "09:00")).await.unwrap();
        f.svc.cancel_appointment(a.id, a_user).await.unwrap();
        f.svc.create_appointment(b_user, booking(1, "2024-05-01", "09:00")).await.unwrap();

        assert!(matches!(f.svc.set_status(admin, a.id, "confirmed").await, Err(BookingError::Conflict(_))));
        assert_eq!(f.repo.find(a.id).await.unwrap().unwrap().status, AppointmentStatus::Cancelled);
    }

    #[tokio::test]
    async fn demoted_admin_loses_access_immediately() {
        let f = fixture();
        let admin = user(&f, "root@example.com", Role::Admin).await;
        assert!(f.svc.list_all_appointments(admin, None, Pagination::default()).await.is_ok());
        f.users.set_role(admin, Role::Customer).await.unwrap();
        assert!(matches!(
            f.svc.list_all_appointments(admin, None, Pagination::default()).await,
            Err(BookingError::Forbidden(_))
        ));
    }

    #[tokio::test]
    async fn listings_are_ordered_filtered_and_paged() {
        let f = fixture();
        let admin = user(&f, "root@example.com", Role::Admin).await;
        let me = user(&f, "me@example.com", Role::Customer).await;
        for (date, time) in [("2024-05-02", "08:00"), ("2024-05-01", "14:00"), ("2024-05-01", "08:00")] {
            f.svc.create_appointment(me, booking(1, date, time)).await.unwrap();
        }

        let mine = f.svc.list_my_appointments(me).await.unwrap();
        let order: Vec<_> = mine.iter().map(|a| (a.date.to_string(), a.time)).collect();
        assert_eq!(
            order,
            vec![("2024-05-01".to_string(), t(8)), ("2024-05-01".to_string(), t(14)), ("2024-05-02".to_string(), t(8))]
        );

        let day = f.svc.list_all_appointments(admin, Some("2024-05-01"), Pagination::default()).await.unwrap();
        assert_eq!(day.len(), 2);
        assert!(day.iter().all(|r| r.customer_email == "me@example.com" && r.customer_name == "me"));
        let page2 = f.svc.list_all_appointments(admin, None, Pagination { page: 2, per_page: 2 }).await.unwrap();
        assert_eq!(page2.len(), 1);
        assert_eq!(page2[0].appointment.time, t(8));
    }

    #[tokio::test]
    async fn admin_listing_resolves_owners_from_credential_store() {
        let users = Arc::new(MockAuthRepository::default());
        let other_users = Arc::new(MockAuthRepository::default());
        let admin = users.create_user("Root", "root@example.com", Role::Admin, "h".into(), "argon2").await.unwrap();
        let ana = users.create_user("Ana", "ana@example.com", Role::Customer, "h".into(), "argon2").await.unwrap();

        let svc = BookingService::new(
            Arc::new(MockBookingRepository::new(users.clone())),
            AdminGate::new(users.clone()),
            SlotTemplate::default(),
        );
        svc.create_appointment(ana.id, booking(1, "2024-05-01", "08:00")).await.unwrap();
        let rows = svc.list_all_appointments(admin.id, None, Pagination::default()).await.unwrap();
        assert_eq!((rows[0].customer_name.as_str(), rows[0].customer_email.as_str()), ("Ana", "ana@example.com"));

        // a row whose owner the store cannot resolve is a storage fault, not a blank
        let detached = BookingService::new(
            Arc::new(MockBookingRepository::new(other_users)),
            AdminGate::new(users.clone()),
            SlotTemplate::default(),
        );
        detached.create_appointment(ana.id, booking(1, "2024-05-01", "08:00")).await.unwrap();
        assert!(matches!(
            detached.list_all_appointments(admin.id, None, Pagination::default()).await,
            Err(BookingError::Repository(_))
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_for_one_slot_yield_one_booking() {
        let f = fixture();
        let svc = Arc::new(f.svc);
        let mut customers = Vec::new();
        for i in 0..8 {
            let u = f.users.create_user("Racer", &format!("racer{i}@example.com"), Role::Customer, "h".into(), "argon2").await.unwrap();
            customers.push(u.id);
        }

        let handles: Vec<_> = customers
            .into_iter()
            .map(|uid| {
                let svc = svc.clone();
                tokio::spawn(async move { svc.create_appointment(uid, booking(1, "2024-05-01", "08:00")).await })
            })
            .collect();
        let mut ok = 0;
        let mut conflicts = 0;
        for h in handles {
            match h.await.unwrap() {
                Ok(a) => { assert_eq!(a.status, AppointmentStatus::Pending); ok += 1 }
                Err(BookingError::Conflict(_)) => conflicts += 1,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }
        assert_eq!((ok, conflicts), (1, 7));
        assert_eq!(f.repo.appointment_count().await, 1);
    }
}
