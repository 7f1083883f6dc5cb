use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::BookingError;
use crate::slots::hhmm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => models::appointment::STATUS_PENDING,
            AppointmentStatus::Confirmed => models::appointment::STATUS_CONFIRMED,
            AppointmentStatus::Cancelled => models::appointment::STATUS_CANCELLED,
        }
    }

    /// Anything but cancelled holds its slot.
    pub fn is_live(&self) -> bool { *self != AppointmentStatus::Cancelled }
}

impl FromStr for AppointmentStatus {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            models::appointment::STATUS_PENDING => Ok(AppointmentStatus::Pending),
            models::appointment::STATUS_CONFIRMED => Ok(AppointmentStatus::Confirmed),
            models::appointment::STATUS_CANCELLED => Ok(AppointmentStatus::Cancelled),
            other => Err(BookingError::Validation(format!(
                "unknown status {other:?}, expected pending, confirmed or cancelled"
            ))),
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    /// Free-form, e.g. "30 minutes"; never used for slot arithmetic.
    pub duration: String,
}

/// Stored appointment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub service_id: i32,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    pub status: AppointmentStatus,
}

/// Validated insert request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub user_id: Uuid,
    pub service_id: i32,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

/// Appointment with its service resolved, as returned to customers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentView {
    pub id: Uuid,
    pub user_id: Uuid,
    pub service_id: i32,
    pub service_name: String,
    pub service_price: Decimal,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    pub status: AppointmentStatus,
}

impl AppointmentView {
    pub fn compose(a: Appointment, service: &ServiceOffering) -> Self {
        Self {
            id: a.id,
            user_id: a.user_id,
            service_id: a.service_id,
            service_name: service.name.clone(),
            service_price: service.price,
            date: a.date,
            time: a.time,
            status: a.status,
        }
    }
}

/// Admin listing row: the customer view plus who booked it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminAppointmentView {
    #[serde(flatten)]
    pub appointment: AppointmentView,
    pub customer_name: String,
    pub customer_email: String,
}

/// Raw create request as received on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentInput {
    pub service_id: i32,
    pub date: String,
    pub time: String,
}

/// Reschedule within the same day and/or switch service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAppointmentInput {
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub service_id: Option<i32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppointmentFilter {
    pub date: Option<NaiveDate>,
}

/// One atomic edit to a stored appointment.
///
/// With `only_if_pending` the repository refuses (`Forbidden`) to touch
/// anything not in `pending` state. Whenever the result is live and either the time moved or
/// the row comes back from `cancelled`, the slot is re-checked excluding the
/// row itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentChange {
    pub time: Option<NaiveTime>,
    pub service_id: Option<i32>,
    pub status: Option<AppointmentStatus>,
    pub only_if_pending: bool,
}
