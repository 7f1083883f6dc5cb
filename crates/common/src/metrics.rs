use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter, Encoder, IntCounter, TextEncoder};

// Prometheus metrics (default registry)
pub static APPOINTMENTS_CREATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "carwash_appointments_created_total",
        "Total appointments successfully booked"
    )
    .expect("register appointments_created_total")
});

pub static SLOT_CONFLICTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "carwash_slot_conflicts_total",
        "Total bookings or moves rejected because the slot was taken"
    )
    .expect("register slot_conflicts_total")
});

pub static LOGINS_FAILED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "carwash_logins_failed_total",
        "Total login attempts rejected for bad credentials"
    )
    .expect("register logins_failed_total")
});

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}
