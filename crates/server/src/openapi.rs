use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct RegisterRequest { pub name: String, pub email: String, pub password: String }

#[derive(ToSchema)]
pub struct LoginRequest { pub email: String, pub password: String }

#[derive(ToSchema)]
pub struct UserDoc {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// customer | admin
    pub role: String,
}

#[derive(ToSchema)]
pub struct SessionDoc { pub user: UserDoc, pub token: String }

#[derive(ToSchema)]
pub struct ServiceDoc {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub duration: String,
}

#[derive(ToSchema)]
pub struct TimeSlotDoc {
    /// HH:MM
    pub time: String,
    /// available | occupied
    pub status: String,
}

#[derive(ToSchema)]
pub struct CreateAppointmentRequest {
    pub service_id: i32,
    /// YYYY-MM-DD
    pub date: String,
    /// HH:MM, one of the template slots
    pub time: String,
}

#[derive(ToSchema)]
pub struct UpdateAppointmentRequest {
    /// HH:MM on the same day
    pub time: Option<String>,
    pub service_id: Option<i32>,
}

#[derive(ToSchema)]
pub struct AppointmentDoc {
    pub id: Uuid,
    pub user_id: Uuid,
    pub service_id: i32,
    pub service_name: String,
    pub service_price: f64,
    pub date: String,
    pub time: String,
    /// pending | confirmed | cancelled
    pub status: String,
}

#[derive(ToSchema)]
pub struct AdminAppointmentDoc {
    pub id: Uuid,
    pub user_id: Uuid,
    pub service_id: i32,
    pub service_name: String,
    pub service_price: f64,
    pub date: String,
    pub time: String,
    pub status: String,
    pub customer_name: String,
    pub customer_email: String,
}

#[derive(ToSchema)]
pub struct StatusRequest {
    /// pending | confirmed | cancelled
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::auth::register,
        crate::routes::auth::login,
        crate::routes::auth::me,
        crate::routes::catalog::list_services,
        crate::routes::catalog::slots,
        crate::routes::appointments::list_mine,
        crate::routes::appointments::create,
        crate::routes::appointments::update,
        crate::routes::appointments::cancel,
        crate::routes::admin::list_all,
        crate::routes::admin::set_status,
    ),
    components(
        schemas(
            HealthResponse,
            RegisterRequest,
            LoginRequest,
            UserDoc,
            SessionDoc,
            ServiceDoc,
            TimeSlotDoc,
            CreateAppointmentRequest,
            UpdateAppointmentRequest,
            AppointmentDoc,
            AdminAppointmentDoc,
            StatusRequest,
        )
    ),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "catalog"),
        (name = "appointments"),
        (name = "admin")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_lists_booking_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();
        for p in ["/slots", "/appointments", "/appointments/{id}", "/admin/appointments/{id}/status"] {
            assert!(paths.iter().any(|k| k == p), "missing {p}");
        }
    }
}
