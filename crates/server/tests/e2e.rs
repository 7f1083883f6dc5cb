use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes::{self, ServerState};
use service::auth::repository::mock::MockAuthRepository;
use service::auth::service::AuthConfig;
use service::booking::repository::mock::MockBookingRepository;
use service::slots::SlotTemplate;

struct TestApp {
    base_url: String,
}

/// Serve the real router on an ephemeral port, backed by in-memory stores.
async fn start_server() -> anyhow::Result<TestApp> {
    let users = Arc::new(MockAuthRepository::default());
    let state = ServerState::new(
        users.clone(),
        Arc::new(MockBookingRepository::new(users)),
        AuthConfig::new("e2e-secret", 1),
        SlotTemplate::default(),
    );
    let app = routes::build_router(state, CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url: format!("http://{}:{}", addr.ip(), addr.port()) })
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_book_and_cancel() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/auth/register", app.base_url))
        .json(&json!({"name": "E2E", "email": "e2e@example.com", "password": "E2ePassw0rd"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);

    let session: Value = client
        .post(format!("{}/auth/login", app.base_url))
        .json(&json!({"email": "e2e@example.com", "password": "E2ePassw0rd"}))
        .send()
        .await?
        .json()
        .await?;
    let token = session["token"].as_str().unwrap_or_default().to_string();
    assert!(!token.is_empty());

    let res = client
        .post(format!("{}/appointments", app.base_url))
        .bearer_auth(&token)
        .json(&json!({"service_id": 1, "date": "2024-05-01", "time": "08:00"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let appt: Value = res.json().await?;

    let slots: Value = client
        .get(format!("{}/slots?date=2024-05-01", app.base_url))
        .bearer_auth(&token)
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(slots[0], json!({"time": "08:00", "status": "occupied"}));

    let res = client
        .post(format!("{}/appointments/{}/cancel", app.base_url, appt["id"].as_str().unwrap_or_default()))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let slots: Value = client
        .get(format!("{}/slots?date=2024-05-01", app.base_url))
        .bearer_auth(&token)
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(slots[0]["status"], "available");
    Ok(())
}
