use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use configs::AppConfig;
use service::auth::domain::RegisterInput;
use service::auth::repo::seaorm::SeaOrmAuthRepository;
use service::auth::service::AuthConfig;
use service::booking::repo::seaorm::SeaOrmBookingRepository;
use service::slots::SlotTemplate;

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Assemble state over the database: SeaORM repositories, auth settings and
/// the configured slot template.
pub fn build_state(cfg: &AppConfig, db: sea_orm::DatabaseConnection) -> Result<ServerState, StartupError> {
    let slots = cfg.booking.parsed_slots().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    let template = SlotTemplate::new(slots).map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    Ok(ServerState::new(
        Arc::new(SeaOrmAuthRepository { db: db.clone() }),
        Arc::new(SeaOrmBookingRepository { db }),
        AuthConfig::new(cfg.auth.jwt_secret.clone(), cfg.auth.token_ttl_hours),
        template,
    ))
}

/// Public entry: connect, migrate, build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::load_and_validate()?;

    let db = models::db::connect_with_config(&cfg.database).await?;
    models::db::test_connection(&db).await?;
    migration::Migrator::up(&db, None).await?;
    info!("database migrated");

    let state = build_state(&cfg, db)?;

    if let Some(admin) = &cfg.auth.bootstrap_admin {
        let input = RegisterInput { name: admin.name.clone(), email: admin.email.clone(), password: admin.password.clone() };
        let user = state.auth.ensure_admin(input).await?;
        info!(user_id = %user.id, role = %user.role, "bootstrap admin ready");
    }

    let app: Router = routes::build_router(state, build_cors());

    let addr = bind_addr(&cfg)?;
    info!(%addr, slots = ?cfg.booking.slot_template, "starting booking server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
