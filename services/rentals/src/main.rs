use std::sync::Arc;
use std::time::Duration;

use sea_orm::Database;
use tracing::info;

use rentman_domain::clock::SystemClock;
use rentman_rentals::config::RentalsConfig;
use rentman_rentals::infra::db::DbOutboxRepository;
use rentman_rentals::infra::outbox::{LogDelivery, run_dispatcher};
use rentman_rentals::router::build_router;
use rentman_rentals::state::AppState;

#[tokio::main]
async fn main() {
    rentman_core::tracing::init_tracing();

    let config = RentalsConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db: db.clone(),
        clock: Arc::new(SystemClock),
        media_root: config.media_root.clone().into(),
    };

    // Outbox dispatcher: polls committed notification events and hands
    // them to the delivery port.
    let outbox = DbOutboxRepository { db };
    let poll = Duration::from_secs(config.outbox_poll_secs);
    tokio::spawn(async move {
        run_dispatcher(outbox, LogDelivery, poll).await;
    });

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.rentals_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("rentals service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
