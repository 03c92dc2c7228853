// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use foodgalaxy::config::AppConfig;
use foodgalaxy::menu::MenuStore;
use foodgalaxy::server::{build_router, AppState};
use foodgalaxy::telemetry;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    telemetry::init_telemetry();

    let cfg = AppConfig::from_env();
    tracing::info!(
        "starting FoodGalaxy: menu file {:?}, admin user {:?}",
        cfg.data_path,
        cfg.admin_username
    );

    let store = MenuStore::new(cfg.data_path.clone());
    let addr = cfg.bind_addr;
    let state = AppState::new(store, cfg);
    let app = build_router(state);

    tracing::info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
