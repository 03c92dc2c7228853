//! Thin deployment variant: serves one static page straight off the
//! filesystem, no menu or admin logic at all.

use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::ServeFile;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "static_page=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let page = std::env::var("FOODGALAXY_PAGE").unwrap_or_else(|_| "templates/food.html".into());
    let addr: std::net::SocketAddr = std::env::var("FOODGALAXY_BIND")
        .unwrap_or_else(|_| "127.0.0.1:3000".into())
        .parse()
        .expect("FOODGALAXY_BIND must be a socket address");

    let app = Router::new().route_service("/", ServeFile::new(&page));

    tracing::info!("serving {} on {}", page, addr);
    let listener = TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
