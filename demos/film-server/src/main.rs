//! filmlib Demo Server
//!
//! A local film server implementing the collection and session endpoints
//! the filmlib client expects. Films live in memory, scoped per user, and
//! reset on restart.
//!
//! Usage:
//!   cargo run --package film-server
//!
//!   # Custom bind address
//!   FILM_SERVER_ADDR=0.0.0.0:3001 cargo run --package film-server
//!
//! Demo accounts: harry/pony and hermione/crookshanks.

mod handlers;
mod store;

use axum::{
    routing::{get, post, put},
    Router,
};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "film_server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build router
    let app = Router::new()
        // Collection endpoints
        .route("/api/films", get(handlers::list_films))
        .route("/api/films/filter/:name", get(handlers::filter_films))
        .route("/api/add", post(handlers::add_film))
        .route(
            "/api/films/:id",
            put(handlers::edit_film).delete(handlers::delete_film),
        )
        .route("/api/films/:id/:value", put(handlers::set_favorite))
        .route("/api/films/:id/rating/:rating", put(handlers::set_rating))
        // Session endpoints
        .route("/api/sessions", post(handlers::log_in))
        .route(
            "/api/sessions/current",
            get(handlers::current_user).delete(handlers::log_out),
        )
        .with_state(store::Store::seeded());

    // Start server
    let addr: SocketAddr = std::env::var("FILM_SERVER_ADDR")
        .ok()
        .and_then(|addr| addr.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3001)));
    tracing::info!("film server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
