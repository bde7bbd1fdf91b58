//! Sunuvan Backend - API de reservas de vans con chofer
//!
//! Expone el catálogo público de vehículos, el formulario de contacto,
//! el espacio cliente (reservas, favoritos, perfil) y el back-office.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::state::AppState;

/// Construir el router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    // Sin orígenes configurados solo se abre todo fuera de producción
    let cors = if state.config.cors_origins.is_empty() && state.config.is_development() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(&state.config.cors_origins)
    };

    Router::new()
        .route("/test", get(test_endpoint))
        .nest("/api/auth", routes::auth_routes::create_auth_router(state.clone()))
        .nest("/api/vehicle", routes::vehicle_routes::create_vehicle_router())
        .nest("/api/contact", routes::contact_routes::create_contact_router())
        .nest("/api/booking", routes::booking_routes::create_booking_router(state.clone()))
        .nest("/api/favorite", routes::favorite_routes::create_favorite_router(state.clone()))
        .nest("/api/profile", routes::profile_routes::create_profile_router(state.clone()))
        .nest("/api/admin", routes::admin_routes::create_admin_router(state.clone()))
        .nest_service("/uploads", ServeDir::new(&state.config.upload_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

/// Endpoint de prueba
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "sunuvan-backend",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
