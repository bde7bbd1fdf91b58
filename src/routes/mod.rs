//! Routers HTTP por recurso

pub mod admin_routes;
pub mod auth_routes;
pub mod booking_routes;
pub mod contact_routes;
pub mod favorite_routes;
pub mod profile_routes;
pub mod vehicle_routes;
