//! Lógica de negocio por recurso
//!
//! Los controllers validan, orquestan repositorios/servicios y mapean
//! modelos a DTOs de respuesta. No escriben SQL ni conocen axum.

pub mod admin_controller;
pub mod auth_controller;
pub mod booking_controller;
pub mod contact_controller;
pub mod driver_controller;
pub mod favorite_controller;
pub mod profile_controller;
pub mod vehicle_controller;
