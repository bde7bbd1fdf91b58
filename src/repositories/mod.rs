//! Capa de acceso a datos
//!
//! Cada repositorio encapsula las queries SQL de una tabla. Los
//! controllers nunca escriben SQL directamente.

pub mod booking_repository;
pub mod contact_repository;
pub mod driver_repository;
pub mod favorite_repository;
pub mod profile_repository;
pub mod settings_repository;
pub mod user_repository;
pub mod vehicle_repository;
