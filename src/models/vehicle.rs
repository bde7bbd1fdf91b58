//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y sus enums de estado.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado del vehículo - mapea al ENUM vehicle_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "vehicle_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    Available,
    OnTrip,
    Maintenance,
    Unavailable,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "available",
            VehicleStatus::OnTrip => "on_trip",
            VehicleStatus::Maintenance => "maintenance",
            VehicleStatus::Unavailable => "unavailable",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "available" => Some(VehicleStatus::Available),
            "on_trip" => Some(VehicleStatus::OnTrip),
            "maintenance" => Some(VehicleStatus::Maintenance),
            "unavailable" => Some(VehicleStatus::Unavailable),
            _ => None,
        }
    }
}

/// Categoría comercial del vehículo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VehicleCategory {
    Economy,
    Standard,
    Premium,
    Luxury,
}

impl VehicleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleCategory::Economy => "economy",
            VehicleCategory::Standard => "standard",
            VehicleCategory::Premium => "premium",
            VehicleCategory::Luxury => "luxury",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "economy" => Some(VehicleCategory::Economy),
            "standard" => Some(VehicleCategory::Standard),
            "premium" => Some(VehicleCategory::Premium),
            "luxury" => Some(VehicleCategory::Luxury),
            _ => None,
        }
    }
}

/// Vehicle principal - mapea a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub description: Option<String>,
    pub daily_rate: i64,
    pub passengers: i32,
    pub luggage: i32,
    pub amenities: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub status: VehicleStatus,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip() {
        for s in ["available", "on_trip", "maintenance", "unavailable"] {
            assert_eq!(VehicleStatus::parse(s).unwrap().as_str(), s);
        }
        assert!(VehicleStatus::parse("retired").is_none());
    }

    #[test]
    fn test_category_roundtrip() {
        for c in ["economy", "standard", "premium", "luxury"] {
            assert_eq!(VehicleCategory::parse(c).unwrap().as_str(), c);
        }
        assert!(VehicleCategory::parse("vip").is_none());
    }
}
