//! Modelo de ContactMessage
//!
//! Lead capturado desde el formulario público de contacto.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service_interest: Option<String>,
    pub travel_dates: Option<String>,
    pub passengers: Option<i32>,
    pub pickup_location: Option<String>,
    pub dropoff_location: Option<String>,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}
