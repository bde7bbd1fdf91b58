//! DTOs de Drivers

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::driver::Driver;

/// Request para crear un chofer
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDriverRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100))]
    pub last_name: String,

    #[validate(length(min = 5, max = 30))]
    pub phone: String,

    #[validate(email)]
    pub email: Option<String>,

    pub license_number: Option<String>,
    pub languages: Option<Vec<String>>,
    pub photo_url: Option<String>,
}

/// Request para actualizar un chofer
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDriverRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,

    #[validate(length(min = 5, max = 30))]
    pub phone: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    pub license_number: Option<String>,
    pub languages: Option<Vec<String>>,
    pub photo_url: Option<String>,
    pub is_active: Option<bool>,
    pub rating: Option<Decimal>,
}

/// Response de chofer para la API
#[derive(Debug, Serialize)]
pub struct DriverResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub license_number: Option<String>,
    pub languages: Vec<String>,
    pub photo_url: Option<String>,
    pub is_active: bool,
    pub rating: Option<String>,
    pub total_trips: i32,
    pub created_at: String,
}

impl From<Driver> for DriverResponse {
    fn from(driver: Driver) -> Self {
        Self {
            id: driver.id,
            first_name: driver.first_name,
            last_name: driver.last_name,
            phone: driver.phone,
            email: driver.email,
            license_number: driver.license_number,
            languages: driver.languages.unwrap_or_default(),
            photo_url: driver.photo_url,
            is_active: driver.is_active,
            rating: driver.rating.map(|r| r.to_string()),
            total_trips: driver.total_trips,
            created_at: driver.created_at.to_rfc3339(),
        }
    }
}
