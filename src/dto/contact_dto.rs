//! DTOs del formulario de contacto

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::contact_message::ContactMessage;

/// Request del formulario público de contacto
#[derive(Debug, Deserialize, Validate)]
pub struct CreateContactMessageRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    pub phone: Option<String>,
    pub service_interest: Option<String>,
    pub travel_dates: Option<String>,

    #[validate(range(min = 1, max = 100))]
    pub passengers: Option<i32>,

    pub pickup_location: Option<String>,
    pub dropoff_location: Option<String>,

    #[validate(length(min = 1, max = 5000))]
    pub message: String,
}

/// Response de mensaje de contacto
#[derive(Debug, Serialize)]
pub struct ContactMessageResponse {
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
    pub created_at: String,
}

impl From<ContactMessage> for ContactMessageResponse {
    fn from(m: ContactMessage) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            phone: m.phone,
            service_interest: m.service_interest,
            travel_dates: m.travel_dates,
            passengers: m.passengers,
            pickup_location: m.pickup_location,
            dropoff_location: m.dropoff_location,
            message: m.message,
            is_read: m.is_read,
            created_at: m.created_at.to_rfc3339(),
        }
    }
}
