//! DTOs de Bookings

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::booking::Booking;
use crate::utils::currency;
use crate::utils::errors::AppError;

/// Request para crear una reserva
///
/// Las fechas/horas llegan como strings del formulario ("YYYY-MM-DD",
/// "HH:MM") y se parsean en el controller tras la validación local.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookingRequest {
    pub vehicle_id: Uuid,

    pub service_type: String,
    pub pickup_date: String,
    pub pickup_time: String,
    pub pickup_location: String,

    pub return_date: Option<String>,
    pub dropoff_location: Option<String>,

    #[validate(range(min = 1, max = 60))]
    pub passengers: Option<i32>,

    #[validate(length(max = 2000))]
    pub special_requests: Option<String>,
}

impl CreateBookingRequest {
    /// Validación local de campos obligatorios, ANTES de cualquier query.
    ///
    /// Falla rápido: si falta uno de los cuatro campos no se toca la red.
    pub fn check_required_fields(&self) -> Result<(), AppError> {
        for (field, value) in [
            ("service_type", &self.service_type),
            ("pickup_date", &self.pickup_date),
            ("pickup_time", &self.pickup_time),
            ("pickup_location", &self.pickup_location),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::BadRequest(format!(
                    "Le champ obligatoire '{}' est manquant",
                    field
                )));
            }
        }
        Ok(())
    }
}

/// Request de administración: puede crear reservas para invitados
#[derive(Debug, Deserialize, Validate)]
pub struct AdminCreateBookingRequest {
    pub user_id: Option<Uuid>,

    pub vehicle_id: Uuid,
    pub driver_id: Option<Uuid>,

    pub service_type: String,
    pub pickup_date: String,
    pub pickup_time: String,
    pub pickup_location: String,

    pub return_date: Option<String>,
    pub dropoff_location: Option<String>,

    #[validate(range(min = 1, max = 60))]
    pub passengers: Option<i32>,

    #[validate(length(max = 2000))]
    pub special_requests: Option<String>,
}

/// Request para actualizar el estado de una reserva (admin)
#[derive(Debug, Deserialize)]
pub struct UpdateBookingStatusRequest {
    pub status: String,
}

/// Request para asignar un chofer (admin)
#[derive(Debug, Deserialize)]
pub struct AssignDriverRequest {
    pub driver_id: Option<Uuid>,
}

/// Filtros de listado (admin)
#[derive(Debug, Default, Deserialize)]
pub struct BookingFilters {
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Response de reserva para la API
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub booking_number: String,
    pub user_id: Option<Uuid>,
    pub vehicle_id: Option<Uuid>,
    pub driver_id: Option<Uuid>,
    pub service_type: String,
    pub pickup_date: String,
    pub pickup_time: String,
    pub return_date: Option<String>,
    pub pickup_location: String,
    pub dropoff_location: Option<String>,
    pub passengers: i32,
    pub special_requests: Option<String>,
    pub total_amount: Option<i64>,
    pub total_amount_display: Option<String>,
    pub total_amount_eur: Option<String>,
    pub deposit_amount: Option<i64>,
    pub deposit_amount_display: Option<String>,
    pub deposit_amount_eur: Option<String>,
    pub deposit_paid: bool,
    pub status: String,
    pub created_at: String,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            booking_number: booking.booking_number,
            user_id: booking.user_id,
            vehicle_id: booking.vehicle_id,
            driver_id: booking.driver_id,
            service_type: booking.service_type,
            pickup_date: booking.pickup_date.format("%Y-%m-%d").to_string(),
            pickup_time: booking.pickup_time.format("%H:%M").to_string(),
            return_date: booking.return_date.map(|d| d.format("%Y-%m-%d").to_string()),
            pickup_location: booking.pickup_location,
            dropoff_location: booking.dropoff_location,
            passengers: booking.passengers,
            special_requests: booking.special_requests,
            total_amount: booking.total_amount,
            total_amount_display: booking.total_amount.map(currency::format_fcfa),
            total_amount_eur: booking.total_amount.map(currency::format_eur),
            deposit_amount: booking.deposit_amount,
            deposit_amount_display: booking.deposit_amount.map(currency::format_fcfa),
            deposit_amount_eur: booking.deposit_amount.map(currency::format_eur),
            deposit_paid: booking.deposit_paid,
            status: booking.status.as_str().to_string(),
            created_at: booking.created_at.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::booking::BookingStatus;

    fn valid_request() -> CreateBookingRequest {
        CreateBookingRequest {
            vehicle_id: Uuid::new_v4(),
            service_type: "transfer".to_string(),
            pickup_date: "2025-12-01".to_string(),
            pickup_time: "09:00".to_string(),
            pickup_location: "Aéroport AIBD".to_string(),
            return_date: None,
            dropoff_location: Some("Dakar".to_string()),
            passengers: Some(2),
            special_requests: None,
        }
    }

    #[test]
    fn test_response_formats_amounts_in_both_currencies() {
        let booking = Booking {
            id: Uuid::new_v4(),
            booking_number: "SV-20251201-0042".to_string(),
            user_id: None,
            vehicle_id: None,
            driver_id: None,
            service_type: "location".to_string(),
            pickup_date: chrono::NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
            pickup_time: chrono::NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            return_date: chrono::NaiveDate::from_ymd_opt(2025, 12, 3),
            pickup_location: "Dakar".to_string(),
            dropoff_location: None,
            passengers: 2,
            special_requests: None,
            total_amount: Some(165000),
            deposit_amount: Some(49500),
            deposit_paid: false,
            status: BookingStatus::Pending,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        let response = BookingResponse::from(booking);
        assert_eq!(response.total_amount_display.as_deref(), Some("165 000 FCFA"));
        assert_eq!(response.total_amount_eur.as_deref(), Some("252 €"));
        assert_eq!(response.deposit_amount_display.as_deref(), Some("49 500 FCFA"));
        // 49 500 / 655.957 = 75.46 → 75
        assert_eq!(response.deposit_amount_eur.as_deref(), Some("75 €"));
    }

    #[test]
    fn test_required_fields_present() {
        assert!(valid_request().check_required_fields().is_ok());
    }

    #[test]
    fn test_each_missing_required_field_is_rejected() {
        for field in ["service_type", "pickup_date", "pickup_time", "pickup_location"] {
            let mut req = valid_request();
            match field {
                "service_type" => req.service_type = String::new(),
                "pickup_date" => req.pickup_date = "  ".to_string(),
                "pickup_time" => req.pickup_time = String::new(),
                "pickup_location" => req.pickup_location = String::new(),
                _ => unreachable!(),
            }
            let err = req.check_required_fields().unwrap_err();
            assert!(matches!(err, AppError::BadRequest(_)));
            assert!(err.to_string().contains(field));
        }
    }
}
