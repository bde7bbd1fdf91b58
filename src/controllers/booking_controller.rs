//! Controller de reservas
//!
//! Flujo de creación: validación local de campos obligatorios ANTES de
//! cualquier query, luego parseo de fechas, carga del vehículo y
//! tarificación (total = tarifa × días inclusivos, acompte = 30%
//! redondeado half-up). La reserva nace en estado pending con el
//! acompte sin pagar.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::booking_dto::{
    AdminCreateBookingRequest, AssignDriverRequest, BookingFilters, BookingResponse,
    CreateBookingRequest, UpdateBookingStatusRequest,
};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::booking::BookingStatus;
use crate::repositories::booking_repository::{BookingRepository, NewBooking};
use crate::repositories::driver_repository::DriverRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::pricing;
use crate::utils::errors::AppError;
use crate::utils::validation::{validate_date, validate_time};

pub struct BookingController {
    bookings: BookingRepository,
    vehicles: VehicleRepository,
    drivers: DriverRepository,
}

impl BookingController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            bookings: BookingRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            drivers: DriverRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        auth: &AuthenticatedUser,
        request: CreateBookingRequest,
    ) -> Result<BookingResponse, AppError> {
        // Fail-fast: campos obligatorios antes de tocar la base
        request.check_required_fields()?;
        request.validate()?;

        let pickup_date = validate_date(&request.pickup_date)
            .map_err(|_| AppError::BadRequest("Date de départ invalide (YYYY-MM-DD)".to_string()))?;
        let pickup_time = validate_time(&request.pickup_time)
            .map_err(|_| AppError::BadRequest("Heure de départ invalide (HH:MM)".to_string()))?;
        let return_date = match &request.return_date {
            Some(value) => Some(validate_date(value).map_err(|_| {
                AppError::BadRequest("Date de retour invalide (YYYY-MM-DD)".to_string())
            })?),
            None => None,
        };

        let vehicle = self
            .vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Véhicule non trouvé".to_string()))?;

        let quote = pricing::quote(vehicle.daily_rate, pickup_date, return_date);

        let booking = self
            .bookings
            .create(&NewBooking {
                user_id: Some(auth.user_id),
                vehicle_id: vehicle.id,
                driver_id: None,
                service_type: request.service_type,
                pickup_date,
                pickup_time,
                return_date,
                pickup_location: request.pickup_location,
                dropoff_location: request.dropoff_location,
                passengers: request.passengers.unwrap_or(1),
                special_requests: request.special_requests,
                total_amount: quote.total_amount,
                deposit_amount: quote.deposit_amount,
            })
            .await?;

        tracing::info!(
            booking_number = %booking.booking_number,
            days = quote.days,
            total = quote.total_amount,
            "Nueva reserva creada"
        );

        Ok(BookingResponse::from(booking))
    }

    pub async fn list_mine(
        &self,
        auth: &AuthenticatedUser,
    ) -> Result<Vec<BookingResponse>, AppError> {
        let bookings = self.bookings.list_by_user(auth.user_id).await?;
        Ok(bookings.into_iter().map(BookingResponse::from).collect())
    }

    /// Detalle: el dueño o un admin; el resto recibe 403
    pub async fn get_by_id(
        &self,
        auth: &AuthenticatedUser,
        id: Uuid,
    ) -> Result<BookingResponse, AppError> {
        let booking = self
            .bookings
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Réservation non trouvée".to_string()))?;

        if !auth.is_admin && booking.user_id != Some(auth.user_id) {
            return Err(AppError::Forbidden(
                "Vous n'avez pas accès à cette réservation".to_string(),
            ));
        }

        Ok(BookingResponse::from(booking))
    }

    /// Anulación por el cliente: solo el dueño, y nunca desde un estado final
    pub async fn cancel(
        &self,
        auth: &AuthenticatedUser,
        id: Uuid,
    ) -> Result<BookingResponse, AppError> {
        let booking = self
            .bookings
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Réservation non trouvée".to_string()))?;

        if booking.user_id != Some(auth.user_id) {
            return Err(AppError::Forbidden(
                "Vous n'avez pas accès à cette réservation".to_string(),
            ));
        }
        if booking.status.is_terminal() {
            return Err(AppError::Conflict(
                "Cette réservation ne peut plus être annulée".to_string(),
            ));
        }

        let cancelled = self
            .bookings
            .update_status(id, BookingStatus::Cancelled)
            .await?
            .ok_or_else(|| AppError::NotFound("Réservation non trouvée".to_string()))?;

        Ok(BookingResponse::from(cancelled))
    }

    // --- Operaciones de administración ---

    pub async fn list_all(
        &self,
        filters: BookingFilters,
    ) -> Result<Vec<BookingResponse>, AppError> {
        if let Some(status) = &filters.status {
            if BookingStatus::parse(status).is_none() {
                return Err(AppError::BadRequest(format!("Statut invalide: {}", status)));
            }
        }

        let bookings = self.bookings.list_all(&filters).await?;
        Ok(bookings.into_iter().map(BookingResponse::from).collect())
    }

    /// Alta desde el back-office; admite reservas de invitados (sin user)
    pub async fn admin_create(
        &self,
        request: AdminCreateBookingRequest,
    ) -> Result<BookingResponse, AppError> {
        request.validate()?;

        let pickup_date = validate_date(&request.pickup_date)
            .map_err(|_| AppError::BadRequest("Date de départ invalide (YYYY-MM-DD)".to_string()))?;
        let pickup_time = validate_time(&request.pickup_time)
            .map_err(|_| AppError::BadRequest("Heure de départ invalide (HH:MM)".to_string()))?;
        let return_date = match &request.return_date {
            Some(value) => Some(validate_date(value).map_err(|_| {
                AppError::BadRequest("Date de retour invalide (YYYY-MM-DD)".to_string())
            })?),
            None => None,
        };

        let vehicle = self
            .vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Véhicule non trouvé".to_string()))?;

        if let Some(driver_id) = request.driver_id {
            if self.drivers.find_by_id(driver_id).await?.is_none() {
                return Err(AppError::NotFound("Chauffeur non trouvé".to_string()));
            }
        }

        let quote = pricing::quote(vehicle.daily_rate, pickup_date, return_date);

        let booking = self
            .bookings
            .create(&NewBooking {
                user_id: request.user_id,
                vehicle_id: vehicle.id,
                driver_id: request.driver_id,
                service_type: request.service_type,
                pickup_date,
                pickup_time,
                return_date,
                pickup_location: request.pickup_location,
                dropoff_location: request.dropoff_location,
                passengers: request.passengers.unwrap_or(1),
                special_requests: request.special_requests,
                total_amount: quote.total_amount,
                deposit_amount: quote.deposit_amount,
            })
            .await?;

        Ok(BookingResponse::from(booking))
    }

    /// Cambio de estado sin máquina de transiciones: el back-office puede
    /// fijar cualquier valor del enum
    pub async fn update_status(
        &self,
        id: Uuid,
        request: UpdateBookingStatusRequest,
    ) -> Result<BookingResponse, AppError> {
        let status = BookingStatus::parse(&request.status)
            .ok_or_else(|| AppError::BadRequest(format!("Statut invalide: {}", request.status)))?;

        let booking = self
            .bookings
            .update_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("Réservation non trouvée".to_string()))?;

        Ok(BookingResponse::from(booking))
    }

    pub async fn assign_driver(
        &self,
        id: Uuid,
        request: AssignDriverRequest,
    ) -> Result<BookingResponse, AppError> {
        if let Some(driver_id) = request.driver_id {
            if self.drivers.find_by_id(driver_id).await?.is_none() {
                return Err(AppError::NotFound("Chauffeur non trouvé".to_string()));
            }
        }

        let booking = self
            .bookings
            .assign_driver(id, request.driver_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Réservation non trouvée".to_string()))?;

        Ok(BookingResponse::from(booking))
    }

    pub async fn mark_deposit_paid(&self, id: Uuid) -> Result<BookingResponse, AppError> {
        let booking = self
            .bookings
            .mark_deposit_paid(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Réservation non trouvée".to_string()))?;

        Ok(BookingResponse::from(booking))
    }
}
