//! Repositorio de reservas
//!
//! El número de reserva se genera del lado de la aplicación con el
//! prefijo SV- (fecha + sufijo aleatorio). La unicidad la garantiza el
//! índice UNIQUE; ante una colisión se reintenta con otro sufijo.

use chrono::{NaiveDate, NaiveTime, Utc};
use rand::Rng;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::booking_dto::BookingFilters;
use crate::models::booking::{Booking, BookingStatus};
use crate::utils::errors::AppError;

const BOOKING_NUMBER_ATTEMPTS: usize = 5;

/// Datos ya validados y tarificados listos para insertar
#[derive(Debug)]
pub struct NewBooking {
    pub user_id: Option<Uuid>,
    pub vehicle_id: Uuid,
    pub driver_id: Option<Uuid>,
    pub service_type: String,
    pub pickup_date: NaiveDate,
    pub pickup_time: NaiveTime,
    pub return_date: Option<NaiveDate>,
    pub pickup_location: String,
    pub dropoff_location: Option<String>,
    pub passengers: i32,
    pub special_requests: Option<String>,
    pub total_amount: i64,
    pub deposit_amount: i64,
}

pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_booking: &NewBooking) -> Result<Booking, AppError> {
        let mut last_error: Option<sqlx::Error> = None;

        for _ in 0..BOOKING_NUMBER_ATTEMPTS {
            let booking_number = generate_booking_number();

            let result = sqlx::query_as::<_, Booking>(
                r#"
                INSERT INTO bookings
                    (booking_number, user_id, vehicle_id, driver_id, service_type,
                     pickup_date, pickup_time, return_date, pickup_location,
                     dropoff_location, passengers, special_requests,
                     total_amount, deposit_amount, deposit_paid, status)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, FALSE, $15)
                RETURNING *
                "#,
            )
            .bind(&booking_number)
            .bind(new_booking.user_id)
            .bind(new_booking.vehicle_id)
            .bind(new_booking.driver_id)
            .bind(&new_booking.service_type)
            .bind(new_booking.pickup_date)
            .bind(new_booking.pickup_time)
            .bind(new_booking.return_date)
            .bind(&new_booking.pickup_location)
            .bind(&new_booking.dropoff_location)
            .bind(new_booking.passengers)
            .bind(&new_booking.special_requests)
            .bind(new_booking.total_amount)
            .bind(new_booking.deposit_amount)
            .bind(BookingStatus::Pending)
            .fetch_one(&self.pool)
            .await;

            match result {
                Ok(booking) => return Ok(booking),
                Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                    last_error = Some(sqlx::Error::Database(db_err));
                }
                Err(other) => return Err(AppError::Database(other)),
            }
        }

        Err(AppError::Database(last_error.unwrap_or(sqlx::Error::RowNotFound)))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, AppError> {
        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(booking)
    }

    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Booking>, AppError> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    pub async fn list_all(&self, filters: &BookingFilters) -> Result<Vec<Booking>, AppError> {
        let limit = filters.limit.unwrap_or(50).clamp(1, 200);
        let offset = filters.offset.unwrap_or(0).max(0);

        let bookings = sqlx::query_as::<_, Booking>(
            r#"
            SELECT * FROM bookings
            WHERE ($1::booking_status IS NULL OR status = $1)
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(filters.status.as_deref().and_then(BookingStatus::parse))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        status: BookingStatus,
    ) -> Result<Option<Booking>, AppError> {
        let booking = sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(booking)
    }

    pub async fn assign_driver(
        &self,
        id: Uuid,
        driver_id: Option<Uuid>,
    ) -> Result<Option<Booking>, AppError> {
        let booking = sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET driver_id = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(driver_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(booking)
    }

    pub async fn mark_deposit_paid(&self, id: Uuid) -> Result<Option<Booking>, AppError> {
        let booking = sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET deposit_paid = TRUE, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(booking)
    }

    /// Métricas del dashboard: (total, pendientes, ingresos del mes)
    pub async fn dashboard_counts(&self) -> Result<(i64, i64, i64), AppError> {
        let result: (i64, i64, i64) = sqlx::query_as(
            r#"
            SELECT
                COUNT(*),
                COUNT(*) FILTER (WHERE status = 'pending'),
                COALESCE(SUM(total_amount) FILTER (
                    WHERE status IN ('confirmed', 'in_progress', 'completed')
                      AND created_at >= date_trunc('month', NOW())
                ), 0)
            FROM bookings
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }
}

fn generate_booking_number() -> String {
    let suffix: u32 = rand::thread_rng().gen_range(0..10_000);
    format!("SV-{}-{:04}", Utc::now().format("%Y%m%d"), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_number_format() {
        let number = generate_booking_number();
        assert!(number.starts_with("SV-"));
        // SV- + YYYYMMDD + - + 4 dígitos
        assert_eq!(number.len(), 16);
    }
}
