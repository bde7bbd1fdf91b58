//! DTOs del back-office

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Resumen del dashboard de administración
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub total_bookings: i64,
    pub pending_bookings: i64,
    pub active_vehicles: i64,
    pub monthly_revenue: i64,
    pub monthly_revenue_display: String,
    pub new_clients_month: i64,
    pub unread_messages: i64,
}

/// Request para otorgar o revocar un rol
#[derive(Debug, Deserialize)]
pub struct RoleGrantRequest {
    pub user_id: Uuid,
    /// admin / user
    pub role: String,
}

/// Resumen de usuario para el listado de administración
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub is_admin: bool,
    pub created_at: String,
}

/// Request para fijar un setting
#[derive(Debug, Deserialize, Validate)]
pub struct UpsertSettingRequest {
    #[validate(length(min = 1, max = 100))]
    pub key: String,
    pub value: serde_json::Value,
}

/// Response de subida de imagen
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
    pub file_name: String,
}
