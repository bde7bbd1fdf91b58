//! Rutas del back-office
//!
//! Todo el router pasa por auth_middleware + admin_only_middleware;
//! los handlers no repiten chequeos de rol.

use axum::{
    extract::{Multipart, Path, Query, State},
    middleware::{from_fn, from_fn_with_state},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::controllers::admin_controller::AdminController;
use crate::controllers::booking_controller::BookingController;
use crate::controllers::driver_controller::DriverController;
use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::admin_dto::{
    DashboardSummary, RoleGrantRequest, UploadResponse, UpsertSettingRequest, UserSummary,
};
use crate::dto::booking_dto::{
    AdminCreateBookingRequest, AssignDriverRequest, BookingFilters, BookingResponse,
    UpdateBookingStatusRequest,
};
use crate::dto::contact_dto::ContactMessageResponse;
use crate::dto::driver_dto::{CreateDriverRequest, DriverResponse, UpdateDriverRequest};
use crate::dto::response::ApiResponse;
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse};
use crate::middleware::auth::{admin_only_middleware, auth_middleware};
use crate::models::setting::Setting;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_admin_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard))
        // Vehículos (la lectura pública vive en /api/vehicle)
        .route("/vehicles", post(create_vehicle))
        .route("/vehicles/:id", put(update_vehicle))
        .route("/vehicles/:id", delete(delete_vehicle))
        // Choferes
        .route("/drivers", get(list_drivers))
        .route("/drivers", post(create_driver))
        .route("/drivers/:id", get(get_driver))
        .route("/drivers/:id", put(update_driver))
        .route("/drivers/:id", delete(delete_driver))
        // Reservas
        .route("/bookings", get(list_bookings))
        .route("/bookings", post(create_booking))
        .route("/bookings/:id/status", put(update_booking_status))
        .route("/bookings/:id/driver", put(assign_booking_driver))
        .route("/bookings/:id/deposit", put(mark_deposit_paid))
        // Mensajes de contacto
        .route("/messages", get(list_messages))
        .route("/messages/:id/read", put(mark_message_read))
        .route("/messages/:id", delete(delete_message))
        // Usuarios y roles
        .route("/users", get(list_users))
        .route("/roles", post(grant_role))
        .route("/roles/revoke", post(revoke_role))
        // Settings
        .route("/settings", get(list_settings))
        .route("/settings", put(upsert_setting))
        .route("/settings/:key", get(get_setting))
        // Imágenes
        .route("/upload", post(upload_image))
        .route_layer(from_fn(admin_only_middleware))
        .route_layer(from_fn_with_state(state, auth_middleware))
}

async fn dashboard(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DashboardSummary>>, AppError> {
    let controller = AdminController::new(state);
    let response = controller.dashboard().await?;
    Ok(Json(ApiResponse::success(response)))
}

// --- Vehículos ---

async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Véhicule créé".to_string(),
    )))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(ApiResponse::success(serde_json::json!({}))))
}

// --- Choferes ---

#[derive(Debug, Default, Deserialize)]
struct DriverListQuery {
    active: Option<bool>,
}

async fn list_drivers(
    State(state): State<AppState>,
    Query(query): Query<DriverListQuery>,
) -> Result<Json<ApiResponse<Vec<DriverResponse>>>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.list(query.active.unwrap_or(false)).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn get_driver(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DriverResponse>>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn create_driver(
    State(state): State<AppState>,
    Json(request): Json<CreateDriverRequest>,
) -> Result<Json<ApiResponse<DriverResponse>>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Chauffeur créé".to_string(),
    )))
}

async fn update_driver(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateDriverRequest>,
) -> Result<Json<ApiResponse<DriverResponse>>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn delete_driver(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(ApiResponse::success(serde_json::json!({}))))
}

// --- Reservas ---

async fn list_bookings(
    State(state): State<AppState>,
    Query(filters): Query<BookingFilters>,
) -> Result<Json<ApiResponse<Vec<BookingResponse>>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.list_all(filters).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn create_booking(
    State(state): State<AppState>,
    Json(request): Json<AdminCreateBookingRequest>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.admin_create(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Réservation enregistrée".to_string(),
    )))
}

async fn update_booking_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateBookingStatusRequest>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.update_status(id, request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn assign_booking_driver(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AssignDriverRequest>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.assign_driver(id, request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn mark_deposit_paid(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.mark_deposit_paid(id).await?;
    Ok(Json(ApiResponse::success(response)))
}

// --- Mensajes ---

async fn list_messages(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ContactMessageResponse>>>, AppError> {
    let controller = AdminController::new(state);
    let response = controller.list_messages().await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn mark_message_read(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ContactMessageResponse>>, AppError> {
    let controller = AdminController::new(state);
    let response = controller.mark_message_read(id).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let controller = AdminController::new(state);
    controller.delete_message(id).await?;
    Ok(Json(ApiResponse::success(serde_json::json!({}))))
}

// --- Usuarios y roles ---

async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<UserSummary>>>, AppError> {
    let controller = AdminController::new(state);
    let response = controller.list_users().await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn grant_role(
    State(state): State<AppState>,
    Json(request): Json<RoleGrantRequest>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let controller = AdminController::new(state);
    controller.grant_role(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        serde_json::json!({}),
        "Rôle attribué".to_string(),
    )))
}

async fn revoke_role(
    State(state): State<AppState>,
    Json(request): Json<RoleGrantRequest>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let controller = AdminController::new(state);
    controller.revoke_role(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        serde_json::json!({}),
        "Rôle retiré".to_string(),
    )))
}

// --- Settings ---

async fn list_settings(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Setting>>>, AppError> {
    let controller = AdminController::new(state);
    let response = controller.list_settings().await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn get_setting(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<ApiResponse<Setting>>, AppError> {
    let controller = AdminController::new(state);
    let response = controller.get_setting(&key).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn upsert_setting(
    State(state): State<AppState>,
    Json(request): Json<UpsertSettingRequest>,
) -> Result<Json<ApiResponse<Setting>>, AppError> {
    let controller = AdminController::new(state);
    let response = controller.upsert_setting(request).await?;
    Ok(Json(ApiResponse::success(response)))
}

// --- Imágenes ---

async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<UploadResponse>>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Multipart invalide: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let original_name = field.file_name().unwrap_or("image.bin").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Lecture du fichier impossible: {}", e)))?;

        let controller = AdminController::new(state.clone());
        let response = controller.upload_image(&original_name, &bytes).await?;
        return Ok(Json(ApiResponse::success(response)));
    }

    Err(AppError::BadRequest(
        "Champ 'file' manquant dans le formulaire".to_string(),
    ))
}
