use axum::{
    extract::{Path, State},
    middleware::from_fn_with_state,
    routing::{delete, get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::favorite_controller::FavoriteController;
use crate::dto::favorite_dto::{CreateFavoriteRequest, FavoriteResponse};
use crate::dto::response::ApiResponse;
use crate::middleware::auth::{auth_middleware, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_favorite_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_favorites))
        .route("/", post(add_favorite))
        .route("/:vehicle_id", delete(remove_favorite))
        .route_layer(from_fn_with_state(state, auth_middleware))
}

async fn list_favorites(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<Vec<FavoriteResponse>>>, AppError> {
    let controller = FavoriteController::new(state.pool.clone());
    let response = controller.list(&auth).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn add_favorite(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Json(request): Json<CreateFavoriteRequest>,
) -> Result<Json<ApiResponse<FavoriteResponse>>, AppError> {
    let controller = FavoriteController::new(state.pool.clone());
    let response = controller.add(&auth, request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn remove_favorite(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(vehicle_id): Path<Uuid>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let controller = FavoriteController::new(state.pool.clone());
    controller.remove(&auth, vehicle_id).await?;
    Ok(Json(ApiResponse::success(serde_json::json!({}))))
}
