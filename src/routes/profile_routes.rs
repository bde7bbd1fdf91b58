use axum::{
    extract::State,
    middleware::from_fn_with_state,
    routing::{get, put},
    Extension, Json, Router,
};

use crate::controllers::profile_controller::ProfileController;
use crate::dto::profile_dto::{ProfileResponse, UpdateProfileRequest};
use crate::dto::response::ApiResponse;
use crate::middleware::auth::{auth_middleware, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_profile_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(get_profile))
        .route("/", put(update_profile))
        .route_layer(from_fn_with_state(state, auth_middleware))
}

async fn get_profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<ProfileResponse>>, AppError> {
    let controller = ProfileController::new(state.pool.clone());
    let response = controller.get_mine(&auth).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn update_profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<ProfileResponse>>, AppError> {
    let controller = ProfileController::new(state.pool.clone());
    let response = controller.update_mine(&auth, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Profil mis à jour".to_string(),
    )))
}
