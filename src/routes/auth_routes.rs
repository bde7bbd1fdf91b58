use axum::{
    extract::State,
    middleware::from_fn_with_state,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{AuthResponse, LoginRequest, RegisterRequest, SessionUser};
use crate::dto::response::ApiResponse;
use crate::middleware::auth::{auth_middleware, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_auth_router(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/me", get(me))
        .route("/logout", post(logout))
        .route_layer(from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .merge(protected)
}

async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, AppError> {
    let controller = AuthController::new(state.pool.clone(), state.jwt_config());
    let response = controller.register(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Compte créé avec succès".to_string(),
    )))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, AppError> {
    let controller = AuthController::new(state.pool.clone(), state.jwt_config());
    let response = controller.login(request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn me(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<SessionUser>>, AppError> {
    let controller = AuthController::new(state.pool.clone(), state.jwt_config());
    let response = controller.me(&auth).await?;
    Ok(Json(ApiResponse::success(response)))
}

/// Los JWT no se revocan del lado del servidor: el cliente descarta el
/// token. El endpoint existe para que el front tenga un punto único.
async fn logout(
    Extension(auth): Extension<AuthenticatedUser>,
) -> Json<ApiResponse<serde_json::Value>> {
    tracing::debug!(user_id = %auth.user_id, "Logout");
    Json(ApiResponse::success_with_message(
        serde_json::json!({}),
        "Déconnexion réussie".to_string(),
    ))
}
