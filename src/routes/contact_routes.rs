use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::contact_controller::ContactController;
use crate::dto::contact_dto::{ContactMessageResponse, CreateContactMessageRequest};
use crate::dto::response::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Formulario público de contacto
pub fn create_contact_router() -> Router<AppState> {
    Router::new().route("/", post(create_message))
}

async fn create_message(
    State(state): State<AppState>,
    Json(request): Json<CreateContactMessageRequest>,
) -> Result<Json<ApiResponse<ContactMessageResponse>>, AppError> {
    let controller = ContactController::new(state);
    let response = controller.create(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Votre message a bien été envoyé".to_string(),
    )))
}
