//! Middleware de autenticación JWT y resolución de rol
//!
//! Este módulo maneja la autenticación JWT, extracción de tokens
//! y verificación de usuarios autenticados.
//!
//! Orden estricto dentro del middleware: primero se valida el token,
//! después se carga el usuario, después se resuelve el rol admin, y
//! SOLO entonces se publica `AuthenticatedUser` en las extensions.
//! Ningún handler puede observar una identidad sin rol resuelto, por
//! lo que no existe ventana en la que un admin aparezca sin permisos.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
    Extension,
};
use uuid::Uuid;

use crate::models::user::AppRole;
use crate::repositories::user_repository::UserRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt;

/// Usuario autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
    pub is_admin: bool,
}

/// Middleware de autenticación JWT
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Extraer token del header Authorization
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Token de autorización requerido".to_string()))?;

    let token = jwt::extract_token_from_header(auth_header)?;

    // Decodificar y validar JWT
    let claims = jwt::verify_token(token, &state.jwt_config())
        .map_err(|_| AppError::Unauthorized("Token inválido o expirado".to_string()))?;

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("Token inválido".to_string()))?;

    // Verificar que el usuario existe en la base de datos
    let users = UserRepository::new(state.pool.clone());
    let user = users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Usuario no encontrado".to_string()))?;

    // Resolver el rol ANTES de publicar la identidad
    let is_admin = users.has_role(user.id, AppRole::Admin).await?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: user.id,
        email: user.email,
        is_admin,
    });

    Ok(next.run(request).await)
}

/// Middleware de autorización: solo administradores
///
/// Se apila DESPUÉS de `auth_middleware`; la extension ya trae el rol
/// resuelto, así que aquí no se toca la base de datos.
pub async fn admin_only_middleware(
    Extension(user): Extension<AuthenticatedUser>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !user.is_admin {
        return Err(AppError::Forbidden(
            "Accès réservé aux administrateurs".to_string(),
        ));
    }

    Ok(next.run(request).await)
}
