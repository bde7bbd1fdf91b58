//! Controller de autenticación
//!
//! Registro y login con credenciales locales (bcrypt) y emisión de JWT.
//! El snapshot de sesión que se devuelve siempre lleva `is_admin` ya
//! resuelto contra user_roles; el cliente nunca recibe una identidad
//! con rol pendiente.

use sqlx::PgPool;
use validator::Validate;

use crate::dto::auth_dto::{AuthResponse, LoginRequest, RegisterRequest, SessionUser};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::user::{AppRole, User};
use crate::repositories::profile_repository::ProfileRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::{conflict_error, AppError};
use crate::utils::jwt::{self, JwtConfig};

pub struct AuthController {
    users: UserRepository,
    profiles: ProfileRepository,
    jwt_config: JwtConfig,
}

impl AuthController {
    pub fn new(pool: PgPool, jwt_config: JwtConfig) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            profiles: ProfileRepository::new(pool),
            jwt_config,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, AppError> {
        request.validate()?;

        if self.users.email_exists(&request.email).await? {
            return Err(conflict_error("Compte", "email", &request.email));
        }

        let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error generando hash: {}", e)))?;

        let user = self.users.create(&request.email, &password_hash).await?;
        let profile = self
            .profiles
            .create(user.id, &request.first_name, &request.last_name, &request.phone)
            .await?;
        self.users.grant_role(user.id, AppRole::User).await?;

        let token = jwt::generate_token(user.id, &user.email, &self.jwt_config)?;

        Ok(AuthResponse {
            access_token: token,
            token_type: "Bearer".to_string(),
            expires_in: self.jwt_config.expiration,
            user: SessionUser {
                id: user.id,
                email: user.email,
                // recién registrado: nunca admin
                is_admin: false,
                first_name: profile.first_name,
                last_name: profile.last_name,
                phone: profile.phone,
            },
        })
    }

    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, AppError> {
        request.validate()?;

        // Mensaje idéntico exista o no el email
        let user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Identifiants invalides".to_string()))?;

        let valid = bcrypt::verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verificando hash: {}", e)))?;
        if !valid {
            return Err(AppError::Unauthorized("Identifiants invalides".to_string()));
        }

        let token = jwt::generate_token(user.id, &user.email, &self.jwt_config)?;
        let session_user = self.build_session_user(user).await?;

        Ok(AuthResponse {
            access_token: token,
            token_type: "Bearer".to_string(),
            expires_in: self.jwt_config.expiration,
            user: session_user,
        })
    }

    /// Sesión actual a partir de la identidad ya resuelta por el middleware
    pub async fn me(&self, auth: &AuthenticatedUser) -> Result<SessionUser, AppError> {
        let profile = self.profiles.find_by_user(auth.user_id).await?;

        Ok(SessionUser {
            id: auth.user_id,
            email: auth.email.clone(),
            is_admin: auth.is_admin,
            first_name: profile.as_ref().and_then(|p| p.first_name.clone()),
            last_name: profile.as_ref().and_then(|p| p.last_name.clone()),
            phone: profile.and_then(|p| p.phone),
        })
    }

    async fn build_session_user(&self, user: User) -> Result<SessionUser, AppError> {
        // Rol primero, snapshot después
        let is_admin = self.users.has_role(user.id, AppRole::Admin).await?;
        let profile = self.profiles.find_by_user(user.id).await?;

        Ok(SessionUser {
            id: user.id,
            email: user.email,
            is_admin,
            first_name: profile.as_ref().and_then(|p| p.first_name.clone()),
            last_name: profile.as_ref().and_then(|p| p.last_name.clone()),
            phone: profile.and_then(|p| p.phone),
        })
    }
}
