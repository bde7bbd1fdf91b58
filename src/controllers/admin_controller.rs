//! Controller del back-office
//!
//! Dashboard, gestión de roles, mensajes de contacto, settings y
//! subida de imágenes. Todas las rutas que llegan aquí ya pasaron por
//! el middleware de admin.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::admin_dto::{
    DashboardSummary, RoleGrantRequest, UploadResponse, UpsertSettingRequest, UserSummary,
};
use crate::dto::contact_dto::ContactMessageResponse;
use crate::models::setting::Setting;
use crate::models::user::AppRole;
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::contact_repository::ContactRepository;
use crate::repositories::profile_repository::ProfileRepository;
use crate::repositories::settings_repository::SettingsRepository;
use crate::repositories::user_repository::UserRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::storage_service::StorageService;
use crate::state::AppState;
use crate::utils::currency;
use crate::utils::errors::AppError;

pub struct AdminController {
    bookings: BookingRepository,
    vehicles: VehicleRepository,
    profiles: ProfileRepository,
    contacts: ContactRepository,
    users: UserRepository,
    settings: SettingsRepository,
    state: AppState,
}

impl AdminController {
    pub fn new(state: AppState) -> Self {
        let pool: PgPool = state.pool.clone();
        Self {
            bookings: BookingRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            profiles: ProfileRepository::new(pool.clone()),
            contacts: ContactRepository::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            settings: SettingsRepository::new(pool),
            state,
        }
    }

    pub async fn dashboard(&self) -> Result<DashboardSummary, AppError> {
        let (total_bookings, pending_bookings, monthly_revenue) =
            self.bookings.dashboard_counts().await?;
        let active_vehicles = self.vehicles.count_active().await?;
        let new_clients_month = self.profiles.count_new_this_month().await?;
        let unread_messages = self.contacts.count_unread().await?;

        Ok(DashboardSummary {
            total_bookings,
            pending_bookings,
            active_vehicles,
            monthly_revenue,
            monthly_revenue_display: currency::format_fcfa(monthly_revenue),
            new_clients_month,
            unread_messages,
        })
    }

    pub async fn list_users(&self) -> Result<Vec<UserSummary>, AppError> {
        let rows = self.users.list_with_profiles().await?;

        Ok(rows
            .into_iter()
            .map(|row| UserSummary {
                id: row.id,
                email: row.email,
                first_name: row.first_name,
                last_name: row.last_name,
                phone: row.phone,
                is_admin: row.is_admin,
                created_at: row.created_at.to_rfc3339(),
            })
            .collect())
    }

    pub async fn grant_role(&self, request: RoleGrantRequest) -> Result<(), AppError> {
        let role = self.parse_role(&request.role)?;

        if self.users.find_by_id(request.user_id).await?.is_none() {
            return Err(AppError::NotFound("Utilisateur non trouvé".to_string()));
        }

        self.users.grant_role(request.user_id, role).await
    }

    pub async fn revoke_role(&self, request: RoleGrantRequest) -> Result<(), AppError> {
        let role = self.parse_role(&request.role)?;
        self.users.revoke_role(request.user_id, role).await
    }

    fn parse_role(&self, value: &str) -> Result<AppRole, AppError> {
        AppRole::parse(value)
            .ok_or_else(|| AppError::BadRequest(format!("Rôle invalide: {}", value)))
    }

    pub async fn list_messages(&self) -> Result<Vec<ContactMessageResponse>, AppError> {
        let messages = self.contacts.list().await?;
        Ok(messages.into_iter().map(ContactMessageResponse::from).collect())
    }

    pub async fn mark_message_read(&self, id: Uuid) -> Result<ContactMessageResponse, AppError> {
        let message = self
            .contacts
            .mark_read(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Message non trouvé".to_string()))?;

        Ok(ContactMessageResponse::from(message))
    }

    pub async fn delete_message(&self, id: Uuid) -> Result<(), AppError> {
        if !self.contacts.delete(id).await? {
            return Err(AppError::NotFound("Message non trouvé".to_string()));
        }
        Ok(())
    }

    pub async fn list_settings(&self) -> Result<Vec<Setting>, AppError> {
        self.settings.list().await
    }

    pub async fn get_setting(&self, key: &str) -> Result<Setting, AppError> {
        self.settings
            .get(key)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Paramètre '{}' non trouvé", key)))
    }

    pub async fn upsert_setting(&self, request: UpsertSettingRequest) -> Result<Setting, AppError> {
        request.validate()?;
        self.settings.upsert(&request.key, &request.value).await
    }

    pub async fn upload_image(
        &self,
        original_name: &str,
        bytes: &[u8],
    ) -> Result<UploadResponse, AppError> {
        let storage = StorageService::new(&self.state.config);
        let (url, file_name) = storage.store_image(original_name, bytes).await?;
        Ok(UploadResponse { url, file_name })
    }
}
