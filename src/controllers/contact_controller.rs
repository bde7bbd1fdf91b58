//! Controller del formulario de contacto
//!
//! El mensaje se persiste siempre; los emails (Resend) se disparan en
//! una task aparte y un fallo solo se loguea. El cliente recibe éxito
//! en cuanto el lead queda guardado.

use validator::Validate;

use crate::dto::contact_dto::{ContactMessageResponse, CreateContactMessageRequest};
use crate::repositories::contact_repository::ContactRepository;
use crate::services::email_service::{ContactEmailPayload, EmailService};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct ContactController {
    repository: ContactRepository,
    state: AppState,
}

impl ContactController {
    pub fn new(state: AppState) -> Self {
        Self {
            repository: ContactRepository::new(state.pool.clone()),
            state,
        }
    }

    pub async fn create(
        &self,
        request: CreateContactMessageRequest,
    ) -> Result<ContactMessageResponse, AppError> {
        request.validate()?;

        let message = self.repository.create(&request).await?;

        let payload = ContactEmailPayload {
            name: message.name.clone(),
            email: message.email.clone(),
            phone: message.phone.clone(),
            service: message.service_interest.clone(),
            pickup: message.pickup_location.clone(),
            dropoff: message.dropoff_location.clone(),
            passengers: message.passengers,
            dates: message.travel_dates.clone(),
            message: message.message.clone(),
        };

        let email_service =
            EmailService::new(self.state.http_client.clone(), self.state.config.clone());
        tokio::spawn(async move {
            if let Err(e) = email_service.send_contact_emails(&payload).await {
                tracing::warn!("No se pudieron enviar los emails de contacto: {}", e);
            }
        });

        Ok(ContactMessageResponse::from(message))
    }
}
