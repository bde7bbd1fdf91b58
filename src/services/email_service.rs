//! Envío de emails transaccionales (Resend)
//!
//! El formulario de contacto dispara dos correos: notificación al equipo
//! y confirmación al cliente. El envío es fire-and-forget: un fallo se
//! registra en el log pero nunca bloquea la respuesta de éxito al usuario.

use serde::Serialize;

use crate::config::environment::EnvironmentConfig;
use crate::utils::errors::AppError;

const RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Payload del formulario de contacto hacia los templates de email
#[derive(Debug, Clone, Serialize)]
pub struct ContactEmailPayload {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passengers: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dates: Option<String>,
    pub message: String,
}

#[derive(Debug, Serialize)]
struct ResendRequest {
    from: String,
    to: Vec<String>,
    subject: String,
    html: String,
}

pub struct EmailService {
    client: reqwest::Client,
    config: EnvironmentConfig,
}

impl EmailService {
    pub fn new(client: reqwest::Client, config: EnvironmentConfig) -> Self {
        Self { client, config }
    }

    /// Enviar ambos correos del formulario de contacto
    ///
    /// Devuelve Err solo para que el caller lo loguee; el caller nunca
    /// propaga este error al cliente HTTP.
    pub async fn send_contact_emails(&self, payload: &ContactEmailPayload) -> Result<(), AppError> {
        let api_key = self
            .config
            .resend_api_key
            .as_ref()
            .ok_or_else(|| AppError::ExternalApi("RESEND_API_KEY no configurada".to_string()))?;

        let admin_request = ResendRequest {
            from: self.config.email_from.clone(),
            to: vec![self.config.contact_admin_email.clone()],
            subject: format!("[Sunuvan] Nouvelle demande de {}", payload.name),
            html: render_admin_email(payload),
        };
        self.send(api_key, &admin_request).await?;

        let user_request = ResendRequest {
            from: self.config.email_from.clone(),
            to: vec![payload.email.clone()],
            subject: "Sunuvan - Nous avons reçu votre message".to_string(),
            html: render_user_email(payload),
        };
        self.send(api_key, &user_request).await?;

        Ok(())
    }

    async fn send(&self, api_key: &str, request: &ResendRequest) -> Result<(), AppError> {
        let response = self
            .client
            .post(RESEND_API_URL)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Error llamando a Resend: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Resend respondió {}: {}",
                status, body
            )));
        }

        Ok(())
    }
}

fn render_admin_email(payload: &ContactEmailPayload) -> String {
    let mut rows = vec![
        format!("<tr><td><strong>Nom:</strong></td><td>{}</td></tr>", payload.name),
        format!("<tr><td><strong>Email:</strong></td><td>{}</td></tr>", payload.email),
    ];
    if let Some(phone) = &payload.phone {
        rows.push(format!("<tr><td><strong>Téléphone:</strong></td><td>{}</td></tr>", phone));
    }
    if let Some(service) = &payload.service {
        rows.push(format!("<tr><td><strong>Service:</strong></td><td>{}</td></tr>", service));
    }
    if let Some(pickup) = &payload.pickup {
        rows.push(format!("<tr><td><strong>Prise en charge:</strong></td><td>{}</td></tr>", pickup));
    }
    if let Some(dropoff) = &payload.dropoff {
        rows.push(format!("<tr><td><strong>Destination:</strong></td><td>{}</td></tr>", dropoff));
    }
    if let Some(passengers) = payload.passengers {
        rows.push(format!("<tr><td><strong>Passagers:</strong></td><td>{}</td></tr>", passengers));
    }
    if let Some(dates) = &payload.dates {
        rows.push(format!("<tr><td><strong>Dates:</strong></td><td>{}</td></tr>", dates));
    }

    format!(
        "<div style=\"font-family: Arial, sans-serif; max-width: 600px;\">\
         <h1>Sunuvan - Nouvelle demande</h1>\
         <h2>Informations du client</h2>\
         <table>{}</table>\
         <h2>Message</h2>\
         <p style=\"white-space: pre-wrap;\">{}</p>\
         </div>",
        rows.join(""),
        payload.message
    )
}

fn render_user_email(payload: &ContactEmailPayload) -> String {
    format!(
        "<div style=\"font-family: Arial, sans-serif; max-width: 600px;\">\
         <h1>SUNUVAN</h1>\
         <p>Service de transport premium au Sénégal</p>\
         <h2>Merci {}!</h2>\
         <p>Nous avons bien reçu votre demande. Notre équipe vous contactera sous 2 heures.</p>\
         <p>Cordialement,<br><strong>L'équipe Sunuvan</strong></p>\
         </div>",
        payload.name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(resend_api_key: Option<String>) -> EnvironmentConfig {
        EnvironmentConfig {
            environment: "test".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            jwt_secret: "test-secret".to_string(),
            jwt_expiration: 3600,
            cors_origins: vec![],
            resend_api_key,
            email_from: "Sunuvan <onboarding@resend.dev>".to_string(),
            contact_admin_email: "info@sunuvan.com".to_string(),
            upload_dir: "uploads".to_string(),
            public_base_url: "http://localhost:3000".to_string(),
        }
    }

    fn payload() -> ContactEmailPayload {
        ContactEmailPayload {
            name: "Awa Ndiaye".to_string(),
            email: "awa@example.com".to_string(),
            phone: Some("+221771234567".to_string()),
            service: Some("Airport Transfer".to_string()),
            pickup: None,
            dropoff: None,
            passengers: Some(3),
            dates: None,
            message: "Bonjour, je voudrais réserver.".to_string(),
        }
    }

    #[test]
    fn test_admin_email_includes_optional_fields_when_present() {
        let html = render_admin_email(&payload());
        assert!(html.contains("Awa Ndiaye"));
        assert!(html.contains("+221771234567"));
        assert!(html.contains("Airport Transfer"));
        assert!(html.contains("Passagers"));
        assert!(!html.contains("Prise en charge"));
    }

    #[test]
    fn test_user_email_greets_by_name() {
        let html = render_user_email(&payload());
        assert!(html.contains("Merci Awa Ndiaye!"));
    }

    // El controller hace spawn del envío y solo loguea el Err; este es el
    // camino de fallo que nunca debe bloquear la respuesta de éxito.
    #[tokio::test]
    async fn test_missing_api_key_returns_external_api_error() {
        let service = EmailService::new(reqwest::Client::new(), test_config(None));

        let err = service.send_contact_emails(&payload()).await.unwrap_err();
        assert!(matches!(err, AppError::ExternalApi(_)));
        assert!(err.to_string().contains("RESEND_API_KEY"));
    }

    #[test]
    fn test_payload_serialization_skips_none() {
        let mut p = payload();
        p.phone = None;
        let json = serde_json::to_value(&p).unwrap();
        assert!(json.get("phone").is_none());
        assert_eq!(json["passengers"], 3);
    }
}
