//! Almacenamiento de imágenes subidas
//!
//! Guarda el archivo bajo el directorio de uploads con un nombre UUID y
//! devuelve la URL pública. La validación de tipo/tamaño queda en manos
//! del límite de body de axum.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::config::environment::EnvironmentConfig;
use crate::utils::errors::AppError;

pub struct StorageService {
    upload_dir: PathBuf,
    public_base_url: String,
}

impl StorageService {
    pub fn new(config: &EnvironmentConfig) -> Self {
        Self {
            upload_dir: PathBuf::from(&config.upload_dir),
            public_base_url: config.public_base_url.clone(),
        }
    }

    /// Guardar los bytes y devolver (url pública, nombre de archivo)
    pub async fn store_image(
        &self,
        original_name: &str,
        bytes: &[u8],
    ) -> Result<(String, String), AppError> {
        if bytes.is_empty() {
            return Err(AppError::BadRequest("Fichier vide".to_string()));
        }

        let extension = Path::new(original_name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("bin");
        let file_name = format!("{}.{}", Uuid::new_v4(), extension);

        tokio::fs::create_dir_all(&self.upload_dir)
            .await
            .map_err(|e| AppError::Internal(format!("Error creando upload dir: {}", e)))?;

        let path = self.upload_dir.join(&file_name);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| AppError::Internal(format!("Error guardando archivo: {}", e)))?;

        let url = format!("{}/uploads/{}", self.public_base_url.trim_end_matches('/'), file_name);
        Ok((url, file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(dir: &Path) -> StorageService {
        StorageService {
            upload_dir: dir.to_path_buf(),
            public_base_url: "http://localhost:3000/".to_string(),
        }
    }

    #[tokio::test]
    async fn test_store_image_writes_file_and_builds_url() {
        let dir = std::env::temp_dir().join(format!("sunuvan-test-{}", Uuid::new_v4()));
        let svc = service(&dir);

        let (url, file_name) = svc.store_image("van.jpg", b"fake-image-bytes").await.unwrap();
        assert!(url.starts_with("http://localhost:3000/uploads/"));
        assert!(file_name.ends_with(".jpg"));

        let stored = tokio::fs::read(dir.join(&file_name)).await.unwrap();
        assert_eq!(stored, b"fake-image-bytes");

        tokio::fs::remove_dir_all(&dir).await.ok();
    }

    #[tokio::test]
    async fn test_store_image_rejects_empty_file() {
        let dir = std::env::temp_dir();
        let svc = service(&dir);
        assert!(svc.store_image("x.png", b"").await.is_err());
    }
}
