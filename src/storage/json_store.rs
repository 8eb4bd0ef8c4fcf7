//! Persistencia en fichero JSON
//!
//! `FleetStore` es el colaborador de persistencia: leer el documento completo
//! y escribirlo completo. No ofrece transacciones; la serialización de las
//! escrituras la hace `FleetRepository`.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::models::FleetData;
use crate::utils::errors::AppResult;

#[async_trait]
pub trait FleetStore: Send + Sync {
    async fn read(&self) -> AppResult<FleetData>;
    async fn write(&self, data: &FleetData) -> AppResult<()>;
}

/// Almacén respaldado por un único fichero (`demoData.json`)
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Crear el fichero con `initial` si todavía no existe.
    /// Devuelve `true` si se ha escrito.
    pub async fn ensure_initialized(&self, initial: &FleetData) -> AppResult<bool> {
        if fs::try_exists(&self.path).await? {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        self.write(initial).await?;
        log::info!("📁 Fichero de datos creado en {}", self.path.display());
        Ok(true)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl FleetStore for JsonFileStore {
    async fn read(&self) -> AppResult<FleetData> {
        let raw = fs::read(&self.path).await.map_err(|e| {
            log::error!("❌ No se pudo leer {}: {}", self.path.display(), e);
            e
        })?;
        let data = serde_json::from_slice(&raw)?;
        Ok(data)
    }

    async fn write(&self, data: &FleetData) -> AppResult<()> {
        let body = serde_json::to_vec_pretty(data)?;
        let temp = self.temp_path();

        // Escribir al lado y renombrar: el fichero nunca queda a medias
        fs::write(&temp, &body).await?;
        fs::rename(&temp, &self.path).await.map_err(|e| {
            log::error!("❌ No se pudo reemplazar {}: {}", self.path.display(), e);
            e
        })?;

        log::debug!("💾 {} bytes escritos en {}", body.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::seed::demo_fleet_data;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("fleetpro-store-{}", uuid::Uuid::new_v4()))
            .join(name)
    }

    #[tokio::test]
    async fn test_write_then_read_returns_same_document() {
        let store = JsonFileStore::new(temp_file("demoData.json"));
        let data = demo_fleet_data();

        assert!(store.ensure_initialized(&data).await.unwrap());
        let loaded = store.read().await.unwrap();

        assert_eq!(loaded.users.len(), data.users.len());
        assert_eq!(loaded.cars[0].reg_no, data.cars[0].reg_no);
        assert!(!fs::try_exists(store.temp_path()).await.unwrap());
    }

    #[tokio::test]
    async fn test_ensure_initialized_keeps_existing_file() {
        let store = JsonFileStore::new(temp_file("demoData.json"));
        store.ensure_initialized(&FleetData::default()).await.unwrap();

        let written = store.ensure_initialized(&demo_fleet_data()).await.unwrap();

        assert!(!written);
        assert!(store.read().await.unwrap().users.is_empty());
    }

    #[tokio::test]
    async fn test_read_missing_file_is_storage_error() {
        let store = JsonFileStore::new(temp_file("missing.json"));
        let err = store.read().await.unwrap_err();
        assert_eq!(err.code(), "INTERNAL_ERROR");
    }
}
