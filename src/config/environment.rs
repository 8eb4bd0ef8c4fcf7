//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. Todas las variables son
//! opcionales; un valor presente pero inválido es un error de arranque.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub data_file: PathBuf,
    pub cors_origins: Vec<String>,
    pub booking_cooldown_secs: u64,
    pub request_timeout_secs: u64,
    pub seed_demo_data: bool,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            data_file: PathBuf::from("data/demoData.json"),
            cors_origins: Vec::new(),
            booking_cooldown_secs: 300, // 5 minutos
            request_timeout_secs: 30,
            seed_demo_data: true,
        }
    }
}

impl EnvironmentConfig {
    /// Construir la configuración desde el entorno, con los valores por
    /// defecto de `Default` para lo que no esté definido
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            port: parse_var("PORT")?.unwrap_or(defaults.port),
            host: env::var("HOST").unwrap_or(defaults.host),
            data_file: env::var("FLEET_DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_file),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.cors_origins),
            booking_cooldown_secs: parse_var("BOOKING_COOLDOWN_SECS")?
                .unwrap_or(defaults.booking_cooldown_secs),
            request_timeout_secs: parse_var("REQUEST_TIMEOUT_SECS")?
                .unwrap_or(defaults.request_timeout_secs),
            seed_demo_data: parse_var("SEED_DEMO_DATA")?.unwrap_or(defaults.seed_demo_data),
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{} must be a valid value, got '{}'", name, raw)),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EnvironmentConfig::default();
        assert!(config.is_development());
        assert_eq!(config.server_url(), "0.0.0.0:3000");
        assert_eq!(config.booking_cooldown_secs, 300);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_parse_var_rejects_garbage() {
        env::set_var("FLEETPRO_TEST_PORT_GARBAGE", "not-a-port");
        assert!(parse_var::<u16>("FLEETPRO_TEST_PORT_GARBAGE").is_err());
        env::remove_var("FLEETPRO_TEST_PORT_GARBAGE");
        assert!(parse_var::<u16>("FLEETPRO_TEST_PORT_GARBAGE").unwrap().is_none());
    }
}
