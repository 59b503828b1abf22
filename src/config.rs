use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// URL base del backend. Vacía = mismo origen (la app se sirve
    /// renderizada desde el servidor, los endpoints son relativos).
    pub backend_url: String,
    pub environment: String,
    pub enable_logging: bool,
    /// Retraso antes de cerrar alerts no permanentes (ms)
    pub alert_dismiss_ms: u32,
    /// z-index del contenedor de toasts
    pub toast_z_index: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            environment: "development".to_string(),
            enable_logging: true,
            alert_dismiss_ms: 5000,
            toast_z_index: 9999,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            backend_url: option_env!("BACKEND_URL").unwrap_or("").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development")
                .to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
            alert_dismiss_ms: option_env!("ALERT_DISMISS_MS")
                .unwrap_or("5000")
                .parse()
                .unwrap_or(5000),
            toast_z_index: option_env!("TOAST_Z_INDEX")
                .unwrap_or("9999")
                .parse()
                .unwrap_or(9999),
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
