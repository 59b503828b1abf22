// ============================================================================
// MODELS - Estructuras compartidas de la capa UI
// ============================================================================

use serde::{Deserialize, Serialize};

/// Severidad de un toast. Mapea a las clases `text-bg-*` de Bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Danger,
}

impl ToastLevel {
    /// Clase CSS de fondo correspondiente al nivel
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastLevel::Info => "text-bg-info",
            ToastLevel::Success => "text-bg-success",
            ToastLevel::Warning => "text-bg-warning",
            ToastLevel::Danger => "text-bg-danger",
        }
    }

    /// Parsear un nivel desde la palabra clave que llega por la superficie
    /// exportada ("info", "success", ...). Desconocido = Info.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "success" => ToastLevel::Success,
            "warning" => ToastLevel::Warning,
            "danger" | "error" => ToastLevel::Danger,
            _ => ToastLevel::Info,
        }
    }
}

/// Actualización de carrito pendiente de enviar al backend.
/// El endpoint todavía no existe; ver `services::cart_service`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingCartUpdate {
    pub item_id: String,
    pub quantity: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_level_keywords() {
        assert_eq!(ToastLevel::from_keyword("success"), ToastLevel::Success);
        assert_eq!(ToastLevel::from_keyword("danger"), ToastLevel::Danger);
        assert_eq!(ToastLevel::from_keyword("error"), ToastLevel::Danger);
        assert_eq!(ToastLevel::from_keyword("info"), ToastLevel::Info);
        assert_eq!(ToastLevel::from_keyword("whatever"), ToastLevel::Info);
    }

    #[test]
    fn toast_level_css_classes() {
        assert_eq!(ToastLevel::Warning.css_class(), "text-bg-warning");
        assert_eq!(ToastLevel::Info.css_class(), "text-bg-info");
    }
}
