// ============================================================================
// LIBRARY STOREFRONT UI - Capa de comportamiento cliente (Rust puro + WASM)
// ============================================================================
// Reemplaza el glue JS del storefront de la biblioteca:
// - Behaviors: alerts, tooltips, uploads, forms, carrito, admin
// - Services: SOLO comunicación API + seam del carrito
// - Views: toasts
// - Utils: formateadores, debounce, loading, FFI de Bootstrap
// ============================================================================

pub mod app;
pub mod behaviors;
pub mod config;
pub mod dom;
pub mod models;
pub mod services;
pub mod utils;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::app::App;
use crate::models::ToastLevel;
use crate::utils::Debouncer;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Panic hook para mejor debugging en consola
    console_error_panic_hook::set_once();

    // Inicializar logging
    if config::CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🚀 Library Storefront UI - Rust puro + WASM");

    let document = match dom::document() {
        Some(document) => document,
        None => return Err(JsValue::from_str("No document")),
    };

    // Los módulos WASM suelen cargarse diferidos; si el documento todavía
    // está parseándose, esperar DOMContentLoaded. Este listener global solo
    // se registra UNA VEZ en el arranque, por lo que es seguro.
    if document.ready_state() == "loading" {
        let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
            bootstrap_app();
        }) as Box<dyn FnMut(web_sys::Event)>);
        document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())?;
        closure.forget();
    } else {
        bootstrap_app();
    }

    Ok(())
}

fn bootstrap_app() {
    let app = App::new();
    app.init();
    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });
}

// ============================================================================
// SUPERFICIE EXPORTADA - equivalente al antiguo window.LibraryApp
// ============================================================================

/// Mostrar un toast; `level` es una palabra clave de severidad
/// ("info", "success", "warning", "danger")
#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: &str, level: Option<String>) -> Result<(), JsValue> {
    let level = ToastLevel::from_keyword(level.as_deref().unwrap_or("info"));
    views::toast::show_toast(message, level)
}

/// Formatear un importe como moneda en-US/USD
#[wasm_bindgen(js_name = formatPrice)]
pub fn format_price(amount: f64) -> String {
    utils::format::format_price(amount)
}

/// Formatear una fecha como "Mmm D, YYYY" en-US
#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(date_string: &str) -> String {
    utils::format::format_date(date_string)
}

/// Petición JSON al backend; resuelve con el body parseado o rechaza con
/// un error genérico de red
#[wasm_bindgen(js_name = makeRequest)]
pub async fn make_request(
    url: String,
    method: Option<String>,
    body: JsValue,
) -> Result<JsValue, JsValue> {
    let body = if body.is_undefined() || body.is_null() {
        None
    } else {
        Some(
            serde_wasm_bindgen::from_value::<serde_json::Value>(body)
                .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))?,
        )
    };

    let value = services::api_client::make_request(&url, method.as_deref().unwrap_or("GET"), body)
        .await
        .map_err(|e| JsValue::from_str(&e))?;

    serde_wasm_bindgen::to_value(&value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Deshabilitar un control y mostrar spinner; retorna el HTML original
#[wasm_bindgen(js_name = showLoading)]
pub fn show_loading(element: &Element) -> Result<String, JsValue> {
    utils::loading::show_loading(element)
}

/// Restaurar un control deshabilitado por showLoading
#[wasm_bindgen(js_name = hideLoading)]
pub fn hide_loading(element: &Element, original_html: &str) -> Result<(), JsValue> {
    utils::loading::hide_loading(element, original_html)
}

/// Handle exportado de debounce para inputs de búsqueda y similares:
/// `new Debounced(fn, waitMs)` y luego `.call(arg)` en cada evento
#[wasm_bindgen]
pub struct Debounced {
    inner: Debouncer<JsValue>,
}

#[wasm_bindgen]
impl Debounced {
    #[wasm_bindgen(constructor)]
    pub fn new(callback: js_sys::Function, wait_ms: u32) -> Debounced {
        let inner = Debouncer::new(wait_ms, move |arg: JsValue| {
            if let Err(e) = callback.call1(&JsValue::NULL, &arg) {
                log::error!("❌ [DEBOUNCE] Callback falló: {:?}", e);
            }
        });
        Debounced { inner }
    }

    pub fn call(&self, arg: JsValue) {
        self.inner.call(arg);
    }
}
