// ============================================================================
// BOOTSTRAP FFI - Foreign Function Interface para el toolkit de la página
// ============================================================================
// Solo wrappers para los controladores JS de Bootstrap - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    /// bootstrap.Alert - cierre con fade + remoción del DOM
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Alert;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, js_class = "Alert")]
    pub fn new(element: &Element) -> Alert;

    #[wasm_bindgen(method)]
    pub fn close(this: &Alert);

    /// bootstrap.Tooltip - se activa al construirlo, no requiere más llamadas
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Tooltip;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, js_class = "Tooltip")]
    pub fn new(element: &Element) -> Tooltip;

    /// bootstrap.Toast - emite "hidden.bs.toast" al terminar de ocultarse
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Toast;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, js_class = "Toast")]
    pub fn new(element: &Element) -> Toast;

    #[wasm_bindgen(method)]
    pub fn show(this: &Toast);
}

fn global_defined(name: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    match js_sys::Reflect::get(&window, &JsValue::from_str(name)) {
        Ok(value) => !value.is_undefined() && !value.is_null(),
        Err(_) => false,
    }
}

/// Verificar si Bootstrap está cargado en la página.
/// Los comportamientos degradan a manipulación DOM directa cuando no lo está.
pub fn bootstrap_present() -> bool {
    global_defined("bootstrap")
}

/// Verificar si Chart.js está cargado (global `Chart`)
pub fn chart_library_present() -> bool {
    global_defined("Chart")
}

/// Verificar si el plugin DataTables de jQuery está cargado (`$.fn.DataTable`)
pub fn data_table_plugin_present() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let jquery = match js_sys::Reflect::get(&window, &JsValue::from_str("$")) {
        Ok(value) if !value.is_undefined() => value,
        _ => return false,
    };
    let plugins = match js_sys::Reflect::get(&jquery, &JsValue::from_str("fn")) {
        Ok(value) if !value.is_undefined() => value,
        _ => return false,
    };
    matches!(
        js_sys::Reflect::get(&plugins, &JsValue::from_str("DataTable")),
        Ok(value) if !value.is_undefined()
    )
}
