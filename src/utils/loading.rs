// ============================================================================
// LOADING - Estado de carga de un control (par show/hide)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{set_disabled, set_inner_html};

/// Deshabilitar un control y mostrar spinner + "Loading...".
/// Retorna el HTML original; el caller debe conservarlo para `hide_loading`.
pub fn show_loading(element: &Element) -> Result<String, JsValue> {
    let original_html = element.inner_html();
    set_disabled(element, true)?;
    set_inner_html(
        element,
        "<span class=\"loading-spinner me-2\"></span>Loading...",
    );
    Ok(original_html)
}

/// Re-habilitar el control y restaurar el HTML guardado por `show_loading`
pub fn hide_loading(element: &Element, original_html: &str) -> Result<(), JsValue> {
    set_disabled(element, false)?;
    set_inner_html(element, original_html);
    Ok(())
}
