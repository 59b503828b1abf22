// ============================================================================
// FORMS - Guard contra doble submit
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{on_event, query_selector_all, set_disabled, set_inner_html};

/// En el submit de cada form, deshabilitar su control de envío y mostrar
/// "Processing...". Guard de una sola vía: no hay re-habilitación, se asume
/// que sigue una navegación.
pub fn init_form_guards() -> Result<(), JsValue> {
    for form in query_selector_all("form")? {
        let form_element = form.clone();
        on_event(&form, "submit", move |_| {
            let submit = form_element
                .query_selector("button[type=\"submit\"], input[type=\"submit\"]")
                .ok()
                .flatten();
            if let Some(control) = submit {
                if let Err(e) = lock_submit_control(&control) {
                    log::error!("❌ [FORMS] Error bloqueando submit: {:?}", e);
                }
            }
        })?;
    }
    Ok(())
}

fn lock_submit_control(control: &Element) -> Result<(), JsValue> {
    set_disabled(control, true)?;

    // Un <input type="submit"> no tiene innerHTML útil; su etiqueta es value
    if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
        input.set_value("Processing...");
    } else {
        set_inner_html(
            control,
            "<span class=\"loading-spinner me-2\"></span>Processing...",
        );
    }
    Ok(())
}
