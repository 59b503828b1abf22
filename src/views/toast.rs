// ============================================================================
// TOAST VIEW - Notificaciones transitorias
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::config::CONFIG;
use crate::dom::{append_child, get_element_by_id, on_event, ElementBuilder};
use crate::models::ToastLevel;
use crate::utils::bootstrap_ffi;

pub const TOAST_CONTAINER_ID: &str = "toast-container";

/// Mostrar un toast. Crea el contenedor compartido si aún no existe,
/// lo muestra vía bootstrap.Toast y lo remueve del DOM cuando el toolkit
/// avisa que terminó de ocultarse ("hidden.bs.toast").
pub fn show_toast(message: &str, level: ToastLevel) -> Result<(), JsValue> {
    let container = get_or_create_container()?;
    let toast = render_toast(message, level)?;
    append_child(&container, &toast)?;

    if bootstrap_ffi::bootstrap_present() {
        // Auto-remoción al completar la transición de ocultado
        let element = toast.clone();
        on_event(&toast, "hidden.bs.toast", move |_| {
            element.remove();
        })?;

        bootstrap_ffi::Toast::new(&toast).show();
    } else {
        // Sin Bootstrap no hay transición; dejamos el toast visible y el
        // usuario lo cierra con el botón (listener nativo de click)
        toast.class_list().add_1("show")?;
        let element = toast.clone();
        if let Ok(Some(close)) = toast.query_selector(".btn-close") {
            crate::dom::on_click(&close, move |_| {
                element.remove();
            })?;
        }
    }

    Ok(())
}

fn render_toast(message: &str, level: ToastLevel) -> Result<Element, JsValue> {
    let body = ElementBuilder::new("div")?
        .class("toast-body")
        .text(message)
        .build();

    let close_button = ElementBuilder::new("button")?
        .class("btn-close btn-close-white me-2 m-auto")
        .attr("type", "button")?
        .attr("data-bs-dismiss", "toast")?
        .build();

    let flex = ElementBuilder::new("div")?
        .class("d-flex")
        .child(body)?
        .child(close_button)?
        .build();

    let toast = ElementBuilder::new("div")?
        .class(&format!(
            "toast align-items-center {} border-0",
            level.css_class()
        ))
        .attr("role", "alert")?
        .child(flex)?
        .build();

    Ok(toast)
}

/// Contenedor compartido de toasts, creado perezosamente en el primer uso
fn get_or_create_container() -> Result<Element, JsValue> {
    if let Some(existing) = get_element_by_id(TOAST_CONTAINER_ID) {
        return Ok(existing);
    }

    let container = ElementBuilder::new("div")?
        .class("toast-container position-fixed top-0 end-0 p-3")
        .id(TOAST_CONTAINER_ID)?
        .build();

    if let Some(html) = container.dyn_ref::<HtmlElement>() {
        html.style()
            .set_property("z-index", &CONFIG.toast_z_index.to_string())?;
    }

    let body = crate::dom::document()
        .and_then(|doc| doc.body())
        .ok_or_else(|| JsValue::from_str("No document body"))?;
    body.append_child(&container)?;

    Ok(container)
}
