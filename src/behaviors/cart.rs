// ============================================================================
// CART - Badge del carrito y controles de cantidad
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::dom::{on_event, query_selector, query_selector_all, set_display, set_text_content};
use crate::models::PendingCartUpdate;
use crate::services::CartService;

/// Inicializar el widget del carrito: refrescar el badge del navbar y
/// cablear los inputs de cantidad al CartService.
pub fn init_cart(service: Rc<dyn CartService>) -> Result<(), JsValue> {
    update_cart_count(service.as_ref())?;

    for element in query_selector_all(".cart-quantity")? {
        let input = match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => input,
            Err(_) => continue,
        };

        let service = service.clone();
        let input_for_change = input.clone();
        on_event(&input, "change", move |_| {
            let item_id = input_for_change
                .get_attribute("data-item-id")
                .unwrap_or_default();
            let quantity = input_for_change.value().parse::<i64>().unwrap_or(0);
            service.update_item(PendingCartUpdate { item_id, quantity });
        })?;
    }

    Ok(())
}

/// Refrescar el badge `.cart-count`: texto = conteo, oculto cuando es 0
pub fn update_cart_count(service: &dyn CartService) -> Result<(), JsValue> {
    let badge = match query_selector(".cart-count")? {
        Some(badge) => badge,
        None => return Ok(()),
    };

    let count = service.item_count();
    set_text_content(&badge, &count.to_string());
    set_display(&badge, if count > 0 { "inline" } else { "none" })?;
    Ok(())
}
