// ============================================================================
// ADMIN - Acciones masivas y detección de librerías de tablas/gráficos
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::dom::{
    on_event, query_selector, query_selector_all, set_disabled, set_text_content,
};
use crate::utils::bootstrap_ffi::{chart_library_present, data_table_plugin_present};

const CHECKBOX_SELECTOR: &str = ".bulk-checkbox";
const BUTTON_SELECTOR: &str = ".bulk-action-btn";
const SELECT_ALL_SELECTOR: &str = ".select-all-checkbox";

/// Inicializar las features de administración. Cada sub-rutina es un no-op
/// si la página no es una vista de admin.
pub fn init_admin_features() -> Result<(), JsValue> {
    init_data_tables()?;
    init_charts()?;
    init_bulk_actions()?;
    Ok(())
}

/// Detección de DataTables. Solo verifica presencia: la integración real
/// (paginación, responsive) queda pendiente de que el backend sirva las
/// tablas con la librería incluida.
fn init_data_tables() -> Result<(), JsValue> {
    let tables = query_selector_all(".data-table")?;
    if tables.is_empty() {
        return Ok(());
    }

    if !data_table_plugin_present() {
        log::debug!("📋 [ADMIN] {} tabla(s) sin plugin DataTables cargado", tables.len());
        return Ok(());
    }

    log::info!(
        "📋 [ADMIN] DataTables detectado para {} tabla(s); integración pendiente",
        tables.len()
    );
    Ok(())
}

/// Detección de Chart.js, mismo contrato que init_data_tables
fn init_charts() -> Result<(), JsValue> {
    let canvases = query_selector_all(".chart-canvas")?;
    if canvases.is_empty() {
        return Ok(());
    }

    if !chart_library_present() {
        log::debug!("📊 [ADMIN] {} canvas sin Chart.js cargado", canvases.len());
        return Ok(());
    }

    log::info!(
        "📊 [ADMIN] Chart.js detectado para {} canvas; integración pendiente",
        canvases.len()
    );
    Ok(())
}

/// Cablear el "select all" y los checkboxes de selección masiva al botón de
/// acción. Requiere al menos un checkbox y el botón; todo lo demás es opcional.
pub fn init_bulk_actions() -> Result<(), JsValue> {
    let checkboxes = query_selector_all(CHECKBOX_SELECTOR)?;
    if checkboxes.is_empty() || query_selector(BUTTON_SELECTOR)?.is_none() {
        return Ok(());
    }

    if let Some(select_all) = query_selector(SELECT_ALL_SELECTOR)? {
        if let Ok(select_all) = select_all.dyn_into::<HtmlInputElement>() {
            let select_all_for_change = select_all.clone();
            on_event(&select_all, "change", move |_| {
                // Forzar todos los checkboxes miembros al estado del select-all
                let checked = select_all_for_change.checked();
                if let Ok(members) = query_selector_all(CHECKBOX_SELECTOR) {
                    for member in members {
                        if let Some(member) = member.dyn_ref::<HtmlInputElement>() {
                            member.set_checked(checked);
                        }
                    }
                }
                if let Err(e) = update_bulk_action_button() {
                    log::error!("❌ [ADMIN] Error actualizando botón masivo: {:?}", e);
                }
            })?;
        }
    }

    for checkbox in checkboxes {
        on_event(&checkbox, "change", move |_| {
            if let Err(e) = update_bulk_action_button() {
                log::error!("❌ [ADMIN] Error actualizando botón masivo: {:?}", e);
            }
        })?;
    }

    // Estado inicial coherente con el invariante (botón = f(conteo))
    update_bulk_action_button()?;
    Ok(())
}

/// Recalcular el botón de acción masiva desde el conteo actual de checked
pub fn update_bulk_action_button() -> Result<(), JsValue> {
    let checked = query_selector_all(&format!("{}:checked", CHECKBOX_SELECTOR))?.len();

    if let Some(button) = query_selector(BUTTON_SELECTOR)? {
        let (disabled, label) = bulk_button_state(checked);
        set_disabled(&button, disabled)?;
        set_text_content(&button, &label);
    }
    Ok(())
}

/// Estado del botón como función pura del conteo de ítems marcados
pub fn bulk_button_state(checked_count: usize) -> (bool, String) {
    if checked_count == 0 {
        (true, "Bulk Actions".to_string())
    } else {
        (false, format!("Apply to {} items", checked_count))
    }
}
