// ============================================================================
// TOOLTIPS - Activación de tooltips de Bootstrap
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::dom::query_selector_all;
use crate::utils::bootstrap_ffi;

/// Adjuntar un controlador de tooltip a cada trigger presente al inicializar.
/// Limitación documentada: no hay re-escaneo; controles agregados después
/// no reciben tooltip.
pub fn init_tooltips() -> Result<(), JsValue> {
    let triggers = query_selector_all("[data-bs-toggle=\"tooltip\"]")?;
    if triggers.is_empty() {
        return Ok(());
    }

    if !bootstrap_ffi::bootstrap_present() {
        log::warn!("⚠️ [TOOLTIPS] Bootstrap no está cargado; tooltips desactivados");
        return Ok(());
    }

    let count = triggers.len();
    for trigger in triggers {
        // El controlador queda registrado dentro de Bootstrap; no hay que
        // retener el handle del lado Rust
        let _ = bootstrap_ffi::Tooltip::new(&trigger);
    }

    log::info!("💬 [TOOLTIPS] {} tooltip(s) activados", count);
    Ok(())
}
