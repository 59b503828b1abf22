// ============================================================================
// ALERTS - Auto-cierre de alerts no permanentes
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;

use crate::config::CONFIG;
use crate::dom::{has_class, query_selector_all};
use crate::utils::bootstrap_ffi;

/// Programar el cierre de cada `.alert` sin `.alert-permanent` a los
/// CONFIG.alert_dismiss_ms. Sin camino de cancelación: si otro código ya
/// quitó el alert, el callback diferido no hace nada.
pub fn auto_dismiss_alerts() -> Result<(), JsValue> {
    let alerts = query_selector_all(".alert")?;
    if alerts.is_empty() {
        return Ok(());
    }

    let mut scheduled = 0;
    for alert in alerts {
        if has_class(&alert, "alert-permanent") {
            continue;
        }

        let element = alert.clone();
        Timeout::new(CONFIG.alert_dismiss_ms, move || {
            if !element.is_connected() {
                return;
            }
            if bootstrap_ffi::bootstrap_present() {
                // Cierre con fade + remoción a cargo del toolkit
                bootstrap_ffi::Alert::new(&element).close();
            } else {
                element.remove();
            }
        })
        .forget();
        scheduled += 1;
    }

    log::info!(
        "⏳ [ALERTS] {} alert(s) programados para cierre en {}ms",
        scheduled,
        CONFIG.alert_dismiss_ms
    );
    Ok(())
}
