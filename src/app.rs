// ============================================================================
// APP - Orquestación de las rutinas de inicialización
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::behaviors;
use crate::services::{CartService, SessionCartService};

/// Capa de comportamiento UI. Corre seis rutinas independientes sobre el
/// documento ya renderizado por el servidor; el orden no importa.
pub struct App {
    cart_service: Rc<dyn CartService>,
}

impl App {
    pub fn new() -> Self {
        Self {
            cart_service: Rc::new(SessionCartService),
        }
    }

    /// Inyectar un CartService alternativo (tests, futura integración real)
    pub fn with_cart_service(cart_service: Rc<dyn CartService>) -> Self {
        Self { cart_service }
    }

    /// Correr todas las rutinas. Una rutina que falla no impide a las demás:
    /// se loguea el error y se sigue con la siguiente.
    pub fn init(&self) {
        run_routine("alerts", behaviors::auto_dismiss_alerts());
        run_routine("tooltips", behaviors::init_tooltips());
        run_routine("uploads", behaviors::init_file_uploads());
        run_routine("forms", behaviors::init_form_guards());
        run_routine("cart", behaviors::init_cart(self.cart_service.clone()));
        run_routine("admin", behaviors::init_admin_features());

        log::info!("✅ [APP] Capa de comportamiento UI inicializada");
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn run_routine(name: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::error!("❌ [APP] Rutina '{}' falló: {:?}", name, e);
    }
}
