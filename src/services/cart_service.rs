// ============================================================================
// CART SERVICE - Integración del carrito (seam explícito)
// ============================================================================
// El carrito vive en la sesión del servidor y todavía no expone endpoints
// AJAX. El trait deja el punto de integración listo: cuando exista el
// endpoint, un cliente real reemplaza a SessionCartService sin tocar la UI.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;

use crate::models::PendingCartUpdate;

pub trait CartService {
    /// Cantidad total de ítems para el badge del navbar
    fn item_count(&self) -> u32;

    /// Registrar un cambio de cantidad para un ítem
    fn update_item(&self, update: PendingCartUpdate);
}

/// Implementación de producción: stub consciente de su incompletitud.
/// El conteo real está en la sesión del servidor; devolvemos 0 y dejamos
/// el update registrado en consola como diagnóstico.
pub struct SessionCartService;

impl CartService for SessionCartService {
    fn item_count(&self) -> u32 {
        // El carrito es session-based; sin endpoint de conteo devolvemos 0
        0
    }

    fn update_item(&self, update: PendingCartUpdate) {
        log::info!(
            "🛒 [CART] Update pendiente (sin backend): item {} -> cantidad {}",
            update.item_id,
            update.quantity
        );
    }
}

/// Fake en memoria para tests: acumula los updates y deriva el conteo
/// de las cantidades registradas.
#[derive(Default)]
pub struct InMemoryCartService {
    items: RefCell<HashMap<String, i64>>,
}

impl InMemoryCartService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: &[(&str, i64)]) -> Self {
        let service = Self::new();
        for (item_id, quantity) in items {
            service
                .items
                .borrow_mut()
                .insert((*item_id).to_string(), *quantity);
        }
        service
    }

    pub fn quantity_of(&self, item_id: &str) -> Option<i64> {
        self.items.borrow().get(item_id).copied()
    }
}

impl CartService for InMemoryCartService {
    fn item_count(&self) -> u32 {
        self.items
            .borrow()
            .values()
            .filter(|quantity| **quantity > 0)
            .map(|quantity| u32::try_from(*quantity).unwrap_or(u32::MAX))
            .fold(0, u32::saturating_add)
    }

    fn update_item(&self, update: PendingCartUpdate) {
        self.items
            .borrow_mut()
            .insert(update.item_id, update.quantity);
    }
}
