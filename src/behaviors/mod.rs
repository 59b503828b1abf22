// ============================================================================
// BEHAVIORS - Rutinas de inicialización de la capa UI
// ============================================================================
// Seis rutinas independientes; cada una es idempotente y no hace nada si la
// página no tiene los elementos que le corresponden.
// ============================================================================

pub mod admin;
pub mod alerts;
pub mod cart;
pub mod forms;
pub mod tooltips;
pub mod uploads;

pub use admin::init_admin_features;
pub use alerts::auto_dismiss_alerts;
pub use cart::init_cart;
pub use forms::init_form_guards;
pub use tooltips::init_tooltips;
pub use uploads::init_file_uploads;
