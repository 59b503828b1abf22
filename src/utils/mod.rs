// Utils compartidos

pub mod bootstrap_ffi;
pub mod debounce;
pub mod format;
pub mod loading;

pub use bootstrap_ffi::*;
pub use debounce::*;
pub use format::*;
pub use loading::*;
