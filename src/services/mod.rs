pub mod api_client;
pub mod cart_service;

pub use api_client::*;
pub use cart_service::*;
