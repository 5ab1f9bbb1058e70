pub mod cart_sessions;
pub mod order_service;
