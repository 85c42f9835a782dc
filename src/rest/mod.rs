//! REST
//! provides server implementations for REST

#[macro_use]
pub mod macros;
pub mod api;
pub mod server;
