//! Modelos del sistema
//!
//! Este módulo contiene el vehículo del catálogo y el filtro resuelto
//! a partir de los query params.

pub mod filter;
pub mod vehicle;

pub use filter::*;
pub use vehicle::*;
