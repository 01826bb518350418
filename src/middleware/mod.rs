//! Middleware del sistema
//!
//! Este módulo contiene el enmascarado de fallas: cualquier pánico durante
//! un request se registra y se responde con la página genérica de error.

pub mod error_masking;

pub use error_masking::*;
