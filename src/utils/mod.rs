//! Utilidades del sistema
//!
//! Este módulo contiene el manejo de errores, la normalización de texto
//! y el formato de moneda.

pub mod currency;
pub mod errors;
pub mod text;
