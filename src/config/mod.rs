//! Configuración del proyecto
//!
//! Este módulo contiene las variables de entorno y las constantes
//! de filtrado que se inicializan una sola vez al arrancar.

pub mod environment;
pub mod filters;

pub use environment::*;
