//! Services module
//!
//! Pipeline de listado: resolver el filtro desde los query params,
//! filtrar el catálogo y ordenarlo por precio. Son funciones puras.

pub mod catalog_service;
pub mod filter_resolver;

pub use catalog_service::*;
pub use filter_resolver::*;
