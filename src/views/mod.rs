//! Vistas HTML
//!
//! Renderizado de la página de listado y de las páginas de error.

pub mod error_page;
pub mod listing_page;
