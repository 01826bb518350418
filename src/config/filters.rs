//! Constantes de filtrado
//!
//! Nombres de los query params, tokens de orden y límites aceptados.

/// Precio máximo aceptado en `precio_maximo`
pub const MAX_PRICE: u64 = 1_000_000_000_000;

pub const PARAM_BRAND_MODEL: &str = "marca_modelo";
pub const PARAM_MAX_PRICE: &str = "precio_maximo";
pub const PARAM_SORT: &str = "ordenar_por";

pub const SORT_PRICE_ASC: &str = "precio-menor-mayor";
pub const SORT_PRICE_DESC: &str = "precio-mayor-menor";

/// Tokens de orden reconocidos
pub const SORT_TOKENS: [&str; 2] = [SORT_PRICE_ASC, SORT_PRICE_DESC];

pub const DEFAULT_BRAND_MODEL: &str = "";
