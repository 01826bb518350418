//! Modelo de Vehicle
//!
//! Registro inmutable del catálogo: marca, modelo y precio en pesos enteros.

use serde::Serialize;

/// Vehículo del catálogo
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vehicle {
    pub brand: String,
    pub model: String,
    pub price: u64,
}

impl Vehicle {
    pub fn new(brand: impl Into<String>, model: impl Into<String>, price: u64) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            price,
        }
    }
}
