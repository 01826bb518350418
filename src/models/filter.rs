//! Modelo de filtros
//!
//! El filtro se construye por request a partir de los query params y se
//! descarta después de renderizar.

use serde::Serialize;

use crate::config::filters::{DEFAULT_BRAND_MODEL, SORT_PRICE_ASC, SORT_PRICE_DESC};

/// Orden del listado por precio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "precio-menor-mayor")]
    PriceAscending,
    #[serde(rename = "precio-mayor-menor")]
    PriceDescending,
}

impl SortOrder {
    /// Token usado en el query param `ordenar_por`
    pub fn as_token(&self) -> &'static str {
        match self {
            SortOrder::PriceAscending => SORT_PRICE_ASC,
            SortOrder::PriceDescending => SORT_PRICE_DESC,
        }
    }

    /// Sólo acepta el token exacto
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            SORT_PRICE_ASC => Some(SortOrder::PriceAscending),
            SORT_PRICE_DESC => Some(SortOrder::PriceDescending),
            _ => None,
        }
    }
}

/// Filtro resuelto y validado
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleFilters {
    pub brand_model: String,
    pub max_price: Option<u64>,
    pub sort_order: SortOrder,
}

impl Default for VehicleFilters {
    fn default() -> Self {
        Self {
            brand_model: DEFAULT_BRAND_MODEL.to_string(),
            max_price: None,
            sort_order: SortOrder::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::filters::SORT_TOKENS;

    #[test]
    fn test_sort_order_tokens() {
        assert_eq!(SortOrder::from_token("precio-menor-mayor"), Some(SortOrder::PriceAscending));
        assert_eq!(SortOrder::from_token("precio-mayor-menor"), Some(SortOrder::PriceDescending));
        assert_eq!(SortOrder::from_token("PRECIO-MAYOR-MENOR"), None);
        assert_eq!(SortOrder::from_token(" precio-mayor-menor"), None);
        assert_eq!(SortOrder::PriceDescending.as_token(), "precio-mayor-menor");

        for token in SORT_TOKENS {
            assert_eq!(SortOrder::from_token(token).map(|o| o.as_token()), Some(token));
        }
    }

    #[test]
    fn test_default_filters() {
        let filters = VehicleFilters::default();
        assert_eq!(filters.brand_model, "");
        assert_eq!(filters.max_price, None);
        assert_eq!(filters.sort_order, SortOrder::PriceAscending);
    }
}
