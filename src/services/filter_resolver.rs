//! Resolución de filtros
//!
//! Convierte los query params crudos en un `VehicleFilters` validado.
//! La entrada inválida nunca es un error: se reemplaza por el valor por
//! defecto para que la página siempre pueda renderizarse.

use std::collections::HashMap;

use crate::config::filters::{MAX_PRICE, PARAM_BRAND_MODEL, PARAM_MAX_PRICE, PARAM_SORT};
use crate::models::filter::{SortOrder, VehicleFilters};

/// Obtener y validar los filtros desde los query params
pub fn resolve_filters(query: &HashMap<String, String>) -> VehicleFilters {
    let brand_model = query
        .get(PARAM_BRAND_MODEL)
        .map(|value| value.trim().to_string())
        .unwrap_or_default();

    let max_price = query
        .get(PARAM_MAX_PRICE)
        .and_then(|value| parse_max_price(value));

    let sort_order = query
        .get(PARAM_SORT)
        .and_then(|value| SortOrder::from_token(value))
        .unwrap_or_default();

    VehicleFilters {
        brand_model,
        max_price,
        sort_order,
    }
}

/// Entero exacto en `[0, MAX_PRICE]`: sólo dígitos, sin signo ni decimales
/// y sin ceros a la izquierda. Se toleran espacios alrededor.
pub fn parse_max_price(raw: &str) -> Option<u64> {
    let value = raw.trim_matches(|c: char| c.is_ascii_whitespace());

    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if value.len() > 1 && value.starts_with('0') {
        return None;
    }

    let price: u64 = value.parse().ok()?;
    (price <= MAX_PRICE).then_some(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_query_uses_defaults() {
        assert_eq!(resolve_filters(&HashMap::new()), VehicleFilters::default());
    }

    #[test]
    fn test_brand_model_is_trimmed() {
        let filters = resolve_filters(&query(&[("marca_modelo", "  Toyota \t")]));
        assert_eq!(filters.brand_model, "Toyota");
    }

    #[test]
    fn test_valid_max_price() {
        let filters = resolve_filters(&query(&[("precio_maximo", "25000000")]));
        assert_eq!(filters.max_price, Some(25_000_000));
    }

    #[test]
    fn test_parse_max_price_bounds() {
        assert_eq!(parse_max_price("0"), Some(0));
        assert_eq!(parse_max_price("1000000000000"), Some(MAX_PRICE));
        assert_eq!(parse_max_price("1000000000001"), None);
        assert_eq!(parse_max_price("99999999999999999999999"), None);
    }

    #[test]
    fn test_parse_max_price_rejects_garbage() {
        for raw in ["", "   ", "-1", "+5", "12.5", "1e6", "10abc", "abc", "007", "1 000", "٣"] {
            assert_eq!(parse_max_price(raw), None, "'{}' debería ser inválido", raw);
        }
    }

    #[test]
    fn test_parse_max_price_tolerates_surrounding_spaces() {
        assert_eq!(parse_max_price(" 1500 "), Some(1500));
    }

    #[test]
    fn test_sort_order() {
        let desc = resolve_filters(&query(&[("ordenar_por", "precio-mayor-menor")]));
        assert_eq!(desc.sort_order, SortOrder::PriceDescending);

        let asc = resolve_filters(&query(&[("ordenar_por", "precio-menor-mayor")]));
        assert_eq!(asc.sort_order, SortOrder::PriceAscending);

        let unknown = resolve_filters(&query(&[("ordenar_por", "alfabetico")]));
        assert_eq!(unknown.sort_order, SortOrder::PriceAscending);
    }
}
