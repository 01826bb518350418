//! Formato de moneda ARS
//!
//! Pesos enteros, sin decimales, con punto como separador de miles.

const CURRENCY_SYMBOL: &str = "$";
const GROUP_SEPARATOR: char = '.';

/// Formatear un monto en pesos: `25560900` → `"$25.560.900"`
pub fn format_money_ars(amount: u64) -> String {
    format!("{}{}", CURRENCY_SYMBOL, group_thousands(amount))
}

/// Agrupar dígitos de a tres: `10000000` → `"10.000.000"`
fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }

    grouped
}
