//! Normalización de texto para búsquedas
//!
//! Pasa a minúsculas, translitera letras de otros alfabetos al latino y
//! elimina acentos y diéresis, de modo que "onix" encuentre "Onix",
//! "citroen" encuentre "Citroën" y "βmw" encuentre "BMW".

use deunicode::deunicode_char;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// trim → minúsculas → alfabeto latino → NFD → sin marcas combinantes → NFC
pub fn normalize(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let latin = to_latin(&lowered);
    latin
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .nfc()
        .collect()
}

/// Translitera sólo letras fuera del alfabeto latino; dígitos, signos y
/// letras latinas (con o sin acento) quedan como están
fn to_latin(text: &str) -> String {
    let mut latin = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_alphabetic() && !is_latin_letter(ch) {
            match deunicode_char(ch) {
                Some(ascii) => latin.push_str(&ascii.to_lowercase()),
                None => latin.push(ch),
            }
        } else {
            latin.push(ch);
        }
    }
    latin
}

fn is_latin_letter(ch: char) -> bool {
    matches!(ch,
        'a'..='z'
        | 'A'..='Z'
        | '\u{00AA}'
        | '\u{00BA}'
        | '\u{00C0}'..='\u{00D6}'
        | '\u{00D8}'..='\u{00F6}'
        | '\u{00F8}'..='\u{024F}'
        | '\u{1E00}'..='\u{1EFF}'
        | '\u{2C60}'..='\u{2C7F}'
        | '\u{A720}'..='\u{A7FF}'
        | '\u{FB00}'..='\u{FB06}'
        | '\u{FF21}'..='\u{FF3A}'
        | '\u{FF41}'..='\u{FF5A}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Onix 1.0T LT "), "onix 1.0t lt");
        assert_eq!(normalize("Citroën"), "citroen");
        assert_eq!(normalize("ÁÉÍÓÚ Ññ Üü"), "aeiou nn uu");
    }

    #[test]
    fn test_normalize_decomposed_input() {
        // "e" + U+0301 (acento combinante)
        assert_eq!(normalize("Cafe\u{301}"), "cafe");
    }

    #[test]
    fn test_transliterates_other_alphabets() {
        assert_eq!(normalize("Βmw"), "bmw");
        assert_eq!(normalize("ΑΥΔΙ"), "audi");
        assert_eq!(normalize("Кіа"), "kia");
    }

    #[test]
    fn test_keeps_digits_and_symbols() {
        assert_eq!(normalize("320i SportLine"), "320i sportline");
        assert_eq!(normalize("A3 35 TFSI / 2.0"), "a3 35 tfsi / 2.0");
    }
}
