/// Display symbol for a 3-letter currency code.
///
/// The table is intentionally narrow: EUR and GBP get their own symbols and
/// everything else, USD included, renders as `$`. Matching is exact. Unknown
/// codes fall back instead of failing.
pub fn symbol_for(code: &str) -> &'static str {
    match code {
        "EUR" => "€",
        "GBP" => "£",
        _ => "$",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_symbols() {
        assert_eq!(symbol_for("EUR"), "€");
        assert_eq!(symbol_for("GBP"), "£");
        assert_eq!(symbol_for("USD"), "$");
    }

    #[test]
    fn test_unknown_codes_fall_back_to_dollar() {
        assert_eq!(symbol_for("XYZ"), "$");
        assert_eq!(symbol_for("JPY"), "$");
        assert_eq!(symbol_for(""), "$");
    }

    #[test]
    fn test_matching_is_exact() {
        assert_eq!(symbol_for("eur"), "$", "Lowercase codes are not special-cased");
    }
}
