//! Zamiana liczb na zapis słowny
//!
//! Tokeny rozdzielone spacjami, które dają się sparsować jako liczba
//! całkowita ze znakiem, są zastępowane polskim zapisem słownym; pozostałe
//! przechodzą bez zmian. Ciągi wielu spacji są sprowadzane do pojedynczych
//! — to udokumentowana cecha tego etapu, nie błąd do naprawienia.

use crate::pipeline::TextTransform;
use crate::polish::numerals;

/// Etap potoku rozwijający tokeny liczbowe do zapisu słownego.
pub struct NumberExpansion {
    upstream: Box<dyn TextTransform>,
    enabled: bool,
}

impl NumberExpansion {
    pub fn new(upstream: Box<dyn TextTransform>, enabled: bool) -> Self {
        Self { upstream, enabled }
    }

    /// Zastępuje tokeny liczbowe zapisem słownym.
    ///
    /// Token niebędący liczbą nie jest błędem — przechodzi bez zmian.
    fn expand(text: &str) -> String {
        let words: Vec<String> = text
            .split(' ')
            .filter(|token| !token.is_empty())
            .map(|token| match token.parse::<i64>() {
                Ok(number) => numerals::spell(number),
                Err(_) => token.to_string(),
            })
            .collect();
        words.join(" ")
    }
}

impl TextTransform for NumberExpansion {
    fn transform(&self) -> String {
        let text = self.upstream.transform();
        if !self.enabled {
            // Wyłączony etap nie płaci nawet kosztu tokenizacji
            return text;
        }
        Self::expand(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::SourceText;

    fn numbers_stage(text: &str, enabled: bool) -> NumberExpansion {
        NumberExpansion::new(Box::new(SourceText::new(text)), enabled)
    }

    #[test]
    fn test_expands_integer_tokens() {
        assert_eq!(
            numbers_stage("mam 3 jabłka", true).transform(),
            "mam trzy jabłka"
        );
    }

    #[test]
    fn test_expands_zero_and_negative() {
        assert_eq!(numbers_stage("0", true).transform(), "zero");
        assert_eq!(numbers_stage("-5", true).transform(), "minus pięć");
    }

    #[test]
    fn test_non_numeric_tokens_pass_through() {
        // Ułamki i liczby z separatorami nie są rozwijane
        assert_eq!(
            numbers_stage("3.5 oraz 1,000 metrów", true).transform(),
            "3.5 oraz 1,000 metrów"
        );
    }

    #[test]
    fn test_collapses_space_runs() {
        // Udokumentowana strata: wielokrotne spacje stają się pojedyncze
        assert_eq!(
            numbers_stage("mam  3   jabłka", true).transform(),
            "mam trzy jabłka"
        );
    }

    #[test]
    fn test_disabled_passes_through_verbatim() {
        assert_eq!(
            numbers_stage("mam  3   jabłka", false).transform(),
            "mam  3   jabłka"
        );
    }
}
