//! Odmiana liczebnikowa słów wielkości
//!
//! Dobór formy gramatycznej słowa wielkości (tysiąc, milion, ...) według
//! polskiej reguły liczebników głównych, opartej na ostatniej cyfrze
//! i dwóch ostatnich cyfrach krotności.

/// Kategoria gramatyczna dobierana do krotności
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralCategory {
    /// Dokładnie jeden: "tysiąc"
    One,
    /// Końcówka 2–4 poza 12–14: "dwa tysiące"
    Few,
    /// Pozostałe: "pięć tysięcy"
    Many,
    /// Dopełniacz pojedynczy: "(pół) tysiąca"
    Genitive,
}

impl PluralCategory {
    /// Dobiera kategorię dla danej krotności.
    ///
    /// `Genitive` nigdy nie wynika z samej krotności; wybiera ją wołający
    /// w kontekście dopełniaczowym.
    pub fn of(quantity: u64) -> Self {
        if quantity == 1 {
            return Self::One;
        }
        let last_two = quantity % 100;
        let last = quantity % 10;
        if (2..=4).contains(&last) && !(12..=14).contains(&last_two) {
            Self::Few
        } else {
            Self::Many
        }
    }
}

/// Cztery nieodmienne formy słowa wielkości.
///
/// Komplet pokrywa każdą kategorię: z niezerowego wiadra wielkości
/// trafia do wyniku zawsze dokładnie jedna forma.
#[derive(Debug, Clone, Copy)]
pub struct MagnitudeWords {
    pub one: &'static str,
    pub few: &'static str,
    pub many: &'static str,
    pub genitive: &'static str,
}

impl MagnitudeWords {
    pub const fn new(
        one: &'static str,
        few: &'static str,
        many: &'static str,
        genitive: &'static str,
    ) -> Self {
        Self {
            one,
            few,
            many,
            genitive,
        }
    }

    /// Forma dla danej kategorii.
    pub fn select(&self, category: PluralCategory) -> &'static str {
        match category {
            PluralCategory::One => self.one,
            PluralCategory::Few => self.few,
            PluralCategory::Many => self.many,
            PluralCategory::Genitive => self.genitive,
        }
    }

    /// Słowo wielkości poprzedzone słowną krotnością.
    ///
    /// Dla krotności 1 samo słowo, bez liczebnika: "tysiąc", nie
    /// "jeden tysiąc". Krotność 0 nie trafia tutaj nigdy — wiadro
    /// o zerowej wartości jest pomijane w całości.
    pub fn agreed(&self, quantity: u64, spell: fn(u64) -> String) -> String {
        match PluralCategory::of(quantity) {
            PluralCategory::One => self.one.to_string(),
            category => format!("{} {}", spell(quantity), self.select(category)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TYSIAC: MagnitudeWords = MagnitudeWords::new("tysiąc", "tysiące", "tysięcy", "tysiąca");

    fn spell_stub(n: u64) -> String {
        format!("<{}>", n)
    }

    #[test]
    fn test_category_one() {
        assert_eq!(PluralCategory::of(1), PluralCategory::One);
    }

    #[test]
    fn test_category_few() {
        for q in [2, 3, 4, 22, 23, 24, 102, 134, 1002] {
            assert_eq!(PluralCategory::of(q), PluralCategory::Few, "krotność {}", q);
        }
    }

    #[test]
    fn test_category_many() {
        for q in [0, 5, 9, 10, 11, 12, 13, 14, 15, 21, 100, 111, 112, 113, 114] {
            assert_eq!(PluralCategory::of(q), PluralCategory::Many, "krotność {}", q);
        }
    }

    #[test]
    fn test_category_rule_exhaustive() {
        // Reguła na ostatnich cyfrach, sprawdzona wprost dla 0..1000
        for q in 0u64..1000 {
            let expected = if q == 1 {
                PluralCategory::One
            } else if (2..=4).contains(&(q % 10)) && !(12..=14).contains(&(q % 100)) {
                PluralCategory::Few
            } else {
                PluralCategory::Many
            };
            assert_eq!(PluralCategory::of(q), expected, "krotność {}", q);
        }
    }

    #[test]
    fn test_select_covers_all_categories() {
        assert_eq!(TYSIAC.select(PluralCategory::One), "tysiąc");
        assert_eq!(TYSIAC.select(PluralCategory::Few), "tysiące");
        assert_eq!(TYSIAC.select(PluralCategory::Many), "tysięcy");
        assert_eq!(TYSIAC.select(PluralCategory::Genitive), "tysiąca");
    }

    #[test]
    fn test_agreed_one_without_numeral() {
        // Krotność 1 nie dostaje liczebnika przed słowem wielkości
        assert_eq!(TYSIAC.agreed(1, spell_stub), "tysiąc");
    }

    #[test]
    fn test_agreed_prefixes_numeral() {
        assert_eq!(TYSIAC.agreed(2, spell_stub), "<2> tysiące");
        assert_eq!(TYSIAC.agreed(5, spell_stub), "<5> tysięcy");
        assert_eq!(TYSIAC.agreed(12, spell_stub), "<12> tysięcy");
        assert_eq!(TYSIAC.agreed(22, spell_stub), "<22> tysiące");
    }
}
