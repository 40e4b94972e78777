//! Potok przekształceń tekstu
//!
//! Etapy składają się w łańcuch dekoratorów: każdy etap opakowuje etap
//! poprzedni i pobiera jego wynik na żądanie. Etapy nie trzymają stanu
//! między wywołaniami — dwukrotne `transform()` daje ten sam wynik.

/// Wspólny kontrakt etapu potoku.
pub trait TextTransform {
    /// Zwraca tekst po przekształceniu, pobierając wejście z etapu
    /// poprzedniego.
    fn transform(&self) -> String;
}

/// Początek łańcucha: surowy tekst wejściowy.
pub struct SourceText {
    text: String,
}

impl SourceText {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TextTransform for SourceText {
    fn transform(&self) -> String {
        self.text.clone()
    }
}
