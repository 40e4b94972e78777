//! Zmiana wielkości liter
//!
//! Trzy warianty: całość na wielkie, całość na małe oraz kapitalizacja
//! pierwszej litery każdego słowa.

use crate::pipeline::TextTransform;

/// Rodzaj zmiany wielkości liter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    Upper,
    Lower,
    Capitalize,
}

/// Etap potoku zmieniający wielkość liter.
pub struct CaseTransform {
    upstream: Box<dyn TextTransform>,
    mode: CaseMode,
}

impl CaseTransform {
    pub fn new(upstream: Box<dyn TextTransform>, mode: CaseMode) -> Self {
        Self { upstream, mode }
    }
}

impl TextTransform for CaseTransform {
    fn transform(&self) -> String {
        let text = self.upstream.transform();
        match self.mode {
            CaseMode::Upper => text.to_uppercase(),
            CaseMode::Lower => text.to_lowercase(),
            CaseMode::Capitalize => capitalize(&text),
        }
    }
}

/// Pierwsza litera każdego słowa na wielką.
///
/// Słowa zaczynające się od znaku innego niż litera przechodzą bez zmian;
/// wynik jest przycinany na brzegach.
fn capitalize(text: &str) -> String {
    let words: Vec<String> = text
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) if first.is_alphabetic() => {
                    first.to_uppercase().chain(chars).collect()
                }
                _ => word.to_string(),
            }
        })
        .collect();
    words.join(" ").trim().to_string()
}
