//! Obsługa języka polskiego
//!
//! Reguły odmiany liczebnikowej oraz słowny zapis liczb całkowitych.

pub mod numerals;
pub mod plural;

pub use numerals::spell;
pub use plural::{MagnitudeWords, PluralCategory};
