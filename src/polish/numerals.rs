//! Słowny zapis liczb całkowitych
//!
//! Rozkłada liczbę na wiadra wielkości (tryliony..tysiące) i resztę 0–999.
//! Krotność każdego niezerowego wiadra jest zapisywana słownie tą samą
//! funkcją i łączona z odmienioną formą słowa wielkości.

use crate::polish::plural::MagnitudeWords;

const DIGITS: [&str; 10] = [
    "zero", "jeden", "dwa", "trzy", "cztery", "pięć", "sześć", "siedem", "osiem", "dziewięć",
];
const TEENS: [&str; 10] = [
    "dziesięć",
    "jedenaście",
    "dwanaście",
    "trzynaście",
    "czternaście",
    "piętnaście",
    "szesnaście",
    "siedemnaście",
    "osiemnaście",
    "dziewiętnaście",
];
// Indeks 0 odpowiada 20
const TENS: [&str; 8] = [
    "dwadzieścia",
    "trzydzieści",
    "czterdzieści",
    "pięćdziesiąt",
    "sześćdziesiąt",
    "siedemdziesiąt",
    "osiemdziesiąt",
    "dziewięćdziesiąt",
];
// Indeks 0 odpowiada 100
const HUNDREDS: [&str; 9] = [
    "sto",
    "dwieście",
    "trzysta",
    "czterysta",
    "pięćset",
    "sześćset",
    "siedemset",
    "osiemset",
    "dziewięćset",
];

const TYSIAC: MagnitudeWords = MagnitudeWords::new("tysiąc", "tysiące", "tysięcy", "tysiąca");
const MILION: MagnitudeWords = MagnitudeWords::new("milion", "miliony", "milionów", "miliona");
const MILIARD: MagnitudeWords = MagnitudeWords::new("miliard", "miliardy", "miliardów", "miliarda");
const BILION: MagnitudeWords = MagnitudeWords::new("bilion", "biliony", "bilionów", "biliona");
const BILIARD: MagnitudeWords = MagnitudeWords::new("biliard", "biliardy", "biliardów", "biliarda");
const TRYLION: MagnitudeWords = MagnitudeWords::new("trylion", "tryliony", "trylionów", "tryliona");

/// Wiadra wielkości w porządku ściśle malejącym; dzielnik równy progowi.
const MAGNITUDES: [(u64, MagnitudeWords); 6] = [
    (1_000_000_000_000_000_000, TRYLION),
    (1_000_000_000_000_000, BILIARD),
    (1_000_000_000_000, BILION),
    (1_000_000_000, MILIARD),
    (1_000_000, MILION),
    (1_000, TYSIAC),
];

/// Słowny zapis liczby całkowitej ze znakiem.
///
/// Wartość ujemna dostaje wiodące "minus", a dalej liczona jest jej
/// wartość bezwzględna bez znaku — dzięki temu `i64::MIN` nie przepełnia
/// się przy negacji.
pub fn spell(n: i64) -> String {
    if n < 0 {
        format!("minus {}", spell_unsigned(n.unsigned_abs()))
    } else {
        spell_unsigned(n as u64)
    }
}

/// Zapis wartości bezwzględnej; wołana rekurencyjnie dla krotności wiader.
fn spell_unsigned(n: u64) -> String {
    if n == 0 {
        return DIGITS[0].to_string();
    }

    let mut words: Vec<String> = Vec::new();
    let mut rest = n;

    for (divisor, family) in MAGNITUDES {
        if rest >= divisor {
            words.push(family.agreed(rest / divisor, spell_unsigned));
            rest %= divisor;
        }
    }

    push_under_thousand(rest, &mut words);
    words.join(" ")
}

/// Dokłada słowa reszty 0–999; zero nie wnosi niczego.
fn push_under_thousand(n: u64, words: &mut Vec<String>) {
    let hundreds = (n / 100) as usize;
    if hundreds > 0 {
        words.push(HUNDREDS[hundreds - 1].to_string());
    }

    let rest = (n % 100) as usize;
    if rest == 0 {
        return;
    }
    if rest < 10 {
        words.push(DIGITS[rest].to_string());
    } else if rest < 20 {
        words.push(TEENS[rest - 10].to_string());
    } else {
        words.push(TENS[rest / 10 - 2].to_string());
        let units = rest % 10;
        if units > 0 {
            words.push(DIGITS[units].to_string());
        }
    }
}
