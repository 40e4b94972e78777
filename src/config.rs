//! Konfiguracja i argumenty CLI

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::error::PipelineError;

/// Etap potoku wybierany z wiersza poleceń
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StepKind {
    /// Całość na wielkie litery
    Upper,
    /// Całość na małe litery
    Lower,
    /// Pierwsza litera każdego słowa na wielką
    Capitalize,
    /// Liczby całkowite na zapis słowny
    Numbers,
    /// Usunięcie sąsiadujących powtórzeń słów
    Duplicates,
}

/// Konfiguracja potoku przekształceń
#[derive(Debug, Clone, Parser)]
#[command(
    name = "transformator",
    version,
    about = "Potok przekształceń tekstu z zamianą liczb na zapis słowny"
)]
pub struct Config {
    /// Kolejne etapy potoku, stosowane w kolejności podania
    #[arg(short = 't', long = "transform", value_enum, value_name = "ETAP")]
    pub steps: Vec<StepKind>,

    /// Tekst do przekształcenia (argument pozycyjny)
    pub text: Option<String>,

    /// Plik wejściowy; "-" czyta ze standardowego wejścia
    #[arg(short, long, value_name = "PLIK")]
    pub input: Option<PathBuf>,

    /// Plik wyjściowy (domyślnie standardowe wyjście)
    #[arg(short, long, value_name = "PLIK")]
    pub output: Option<PathBuf>,
}

impl Config {
    /// Zwraca tekst wejściowy: najpierw plik, potem argument pozycyjny.
    pub fn input_text(&self) -> Result<String, PipelineError> {
        if let Some(ref path) = self.input {
            if path.as_os_str() == "-" {
                let mut text = String::new();
                return match io::stdin().read_to_string(&mut text) {
                    Ok(_) => Ok(text),
                    Err(source) => Err(PipelineError::InputRead {
                        path: "-".to_string(),
                        source,
                    }),
                };
            }
            return fs::read_to_string(path).map_err(|source| PipelineError::InputRead {
                path: path.display().to_string(),
                source,
            });
        }
        match self.text {
            Some(ref text) => Ok(text.clone()),
            None => Err(PipelineError::MissingInput),
        }
    }

    /// Zapisuje wynik do pliku wyjściowego albo na standardowe wyjście.
    pub fn write_output(&self, result: &str) -> Result<(), PipelineError> {
        match self.output {
            Some(ref path) => {
                fs::write(path, result).map_err(|source| PipelineError::OutputWrite {
                    path: path.display().to_string(),
                    source,
                })
            }
            None => {
                println!("{}", result);
                Ok(())
            }
        }
    }
}
