//! Transformator - Biblioteka przekształceń tekstu
//!
//! Udostępnia potok komponowalnych przekształceń tekstu, w tym zamianę
//! liczb całkowitych na ich polski zapis słowny z poprawną odmianą
//! liczebnikową.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod polish;
pub mod transformer;
pub mod transforms;

pub use config::{Config, StepKind};
pub use error::PipelineError;
pub use pipeline::{SourceText, TextTransform};
pub use transformer::Transformer;
