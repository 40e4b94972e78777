//! Silnik potoku przekształceń

use tracing::debug;

use crate::config::{Config, StepKind};
use crate::pipeline::{SourceText, TextTransform};
use crate::transforms::{CaseMode, CaseTransform, DuplicateRemoval, NumberExpansion};

/// Silnik budujący łańcuch etapów z konfiguracji i uruchamiający go.
pub struct Transformer {
    steps: Vec<StepKind>,
}

impl Transformer {
    /// Tworzy silnik dla podanej konfiguracji.
    pub fn new(config: &Config) -> Self {
        Self {
            steps: config.steps.clone(),
        }
    }

    /// Przepuszcza tekst przez kolejne etapy potoku.
    ///
    /// Łańcuch jest budowany od źródła na zewnątrz; pojedyncze wywołanie
    /// `transform()` na etapie zewnętrznym ściąga wynik z całego potoku.
    pub fn transform(&self, text: &str) -> String {
        let mut stage: Box<dyn TextTransform> = Box::new(SourceText::new(text));
        for step in &self.steps {
            debug!(etap = ?step, "dokładanie etapu potoku");
            stage = match step {
                StepKind::Upper => Box::new(CaseTransform::new(stage, CaseMode::Upper)),
                StepKind::Lower => Box::new(CaseTransform::new(stage, CaseMode::Lower)),
                StepKind::Capitalize => Box::new(CaseTransform::new(stage, CaseMode::Capitalize)),
                StepKind::Numbers => Box::new(NumberExpansion::new(stage, true)),
                StepKind::Duplicates => Box::new(DuplicateRemoval::new(stage, true)),
            };
        }
        stage.transform()
    }
}
