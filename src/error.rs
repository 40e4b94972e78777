//! Błędy potoku przekształceń

use std::io;

use thiserror::Error;

/// Błąd na granicy potoku.
///
/// Same etapy przekształceń są funkcjami całkowitymi i nie zawodzą;
/// zawieść może wyłącznie pozyskanie wejścia i zapis wyniku.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("nie podano tekstu do przekształcenia")]
    MissingInput,

    #[error("nie można odczytać pliku '{path}': {source}")]
    InputRead {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("nie można zapisać pliku '{path}': {source}")]
    OutputWrite {
        path: String,
        #[source]
        source: io::Error,
    },
}
