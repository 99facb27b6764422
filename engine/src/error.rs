use thiserror::Error;

/// Errors on the internal read path. None of these cross the public loader
/// surface: the loaders log them and degrade to the empty table for their
/// purpose (the dashboard always renders something).
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("CSV read error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    #[error("JSON parse error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error("GeoJSON structure error: {0}")]
    GeoFormat(String),
}
