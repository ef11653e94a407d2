use thiserror::Error;

/// Failures while parsing the static resources. Everything after startup is
/// total and never produces one of these.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid JSON in {resource}: {source}")]
    Json {
        resource: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("dataset must be an object keyed by country code")]
    DatasetNotObject,

    #[error("record for {0} is not an object")]
    RecordNotObject(String),

    #[error("duplicate country code {0}")]
    DuplicateCode(String),

    #[error("invalid geometry: {0}")]
    Geometry(String),
}

pub type Result<T> = std::result::Result<T, Error>;
