use thiserror::Error;

/// Everything that can go wrong between issuing a request and holding decoded data.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid endpoint `{0}`")]
    Endpoint(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    #[error("response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record #{index} is malformed: {source}")]
    Record {
        index: usize,
        #[source]
        source: RecordError,
    },
}

/// Why a single movie record was rejected at the decode boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("missing `item_rank`")]
    MissingRank,

    #[error("`item_rank` must be a positive integer, got `{0}`")]
    InvalidRank(String),

    #[error("missing `score`")]
    MissingScore,

    #[error("`score` must be a finite number, got `{0}`")]
    InvalidScore(String),
}
