//! Movie record type and the defensive decoding of the `/data` payload.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{FetchError, RecordError};

/// One row of the movie data set.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRecord {
    /// `item_rank` on the wire.
    pub rank: u32,
    pub chinese_name: String,
    pub original_name: String,
    /// One or more names separated by `/`.
    pub director: String,
    pub score: f64,
    pub countries: String,
    /// Space separated genre tokens.
    pub genres: String,
}

impl MovieRecord {
    /// Key used for list rendering. Rank alone is not guaranteed unique.
    pub fn row_key(&self) -> String {
        format!("{}-{}", self.rank, self.chinese_name)
    }

    /// Individual director names (trimmed, empty pieces skipped).
    pub fn directors(&self) -> impl Iterator<Item = &str> {
        self.director
            .split('/')
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    pub fn genre_tokens(&self) -> impl Iterator<Item = &str> {
        self.genres.split_whitespace()
    }
}

/// Numbers sometimes arrive quoted (MySQL decimals go through JSON as strings).
/// Anything else (bool, object, array) is left to the caller to reject.
fn numeric_text(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) => Some(s.trim()),
        _ => None,
    }
}

fn rank_from(value: &Value) -> Option<u32> {
    let rank = match value {
        Value::Number(n) => n.as_u64()?,
        other => numeric_text(other)?.parse::<u64>().ok()?,
    };
    u32::try_from(rank).ok().filter(|rank| *rank >= 1)
}

fn score_from(value: &Value) -> Option<f64> {
    let score = match value {
        Value::Number(n) => n.as_f64()?,
        other => numeric_text(other)?.parse::<f64>().ok()?,
    };
    score.is_finite().then_some(score)
}

/// How a rejected value is shown in the error: strings bare, everything else as JSON.
fn raw_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[derive(Debug, Deserialize)]
struct RawMovie {
    #[serde(default)]
    item_rank: Option<Value>,
    #[serde(default)]
    chinese_name: Option<String>,
    #[serde(default)]
    original_name: Option<String>,
    #[serde(default)]
    director: Option<String>,
    #[serde(default)]
    score: Option<Value>,
    #[serde(default)]
    countries: Option<String>,
    #[serde(default)]
    genres: Option<String>,
}

impl TryFrom<RawMovie> for MovieRecord {
    type Error = RecordError;

    fn try_from(raw: RawMovie) -> Result<Self, Self::Error> {
        let rank_field = raw.item_rank.ok_or(RecordError::MissingRank)?;
        let rank =
            rank_from(&rank_field).ok_or_else(|| RecordError::InvalidRank(raw_text(&rank_field)))?;

        let score_field = raw.score.ok_or(RecordError::MissingScore)?;
        let score =
            score_from(&score_field).ok_or_else(|| RecordError::InvalidScore(raw_text(&score_field)))?;

        Ok(Self {
            rank,
            chinese_name: raw.chinese_name.unwrap_or_default(),
            original_name: raw.original_name.unwrap_or_default(),
            director: raw.director.unwrap_or_default(),
            score,
            countries: raw.countries.unwrap_or_default(),
            genres: raw.genres.unwrap_or_default(),
        })
    }
}

/// Decode a `/data` response body. The whole batch is rejected on the first bad record.
pub fn decode_movies(body: &[u8]) -> Result<Vec<MovieRecord>, FetchError> {
    let raw: Vec<RawMovie> = serde_json::from_slice(body)?;

    raw.into_iter()
        .enumerate()
        .map(|(index, movie)| {
            MovieRecord::try_from(movie).map_err(|source| {
                tracing::warn!(index, %source, "rejecting movie record");
                FetchError::Record { index, source }
            })
        })
        .collect()
}
