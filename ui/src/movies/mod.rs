mod table;
pub use table::MovieTable;

mod charts;
pub use charts::{EChart, ECHARTS_SRC};

mod alert;
pub use alert::{AlertKind, StatusAlert};

pub mod table_model;
pub use table_model::TableLayout;

use api::{FetchError, MovieRecord};
use dioxus::prelude::*;

use crate::core::config::use_config;

/// What a page knows about its movie fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MoviesState {
    pub records: Vec<MovieRecord>,
    pub loading: bool,
    pub error: Option<String>,
}

impl MoviesState {
    /// `None` means the request is still in flight.
    pub fn from_outcome(outcome: Option<&Result<Vec<MovieRecord>, FetchError>>) -> Self {
        match outcome {
            None => Self {
                records: Vec::new(),
                loading: true,
                error: None,
            },
            Some(Ok(records)) => Self {
                records: records.clone(),
                loading: false,
                error: None,
            },
            Some(Err(err)) => Self {
                records: Vec::new(),
                loading: false,
                error: Some(err.to_string()),
            },
        }
    }

    /// Fetch finished successfully and returned nothing.
    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.records.is_empty()
    }
}

/// Fetch the movie list once for the calling page.
///
/// The request lives in a resource owned by the page's scope, so leaving the
/// page drops the future and abandons the request.
pub fn use_movies() -> Memo<MoviesState> {
    let endpoint = use_config().data_endpoint;

    let movies = use_resource(move || {
        let endpoint = endpoint.clone();
        async move {
            let outcome = api::fetch_movies(&endpoint).await;
            if let Err(err) = &outcome {
                tracing::error!(%endpoint, %err, "failed to load movie data");
            }
            outcome
        }
    });

    use_memo(move || MoviesState::from_outcome(movies.read().as_ref()))
}
