//! HTTP client side of Moviedash: the movie data endpoint, the GET/POST request
//! tester, and the typed decoding that sits between the wire and the UI.

mod client;
mod error;
mod movie;
pub mod tester;

pub use client::fetch_movies;
pub use error::{FetchError, RecordError};
pub use movie::{decode_movies, MovieRecord};

/// Default location of the movie data service.
pub const DEFAULT_DATA_URL: &str = "http://localhost:5001/data";

/// Default base URL of the request tester backend.
pub const DEFAULT_TESTER_URL: &str = "http://127.0.0.1:5000";
