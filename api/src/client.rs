use crate::error::FetchError;
use crate::movie::{decode_movies, MovieRecord};

/// Fetch and decode the full movie list from `endpoint`.
///
/// Dropping the returned future abandons the request.
pub async fn fetch_movies(endpoint: &str) -> Result<Vec<MovieRecord>, FetchError> {
    let url = reqwest::Url::parse(endpoint).map_err(|_| FetchError::Endpoint(endpoint.into()))?;

    tracing::debug!(%url, "fetching movie data");
    let response = reqwest::get(url).await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
        });
    }

    let body = response.bytes().await?;
    let movies = decode_movies(&body)?;
    tracing::debug!(count = movies.len(), "movie data decoded");
    Ok(movies)
}
