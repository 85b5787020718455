//! Client for the GET/POST demo backend.

use serde::{Deserialize, Serialize};

use crate::error::FetchError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TesterReply {
    pub message: String,
}

#[derive(Debug, Serialize)]
struct PostBody<'a> {
    body_param: &'a str,
}

/// `GET {base}/get?param=<param>`
pub async fn send_get(base: &str, param: &str) -> Result<TesterReply, FetchError> {
    let url = endpoint(base, &["get"])?;
    tracing::debug!(%url, "tester GET");

    let response = reqwest::Client::new()
        .get(url)
        .query(&[("param", param)])
        .send()
        .await?;
    read_reply(response).await
}

/// `POST {base}/post/<param>` with `{"body_param": body}`.
pub async fn send_post(base: &str, param: &str, body: &str) -> Result<TesterReply, FetchError> {
    let url = endpoint(base, &["post", param])?;
    tracing::debug!(%url, "tester POST");

    let response = reqwest::Client::new()
        .post(url)
        .json(&PostBody { body_param: body })
        .send()
        .await?;
    read_reply(response).await
}

async fn read_reply(response: reqwest::Response) -> Result<TesterReply, FetchError> {
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
        });
    }
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Append percent-encoded path segments to `base`.
pub(crate) fn endpoint(base: &str, segments: &[&str]) -> Result<reqwest::Url, FetchError> {
    let invalid = || FetchError::Endpoint(base.to_string());
    let mut url = reqwest::Url::parse(base).map_err(|_| invalid())?;
    url.path_segments_mut()
        .map_err(|_| invalid())?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
