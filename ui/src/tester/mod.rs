//! GET/POST request tester page.

mod view;
pub use view::RequestTesterView;

use api::{tester::TesterReply, FetchError};

/// Work queued for the tester coroutine. Requests run one at a time in the
/// order they were submitted.
#[derive(Debug, Clone, PartialEq)]
pub enum TesterEvent {
    Get { param: String },
    Post { param: String, body: String },
}

impl TesterEvent {
    pub fn method(&self) -> &'static str {
        match self {
            Self::Get { .. } => "GET",
            Self::Post { .. } => "POST",
        }
    }
}

/// Text shown for a finished request: the backend's message, or `failed()`
/// for any error.
pub fn reply_text(
    outcome: &Result<TesterReply, FetchError>,
    failed: impl FnOnce() -> String,
) -> String {
    match outcome {
        Ok(reply) => reply.message.clone(),
        Err(_) => failed(),
    }
}
