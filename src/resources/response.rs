//! Shared response interpretation
//!
//! Every resource operation reads the remote answer the same way: HTTP 200
//! means success, anything else is an application-level failure logged with
//! status, reason phrase, and body text. List reads additionally treat a 200
//! with an empty list as "nothing found" - reported, and no result for the
//! caller. This is the one place the convention lives; operations never
//! re-derive it.

use log::error;
use reqwest::StatusCode;
use reqwest::blocking::Response;
use serde::de::DeserializeOwned;

/// How a completed list request was read.
#[derive(Debug)]
pub(crate) enum ListOutcome<T> {
    /// 200 with at least one item.
    Found(Vec<T>),
    /// 200 with an empty list; nothing exists yet.
    Nothing,
    /// Any other status; the diagnostic has already been logged.
    Rejected,
}

/// Status line plus body text, the uniform diagnostic shape.
pub(crate) fn diagnostic(response: Response) -> String {
    let status = response.status();
    let body = response.text().unwrap_or_default();
    format!(
        "{} {} {body}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("")
    )
}

/// Read a 200 response body as `T`; anything else logs and yields `None`.
pub(crate) fn read_json<T: DeserializeOwned>(response: Response, action: &str) -> Option<T> {
    if response.status() == StatusCode::OK {
        match response.json::<T>() {
            Ok(value) => Some(value),
            Err(err) => {
                error!("Error when {action}: invalid response body: {err}");
                None
            }
        }
    } else {
        error!("Error when {action}: {}", diagnostic(response));
        None
    }
}

/// Read a 200 response body as a list, keeping the empty case distinct from
/// a rejection.
pub(crate) fn read_list<T: DeserializeOwned>(response: Response, action: &str) -> ListOutcome<T> {
    match read_json::<Vec<T>>(response, action) {
        Some(items) if items.is_empty() => ListOutcome::Nothing,
        Some(items) => ListOutcome::Found(items),
        None => ListOutcome::Rejected,
    }
}

/// Acknowledge a write: only the status matters.
pub(crate) fn ok(response: Response, action: &str) -> bool {
    if response.status() == StatusCode::OK {
        true
    } else {
        error!("Error when {action}: {}", diagnostic(response));
        false
    }
}
