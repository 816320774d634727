//! Typed error taxonomy for API call outcomes.
//!
//! Every failed call produces exactly one [`ApiError`]; callers pattern-match
//! instead of catching an exception hierarchy.  Classification happens once,
//! in [`classify`], and is never retried.

use thiserror::Error;

/// Classified outcome of a failed API call.
///
/// Resource operations may downgrade [`NotFound`](ApiError::NotFound) to an
/// absent result on reads, but must surface every other variant unchanged.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid API key or secret, or the request came from an unauthorized
    /// source.
    #[error("authentication failed: invalid api key, secret, or unauthorized source")]
    Authentication,

    /// The requested object does not exist.
    #[error("object not found: {detail}")]
    NotFound { detail: String },

    /// The object already exists.
    #[error("object already exists: {detail}")]
    Conflict { detail: String },

    /// Transport-level failure (DNS, TLS, timeout, connection reset) or an
    /// unexpected 4xx response.
    #[error("transport error: {detail}")]
    Transport { detail: String },

    /// The server failed with a 5xx status.
    #[error("server error: status {status}")]
    ServerError { status: u16 },
}

/// Classify a non-2xx HTTP status into an [`ApiError`].
///
/// `detail` is the response body (falling back to the status line when the
/// body is empty) and is preserved for diagnostics.  Transport failures never
/// reach this function; they convert through `From<reqwest::Error>` instead.
pub fn classify(status: u16, detail: &str) -> ApiError {
    match status {
        401 => ApiError::Authentication,
        404 => ApiError::NotFound {
            detail: detail.to_owned(),
        },
        405 => ApiError::Conflict {
            detail: detail.to_owned(),
        },
        500..=599 => ApiError::ServerError { status },
        _ => ApiError::Transport {
            detail: format!("HTTP {status}: {detail}"),
        },
    }
}

#[cfg(feature = "client")]
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        let detail = if err.is_timeout() {
            format!("request timed out: {err}")
        } else if err.is_connect() {
            format!("connection failed: {err}")
        } else {
            err.to_string()
        };
        ApiError::Transport { detail }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_401_as_authentication() {
        assert!(matches!(classify(401, "denied"), ApiError::Authentication));
    }

    #[test]
    fn test_classify_404_keeps_detail() {
        assert!(matches!(
            classify(404, "no such donor"),
            ApiError::NotFound { detail } if detail == "no such donor"
        ));
    }

    #[test]
    fn test_classify_405_as_conflict() {
        assert!(matches!(
            classify(405, "donor exists"),
            ApiError::Conflict { detail } if detail == "donor exists"
        ));
    }

    #[test]
    fn test_classify_other_4xx_as_transport() {
        for status in [400, 403, 409, 422] {
            match classify(status, "bad request") {
                ApiError::Transport { detail } => {
                    assert!(detail.contains(&status.to_string()));
                    assert!(detail.contains("bad request"));
                }
                other => panic!("status {status} classified as {other:?}"),
            }
        }
    }

    #[test]
    fn test_classify_5xx_keeps_status() {
        assert!(matches!(
            classify(500, ""),
            ApiError::ServerError { status: 500 }
        ));
        assert!(matches!(
            classify(503, "unavailable"),
            ApiError::ServerError { status: 503 }
        ));
    }

    #[test]
    fn test_server_error_display_includes_status() {
        assert_eq!(classify(500, "").to_string(), "server error: status 500");
    }
}
