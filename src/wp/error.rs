use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WpError {
    #[error("http error: {0}")]
    Http(#[source] reqwest::Error),
    #[error("request timed out")]
    Timeout,
    #[error("api error {status}: {message}")]
    Api {
        status: StatusCode,
        code: Option<String>,
        message: String,
    },
    #[error("decode error: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("token response did not contain a token")]
    MissingToken,
}

impl WpError {
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            WpError::Timeout
        } else {
            WpError::Http(err)
        }
    }

    /// Build an `Api` error from a non-success response body. WordPress
    /// answers with `{ "code": ..., "message": ..., "data": { "status": ... } }`;
    /// anything else falls back to the status reason.
    pub(crate) fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let parsed = serde_json::from_slice::<ApiErrorBody>(body).ok();
        let (code, message) = match parsed {
            Some(b) => (b.code, b.message.unwrap_or_else(|| fallback_message(status))),
            None => (None, fallback_message(status)),
        };
        WpError::Api { status, code, message }
    }
}

fn fallback_message(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or("unknown error").to_string()
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_uses_wordpress_message() {
        let body = br#"{"code":"rest_post_invalid_id","message":"Invalid post ID.","data":{"status":404}}"#;
        let err = WpError::from_response(StatusCode::NOT_FOUND, body);
        match &err {
            WpError::Api { status, code, message } => {
                assert_eq!(*status, StatusCode::NOT_FOUND);
                assert_eq!(code.as_deref(), Some("rest_post_invalid_id"));
                assert_eq!(message, "Invalid post ID.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.to_string(), "api error 404 Not Found: Invalid post ID.");
    }

    #[test]
    fn api_error_falls_back_to_reason_for_html_body() {
        let err = WpError::from_response(StatusCode::BAD_GATEWAY, b"<html>upstream down</html>");
        assert_eq!(err.to_string(), "api error 502 Bad Gateway: Bad Gateway");
    }
}
