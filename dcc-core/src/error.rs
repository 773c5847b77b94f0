use thiserror::Error;

/// Errors returned by the submission server client and view models.
///
/// `Display` is operator-facing: the dashboard shows it verbatim next to the
/// control that failed.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),
    /// Non-success response. `message` is the server's explanation when it sent one.
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("Not authorized. Please log in again.")]
    Unauthorized,
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0}")]
    InvalidRequest(String),
    #[error("A previous request is still in progress")]
    InFlight,
    /// A newer fetch of the same data settled first; this outcome was dropped.
    #[error("Superseded by a newer request")]
    Superseded,
}

impl ApiError {
    /// Map a non-success status and its body to an error.
    ///
    /// The server reports failures as `{"code": "...", ...}` or
    /// `{"message": "..."}`; plain-text bodies are passed through.
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 401 || status == 403 {
            return ApiError::Unauthorized;
        }
        ApiError::Server {
            status,
            message: server_message(status, body),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

fn server_message(status: u16, body: &str) -> String {
    let body = body.trim();

    if let Ok(serde_json::Value::Object(fields)) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "code"] {
            if let Some(text) = fields.get(key).and_then(|v| v.as_str()) {
                if !text.is_empty() {
                    return text.to_string();
                }
            }
        }
    }

    if body.is_empty() {
        format!("Request failed with status {status}")
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_statuses() {
        assert!(ApiError::from_response(401, "").is_unauthorized());
        assert!(ApiError::from_response(403, "{\"code\":\"UNAUTHORIZED\"}").is_unauthorized());
    }

    #[test]
    fn test_message_field_is_preferred() {
        let err = ApiError::from_response(400, r#"{"code":"X","message":"Release is locked"}"#);
        assert_eq!(err.to_string(), "Release is locked");
    }

    #[test]
    fn test_code_field_fallback() {
        let err = ApiError::from_response(400, r#"{"code":"RELEASE_EXCEPTION","parameters":[]}"#);
        assert_eq!(err.to_string(), "RELEASE_EXCEPTION");
        assert!(matches!(err, ApiError::Server { status: 400, .. }));
    }

    #[test]
    fn test_plain_text_body() {
        let err = ApiError::from_response(409, "Projects [p1] have files being transfered\n");
        assert_eq!(err.to_string(), "Projects [p1] have files being transfered");
    }

    #[test]
    fn test_empty_body() {
        let err = ApiError::from_response(503, "   ");
        assert_eq!(err.to_string(), "Request failed with status 503");
    }
}
