use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

/// Errors surfaced by the gateway, rendered as `{"msg": ...}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("missing credentials")]
    MissingCredentials,

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    InvalidCredentials(&'static str),

    #[error("{0}")]
    Unauthorized(&'static str),

    #[error("pipeline unavailable")]
    Upstream(String),

    #[error("pipeline timed out")]
    UpstreamTimeout(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingCredentials | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials(_) | Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::UpstreamTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = self.to_string();
        let body = match self {
            Self::Upstream(details) | Self::UpstreamTimeout(details) => ErrorBody {
                msg,
                details: Some(details),
            },
            Self::Internal(e) => {
                error!(error = %format!("{e:#}"), "internal error");
                ErrorBody {
                    msg: "internal server error".into(),
                    details: None,
                }
            }
            _ => ErrorBody { msg, details: None },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(AppError::MissingCredentials.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::InvalidCredentials("invalid credentials").status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AppError::Unauthorized("invalid token").status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::Upstream("refused".into()).status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            AppError::UpstreamTimeout("10s".into()).status(),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            AppError::Internal(anyhow::anyhow!("db down")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn missing_credentials_message() {
        assert_eq!(AppError::MissingCredentials.to_string(), "missing credentials");
    }
}
