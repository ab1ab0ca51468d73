use std::time::Duration;

use anyhow::Context;
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use tracing::{debug, instrument, warn};

use crate::{config::PipelineConfig, error::AppError};

/// Downstream response copied as-is for the caller.
#[derive(Debug, Clone)]
pub struct RelayedResponse {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

impl IntoResponse for RelayedResponse {
    fn into_response(self) -> Response {
        let mut res = Response::new(Body::from(self.body));
        *res.status_mut() = self.status;
        if let Some(ct) = self.content_type {
            res.headers_mut().insert(CONTENT_TYPE, ct);
        }
        res
    }
}

/// Client for the pipeline service endpoint.
#[derive(Clone)]
pub struct PipelineClient {
    http: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl PipelineClient {
    pub fn new(cfg: &PipelineConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(cfg.timeout)
            .build()
            .context("build pipeline http client")?;
        Ok(Self {
            http,
            url: cfg.url.clone(),
            timeout: cfg.timeout,
        })
    }

    /// Issues one bodiless POST and returns the downstream status, body and
    /// content-type untouched. No retries.
    #[instrument(skip(self), fields(url = %self.url))]
    pub async fn relay(&self) -> Result<RelayedResponse, AppError> {
        let resp = self
            .http
            .post(&self.url)
            .send()
            .await
            .map_err(|e| self.upstream_error(e))?;

        let status =
            StatusCode::from_u16(resp.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| HeaderValue::from_bytes(v.as_bytes()).ok());
        let body = resp.bytes().await.map_err(|e| self.upstream_error(e))?;

        debug!(%status, bytes = body.len(), "pipeline responded");
        Ok(RelayedResponse {
            status,
            content_type,
            body,
        })
    }

    fn upstream_error(&self, e: reqwest::Error) -> AppError {
        if e.is_timeout() {
            warn!(timeout_secs = self.timeout.as_secs_f64(), "pipeline call timed out");
            AppError::UpstreamTimeout(format!("no response within {:?}", self.timeout))
        } else {
            warn!(error = %e, "pipeline call failed");
            AppError::Upstream(e.to_string())
        }
    }
}
