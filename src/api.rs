/// Client for the Analysis Service. Two contract calls plus a health
/// probe, each raced against a deadline so a hung request can never
/// leave the UI submitting forever.
use futures::future::{select, Either};
use futures::pin_mut;
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use leptos::logging::{error, log};
use serde_json::Value;

use crate::config::{ApiConfig, REQUEST_TIMEOUT_MS};
use crate::error::ApiError;
use crate::models::review::{AnalyzeRequest, HealthStatus, ReviewRecord};

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /api/reviews`: the full history, newest first.
    pub async fn fetch_reviews(&self) -> Result<Vec<ReviewRecord>, ApiError> {
        let url = self.url("/api/reviews");
        log!("[API] GET {}", url);

        let response = send_with_timeout(Request::get(&url).send()).await?;
        let body = json_body(response).await?;
        match ReviewRecord::list_from_value(&body) {
            Some(records) => {
                log!("[API] Loaded {} reviews", records.len());
                Ok(records)
            }
            None => {
                error!("[API] History response was not an array");
                Err(ApiError::Parse("expected a JSON array".to_string()))
            }
        }
    }

    /// `POST /api/analyze-review`: one record on success. The service
    /// answers 201; any 2xx is treated as success.
    pub async fn analyze_review(&self, request: &AnalyzeRequest) -> Result<ReviewRecord, ApiError> {
        let url = self.url("/api/analyze-review");
        log!("[API] POST {} ({} chars)", url, request.review_text.chars().count());

        let http_request = Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        let response = send_with_timeout(http_request.send()).await?;
        let body = json_body(response).await?;
        Ok(ReviewRecord::from_value(&body))
    }

    /// `GET /api/health`: service status probe, display only.
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        let url = self.url("/api/health");
        let response = send_with_timeout(Request::get(&url).send()).await?;
        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        response
            .json::<HealthStatus>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

/// Races a request against the configured deadline.
async fn send_with_timeout<F>(fut: F) -> Result<Response, ApiError>
where
    F: std::future::Future<Output = Result<Response, gloo_net::Error>>,
{
    let timeout = TimeoutFuture::new(REQUEST_TIMEOUT_MS);
    pin_mut!(fut);
    pin_mut!(timeout);
    match select(fut, timeout).await {
        Either::Left((result, _)) => result.map_err(|e| {
            error!("[API] Request failed: {}", e);
            ApiError::Network(e.to_string())
        }),
        Either::Right(((), _)) => {
            error!("[API] Request exceeded {}ms deadline", REQUEST_TIMEOUT_MS);
            Err(ApiError::Timeout)
        }
    }
}

/// Accepts any 2xx with a JSON body; everything else becomes an error
/// with the message the service put in `error` or `detail`, if any.
async fn json_body(response: Response) -> Result<Value, ApiError> {
    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    response
        .json::<Value>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let message = match response.json::<Value>().await {
        Ok(body) => body
            .get("error")
            .and_then(Value::as_str)
            .or_else(|| body.get("detail").and_then(Value::as_str))
            .map(str::to_string),
        Err(_) => None,
    };
    ApiError::Server {
        status,
        message: message.unwrap_or_else(|| format!("Request failed with status {status}")),
    }
}
