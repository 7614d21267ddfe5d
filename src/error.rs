use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, error};

pub const URL_NOT_FOUND: &str = "URL not found";
pub const DATABASE_ERROR: &str = "Database error";

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

/// Every handler either returns its full result or one of these.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The query ran but matched nothing.
    #[error("{0}")]
    NotFound(&'static str),

    /// The store could not execute the query. Details stay server-side.
    #[error("store failure: {0:#}")]
    Store(#[from] anyhow::Error),
}

// marks a response as produced by ApiError, so the status policy can find it
#[derive(Clone, Copy, Debug)]
struct ApiErrorMarker;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(message) => {
                debug!(reason = message, "lookup matched no rows");
                (StatusCode::NOT_FOUND, message)
            }
            ApiError::Store(e) => {
                error!("query failed: {e:#}");
                (StatusCode::INTERNAL_SERVER_ERROR, DATABASE_ERROR)
            }
        };

        let mut response = (status, Json(ErrorBody { error: message })).into_response();
        response.extensions_mut().insert(ApiErrorMarker);
        response
    }
}

/// How handler errors map onto HTTP status codes at the boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ErrorStatusPolicy {
    /// Error bodies are sent with 200, as existing clients expect.
    #[default]
    Legacy,
    /// 404 for not-found, 500 for store failures.
    Standard,
}

impl FromStr for ErrorStatusPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "standard" => Ok(Self::Standard),
            other => anyhow::bail!(
                "ERROR_STATUS_POLICY must be \"legacy\" or \"standard\", got {other:?}"
            ),
        }
    }
}

pub async fn apply_error_status(
    State(policy): State<ErrorStatusPolicy>,
    mut response: Response,
) -> Response {
    if policy == ErrorStatusPolicy::Legacy
        && response.extensions().get::<ApiErrorMarker>().is_some()
    {
        *response.status_mut() = StatusCode::OK;
    }
    response
}

pub async fn url_not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: URL_NOT_FOUND,
        }),
    )
}
