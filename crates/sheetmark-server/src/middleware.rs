use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use axum::{
    extract::{Request, State},
    http::{HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tokio::sync::Mutex;
use uuid::Uuid;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Correlation id for one inbound request, available to handlers as an extension.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Search quota shared by every clone of the router.
///
/// Counts requests in fixed windows of `window`; a `limit` of 0 turns the
/// quota off.
#[derive(Debug, Clone)]
pub struct RateLimitState {
    limit: usize,
    window: Duration,
    current: Arc<Mutex<(Instant, usize)>>,
}

impl RateLimitState {
    #[must_use]
    pub fn new(limit: usize, window: Duration) -> Self {
        Self {
            limit,
            window,
            current: Arc::new(Mutex::new((Instant::now(), 0))),
        }
    }

    /// Takes one slot from the current window, opening a new window once the
    /// old one has elapsed. Returns `false` when the window is exhausted.
    pub async fn try_acquire(&self) -> bool {
        if self.limit == 0 {
            return true;
        }

        let mut current = self.current.lock().await;
        let (opened_at, used) = &mut *current;
        if opened_at.elapsed() >= self.window {
            *opened_at = Instant::now();
            *used = 0;
        }
        if *used >= self.limit {
            return false;
        }
        *used += 1;
        true
    }
}

#[derive(Debug, Serialize)]
struct RateLimitedBody {
    error: RateLimitedError,
}

#[derive(Debug, Serialize)]
struct RateLimitedError {
    code: &'static str,
    message: String,
}

/// Reuses the caller's `x-request-id` or mints a `UUIDv4`, then echoes it on
/// the response.
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    req.extensions_mut().insert(RequestId(id.clone()));
    let mut res = next.run(req).await;
    if let Ok(val) = HeaderValue::from_str(&id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, val);
    }
    res
}

/// Rejects searches with 429 once the current window's quota is spent.
pub async fn enforce_rate_limit(
    State(rate_limit): State<RateLimitState>,
    req: Request,
    next: Next,
) -> Response {
    if rate_limit.try_acquire().await {
        return next.run(req).await;
    }

    tracing::warn!(
        limit = rate_limit.limit,
        window_secs = rate_limit.window.as_secs(),
        "search quota exhausted"
    );
    let body = RateLimitedBody {
        error: RateLimitedError {
            code: "rate_limited",
            message: format!(
                "at most {} searches per {}s",
                rate_limit.limit,
                rate_limit.window.as_secs()
            ),
        },
    };
    (StatusCode::TOO_MANY_REQUESTS, Json(body)).into_response()
}
