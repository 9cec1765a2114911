//! Per-client fixed-window rate limiting
//!
//! The limiter is an ordinary value owned by the router state, so tests can
//! build one with their own limits or clear it between requests.

use crate::config::RateLimitConfig;
use crate::error::ServerError;
use axum::{
    extract::{ConnectInfo, Request, State},
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use dashmap::DashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::warn;

/// Standard rate limit header names
pub mod headers {
    pub const RATE_LIMIT_LIMIT: &str = "ratelimit-limit";
    pub const RATE_LIMIT_REMAINING: &str = "ratelimit-remaining";
    pub const RATE_LIMIT_RESET: &str = "ratelimit-reset";
}

/// Outcome of a single rate limit check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitStatus {
    pub limited: bool,
    pub limit: u32,
    pub remaining: u32,
    /// Time until the client's current window ends
    pub reset_after: Duration,
}

impl RateLimitStatus {
    /// Seconds until reset, rounded up
    pub fn reset_after_secs(&self) -> u64 {
        let secs = self.reset_after.as_secs();
        if self.reset_after.subsec_nanos() > 0 {
            secs + 1
        } else {
            secs
        }
    }

    fn apply_headers(&self, map: &mut HeaderMap) {
        map.insert(headers::RATE_LIMIT_LIMIT, HeaderValue::from(self.limit));
        map.insert(headers::RATE_LIMIT_REMAINING, HeaderValue::from(self.remaining));
        map.insert(
            headers::RATE_LIMIT_RESET,
            HeaderValue::from(self.reset_after_secs()),
        );
    }
}

/// Fixed-window request counter keyed by client IP
#[derive(Clone)]
pub struct RateLimiter {
    /// IP -> (request_count, window_start)
    state: Arc<DashMap<IpAddr, (u32, Instant)>>,
    limit: u32,
    window: Duration,
    cleanup_threshold: usize,
}

impl RateLimiter {
    pub fn new(config: &RateLimitConfig) -> Self {
        Self {
            state: Arc::new(DashMap::new()),
            limit: config.max_requests,
            window: Duration::from_secs(config.window_secs),
            cleanup_threshold: config.cleanup_threshold,
        }
    }

    /// Count one request from `client` and report whether it is allowed
    pub fn check(&self, client: IpAddr) -> RateLimitStatus {
        let now = Instant::now();

        let mut entry = self.state.entry(client).or_insert((0, now));
        let (count, window_start) = entry.value_mut();

        if now.duration_since(*window_start) >= self.window {
            *count = 0;
            *window_start = now;
        }

        let limited = *count >= self.limit;
        if !limited {
            *count += 1;
        }

        let remaining = self.limit.saturating_sub(*count);
        let reset_after = self
            .window
            .saturating_sub(now.duration_since(*window_start));
        drop(entry);

        if self.state.len() > self.cleanup_threshold {
            self.cleanup_expired(now);
        }

        RateLimitStatus {
            limited,
            limit: self.limit,
            remaining,
            reset_after,
        }
    }

    /// Forget every tracked client
    pub fn reset(&self) {
        self.state.clear();
    }

    /// Number of clients currently tracked
    pub fn tracked_clients(&self) -> usize {
        self.state.len()
    }

    /// Window length as shown to clients, e.g. "15 minutes"
    pub fn window_description(&self) -> String {
        let secs = self.window.as_secs();
        match secs {
            60 => "1 minute".to_string(),
            s if s > 0 && s % 60 == 0 => format!("{} minutes", s / 60),
            1 => "1 second".to_string(),
            s => format!("{} seconds", s),
        }
    }

    fn cleanup_expired(&self, now: Instant) {
        let window = self.window;
        self.state
            .retain(|_ip, (_count, start)| now.duration_since(*start) < window);
    }
}

/// Middleware enforcing the limiter on every request
///
/// The client key is the peer address from `ConnectInfo`; the unspecified
/// address is used when the server was not started with connect info.
pub async fn rate_limit(
    State(limiter): State<RateLimiter>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    request: Request,
    next: Next,
) -> Response {
    let client = connect_info
        .map(|ConnectInfo(addr)| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    let status = limiter.check(client);

    if status.limited {
        warn!("Rate limit exceeded for {}", client);
        let mut response = ServerError::RateLimited {
            retry_after_secs: status.reset_after_secs(),
            window: limiter.window_description(),
        }
        .into_response();
        status.apply_headers(response.headers_mut());
        return response;
    }

    let mut response = next.run(request).await;
    status.apply_headers(response.headers_mut());
    response
}
