//! Configuration for the scheduler client and view.

use std::time::Duration;

/// Default base URL for the scheduler service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// How the view surfaces a failed refresh.
///
/// Either way the refresh itself returns a `Result`; this only controls what
/// gets rendered afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorDisplay {
    /// Render an error banner above the last known snapshot.
    #[default]
    Banner,
    /// Keep rendering the stale snapshot with no visible error.
    KeepStale,
}

/// Configuration for the scheduler client.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Base URL of the scheduler service (no trailing slash required)
    pub base_url: String,
    /// User agent string
    pub user_agent: String,
    /// Connect timeout for all requests
    pub connect_timeout: Duration,
    /// Overall request timeout
    pub timeout: Duration,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: format!("schedview/{}", env!("CARGO_PKG_VERSION")),
            connect_timeout: Duration::from_secs(10),
            timeout: Duration::from_secs(30),
        }
    }
}
