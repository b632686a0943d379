//! HTTP client for exchange pages.

use crate::retry::{RetryPolicy, retry};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::{Instrument, Span, debug, info_span, warn};

/// Configuration for the page fetcher.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Per-request timeout.
    pub timeout: Duration,
    /// Connection establishment timeout.
    pub connect_timeout: Duration,
    /// Retry policy applied to every page.
    pub retry: RetryPolicy,
    /// User agent string.
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            retry: RetryPolicy::default(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
                .to_string(),
        }
    }
}

/// Errors that can occur while fetching a page.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("Server returned {status} for {url}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// Every attempt failed.
    #[error("Failed to fetch {url} after {attempts} attempts: {last}")]
    Exhausted {
        /// Requested URL.
        url: String,
        /// Number of attempts performed.
        attempts: u32,
        /// Error of the final attempt.
        #[source]
        last: Box<FetchError>,
    },
}

/// HTTP client with a reused session and retry logic.
///
/// Fetches are sequential: each call completes (or gives up) before
/// returning, and the underlying connection pool is shared across calls.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
    config: FetcherConfig,
    span: Span,
}

impl PageFetcher {
    /// Creates a new page fetcher with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: FetcherConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self {
            client,
            config,
            span: info_span!("fetch"),
        })
    }

    /// Creates a fetcher with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(FetcherConfig::default())
    }

    /// Sets the logging context for this fetcher.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Returns the fetcher configuration.
    #[must_use]
    pub const fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Fetches a page body as text.
    ///
    /// Transport errors and non-success statuses are retried according to
    /// the configured [`RetryPolicy`].
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Exhausted`] once every attempt has failed.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let client = &self.client;
        let result = retry(&self.config.retry, |attempt| async move {
            debug!(url, attempt = attempt + 1, "fetching page");
            Self::get_once(client, url).await
        })
        .instrument(self.span.clone())
        .await;

        result.map_err(|e| {
            warn!(parent: &self.span, url, attempts = e.attempts, error = %e.last, "giving up on page");
            FetchError::Exhausted {
                url: url.to_string(),
                attempts: e.attempts,
                last: Box::new(e.last),
            }
        })
    }

    /// Performs a single GET request.
    async fn get_once(client: &Client, url: &str) -> Result<String, FetchError> {
        let response = client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::extract::State;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use axum::routing::get;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    async fn spawn_server(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn fast_fetcher() -> PageFetcher {
        PageFetcher::new(FetcherConfig {
            retry: RetryPolicy::new(3, Duration::from_millis(10)),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_fetcher_config_default() {
        let config = FetcherConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.retry.max_attempts, 3);
        assert_eq!(config.retry.base_delay, Duration::from_secs(1));
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[tokio::test]
    async fn test_fetcher_creation() {
        let fetcher = PageFetcher::with_defaults();
        assert!(fetcher.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_recovers_from_server_errors() {
        let hits = Arc::new(AtomicU32::new(0));
        let router = Router::new()
            .route(
                "/fr/marche/status",
                get(|State(hits): State<Arc<AtomicU32>>| async move {
                    if hits.fetch_add(1, Ordering::SeqCst) < 2 {
                        (StatusCode::SERVICE_UNAVAILABLE, "busy").into_response()
                    } else {
                        "<div class=\"market-status\">Ouvert</div>".into_response()
                    }
                }),
            )
            .with_state(Arc::clone(&hits));
        let base = spawn_server(router).await;

        let body = fast_fetcher()
            .fetch(&format!("{base}/fr/marche/status"))
            .await
            .unwrap();

        assert!(body.contains("Ouvert"));
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_fetch_gives_up_after_three_attempts() {
        let hits = Arc::new(AtomicU32::new(0));
        let router = Router::new()
            .route(
                "/down",
                get(|State(hits): State<Arc<AtomicU32>>| async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    StatusCode::INTERNAL_SERVER_ERROR
                }),
            )
            .with_state(Arc::clone(&hits));
        let base = spawn_server(router).await;

        let err = fast_fetcher()
            .fetch(&format!("{base}/down"))
            .await
            .unwrap_err();

        match err {
            FetchError::Exhausted { attempts, last, .. } => {
                assert_eq!(attempts, 3);
                assert!(matches!(*last, FetchError::Status { status: 500, .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_fetch_not_found_is_retried_too() {
        let base = spawn_server(Router::new()).await;

        let err = fast_fetcher()
            .fetch(&format!("{base}/missing"))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Exhausted { attempts: 3, .. }));
    }
}
