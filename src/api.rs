//! Page fetching.
//!
//! A single bounded GET per run. No retries and no backoff: rerunning the
//! process is the retry mechanism.
//!
//! # Architecture
//!
//! - [`PageSource`]: trait the pipeline fetches through
//! - [`HttpSource`]: the `reqwest` implementation used in production

use crate::error::ScrapeError;
use crate::utils::truncate_for_log;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Something that can return the body of a page.
pub trait PageSource {
    /// Fetch `url` and return its body.
    ///
    /// Transport failures, timeouts and non-success statuses all surface as
    /// [`ScrapeError::Fetch`].
    async fn get(&self, url: &Url) -> Result<String, ScrapeError>;
}

/// HTTP client with a fixed total timeout.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(timeout: Duration) -> Result<Self, ScrapeError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    #[instrument(level = "info", skip_all, fields(%url))]
    async fn get(&self, url: &Url) -> Result<String, ScrapeError> {
        let t0 = Instant::now();
        let res = async {
            let body = self
                .client
                .get(url.clone())
                .send()
                .await?
                .error_for_status()?
                .text()
                .await?;
            Ok::<_, reqwest::Error>(body)
        }
        .await;
        let dt = t0.elapsed();

        match res {
            Ok(body) => {
                info!(elapsed_ms = dt.as_millis() as u64, bytes = body.len(), "Fetched page");
                debug!(preview = %truncate_for_log(&body, 300), "Page body");
                Ok(body)
            }
            Err(e) => {
                warn!(
                    elapsed_ms = dt.as_millis() as u64,
                    timeout = e.is_timeout(),
                    status = ?e.status(),
                    error = %e,
                    "Fetch failed"
                );
                Err(e.into())
            }
        }
    }
}
