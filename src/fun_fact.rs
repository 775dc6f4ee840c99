//! Best-effort client for the external numbers fact service.

use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::errors::FactError;

/// Returned when the fact service cannot be reached or times out.
pub const FACT_UNAVAILABLE: &str = "Fun fact unavailable at the moment.";

/// Default location of the numbers fact service.
pub const DEFAULT_FACT_URL: &str = "http://numbersapi.com";

/// Default upper bound on a single fact lookup.
pub const DEFAULT_FACT_TIMEOUT: Duration = Duration::from_secs(2);

/// Settings for reaching the external fact service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactServiceConfig {
    /// Base URL; lookups go to `{base_url}/{n}/math`.
    pub base_url: String,
    /// Timeout applied to every lookup.
    pub timeout: Duration,
}

impl Default for FactServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_FACT_URL.to_string(),
            timeout: DEFAULT_FACT_TIMEOUT,
        }
    }
}

/// HTTP client for the numbers fact service.
#[derive(Debug, Clone)]
pub struct FactClient {
    client: Client,
    base_url: String,
}

impl FactClient {
    /// Builds a client whose requests are bounded by `config.timeout`.
    pub fn new(config: &FactServiceConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Constructs the lookup URL for `n`.
    pub fn fact_url(&self, n: i64) -> String {
        format!("{}/{}/math", self.base_url, n)
    }

    /// Fetches the fact text for `n`.  Only status 200 is treated as success.
    pub async fn lookup(&self, n: i64) -> Result<String, FactError> {
        let url = self.fact_url(n);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FactError::Status(status.as_u16()));
        }
        Ok(response.text().await?)
    }

    /// Fetches the fact for `n`, substituting a fallback message on any failure.
    pub async fn fun_fact(&self, n: i64) -> String {
        match self.lookup(n).await {
            Ok(fact) => fact,
            Err(err) => {
                tracing::warn!(number = n, error = %err, "fact lookup failed");
                fallback_fact(n, &err)
            }
        }
    }
}

/// The message reported in place of a fact when `err` prevented the lookup.
pub fn fallback_fact(n: i64, err: &FactError) -> String {
    match err {
        FactError::Transport(_) => FACT_UNAVAILABLE.to_string(),
        FactError::Status(_) => format!("No fun fact available for {}.", n),
    }
}
