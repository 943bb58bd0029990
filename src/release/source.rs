use std::time::Duration;

use anyhow::{Context as _, Result};
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use url::Url;

use crate::config::Config;

/// Where release metadata comes from
///
/// Implementations issue a single request per call and hand back the raw payload, decoding is
/// left to the caller.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReleaseSource: std::fmt::Debug + Send + Sync {
    async fn fetch(&self) -> Result<Vec<u8>>;
}

/// Fetches release metadata with a plain http GET
#[derive(Debug, Clone)]
pub struct HttpReleaseSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpReleaseSource {
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent).context("Invalid user agent")?,
        );

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build().context("Failed to build http client")?,
            url: config.release_url.clone(),
        })
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl ReleaseSource for HttpReleaseSource {
    #[tracing::instrument(skip(self), fields(url = %self.url), err)]
    async fn fetch(&self) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .context("Failed to request release metadata")?
            .error_for_status()
            .context("Release endpoint returned an error")?;

        let bytes = response
            .bytes()
            .await
            .context("Failed to read release metadata")?;

        tracing::debug!(len = bytes.len(), "Received release metadata");

        Ok(bytes.to_vec())
    }
}
