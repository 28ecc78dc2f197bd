// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{GeniusError, Result};
use crate::models::{SearchEnvelope, SearchOptions, SongEnvelope, SongRecord};
use crate::query::{encode_query_value, search_query};
use genius_config::{GeniusConfig, DEFAULT_BASE_URL};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument, trace, warn};
use url::Url;

/// Genius API client.
#[derive(Debug, Clone)]
pub struct GeniusClient {
    client: Client,
    /// Stored without a trailing slash.
    base_url: String,
}

impl GeniusClient {
    /// Create a new Genius client with default settings.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a client builder for custom configuration.
    pub fn builder() -> GeniusClientBuilder {
        GeniusClientBuilder::default()
    }

    /// Create a client from loaded configuration.
    pub fn from_config(config: &GeniusConfig) -> Result<Self> {
        let mut builder = Self::builder().base_url(config.base_url.clone());
        // A zero timeout would fail every request; treat it as unset.
        if let Some(secs) = config.timeout_secs.filter(|secs| *secs > 0) {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build()
    }

    /// Search songs by title and artist.
    ///
    /// Returns `None` when Genius reports no hits; otherwise the hits in the
    /// order Genius ranked them, best match first.
    ///
    /// # Example
    /// ```no_run
    /// # use genius_client::{GeniusClient, SearchOptions};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = GeniusClient::new()?;
    /// let options = SearchOptions::new("HUMBLE. (Skrillex Remix)", "Kendrick Lamar", "token")
    ///     .optimize_query(true);
    /// if let Some(songs) = client.search(&options).await? {
    ///     println!("{} matches", songs.len());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self, options), fields(title = %options.title, artist = %options.artist))]
    pub async fn search(&self, options: &SearchOptions) -> Result<Option<Vec<SongRecord>>> {
        let query = search_query(&options.title, &options.artist, options.optimize_query);
        let url = self.endpoint(
            "/search",
            &format!(
                "q={}&access_token={}",
                encode_query_value(&query),
                encode_query_value(&options.api_key)
            ),
        )?;

        let body = self.get(url).await?;
        let envelope = SearchEnvelope::from_slice(&body.bytes)
            .map_err(|error| body.decode_failed(error))?;
        trace!(target: "genius", "meta status: {}", envelope.meta.status);
        let records = envelope.into_records();

        if records.is_empty() {
            debug!(target: "genius", query = %query, "no hits");
            return Ok(None);
        }

        Ok(Some(records))
    }

    /// Look up a song by its Genius ID.
    ///
    /// # Example
    /// ```no_run
    /// # use genius_client::GeniusClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = GeniusClient::new()?;
    /// let song = client.fetch_by_id(3039923, "token").await?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self, api_key))]
    pub async fn fetch_by_id(&self, id: u64, api_key: &str) -> Result<Option<SongRecord>> {
        let url = self.endpoint(
            &format!("/songs/{}", id),
            &format!("access_token={}", encode_query_value(api_key)),
        )?;

        let body = self.get(url).await?;
        let envelope = SongEnvelope::from_slice(&body.bytes)
            .map_err(|error| body.decode_failed(error))?;
        trace!(target: "genius", "meta status: {}", envelope.meta.status);
        let record = envelope.into_record();

        Ok(Some(record))
    }

    /// Best match for the search, if any.
    pub async fn get_best_match(&self, options: &SearchOptions) -> Result<Option<SongRecord>> {
        Ok(self
            .search(options)
            .await?
            .and_then(|records| records.into_iter().next()))
    }

    /// Album art URL of the best match for the search, if any.
    pub async fn get_album_art_url(&self, options: &SearchOptions) -> Result<Option<String>> {
        Ok(self
            .get_best_match(options)
            .await?
            .map(|record| record.album_art_url))
    }

    fn endpoint(&self, path: &str, query: &str) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| GeniusError::InvalidUrl(e.to_string()))?;
        url.set_query(Some(query));
        Ok(url)
    }

    /// Perform a GET and return the body of any 2xx/3xx response.
    async fn get(&self, url: Url) -> Result<ResponseBody> {
        trace!(target: "genius", "GET {}", redact_token(&url));

        // reqwest errors carry the request URL, access token included.
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| GeniusError::Server(e.without_url()))?;

        let status = response.status().as_u16();
        debug!(target: "genius", "response status: {}", status);

        check_status(status)?;

        let bytes = response.bytes().await.map_err(|error| {
            debug!(target: "genius", error = %error.without_url(), "failed to read response body");
            GeniusError::ResponseError
        })?;
        trace!(target: "genius", "response body: {}", String::from_utf8_lossy(&bytes));

        Ok(ResponseBody {
            status,
            bytes: bytes.to_vec(),
        })
    }
}

/// 2xx and 3xx responses carry a body worth decoding.
pub(crate) fn check_status(status: u16) -> Result<()> {
    match status {
        200..=399 => Ok(()),
        400.. => Err(GeniusError::BadStatus(status)),
        _ => Err(GeniusError::UnexpectedStatus(status)),
    }
}

struct ResponseBody {
    status: u16,
    bytes: Vec<u8>,
}

impl ResponseBody {
    fn decode_failed(&self, error: GeniusError) -> GeniusError {
        warn!(
            target: "genius",
            status = self.status,
            body = %String::from_utf8_lossy(&self.bytes),
            %error,
            "failed to decode Genius response"
        );
        GeniusError::NoData
    }
}

pub(crate) fn redact_token(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == "access_token" {
                "***".to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

/// Builder for configuring a Genius client.
#[derive(Debug)]
pub struct GeniusClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
}

impl Default for GeniusClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl GeniusClientBuilder {
    /// Set a custom base URL (useful for testing with mock servers).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout duration.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the Genius client.
    ///
    /// # Errors
    /// Returns `InvalidUrl` if the base URL does not parse, or `Server` if the
    /// HTTP client cannot be created.
    pub fn build(self) -> Result<GeniusClient> {
        Url::parse(&self.base_url).map_err(|e| GeniusError::InvalidUrl(e.to_string()))?;

        let mut client = Client::builder();
        if let Some(timeout) = self.timeout {
            client = client.timeout(timeout);
        }

        Ok(GeniusClient {
            client: client
                .build()
                .map_err(|e| GeniusError::Server(e.without_url()))?,
            base_url: self.base_url.trim_end_matches('/').to_string(),
        })
    }
}
