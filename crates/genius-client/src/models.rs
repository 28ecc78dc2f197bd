// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{GeniusError, Result};
use genius_config::GeniusConfig;
use serde::{Deserialize, Serialize};

/// A song matched on Genius.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SongRecord {
    /// Genius song ID.
    pub id: u64,
    /// Song title.
    pub title: String,
    /// Genius web page for the song.
    pub url: String,
    /// Album art image (jpg/png).
    pub album_art_url: String,
}

/// Search hits carry the same fields as a looked-up song.
pub type SearchResult = SongRecord;

/// Parameters for a song search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    pub title: String,
    pub artist: String,
    /// Genius developer access token.
    pub api_key: String,
    /// Strip annotations like "(Remix)" or "feat." before searching.
    pub optimize_query: bool,
}

impl SearchOptions {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            api_key: api_key.into(),
            optimize_query: false,
        }
    }

    /// Build options using the access token and query preference from configuration.
    pub fn from_config(
        config: &GeniusConfig,
        title: impl Into<String>,
        artist: impl Into<String>,
    ) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or(GeniusError::MissingApiKey)?;

        Ok(Self::new(title, artist, api_key).optimize_query(config.optimize_query))
    }

    pub fn optimize_query(mut self, optimize: bool) -> Self {
        self.optimize_query = optimize;
        self
    }
}

/// Status echo present on every Genius response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Meta {
    pub status: u16,
}

/// Song object as Genius serializes it.
#[derive(Debug, Clone, Deserialize)]
struct SongPayload {
    id: u64,
    url: String,
    title: String,
    song_art_image_url: String,
}

impl From<SongPayload> for SongRecord {
    fn from(song: SongPayload) -> Self {
        SongRecord {
            id: song.id,
            title: song.title,
            url: song.url,
            album_art_url: song.song_art_image_url,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct Hit {
    result: SongPayload,
}

#[derive(Debug, Clone, Deserialize)]
struct SearchPayload {
    hits: Vec<Hit>,
}

#[derive(Debug, Clone, Deserialize)]
struct SongLookupPayload {
    song: SongPayload,
}

/// Response of `GET /search`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SearchEnvelope {
    pub meta: Meta,
    response: SearchPayload,
}

impl SearchEnvelope {
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Hits mapped to records, in the order Genius ranked them.
    pub fn into_records(self) -> Vec<SongRecord> {
        self.response
            .hits
            .into_iter()
            .map(|hit| hit.result.into())
            .collect()
    }
}

/// Response of `GET /songs/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SongEnvelope {
    pub meta: Meta,
    response: SongLookupPayload,
}

impl SongEnvelope {
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    pub fn into_record(self) -> SongRecord {
        self.response.song.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_options_default_to_verbatim_query() {
        let options = SearchOptions::new("HUMBLE.", "Kendrick Lamar", "token");
        assert!(!options.optimize_query);
        assert!(options.optimize_query(true).optimize_query);
    }

    #[test]
    fn test_search_options_from_config() {
        let config = GeniusConfig {
            api_key: Some("token".to_string()),
            optimize_query: true,
            ..GeniusConfig::default()
        };

        let options = SearchOptions::from_config(&config, "DNA.", "Kendrick Lamar").unwrap();
        assert_eq!(options.api_key, "token");
        assert!(options.optimize_query);
        assert_eq!(options.title, "DNA.");
    }

    #[test]
    fn test_search_options_from_config_without_key() {
        let result = SearchOptions::from_config(&GeniusConfig::default(), "DNA.", "Kendrick Lamar");
        assert!(matches!(result, Err(GeniusError::MissingApiKey)));
    }

    #[test]
    fn test_song_envelope_maps_wire_names() {
        let body = br#"{
            "meta": { "status": 200 },
            "response": { "song": {
                "id": 3039923,
                "url": "https://genius.com/Kendrick-lamar-humble-lyrics",
                "title": "HUMBLE.",
                "song_art_image_url": "https://images.genius.com/humble.jpg",
                "primary_artist": { "name": "Kendrick Lamar" }
            } }
        }"#;

        let envelope = SongEnvelope::from_slice(body).unwrap();
        assert_eq!(envelope.meta.status, 200);
        assert_eq!(
            envelope.into_record(),
            SongRecord {
                id: 3039923,
                title: "HUMBLE.".to_string(),
                url: "https://genius.com/Kendrick-lamar-humble-lyrics".to_string(),
                album_art_url: "https://images.genius.com/humble.jpg".to_string(),
            }
        );
    }

    #[test]
    fn test_search_envelope_rejects_missing_fields() {
        let body = br#"{ "meta": { "status": 200 }, "response": { "hits": [ { "result": { "id": 1 } } ] } }"#;
        assert!(matches!(
            SearchEnvelope::from_slice(body),
            Err(GeniusError::Parse(_))
        ));
    }
}
