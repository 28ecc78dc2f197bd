// SPDX-License-Identifier: GPL-3.0-or-later

//! Genius API client for song search and lookup.
//!
//! This crate wraps the Genius search and song endpoints, mapping their
//! responses onto [`SongRecord`]. Search queries can optionally be normalized
//! to strip remix/edition annotations before they are sent.

pub mod client;
pub mod error;
pub mod models;
pub mod query;

pub use client::{GeniusClient, GeniusClientBuilder};
pub use error::{GeniusError, Result};
pub use models::{SearchOptions, SearchResult, SongRecord};
pub use query::normalize_query;
