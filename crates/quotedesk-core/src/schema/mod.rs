//! # Schema
//!
//! Plain data shapes exchanged with the quotedesk API. The module holds no
//! runtime state; the fetch layer, the view and the CLI all decode into and
//! render from these types.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`TickerData`] | Instrument symbol, name and optional exchange/type |
//! | [`PriceBar`] | One trading day of OHLCV data |
//! | [`PriceDownload`] | Price series for a ticker over a date window |
//! | [`NewsItem`] | Headline with source and publication time |
//! | [`ResearchItem`] | News item with optional analyst and rating |
//! | [`DocsBundle`] | News and research for one ticker |
//! | [`QueryHistoryItem`] | Ticker plus date range, stamped when recorded |
//! | [`EventData`] | Calendar event |
//! | [`CommitResponse`] | Content hash and URL of a committed snapshot |
//!
//! Optional JSON fields map to `Option<T>`; unknown fields are ignored.

use serde::de::DeserializeOwned;

use crate::CoreError;

mod commit;
mod docs;
mod event;
mod history;
mod price;
mod ticker;
mod timestamp;

pub use commit::CommitResponse;
pub use docs::{DocsBundle, NewsItem, ResearchItem};
pub use event::EventData;
pub use history::{DateRange, QueryHistoryItem};
pub use price::{PriceBar, PriceDownload};
pub use ticker::{AssetType, TickerData};
pub use timestamp::{Timestamp, UtcDateTime};

/// Decode one payload into a schema type.
pub fn decode<T: DeserializeOwned>(json: &str) -> Result<T, CoreError> {
    Ok(serde_json::from_str(json)?)
}
