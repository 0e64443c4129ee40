//! # Quotedesk Core
//!
//! Shared contracts for the quotedesk market-data debug desk.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`catalog`] | Static ticker catalog and search ranking |
//! | [`config`] | API origin and request timeout resolution |
//! | [`error`] | Core error types |
//! | [`fetch`] | Adapter for the backend test endpoint |
//! | [`http_client`] | HTTP client abstraction |
//! | [`schema`] | Data shapes exchanged with the API |
//! | [`view`] | Debug view state, busy flag and rendering |
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐   run_test   ┌──────────────────┐
//! │  CLI / User     │─────────────▶│ DebugView        │
//! └─────────────────┘              │ (results, busy)  │
//!          ▲                       └────────┬─────────┘
//!          │ snapshot()                     │ TestSource
//!          │                                ▼
//! ┌─────────────────┐              ┌──────────────────┐
//! │ ViewSnapshot    │              │ TestEndpoint     │
//! │ (control,panel) │              │ GET /api/test_.. │
//! └─────────────────┘              └────────┬─────────┘
//!                                           ▼
//!                                  ┌──────────────────┐
//!                                  │ HttpClient       │
//!                                  │ (reqwest/noop)   │
//!                                  └──────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use quotedesk_core::{ClientConfig, DebugView, ReqwestHttpClient, TestEndpoint};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let endpoint = TestEndpoint::new(ReqwestHttpClient::new(), ClientConfig::default());
//!     let view = DebugView::new();
//!
//!     view.run_test(&endpoint).await;
//!     print!("{}", view.snapshot().render_text());
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod fetch;
pub mod http_client;
pub mod schema;
pub mod view;

pub use catalog::{search, DEFAULT_SEARCH_LIMIT};
pub use config::{ClientConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use error::{CoreError, ValidationError};
pub use fetch::{extract_results, FetchError, TestEndpoint, TestSource, TEST_ENDPOINT_PATH};
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient,
};
pub use schema::{
    AssetType, CommitResponse, DateRange, DocsBundle, EventData, NewsItem, PriceBar,
    PriceDownload, QueryHistoryItem, ResearchItem, TickerData, Timestamp, UtcDateTime,
};
pub use view::{DebugView, TestOutcome, TriggerControl, ViewSnapshot, BUSY_LABEL, IDLE_LABEL};
