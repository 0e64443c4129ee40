//! CLI argument definitions for quotedesk.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `test` | Run the backend yfinance test and show its output |
//! | `search` | Search the static ticker catalog |
//! | `decode` | Decode a saved API payload into its typed shape |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--base-url` | `$QUOTEDESK_BASE_URL` or `http://localhost:3000` | API origin |
//! | `--timeout-ms` | none | Request timeout in ms |
//! | `--mock` | `false` | Answer requests offline with `{}` |
//! | `--format` | `text` | Output format (text, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Exit non-zero when the test fails |
//!
//! # Examples
//!
//! ```bash
//! quotedesk test
//! quotedesk --base-url https://desk.example.com test --format json --pretty
//! quotedesk search goog --limit 5
//! quotedesk decode prices ./spy.json --csv
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Market-data debug desk.
#[derive(Debug, Parser)]
#[command(
    name = "quotedesk",
    author,
    version,
    about = "Market-data debug desk: run the backend test, search tickers, inspect payloads"
)]
pub struct Cli {
    /// API origin; falls back to $QUOTEDESK_BASE_URL, then http://localhost:3000.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in milliseconds. Unset means no timeout.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Answer every request offline with an empty JSON object.
    #[arg(long, global = true, default_value_t = false)]
    pub mock: bool,

    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Exit with code 5 when the backend test reports a failure.
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal rendering.
    Text,
    /// Single JSON document.
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the backend yfinance test and show its output lines.
    ///
    /// # Examples
    ///
    ///   quotedesk test
    ///   quotedesk test --strict
    Test,

    /// Search the static ticker catalog by symbol or name.
    ///
    /// # Examples
    ///
    ///   quotedesk search apple
    ///   quotedesk search usd --limit 3
    Search(SearchArgs),

    /// Decode a saved API payload and print it in typed form.
    ///
    /// # Examples
    ///
    ///   quotedesk decode docs ./aapl-docs.json
    ///   cat spy.json | quotedesk decode prices - --csv
    Decode(DecodeArgs),
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Free-form search query (symbol or company name).
    pub query: String,

    /// Maximum number of results to return.
    #[arg(long, default_value_t = quotedesk_core::DEFAULT_SEARCH_LIMIT)]
    pub limit: usize,
}

#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// Shape the payload is expected to have.
    #[arg(value_enum)]
    pub kind: PayloadKind,

    /// Payload file, or `-` for stdin.
    pub path: PathBuf,

    /// Render price payloads as CSV (prices only).
    #[arg(long, default_value_t = false)]
    pub csv: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PayloadKind {
    /// A single ticker record.
    Ticker,
    /// An array of ticker records (search response).
    Tickers,
    /// A price download response.
    Prices,
    /// A news + research response.
    Docs,
    /// An array of news items.
    News,
    /// An array of research items.
    Research,
    /// An array of query-history entries.
    History,
    /// An array of events.
    Events,
    /// A commit acknowledgement.
    Commit,
}
