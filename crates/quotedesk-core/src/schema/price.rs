use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

/// One trading day of OHLCV data. Upstream leaves cells empty on holidays and
/// partial sessions, hence every numeric field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Open", default)]
    pub open: Option<f64>,
    #[serde(rename = "High", default)]
    pub high: Option<f64>,
    #[serde(rename = "Low", default)]
    pub low: Option<f64>,
    #[serde(rename = "Close", default)]
    pub close: Option<f64>,
    #[serde(rename = "Adj Close", default)]
    pub adj_close: Option<f64>,
    #[serde(rename = "Volume", default)]
    pub volume: Option<u64>,
}

impl PriceBar {
    pub const CSV_HEADER: &'static str = "Date,Open,High,Low,Close,Adj Close,Volume";

    pub fn csv_row(&self) -> String {
        fn cell<T: ToString>(value: Option<T>) -> String {
            value.map(|v| v.to_string()).unwrap_or_default()
        }

        format!(
            "{},{},{},{},{},{},{}",
            self.date,
            cell(self.open),
            cell(self.high),
            cell(self.low),
            cell(self.close),
            cell(self.adj_close),
            cell(self.volume),
        )
    }
}

/// Price series for one ticker over a requested date window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceDownload {
    pub ticker: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub data: Vec<PriceBar>,
}

impl PriceDownload {
    pub fn to_csv(&self) -> String {
        let mut out = String::with_capacity((self.data.len() + 1) * 48);
        out.push_str(PriceBar::CSV_HEADER);
        out.push('\n');
        for bar in &self.data {
            // writing into a String cannot fail
            let _ = writeln!(out, "{}", bar.csv_row());
        }
        out
    }
}
