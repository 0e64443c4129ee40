use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Instrument category as labelled by the ticker search backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AssetType {
    Equity,
    Etf,
    Index,
    Cryptocurrency,
    Other(String),
}

impl AssetType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Equity => "Equity",
            Self::Etf => "ETF",
            Self::Index => "Index",
            Self::Cryptocurrency => "Cryptocurrency",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for AssetType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Equity" => Self::Equity,
            "ETF" => Self::Etf,
            "Index" => Self::Index,
            "Cryptocurrency" => Self::Cryptocurrency,
            _ => Self::Other(value),
        }
    }
}

impl From<AssetType> for String {
    fn from(value: AssetType) -> Self {
        match value {
            AssetType::Other(label) => label,
            known => known.as_str().to_owned(),
        }
    }
}

impl Display for AssetType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tradable instrument identifier plus descriptive metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerData {
    pub symbol: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<AssetType>,
}

impl TickerData {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            exchange: None,
            asset_type: None,
        }
    }

    pub fn with_asset_type(mut self, asset_type: AssetType) -> Self {
        self.asset_type = Some(asset_type);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_asset_labels_are_kept() {
        let ticker: TickerData =
            serde_json::from_str(r#"{"symbol":"XYZ","name":"Xyz Fund","type":"MutualFund"}"#)
                .expect("decodes");
        assert_eq!(
            ticker.asset_type,
            Some(AssetType::Other(String::from("MutualFund")))
        );
        assert_eq!(
            serde_json::to_value(&ticker).expect("encodes")["type"],
            "MutualFund"
        );
    }

    #[test]
    fn optional_fields_are_omitted_when_absent() {
        let json = serde_json::to_string(&TickerData::new("SPY", "SPDR S&P 500 ETF Trust"))
            .expect("encodes");
        assert_eq!(json, r#"{"symbol":"SPY","name":"SPDR S&P 500 ETF Trust"}"#);
    }
}
