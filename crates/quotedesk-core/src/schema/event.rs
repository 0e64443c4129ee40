use serde::{Deserialize, Serialize};

/// Calendar event (earnings, dividends, macro releases) shown next to prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventData {
    pub id: String,
    pub name: String,
    pub date: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
