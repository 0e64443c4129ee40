//! Static ticker catalog and its search ranking.

use crate::schema::{AssetType, TickerData};

pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// `(symbol, name, type)` in catalog order; partial matches are taken in this order.
const CATALOG: &[(&str, &str, &str)] = &[
    ("AAPL", "Apple Inc.", "Equity"),
    ("MSFT", "Microsoft Corporation", "Equity"),
    ("GOOGL", "Alphabet Inc. Class A", "Equity"),
    ("GOOG", "Alphabet Inc. Class C", "Equity"),
    ("AMZN", "Amazon.com Inc.", "Equity"),
    ("TSLA", "Tesla Inc.", "Equity"),
    ("META", "Meta Platforms Inc.", "Equity"),
    ("NVDA", "NVIDIA Corporation", "Equity"),
    ("NFLX", "Netflix Inc.", "Equity"),
    ("ADBE", "Adobe Inc.", "Equity"),
    ("CRM", "Salesforce Inc.", "Equity"),
    ("ORCL", "Oracle Corporation", "Equity"),
    ("IBM", "International Business Machines", "Equity"),
    ("JPM", "JPMorgan Chase & Co.", "Equity"),
    ("BAC", "Bank of America Corp.", "Equity"),
    ("WFC", "Wells Fargo & Company", "Equity"),
    ("GS", "Goldman Sachs Group Inc.", "Equity"),
    ("MS", "Morgan Stanley", "Equity"),
    ("V", "Visa Inc.", "Equity"),
    ("MA", "Mastercard Inc.", "Equity"),
    ("PYPL", "PayPal Holdings Inc.", "Equity"),
    ("JNJ", "Johnson & Johnson", "Equity"),
    ("PFE", "Pfizer Inc.", "Equity"),
    ("UNH", "UnitedHealth Group Inc.", "Equity"),
    ("MRNA", "Moderna Inc.", "Equity"),
    ("ABBV", "AbbVie Inc.", "Equity"),
    ("WMT", "Walmart Inc.", "Equity"),
    ("HD", "Home Depot Inc.", "Equity"),
    ("DIS", "Walt Disney Company", "Equity"),
    ("NKE", "Nike Inc.", "Equity"),
    ("SBUX", "Starbucks Corporation", "Equity"),
    ("MCD", "McDonald's Corporation", "Equity"),
    ("KO", "Coca-Cola Company", "Equity"),
    ("PEP", "PepsiCo Inc.", "Equity"),
    ("XOM", "Exxon Mobil Corporation", "Equity"),
    ("CVX", "Chevron Corporation", "Equity"),
    ("NEE", "NextEra Energy Inc.", "Equity"),
    ("SPY", "SPDR S&P 500 ETF Trust", "ETF"),
    ("QQQ", "Invesco QQQ Trust", "ETF"),
    ("VTI", "Vanguard Total Stock Market ETF", "ETF"),
    ("IWM", "iShares Russell 2000 ETF", "ETF"),
    ("EFA", "iShares MSCI EAFE ETF", "ETF"),
    ("VEA", "Vanguard FTSE Developed Markets ETF", "ETF"),
    ("VWO", "Vanguard FTSE Emerging Markets ETF", "ETF"),
    ("GLD", "SPDR Gold Shares", "ETF"),
    ("SLV", "iShares Silver Trust", "ETF"),
    ("TLT", "iShares 20+ Year Treasury Bond ETF", "ETF"),
    ("BTC-USD", "Bitcoin USD", "Cryptocurrency"),
    ("ETH-USD", "Ethereum USD", "Cryptocurrency"),
    ("ADA-USD", "Cardano USD", "Cryptocurrency"),
    ("DOT-USD", "Polkadot USD", "Cryptocurrency"),
    ("DOGE-USD", "Dogecoin USD", "Cryptocurrency"),
    ("^GSPC", "S&P 500", "Index"),
    ("^DJI", "Dow Jones Industrial Average", "Index"),
    ("^IXIC", "NASDAQ Composite", "Index"),
    ("^RUT", "Russell 2000", "Index"),
    ("^VIX", "CBOE Volatility Index", "Index"),
];

/// Search the catalog by symbol or name.
///
/// The query is trimmed and uppercased. An exact symbol hit is always taken
/// first; remaining slots are filled in catalog order with entries whose
/// symbol contains the query or whose name contains it case-insensitively.
/// The collected entries are ordered exact, then prefix, then substring
/// matches, shorter symbols first within each group.
pub fn search(query: &str, limit: usize) -> Vec<TickerData> {
    let query = query.trim().to_ascii_uppercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<&(&str, &str, &str)> = Vec::with_capacity(limit.min(CATALOG.len()));

    if let Some(exact) = CATALOG.iter().find(|(symbol, _, _)| *symbol == query) {
        hits.push(exact);
    }

    for entry in CATALOG {
        if hits.len() >= limit {
            break;
        }

        let (symbol, name, _) = entry;
        if *symbol == query {
            continue;
        }

        if symbol.contains(query.as_str())
            || name.to_ascii_uppercase().contains(query.as_str())
        {
            hits.push(entry);
        }
    }

    hits.sort_by_key(|(symbol, _, _)| (match_rank(symbol, &query), symbol.len()));
    hits.truncate(limit);

    tracing::debug!(query = %query, hits = hits.len(), "catalog search");

    hits.into_iter()
        .map(|(symbol, name, kind)| {
            TickerData::new(*symbol, *name).with_asset_type(AssetType::from(kind.to_string()))
        })
        .collect()
}

fn match_rank(symbol: &str, query: &str) -> u8 {
    if symbol == query {
        0
    } else if symbol.starts_with(query) {
        1
    } else {
        2
    }
}
