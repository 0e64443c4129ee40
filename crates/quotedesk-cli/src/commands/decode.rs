use std::io::Read;
use std::path::Path;

use serde::Serialize;

use quotedesk_core::schema::{self, DocsBundle, PriceDownload};
use quotedesk_core::{
    CommitResponse, EventData, NewsItem, QueryHistoryItem, ResearchItem, TickerData,
};

use crate::cli::{DecodeArgs, PayloadKind};
use crate::error::CliError;

use super::CommandResult;

pub fn run(args: &DecodeArgs) -> Result<CommandResult, CliError> {
    if args.csv && args.kind != PayloadKind::Prices {
        return Err(CliError::Command(String::from(
            "--csv applies to price payloads only",
        )));
    }

    let raw = read_payload(&args.path)?;
    tracing::debug!(kind = ?args.kind, bytes = raw.len(), "decoding payload");

    match args.kind {
        PayloadKind::Ticker => typed::<TickerData>(&raw),
        PayloadKind::Tickers => typed::<Vec<TickerData>>(&raw),
        PayloadKind::Prices => {
            let download: PriceDownload = schema::decode(&raw)?;
            if args.csv {
                let data = serde_json::to_value(&download)?;
                Ok(CommandResult::ok(data, download.to_csv()))
            } else {
                render(&download)
            }
        }
        PayloadKind::Docs => typed::<DocsBundle>(&raw),
        PayloadKind::News => typed::<Vec<NewsItem>>(&raw),
        PayloadKind::Research => typed::<Vec<ResearchItem>>(&raw),
        PayloadKind::History => typed::<Vec<QueryHistoryItem>>(&raw),
        PayloadKind::Events => typed::<Vec<EventData>>(&raw),
        PayloadKind::Commit => typed::<CommitResponse>(&raw),
    }
}

fn read_payload(path: &Path) -> Result<String, CliError> {
    if path.as_os_str() == "-" {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;
        return Ok(raw);
    }

    Ok(std::fs::read_to_string(path)?)
}

fn typed<T>(raw: &str) -> Result<CommandResult, CliError>
where
    T: serde::de::DeserializeOwned + Serialize,
{
    let value: T = schema::decode(raw)?;
    render(&value)
}

fn render<T: Serialize>(value: &T) -> Result<CommandResult, CliError> {
    let data = serde_json::to_value(value)?;
    let mut text = serde_json::to_string_pretty(&data)?;
    text.push('\n');
    Ok(CommandResult::ok(data, text))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn args(kind: PayloadKind, file: &tempfile::NamedTempFile, csv: bool) -> DecodeArgs {
        DecodeArgs {
            kind,
            path: file.path().to_path_buf(),
            csv,
        }
    }

    fn payload(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(json.as_bytes()).expect("write payload");
        file
    }

    #[test]
    fn prices_render_as_csv() {
        let file = payload(
            r#"{"ticker":"SPY","start":"2024-01-01","end":"2024-01-03","data":[{"Date":"2024-01-02","Open":1.5,"High":2.0,"Low":1.0,"Close":1.75,"Adj Close":1.7,"Volume":10}]}"#,
        );
        let result = run(&args(PayloadKind::Prices, &file, true)).expect("decodes");
        assert_eq!(
            result.text,
            "Date,Open,High,Low,Close,Adj Close,Volume\n2024-01-02,1.5,2,1,1.75,1.7,10\n"
        );
    }

    #[test]
    fn csv_flag_is_rejected_for_other_kinds() {
        let file = payload(r#"{"sha":"abc","githubUrl":"https://github.com/org/market-data"}"#);
        let err = run(&args(PayloadKind::Commit, &file, true)).expect_err("must fail");
        assert!(matches!(err, CliError::Command(_)));
    }

    #[test]
    fn shape_mismatch_is_a_core_error() {
        let file = payload(r#"{"symbol":"AAPL"}"#);
        let err = run(&args(PayloadKind::Ticker, &file, false)).expect_err("name missing");
        assert!(matches!(err, CliError::Core(_)));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn tickers_round_trip_into_pretty_json() {
        let file = payload(r#"[{"symbol":"AAPL","name":"Apple Inc.","type":"Equity","extra":1}]"#);
        let result = run(&args(PayloadKind::Tickers, &file, false)).expect("decodes");
        assert_eq!(result.data[0]["symbol"], "AAPL");
        assert!(result.data[0].get("extra").is_none());
        assert!(result.text.ends_with("]\n"));
    }
}
