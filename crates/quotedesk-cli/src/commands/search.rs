use std::fmt::Write as _;

use serde::Serialize;

use quotedesk_core::TickerData;

use crate::cli::SearchArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct SearchResponseData {
    query: String,
    results: Vec<TickerData>,
}

pub fn run(args: &SearchArgs) -> Result<CommandResult, CliError> {
    if args.limit == 0 {
        return Err(CliError::Command(String::from(
            "--limit must be greater than zero",
        )));
    }

    let query = args.query.trim();

    let results = quotedesk_core::search(query, args.limit);
    let text = render_table(&results);
    let data = serde_json::to_value(SearchResponseData {
        query: query.to_owned(),
        results,
    })?;

    Ok(CommandResult::ok(data, text))
}

fn render_table(results: &[TickerData]) -> String {
    if results.is_empty() {
        return String::from("no matches\n");
    }

    let width = results
        .iter()
        .map(|ticker| ticker.symbol.len())
        .max()
        .unwrap_or(0)
        .max("SYMBOL".len());

    let mut out = format!("{:<width$}  {:<14}  NAME\n", "SYMBOL", "TYPE");
    for ticker in results {
        let kind = ticker
            .asset_type
            .as_ref()
            .map(|kind| kind.as_str())
            .unwrap_or("-");
        let _ = writeln!(out, "{:<width$}  {:<14}  {}", ticker.symbol, kind, ticker.name);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_limit() {
        let args = SearchArgs {
            query: String::from("AAPL"),
            limit: 0,
        };
        assert!(matches!(run(&args), Err(CliError::Command(_))));
    }

    #[test]
    fn blank_query_reports_no_matches() {
        let args = SearchArgs {
            query: String::from("   "),
            limit: 5,
        };
        let result = run(&args).expect("blank query is not an error");
        assert_eq!(result.text, "no matches\n");
        assert_eq!(result.data["query"], "");
        assert_eq!(result.data["results"], serde_json::json!([]));
    }

    #[test]
    fn table_lists_symbol_type_and_name() {
        let args = SearchArgs {
            query: String::from("spy"),
            limit: 5,
        };
        let result = run(&args).expect("search succeeds");
        assert_eq!(
            result.text,
            "SYMBOL  TYPE            NAME\nSPY     ETF             SPDR S&P 500 ETF Trust\n"
        );
        assert_eq!(result.data["results"][0]["type"], "ETF");
    }
}
