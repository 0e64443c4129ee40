use quotedesk_core::{
    ClientConfig, DebugView, NoopHttpClient, ReqwestHttpClient, TestEndpoint, TestSource,
};

use crate::error::CliError;

use super::CommandResult;

pub async fn run(config: ClientConfig, mock: bool) -> Result<CommandResult, CliError> {
    if mock {
        run_with(&TestEndpoint::new(NoopHttpClient, config)).await
    } else {
        run_with(&TestEndpoint::new(ReqwestHttpClient::new(), config)).await
    }
}

/// Press "run test" once against `source` and capture the resulting view.
pub async fn run_with<S>(source: &S) -> Result<CommandResult, CliError>
where
    S: TestSource + ?Sized,
{
    let view = DebugView::new();
    let outcome = view.run_test(source).await;
    let snapshot = view.snapshot();

    let data = serde_json::to_value(&snapshot)?;
    Ok(CommandResult::ok(data, snapshot.render_text()).with_test_failed(outcome.is_failure()))
}

#[cfg(test)]
mod tests {
    use std::future::Future;
    use std::pin::Pin;

    use quotedesk_core::{HttpClient, HttpError, HttpRequest, HttpResponse};

    use super::*;

    struct RefusingTransport;

    impl HttpClient for RefusingTransport {
        fn execute<'a>(
            &'a self,
            _request: HttpRequest,
        ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
            Box::pin(async { Err(HttpError::new("connection refused")) })
        }
    }

    fn refused() -> TestEndpoint<RefusingTransport> {
        TestEndpoint::new(RefusingTransport, ClientConfig::default())
    }

    #[tokio::test]
    async fn mock_transport_renders_idle_view_without_panel() {
        let result = run(ClientConfig::default(), true).await.expect("runs");
        assert_eq!(result.text, "[ Run YFinance Test ]\n");
        assert!(!result.test_failed);
        assert_eq!(result.data["busy"], false);
        assert_eq!(result.data["panel"], serde_json::Value::Null);
        assert_eq!(result.data["trigger"]["label"], "Run YFinance Test");
    }

    #[tokio::test]
    async fn failed_run_still_succeeds_and_shows_one_failure_line() {
        let result = run_with(&refused()).await.expect("failure is not a command error");

        assert!(result.test_failed);
        assert_eq!(
            result.text,
            "[ Run YFinance Test ]\n\nResults\n-------\nTest failed: connection refused\n"
        );
        assert_eq!(
            result.data["results"],
            serde_json::json!(["Test failed: connection refused"])
        );
        assert_eq!(result.data["panel"], "Test failed: connection refused");
        assert_eq!(result.data["busy"], false);
        assert!(result.enforce_strict(false).is_ok());
    }

    #[tokio::test]
    async fn strict_mode_turns_failed_run_into_exit_code_five() {
        let result = run_with(&refused()).await.expect("runs");

        let error = result.enforce_strict(true).expect_err("strict must reject");

        assert!(matches!(error, CliError::StrictModeViolation));
        assert_eq!(error.exit_code(), 5);
    }

    #[tokio::test]
    async fn strict_mode_accepts_successful_run() {
        let result = run(ClientConfig::default(), true).await.expect("runs");
        assert!(result.enforce_strict(true).is_ok());
    }
}
