use super::*;
use crate::search::{resolve_policy, search_records};
use sheetmark_core::{AppConfig, Environment, ScanPolicy};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["sheetmark-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_search_with_defaults() {
    let cli = Cli::try_parse_from(["sheetmark-cli", "search", "acme"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Search {
            ref query,
            policy: None,
            batch_size: None,
        }) if query == "acme"
    ));
}

#[test]
fn parses_search_with_policy_overrides() {
    let cli = Cli::try_parse_from([
        "sheetmark-cli",
        "search",
        "acme",
        "--policy",
        "first-match",
        "--batch-size",
        "5",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Search {
            policy: Some(ref p),
            batch_size: Some(5),
            ..
        }) if p == "first-match"
    ));
}

#[test]
fn search_requires_query() {
    assert!(Cli::try_parse_from(["sheetmark-cli", "search"]).is_err());
}

#[test]
fn parses_sheets_command() {
    let cli = Cli::try_parse_from(["sheetmark-cli", "sheets"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Sheets)));
}

#[test]
fn resolve_policy_keeps_configured_policy_without_overrides() {
    assert_eq!(
        resolve_policy(ScanPolicy::Exhaustive, None, None).expect("policy"),
        ScanPolicy::Exhaustive
    );
    assert_eq!(
        resolve_policy(ScanPolicy::FirstMatchingBatch { batch_size: 4 }, None, None)
            .expect("policy"),
        ScanPolicy::FirstMatchingBatch { batch_size: 4 }
    );
}

#[test]
fn resolve_policy_applies_overrides() {
    assert_eq!(
        resolve_policy(ScanPolicy::Exhaustive, Some("first-match"), None).expect("policy"),
        ScanPolicy::FirstMatchingBatch { batch_size: 3 }
    );
    assert_eq!(
        resolve_policy(ScanPolicy::Exhaustive, Some("first-match"), Some(7)).expect("policy"),
        ScanPolicy::FirstMatchingBatch { batch_size: 7 }
    );
    assert_eq!(
        resolve_policy(
            ScanPolicy::FirstMatchingBatch { batch_size: 2 },
            Some("exhaustive"),
            None
        )
        .expect("policy"),
        ScanPolicy::Exhaustive
    );
}

#[test]
fn resolve_policy_batch_size_alone_resizes_first_match() {
    assert_eq!(
        resolve_policy(ScanPolicy::FirstMatchingBatch { batch_size: 3 }, None, Some(9))
            .expect("policy"),
        ScanPolicy::FirstMatchingBatch { batch_size: 9 }
    );
    assert_eq!(
        resolve_policy(ScanPolicy::Exhaustive, None, Some(9)).expect("policy"),
        ScanPolicy::Exhaustive
    );
}

#[test]
fn resolve_policy_rejects_bad_input() {
    assert!(resolve_policy(ScanPolicy::Exhaustive, Some("sideways"), None).is_err());
    assert!(resolve_policy(ScanPolicy::Exhaustive, Some("first-match"), Some(0)).is_err());
}

#[tokio::test]
async fn search_records_reads_sheets_from_configured_endpoints() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/drive/folders/cli"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<a href=\"https://docs.google.com/spreadsheets/d/ABCDEFGHIJ1234567890/edit\">x</a>",
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/spreadsheets/d/ABCDEFGHIJ1234567890/gviz/tq"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"google.visualization.Query.setResponse({"table":{"cols":[{"label":"BrandName"}],"rows":[{"c":[{"v":"Acme"}]},{"c":[{"v":"Other"}]}]}});"#,
        ))
        .mount(&server)
        .await;

    let config = AppConfig {
        env: Environment::Test,
        bind_addr: "127.0.0.1:0".parse().expect("socket addr"),
        log_level: "info".to_string(),
        folder_url: format!("{}/drive/folders/cli", server.uri()),
        sheets_base_url: server.uri(),
        request_timeout_secs: 5,
        user_agent: "sheetmark-test/0.1".to_string(),
        scan_policy: ScanPolicy::Exhaustive,
        max_concurrent_sheets: 0,
        rate_limit_per_minute: 0,
    };

    let records = search_records(&config, "acme", ScanPolicy::Exhaustive)
        .await
        .expect("search");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].sheet_id, "ABCDEFGHIJ1234567890");
    assert_eq!(records[0].brand_name, "Acme");
}
