mod common;

use std::sync::Mutex;

use async_trait::async_trait;
use linear_issues::{
    Config, FilterChoices, FilterSet, IntegrationRun, IssueReader, LinearError, NoopReporter,
    OutputFormat, UsageReporter,
};
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{client_for, config_for, issue_node, issues_page, names_response, GRAPHQL_PATH};

#[derive(Default)]
struct RecordingReporter {
    runs: Mutex<Vec<IntegrationRun>>,
}

#[async_trait]
impl UsageReporter for RecordingReporter {
    async fn record(&self, run: &IntegrationRun) -> linear_issues::Result<()> {
        self.runs.lock().unwrap().push(run.clone());
        Ok(())
    }
}

struct FailingReporter;

#[async_trait]
impl UsageReporter for FailingReporter {
    async fn record(&self, _run: &IntegrationRun) -> linear_issues::Result<()> {
        Err(LinearError::UsageReport("registry offline".to_string()))
    }
}

async fn mount_issues(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_string_contains("ListIssues"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn reader_for(server: &MockServer) -> IssueReader {
    IssueReader::new(client_for(server), &config_for(server)).unwrap()
}

fn issue_with_description(description: &str) -> serde_json::Value {
    let mut node = issue_node(1);
    node["description"] = json!(description);
    node["project"] = json!({ "id": "p1", "name": "Desktop" });
    node
}

#[tokio::test]
async fn test_read_renders_markdown() {
    let server = MockServer::start().await;
    mount_issues(
        &server,
        issues_page(
            vec![issue_with_description(
                "Broken: ![](https://uploads.linear.app/ws/crash.png)",
            )],
            None,
        ),
    )
    .await;

    let rendered = reader_for(&server)
        .read(&FilterSet::new(), &NoopReporter)
        .await
        .unwrap();

    assert_eq!(rendered.len(), 1);
    assert_eq!(
        rendered[0],
        "**ID**: id-1  \n\
         **Identifier**: ENG-1  \n\
         **Title**: Issue 1  \n\
         **Description**: Broken: Image (https://uploads.linear.app/ws/crash.png)  \n\
         **State**: Todo  \n\
         **Created At**: 2024-01-02T09:00:00.000Z  \n\
         **Updated At**: 2024-02-01T09:00:00.000Z  \n\
         **Priority**: 3  \n\
         **Assignee**: Ada  \n\
         **Project**: Desktop  "
    );
}

#[tokio::test]
async fn test_read_block_description() {
    let server = MockServer::start().await;
    mount_issues(
        &server,
        issues_page(vec![issue_with_description("## Steps\n1. open\n2. save\n")], None),
    )
    .await;

    let rendered = reader_for(&server)
        .read(&FilterSet::new(), &NoopReporter)
        .await
        .unwrap();

    assert!(rendered[0].contains("**Title**: Issue 1  \n**Description**:\n\n## Steps\n1. open\n2. save\n\n**State**: Todo  "));
}

#[tokio::test]
async fn test_read_as_json() {
    let server = MockServer::start().await;
    mount_issues(
        &server,
        issues_page(
            vec![issue_with_description("![shot](https://uploads.linear.app/a.png)")],
            None,
        ),
    )
    .await;

    let rendered = reader_for(&server)
        .with_format(OutputFormat::Json)
        .read(&FilterSet::new(), &NoopReporter)
        .await
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&rendered[0]).unwrap();
    assert_eq!(value["description"], "shot (https://uploads.linear.app/a.png)");
    assert_eq!(value["state"], "Todo");
    assert_eq!(value["project"], "Desktop");
    assert!(rendered[0].contains("\n  \"id\": \"id-1\""));
}

#[tokio::test]
async fn test_format_from_config() {
    let server = MockServer::start().await;
    mount_issues(&server, issues_page(vec![issue_node(1)], None)).await;

    let config = Config {
        format: OutputFormat::Json,
        ..config_for(&server)
    };
    let reader = IssueReader::new(client_for(&server), &config).unwrap();
    let rendered = reader.read(&FilterSet::new(), &NoopReporter).await.unwrap();

    assert!(rendered[0].starts_with('{'));
}

#[tokio::test]
async fn test_empty_team_result_is_reported() {
    let server = MockServer::start().await;
    mount_issues(&server, issues_page(vec![], None)).await;

    let reporter = RecordingReporter::default();
    let rendered = reader_for(&server)
        .with_fingerprint("run-42")
        .read(&FilterSet::new().team_in(["Core"]), &reporter)
        .await
        .unwrap();

    assert!(rendered.is_empty());
    assert_eq!(
        *reporter.runs.lock().unwrap(),
        [IntegrationRun {
            integration: "linear",
            fingerprint: Some("run-42".to_string()),
            issue_count: 0,
        }]
    );
}

#[tokio::test]
async fn test_reporter_failure_fails_read() {
    let server = MockServer::start().await;
    mount_issues(&server, issues_page(vec![issue_node(1)], None)).await;

    let err = reader_for(&server)
        .read(&FilterSet::new(), &FailingReporter)
        .await
        .unwrap_err();
    assert!(matches!(err, LinearError::UsageReport(_)));
}

#[tokio::test]
async fn test_fetch_failure_skips_reporting() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let reporter = RecordingReporter::default();
    let result = reader_for(&server).read(&FilterSet::new(), &reporter).await;

    assert!(result.is_err());
    assert!(reporter.runs.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_filter_choices() {
    let server = MockServer::start().await;
    for (marker, collection, names) in [
        ("ListTeams", "teams", vec!["Core", "Mobile"]),
        ("ListStates", "workflowStates", vec!["Todo", "Done"]),
        ("ListUsers", "users", vec!["Grace", "Ada", "Grace"]),
    ] {
        Mock::given(method("POST"))
            .and(path(GRAPHQL_PATH))
            .and(body_string_contains(marker))
            .respond_with(ResponseTemplate::new(200).set_body_json(names_response(collection, &names)))
            .mount(&server)
            .await;
    }

    let choices = reader_for(&server).filter_choices(Some("Core")).await.unwrap();

    assert_eq!(
        choices,
        FilterChoices {
            teams: vec!["Core".to_string(), "Mobile".to_string()],
            statuses: vec!["Done".to_string(), "Todo".to_string()],
            assignees: vec!["Ada".to_string(), "Grace".to_string()],
        }
    );
}

#[tokio::test]
async fn test_invalid_upload_host_rejected() {
    let server = MockServer::start().await;
    let config = Config {
        upload_host: "uploads".to_string(),
        ..config_for(&server)
    };

    let result = IssueReader::new(client_for(&server), &config);
    assert!(matches!(result, Err(LinearError::InvalidUrl(_))));
}
