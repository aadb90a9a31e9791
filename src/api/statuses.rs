use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::client::LinearClient;
use crate::error::Result;
use crate::responses::{distinct_names, Connection, NameNode};

const LIST_STATES_QUERY: &str = r#"
query ListStates($filter: WorkflowStateFilter) {
    workflowStates(filter: $filter) {
        nodes {
            name
        }
    }
}
"#;

#[derive(Deserialize)]
struct WorkflowStatesResponse {
    #[serde(rename = "workflowStates")]
    workflow_states: Connection<NameNode>,
}

/// Workflow state names, optionally limited to one team.
pub async fn list_statuses(client: &LinearClient, team: Option<&str>) -> Result<Vec<String>> {
    let variables = team.map(|name| {
        json!({
            "filter": {
                "team": { "name": { "eq": name } }
            }
        })
    });

    let response: WorkflowStatesResponse = client.query(LIST_STATES_QUERY, variables).await?;

    let names = distinct_names(response.workflow_states.nodes);
    debug!(?team, count = names.len(), "Listed workflow states");

    Ok(names)
}
