use serde::Deserialize;
use tracing::debug;

use crate::client::LinearClient;
use crate::error::Result;
use crate::responses::{distinct_names, Connection, NameNode};

const LIST_TEAMS_QUERY: &str = r#"
query ListTeams {
    teams {
        nodes {
            name
        }
    }
}
"#;

#[derive(Deserialize)]
struct TeamsResponse {
    teams: Connection<NameNode>,
}

pub async fn list_teams(client: &LinearClient) -> Result<Vec<String>> {
    let response: TeamsResponse = client.query(LIST_TEAMS_QUERY, None).await?;

    let names = distinct_names(response.teams.nodes);
    debug!(count = names.len(), "Listed teams");

    Ok(names)
}
