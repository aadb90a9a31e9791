use serde::Deserialize;
use tracing::debug;

use crate::client::LinearClient;
use crate::error::Result;
use crate::responses::{distinct_names, Connection, NameNode};

const LIST_USERS_QUERY: &str = r#"
query ListUsers {
    users {
        nodes {
            name
        }
    }
}
"#;

#[derive(Deserialize)]
struct UsersResponse {
    users: Connection<NameNode>,
}

pub async fn list_users(client: &LinearClient) -> Result<Vec<String>> {
    let response: UsersResponse = client.query(LIST_USERS_QUERY, None).await?;

    let names = distinct_names(response.users.nodes);
    debug!(count = names.len(), "Listed users");

    Ok(names)
}
