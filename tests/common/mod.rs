#![allow(dead_code)]

use linear_issues::{Config, LinearClient};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const TOKEN: &str = "lin_oauth_test_token";
pub const GRAPHQL_PATH: &str = "/graphql";

pub fn config_for(server: &MockServer) -> Config {
    Config {
        endpoint: format!("{}{}", server.uri(), GRAPHQL_PATH),
        ..Config::default()
    }
}

pub fn client_for(server: &MockServer) -> LinearClient {
    LinearClient::with_config(TOKEN, &config_for(server)).unwrap()
}

pub fn issue_node(number: u32) -> Value {
    json!({
        "id": format!("id-{number}"),
        "identifier": format!("ENG-{number}"),
        "title": format!("Issue {number}"),
        "description": null,
        "state": { "name": "Todo" },
        "createdAt": format!("2024-01-{:02}T09:00:00.000Z", number % 28 + 1),
        "updatedAt": "2024-02-01T09:00:00.000Z",
        "priority": 3,
        "assignee": { "id": "user-1", "name": "Ada" },
        "project": null
    })
}

pub fn issues_page(nodes: Vec<Value>, next_cursor: Option<&str>) -> Value {
    json!({
        "data": {
            "issues": {
                "nodes": nodes,
                "pageInfo": {
                    "hasNextPage": next_cursor.is_some(),
                    "endCursor": next_cursor
                }
            }
        }
    })
}

pub fn names_response(collection: &str, names: &[&str]) -> Value {
    let nodes: Vec<Value> = names.iter().map(|n| json!({ "name": n })).collect();
    let mut data = serde_json::Map::new();
    data.insert(collection.to_string(), json!({ "nodes": nodes }));
    json!({ "data": data })
}

/// JSON bodies of every request the server saw, in arrival order.
pub async fn request_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| serde_json::from_slice(&request.body).unwrap())
        .collect()
}
