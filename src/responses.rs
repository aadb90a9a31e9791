//! Shared GraphQL response types used across queries.

use std::collections::BTreeSet;

use serde::Deserialize;

/// Pagination info for cursor-based pagination.
#[derive(Deserialize, Debug)]
pub struct PageInfo {
    #[serde(rename = "hasNextPage")]
    pub has_next_page: bool,
    #[serde(rename = "endCursor")]
    pub end_cursor: Option<String>,
}

/// A GraphQL connection read in one request.
#[derive(Deserialize, Debug)]
pub struct Connection<T> {
    pub nodes: Vec<T>,
}

/// One page of a cursor-paginated connection.
#[derive(Deserialize, Debug)]
pub struct Page<T> {
    pub nodes: Vec<T>,
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
}

/// Node carrying only a name, used by the lookup queries.
#[derive(Deserialize, Debug)]
pub struct NameNode {
    pub name: String,
}

/// Distinct names from a list of nodes.
pub fn distinct_names(nodes: Vec<NameNode>) -> Vec<String> {
    nodes
        .into_iter()
        .map(|n| n.name)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
