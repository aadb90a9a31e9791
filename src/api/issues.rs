use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info, instrument};

use crate::client::LinearClient;
use crate::error::{LinearError, Result};
use crate::filter::FilterSet;
use crate::responses::Page;
use crate::types::{normalize, Issue};

const LIST_ISSUES_QUERY: &str = r#"
query ListIssues($first: Int!, $after: String, $filter: IssueFilter) {
    issues(first: $first, after: $after, orderBy: createdAt, filter: $filter) {
        nodes {
            id
            identifier
            title
            description
            state {
                name
            }
            createdAt
            updatedAt
            priority
            assignee {
                id
                name
            }
            project {
                id
                name
            }
        }
        pageInfo {
            hasNextPage
            endCursor
        }
    }
}
"#;

#[derive(Deserialize)]
struct IssuesResponse {
    issues: Page<serde_json::Value>,
}

/// Fetch every issue matching `filters`, oldest first.
///
/// Pages are requested one after another; any failure aborts the whole fetch.
#[instrument(skip_all)]
pub async fn fetch_all_issues(client: &LinearClient, filters: &FilterSet) -> Result<Vec<Issue>> {
    let filter = filters.to_issue_filter();
    debug!(?filter, "Fetching all issues");

    let mut issues = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let mut variables = json!({
            "first": client.page_size(),
            "after": cursor,
        });
        if let Some(filter) = &filter {
            variables["filter"] = filter.clone();
        }

        debug!(after = ?cursor, "Requesting issues page");
        let response: IssuesResponse = client.query(LIST_ISSUES_QUERY, Some(variables)).await?;
        let page = response.issues;

        for node in page.nodes {
            let index = issues.len();
            let issue = normalize(node).map_err(|source| LinearError::InvalidIssue { index, source })?;
            issues.push(issue);
        }

        if !page.page_info.has_next_page {
            break;
        }
        cursor = Some(page.page_info.end_cursor.ok_or(LinearError::MissingCursor)?);
    }

    info!(count = issues.len(), "Fetched all issues");

    Ok(issues)
}
