use serde::{Deserialize, Serialize};

/// A flattened Linear issue.
///
/// `state`, `assignee` and `project` only ever hold a name; use [`normalize`]
/// to build one from a raw GraphQL node.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Issue {
    pub id: String,
    pub identifier: String,
    pub title: String,
    pub description: Option<String>,
    pub state: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
    pub priority: i32,
    pub assignee: Option<String>,
    pub project: Option<String>,
}

/// A reference field as returned by the API: either already a name, or an
/// object carrying one.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum NameRef {
    Name(String),
    Named { name: Option<String> },
}

impl NameRef {
    fn into_name(self) -> Option<String> {
        match self {
            NameRef::Name(name) => Some(name),
            NameRef::Named { name } => name,
        }
    }
}

#[derive(Deserialize, Debug)]
struct IssueNode {
    id: String,
    identifier: String,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    state: Option<NameRef>,
    #[serde(rename = "createdAt")]
    created_at: String,
    #[serde(rename = "updatedAt")]
    updated_at: String,
    priority: i32,
    #[serde(default)]
    assignee: Option<NameRef>,
    #[serde(default)]
    project: Option<NameRef>,
}

impl IssueNode {
    fn flatten(self) -> Issue {
        Issue {
            id: self.id,
            identifier: self.identifier,
            title: self.title,
            description: self.description,
            state: self.state.and_then(NameRef::into_name),
            created_at: self.created_at,
            updated_at: self.updated_at,
            priority: self.priority,
            assignee: self.assignee.and_then(NameRef::into_name),
            project: self.project.and_then(NameRef::into_name),
        }
    }
}

/// Validate a raw issue node and flatten its reference fields.
pub fn normalize(node: serde_json::Value) -> Result<Issue, serde_json::Error> {
    serde_json::from_value::<IssueNode>(node).map(IssueNode::flatten)
}
