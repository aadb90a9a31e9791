//! Issue filter construction.
//!
//! Names are passed to the API as the `$filter` variable, so they are never
//! spliced into query text.

use serde_json::{json, Map, Value};

/// Constraint on one filter dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameFilter {
    /// Name must be one of these.
    In(Vec<String>),
    /// Name must not be any of these.
    NotIn(Vec<String>),
}

impl NameFilter {
    /// Pick a constraint from an inclusion and an exclusion list. A non-empty
    /// inclusion list wins.
    pub fn from_lists(include: Option<Vec<String>>, exclude: Option<Vec<String>>) -> Option<Self> {
        match (include, exclude) {
            (Some(names), _) if !names.is_empty() => Some(NameFilter::In(names)),
            (_, Some(names)) if !names.is_empty() => Some(NameFilter::NotIn(names)),
            _ => None,
        }
    }

    fn to_predicate(&self) -> Value {
        match self {
            NameFilter::In(names) => json!({ "name": { "in": names } }),
            NameFilter::NotIn(names) => json!({ "name": { "nin": names } }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    pub team: Option<NameFilter>,
    pub status: Option<NameFilter>,
    pub assignee: Option<NameFilter>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the six raw lists, applying inclusion precedence per dimension.
    pub fn from_lists(
        team_in: Option<Vec<String>>,
        team_nin: Option<Vec<String>>,
        status_in: Option<Vec<String>>,
        status_nin: Option<Vec<String>>,
        assignee_in: Option<Vec<String>>,
        assignee_nin: Option<Vec<String>>,
    ) -> Self {
        Self {
            team: NameFilter::from_lists(team_in, team_nin),
            status: NameFilter::from_lists(status_in, status_nin),
            assignee: NameFilter::from_lists(assignee_in, assignee_nin),
        }
    }

    pub fn team_in<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.team = NameFilter::from_lists(Some(collect(names)), None);
        self
    }

    pub fn team_not_in<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.team = NameFilter::from_lists(None, Some(collect(names)));
        self
    }

    pub fn status_in<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.status = NameFilter::from_lists(Some(collect(names)), None);
        self
    }

    pub fn status_not_in<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.status = NameFilter::from_lists(None, Some(collect(names)));
        self
    }

    pub fn assignee_in<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assignee = NameFilter::from_lists(Some(collect(names)), None);
        self
    }

    pub fn assignee_not_in<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assignee = NameFilter::from_lists(None, Some(collect(names)));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.team.is_none() && self.status.is_none() && self.assignee.is_none()
    }

    /// The `IssueFilter` value, or `None` when nothing constrains the query.
    pub fn to_issue_filter(&self) -> Option<Value> {
        let mut filter = Map::new();

        let dimensions = [
            ("team", &self.team),
            ("state", &self.status),
            ("assignee", &self.assignee),
        ];
        for (field, constraint) in dimensions {
            if let Some(constraint) = constraint {
                filter.insert(field.to_string(), constraint.to_predicate());
            }
        }

        if filter.is_empty() {
            None
        } else {
            Some(Value::Object(filter))
        }
    }
}

fn collect<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Into::into).collect()
}
