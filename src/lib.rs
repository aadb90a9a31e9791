//! Read Linear issues over the GraphQL API.
//!
//! [`IssueReader`] is the entry point a host calls with a bearer token it
//! obtained elsewhere: it pages through `issues`, flattens each node into an
//! [`Issue`], rewrites uploaded images in descriptions, and renders every
//! issue as markdown or JSON.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod images;
pub mod markdown;
pub mod output;
pub mod reader;
pub mod responses;
pub mod types;
pub mod usage;

pub use api::{fetch_all_issues, list_statuses, list_teams, list_users};
pub use client::LinearClient;
pub use config::Config;
pub use error::{LinearError, Result};
pub use filter::{FilterSet, NameFilter};
pub use images::ImageRewriter;
pub use output::{IssueRenderer, OutputFormat};
pub use reader::{FilterChoices, IssueReader};
pub use types::{normalize, Issue};
pub use usage::{IntegrationRun, NoopReporter, TracingReporter, UsageReporter};
