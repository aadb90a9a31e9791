use tracing::{debug, instrument};

use crate::api;
use crate::client::LinearClient;
use crate::config::Config;
use crate::error::Result;
use crate::filter::FilterSet;
use crate::images::ImageRewriter;
use crate::output::{IssueRenderer, OutputFormat};
use crate::usage::{IntegrationRun, UsageReporter, INTEGRATION_NAME};

/// Names a configuration UI can offer as filter values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterChoices {
    pub teams: Vec<String>,
    pub statuses: Vec<String>,
    pub assignees: Vec<String>,
}

/// Fetches issues and hands them back rendered.
pub struct IssueReader {
    client: LinearClient,
    renderer: IssueRenderer,
    fingerprint: Option<String>,
}

impl IssueReader {
    pub fn new(client: LinearClient, config: &Config) -> Result<Self> {
        let images = ImageRewriter::new(config.upload_host_url()?.as_str())?;

        Ok(Self {
            client,
            renderer: IssueRenderer::new(images, config.format),
            fingerprint: None,
        })
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.renderer.set_format(format);
        self
    }

    pub fn with_fingerprint(mut self, fingerprint: impl Into<String>) -> Self {
        self.fingerprint = Some(fingerprint.into());
        self
    }

    pub fn client(&self) -> &LinearClient {
        &self.client
    }

    /// Fetch all matching issues, rewrite their images and render each one.
    ///
    /// The run is reported once every issue has been rendered.
    #[instrument(skip_all, fields(format = ?self.renderer.format()))]
    pub async fn read(&self, filters: &FilterSet, reporter: &dyn UsageReporter) -> Result<Vec<String>> {
        let issues = api::fetch_all_issues(&self.client, filters).await?;

        let rendered = issues
            .into_iter()
            .map(|issue| self.renderer.render(&self.renderer.process(issue)))
            .collect::<Result<Vec<_>>>()?;

        reporter
            .record(&IntegrationRun {
                integration: INTEGRATION_NAME,
                fingerprint: self.fingerprint.clone(),
                issue_count: rendered.len(),
            })
            .await?;

        Ok(rendered)
    }

    /// Teams, statuses (of `team` when given) and users, each deduplicated.
    pub async fn filter_choices(&self, team: Option<&str>) -> Result<FilterChoices> {
        let teams = api::list_teams(&self.client).await?;
        let statuses = api::list_statuses(&self.client, team).await?;
        let assignees = api::list_users(&self.client).await?;

        debug!(
            teams = teams.len(),
            statuses = statuses.len(),
            assignees = assignees.len(),
            "Loaded filter choices"
        );

        Ok(FilterChoices {
            teams,
            statuses,
            assignees,
        })
    }
}
