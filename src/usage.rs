//! Hook for recording that an integration call happened.

use async_trait::async_trait;
use tracing::info;

use crate::error::Result;

pub const INTEGRATION_NAME: &str = "linear";

/// One completed read against the Linear API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrationRun {
    pub integration: &'static str,
    /// Host-supplied identifier of the run, if any.
    pub fingerprint: Option<String>,
    pub issue_count: usize,
}

#[async_trait]
pub trait UsageReporter: Send + Sync {
    async fn record(&self, run: &IntegrationRun) -> Result<()>;
}

/// Discards every run.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

#[async_trait]
impl UsageReporter for NoopReporter {
    async fn record(&self, _run: &IntegrationRun) -> Result<()> {
        Ok(())
    }
}

/// Emits each run as a tracing event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

#[async_trait]
impl UsageReporter for TracingReporter {
    async fn record(&self, run: &IntegrationRun) -> Result<()> {
        info!(
            integration = run.integration,
            fingerprint = run.fingerprint.as_deref(),
            issue_count = run.issue_count,
            "Integration run"
        );
        Ok(())
    }
}
