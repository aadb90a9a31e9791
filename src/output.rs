use serde::{ser::Error as _, Deserialize};
use serde_json::Value;

use crate::error::{LinearError, Result};
use crate::images::ImageRewriter;
use crate::markdown;
use crate::types::Issue;

/// How rendered issues are handed to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Readable `**Label**: value` markdown
    #[default]
    Markdown,
    /// Pretty-printed JSON
    Json,
}

/// Post-processes issues and renders them as strings.
#[derive(Debug, Clone)]
pub struct IssueRenderer {
    images: ImageRewriter,
    format: OutputFormat,
}

impl IssueRenderer {
    pub fn new(images: ImageRewriter, format: OutputFormat) -> Self {
        Self { images, format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn set_format(&mut self, format: OutputFormat) {
        self.format = format;
    }

    /// Rewrite upload-host images in the description.
    pub fn process(&self, mut issue: Issue) -> Issue {
        if let Some(description) = issue.description.as_deref() {
            if !description.is_empty() {
                issue.description = Some(self.images.rewrite(description));
            }
        }
        issue
    }

    pub fn render(&self, issue: &Issue) -> Result<String> {
        match self.format {
            OutputFormat::Markdown => match serde_json::to_value(issue).map_err(LinearError::Encode)? {
                Value::Object(record) => Ok(markdown::render_record(&record)),
                _ => Err(LinearError::Encode(serde_json::Error::custom(
                    "issue did not serialize to an object",
                ))),
            },
            OutputFormat::Json => serde_json::to_string_pretty(issue).map_err(LinearError::Encode),
        }
    }
}

impl Default for IssueRenderer {
    fn default() -> Self {
        Self::new(ImageRewriter::default(), OutputFormat::default())
    }
}
