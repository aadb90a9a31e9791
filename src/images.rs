use regex::{Captures, Regex};

use crate::config::DEFAULT_UPLOAD_HOST;
use crate::error::Result;

const EMPTY_ALT_PLACEHOLDER: &str = "Image";

/// Rewrites markdown images hosted on the upload host into plain text
/// references: `![alt](url)` becomes `alt (url)`.
#[derive(Debug, Clone)]
pub struct ImageRewriter {
    pattern: Regex,
}

impl ImageRewriter {
    pub fn new(upload_host: &str) -> Result<Self> {
        let pattern = Regex::new(&format!(
            r"!\[([^\]]*)\]\(({}[^)]+)\)",
            regex::escape(upload_host)
        ))?;
        Ok(Self { pattern })
    }

    /// Rewrite every upload-host image in `text`. Images on other hosts are
    /// left as they are.
    pub fn rewrite(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, |caps: &Captures| {
                let alt = &caps[1];
                let url = &caps[2];
                let alt = if alt.trim().is_empty() {
                    EMPTY_ALT_PLACEHOLDER
                } else {
                    alt
                };
                format!("{alt} ({url})")
            })
            .into_owned()
    }
}

impl Default for ImageRewriter {
    fn default() -> Self {
        Self::new(DEFAULT_UPLOAD_HOST).expect("default upload host is a valid pattern")
    }
}
