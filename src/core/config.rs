//! Report configuration read from TOML.
//!
//! ```toml
//! [report]
//! format = "json"
//! path_mode = "absolute"
//! dry_run = true
//! verbose = false
//! ```
//!
//! Every key is optional. A missing file is not an error and yields defaults.

use crate::core::error::DoclinksError;
use crate::core::options::{PathMode, ReportFormat, ReportOptions};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "doclinks.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    #[serde(default)]
    pub report: ReportSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportSection {
    #[serde(default)]
    pub format: ReportFormat,
    pub path_mode: Option<PathMode>,
    pub dry_run: Option<bool>,
    pub verbose: Option<bool>,
}

impl ReportConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, DoclinksError> {
        Ok(toml::from_str(content)?)
    }

    /// Load `path`, falling back to defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self, DoclinksError> {
        if !path.is_file() {
            debug!(path = %path.display(), "no report config (using defaults)");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), format = %config.report.format, "loaded report config");
        Ok(config)
    }

    pub fn format(&self) -> ReportFormat {
        self.report.format
    }

    pub fn options(&self) -> ReportOptions {
        ReportOptions {
            path_mode: self.report.path_mode,
            dry_run: self.report.dry_run,
            verbose: self.report.verbose,
        }
    }
}
