//! Run options that annotate a rendered report.
//!
//! None of these values change what is counted. They describe how the run
//! was configured so the report can say so.

use crate::core::error::DoclinksError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the run resolved link paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PathMode {
    Relative,
    Absolute,
}

impl PathMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PathMode::Relative => "relative",
            PathMode::Absolute => "absolute",
        }
    }
}

impl fmt::Display for PathMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PathMode {
    type Err = DoclinksError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relative" => Ok(PathMode::Relative),
            "absolute" => Ok(PathMode::Absolute),
            other => Err(DoclinksError::ValidationError(format!(
                "unknown path mode '{}' (expected 'relative' or 'absolute')",
                other
            ))),
        }
    }
}

/// Output format of a run report.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => f.write_str("text"),
            ReportFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = DoclinksError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(DoclinksError::ValidationError(format!(
                "unknown report format '{}' (expected 'text' or 'json')",
                other
            ))),
        }
    }
}

/// Optional annotations for a rendered report.
///
/// `ReportOptions::default()` means no options were supplied. Absent fields
/// are skipped when serialized, never written as `null`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_mode: Option<PathMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Reserved. Accepted and echoed into JSON, ignored by text rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
}

impl ReportOptions {
    pub fn with_path_mode(mut self, mode: PathMode) -> Self {
        self.path_mode = Some(mode);
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = Some(dry_run);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run.unwrap_or(false)
    }
}
