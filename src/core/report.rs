//! Run report rendering.
//!
//! Every renderer here is pure: the same snapshot and options always give the
//! same string, and nothing is written anywhere. Snapshots are rendered as
//! they are, so negative or otherwise odd counts show up verbatim.

use crate::core::error::DoclinksError;
use crate::core::options::{ReportFormat, ReportOptions};
use crate::core::stats::LinkStatistics;
use colored::Colorize;
use serde::Deserialize;
use serde_json::{Value as JsonValue, json};
use tracing::debug;

pub const SUMMARY_HEADER: &str = "[Link Summary]";
pub const CATEGORY_HEADER: &str = "By category:";
pub const DRY_RUN_LINE: &str = "Dry run: no files were modified";

/// Role of a summary line, used to pick terminal styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Header,
    PathMode,
    DryRun,
    Count,
    Blank,
    CategoryHeader,
    Category,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub kind: LineKind,
    pub text: String,
}

impl SummaryLine {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Summary lines in display order.
///
/// Each section is produced by its own step and dropped when its condition
/// does not hold. The category section is omitted entirely, header included,
/// when there are no categories.
pub fn summary_lines(stats: &LinkStatistics, options: &ReportOptions) -> Vec<SummaryLine> {
    let header = Some(vec![SummaryLine::new(LineKind::Header, SUMMARY_HEADER)]);

    let path_mode = options.path_mode.map(|mode| {
        vec![SummaryLine::new(
            LineKind::PathMode,
            format!("Path mode: {}", mode),
        )]
    });

    let dry_run = options
        .is_dry_run()
        .then(|| vec![SummaryLine::new(LineKind::DryRun, DRY_RUN_LINE)]);

    let totals = Some(vec![
        SummaryLine::new(
            LineKind::Count,
            format!("Total links: {}", stats.total_links),
        ),
        SummaryLine::new(
            LineKind::Count,
            format!("Files modified: {}", stats.files_modified),
        ),
    ]);

    let categories = (!stats.links_by_category.is_empty()).then(|| {
        let mut lines = vec![
            SummaryLine::new(LineKind::Blank, ""),
            SummaryLine::new(LineKind::CategoryHeader, CATEGORY_HEADER),
        ];
        lines.extend(stats.links_by_category.iter().map(|(category, count)| {
            SummaryLine::new(LineKind::Category, format!("  {}: {}", category, count))
        }));
        lines
    });

    [header, path_mode, dry_run, totals, categories]
        .into_iter()
        .flatten()
        .flatten()
        .collect()
}

/// Human-readable multi-line summary, without a trailing newline.
pub fn format_summary(stats: &LinkStatistics, options: &ReportOptions) -> String {
    summary_lines(stats, options)
        .into_iter()
        .map(|line| line.text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Same lines as [`format_summary`], styled for a terminal.
pub fn format_summary_styled(stats: &LinkStatistics, options: &ReportOptions) -> String {
    summary_lines(stats, options)
        .into_iter()
        .map(|line| match line.kind {
            LineKind::Header | LineKind::CategoryHeader => line.text.bold().to_string(),
            LineKind::DryRun => line.text.yellow().to_string(),
            LineKind::PathMode => line.text.cyan().to_string(),
            LineKind::Count | LineKind::Blank | LineKind::Category => line.text,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty-printed JSON object: the snapshot fields followed by whichever
/// option fields are present.
pub fn format_json(stats: &LinkStatistics, options: &ReportOptions) -> String {
    let mut report = json!({
        "totalLinks": stats.total_links,
        "filesModified": stats.files_modified,
        "linksByCategory": stats.links_by_category,
    });
    if let (Some(base), Ok(JsonValue::Object(extra))) =
        (report.as_object_mut(), serde_json::to_value(options))
    {
        for (k, v) in extra {
            base.insert(k, v);
        }
    }
    format!("{:#}", report)
}

pub fn render(format: ReportFormat, stats: &LinkStatistics, options: &ReportOptions) -> String {
    debug!(%format, total_links = stats.total_links, "rendering link report");
    match format {
        ReportFormat::Text => format_summary(stats, options),
        ReportFormat::Json => format_json(stats, options),
    }
}

/// Read a [`format_json`] document back into its snapshot and options.
pub fn parse_json_report(input: &str) -> Result<(LinkStatistics, ReportOptions), DoclinksError> {
    let value: JsonValue = serde_json::from_str(input)?;
    if !value.is_object() {
        return Err(DoclinksError::ValidationError(
            "link report must be a JSON object".to_string(),
        ));
    }
    let stats = LinkStatistics::deserialize(&value)?;
    let options = ReportOptions::deserialize(&value)?;
    Ok((stats, options))
}
