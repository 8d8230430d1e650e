use doclinks::core::config::{DEFAULT_CONFIG_FILE, ReportConfig};
use doclinks::core::error::DoclinksError;
use doclinks::core::options::{PathMode, ReportFormat, ReportOptions};
use doclinks::core::report::{self, CATEGORY_HEADER, DRY_RUN_LINE, SUMMARY_HEADER};
use doclinks::core::stats::{LinkStatistics, StatsAccumulator};
use serde_json::Value as JsonValue;
use std::fs;
use tempfile::tempdir;

/// Drives an accumulator the way a rewrite pass over `files` would.
fn simulate_run(acc: &mut StatsAccumulator, files: Vec<(&str, i64, Vec<&str>)>) {
    for (_name, links, rewrites) in files {
        acc.record_links(links);
        for category in &rewrites {
            acc.record_transformation(category);
        }
        if !rewrites.is_empty() {
            acc.record_file_modified();
        }
    }
}

#[test]
fn run_totals_flow_into_text_summary() {
    let mut acc = StatsAccumulator::new();
    simulate_run(
        &mut acc,
        vec![
            (
                "README.md",
                4,
                vec!["relative→absolute", "relative→absolute", "absolute→relative"],
            ),
            ("docs/guide.md", 3, vec!["relative→absolute"]),
            ("docs/empty.md", 0, vec![]),
            ("CHANGELOG.md", 3, vec!["relative→absolute", "relative→absolute"]),
        ],
    );

    let stats = acc.snapshot();
    assert_eq!(stats.total_links, 10);
    assert_eq!(stats.files_modified, 3);
    assert_eq!(stats.links_by_category.get("relative→absolute"), Some(5));
    assert_eq!(stats.links_by_category.get("absolute→relative"), Some(1));

    let opts = ReportOptions::default().with_path_mode(PathMode::Absolute);
    let text = report::format_summary(&stats, &opts);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], SUMMARY_HEADER);
    assert_eq!(lines[1], "Path mode: absolute");
    assert_eq!(lines[2], "Total links: 10");
    assert_eq!(lines[3], "Files modified: 3");
    assert_eq!(lines[4], "");
    assert_eq!(lines[5], CATEGORY_HEADER);
    assert_eq!(lines[6], "  relative→absolute: 5");
    assert_eq!(lines[7], "  absolute→relative: 1");
    assert_eq!(lines.len(), 8);
}

#[test]
fn dry_run_report_without_rewrites_has_no_category_section() {
    let mut acc = StatsAccumulator::new();
    acc.record_links(5);
    acc.record_file_modified();

    let opts = ReportOptions::default().with_dry_run(true);
    let text = report::format_summary(&acc.snapshot(), &opts);
    assert!(text.contains(DRY_RUN_LINE));
    assert!(text.contains("Total links: 5"));
    assert!(text.contains("Files modified: 1"));
    assert!(!text.contains(CATEGORY_HEADER));
}

#[test]
fn json_report_round_trips_through_parser() {
    let mut acc = StatsAccumulator::new();
    acc.record_links(10);
    acc.record_file_modified();
    acc.record_file_modified();
    acc.record_file_modified();
    acc.record_transformations("relative→absolute", 5);
    acc.record_transformations("absolute→relative", 2);
    let stats = acc.snapshot();

    let opts = ReportOptions::default()
        .with_path_mode(PathMode::Relative)
        .with_dry_run(true);
    let out = report::format_json(&stats, &opts);

    let value: JsonValue = serde_json::from_str(&out).expect("report should be valid JSON");
    assert_eq!(value["totalLinks"], 10);
    assert_eq!(value["filesModified"], 3);
    assert_eq!(value["linksByCategory"]["relative→absolute"], 5);
    assert_eq!(value["linksByCategory"]["absolute→relative"], 2);
    assert_eq!(value["pathMode"], "relative");
    assert_eq!(value["dryRun"], true);
    assert!(value.get("verbose").is_none());

    let (back_stats, back_opts) = report::parse_json_report(&out).expect("parse report");
    assert_eq!(back_stats, stats);
    assert_eq!(back_opts, opts);
}

#[test]
fn reset_allows_reuse_between_runs() {
    let mut acc = StatsAccumulator::new();
    acc.record_links(3);
    acc.record_transformation("relative→absolute");
    let first = acc.snapshot();

    acc.reset();
    assert_eq!(acc.snapshot(), LinkStatistics::default());

    acc.record_links(1);
    let second = acc.snapshot();
    assert_eq!(first.total_links, 3);
    assert_eq!(first.links_by_category.len(), 1);
    assert_eq!(second.total_links, 1);
    assert!(second.links_by_category.is_empty());
}

#[test]
fn separate_accumulators_are_isolated() {
    let mut a = StatsAccumulator::new();
    let mut b = StatsAccumulator::new();
    a.record_links(7);
    a.record_transformation("x");
    b.record_file_modified();

    assert_eq!(a.snapshot().files_modified, 0);
    assert_eq!(b.snapshot().total_links, 0);
    assert!(b.snapshot().links_by_category.is_empty());
}

#[test]
fn config_file_selects_format_and_options() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join(DEFAULT_CONFIG_FILE);
    fs::write(
        &path,
        "[report]\nformat = \"json\"\npath_mode = \"absolute\"\nverbose = true\n",
    )
    .expect("write config");

    let config = ReportConfig::load(&path).expect("load config");
    assert_eq!(config.format(), ReportFormat::Json);

    let mut acc = StatsAccumulator::new();
    acc.record_links(2);
    let out = report::render(config.format(), &acc.snapshot(), &config.options());
    let value: JsonValue = serde_json::from_str(&out).expect("json output");
    assert_eq!(value["pathMode"], "absolute");
    assert_eq!(value["verbose"], true);
    assert_eq!(value["totalLinks"], 2);
}

#[test]
fn malformed_config_surfaces_config_error() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join(DEFAULT_CONFIG_FILE);
    fs::write(&path, "[report\nformat = ").expect("write config");

    let err = ReportConfig::load(&path).unwrap_err();
    assert!(matches!(err, DoclinksError::ConfigError(_)));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn verbose_option_is_accepted_by_every_renderer() {
    let stats = LinkStatistics::default();
    let opts = ReportOptions::default().with_verbose(true);
    let text = report::format_summary(&stats, &opts);
    assert_eq!(text, "[Link Summary]\nTotal links: 0\nFiles modified: 0");
    let json = report::format_json(&stats, &opts);
    assert!(json.contains("\"verbose\": true"));
}
