//! doclinks: run statistics for documentation link rewriting.
//!
//! A link-rewriting driver walks a set of documents and rewrites hyperlinks.
//! This crate counts what it did and renders the totals as a text summary or
//! a JSON document. Discovery, rewriting and file traversal belong to the
//! driver.
//!
//! # Flow
//!
//! 1. Create one [`StatsAccumulator`] per run.
//! 2. Call `record_links`, `record_file_modified` and
//!    `record_transformation(s)` while processing files.
//! 3. Take a [`LinkStatistics`] snapshot and hand it to
//!    [`report::format_summary`] or [`report::format_json`] together with the
//!    run's [`ReportOptions`].
//! 4. Write the returned string wherever the driver sees fit.
//!
//! # Examples
//!
//! ```
//! use doclinks::{ReportOptions, StatsAccumulator, report};
//!
//! let mut acc = StatsAccumulator::new();
//! acc.record_links(4);
//! acc.record_transformations("relative→absolute", 3);
//! acc.record_file_modified();
//!
//! let summary = report::format_summary(&acc.snapshot(), &ReportOptions::default());
//! assert!(summary.contains("Total links: 4"));
//! assert!(summary.contains("relative→absolute: 3"));
//! ```
//!
//! # Crate Structure
//!
//! - [`core::stats`](crate::core::stats): accumulator and snapshot types
//! - [`core::report`](crate::core::report): text and JSON renderers
//! - [`core::options`](crate::core::options): report options, path mode and format
//! - [`core::config`](crate::core::config): `[report]` TOML configuration
//! - [`core::report_cli`](crate::core::report_cli): clap flags for drivers

pub mod core;

pub use crate::core::error::DoclinksError;
pub use crate::core::options::{PathMode, ReportFormat, ReportOptions};
pub use crate::core::report;
pub use crate::core::stats::{CategoryCounts, LinkStatistics, StatsAccumulator};
