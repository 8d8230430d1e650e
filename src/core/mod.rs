//! Core modules for doclinks' run statistics and reporting.
//!
//! The accumulator and renderers live here, together with the options,
//! configuration and CLI flags that feed them.

pub mod config;
pub mod error;
pub mod options;
pub mod report;
pub mod report_cli;
pub mod stats;
