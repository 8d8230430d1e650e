//! Report flags a driver can flatten into its own clap CLI.
//!
//! ```ignore
//! #[derive(clap::Parser)]
//! struct RewriteCli {
//!     #[clap(flatten)]
//!     report: doclinks::core::report_cli::ReportArgs,
//! }
//! ```

use crate::core::config::ReportConfig;
use crate::core::options::{PathMode, ReportFormat, ReportOptions};

#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportArgs {
    /// Report format: 'text' or 'json' (overrides config).
    #[clap(long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Path mode the run resolved links with: 'relative' or 'absolute'.
    #[clap(long, value_enum)]
    pub path_mode: Option<PathMode>,
    /// Report that no files were written.
    #[clap(long)]
    pub dry_run: bool,
    /// Reserved for a more detailed report.
    #[clap(long, short = 'v')]
    pub verbose: bool,
}

impl ReportArgs {
    /// Merge flags over `config`. Flags that were not given keep the config value.
    pub fn resolve(&self, config: &ReportConfig) -> (ReportFormat, ReportOptions) {
        let base = config.options();
        let options = ReportOptions {
            path_mode: self.path_mode.or(base.path_mode),
            dry_run: if self.dry_run { Some(true) } else { base.dry_run },
            verbose: if self.verbose { Some(true) } else { base.verbose },
        };
        (self.format.unwrap_or(config.format()), options)
    }
}
