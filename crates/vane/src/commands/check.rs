//! `vane check` command implementation.

use std::path::PathBuf;

use clap::Args;
use vane_config::SiteConfig;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover vane.json).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or fails
    /// validation. The caller reports it and exits non-zero, failing the
    /// build.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = SiteConfig::load(self.config.as_deref())?;

        if let Some(path) = &config.config_path {
            output.info(&format!("Checked {}", path.display()));
        }

        let group_count: usize = config
            .sidebar
            .routes
            .iter()
            .map(|route| route.groups.len())
            .sum();
        output.info(&format!(
            "Site: {} ({})",
            config.meta.title, config.meta.description
        ));
        output.info(&format!(
            "{} nav item(s), {} sidebar route(s), {} group(s)",
            config.nav.len(),
            config.sidebar.routes.len(),
            group_count
        ));

        if config.nav.is_empty() && config.sidebar.is_empty() {
            output.warning("No navigation declared: themeConfig.nav and themeConfig.sidebar are both empty");
        }

        output.success("Configuration is valid");
        Ok(())
    }
}
