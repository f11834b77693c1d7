//! `vane show` command implementation.

use std::path::PathBuf;

use clap::Args;
use vane_config::SiteConfig;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the show command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    /// Path to configuration file (default: auto-discover vane.json).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ShowArgs {
    /// Execute the show command.
    ///
    /// Prints the normalized structure (`title`, `description`, `base`,
    /// `head`, `sidebar`, `nav`) as pretty JSON on stdout.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = SiteConfig::load(self.config.as_deref())?;
        output.data(&serde_json::to_string_pretty(&config)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_fails_on_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vane.json");
        std::fs::write(&path, "{ not json").unwrap();

        let args = ShowArgs { config: Some(path) };
        assert!(args.execute().is_err());
    }
}
