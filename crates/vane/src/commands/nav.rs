//! `vane nav` command implementation.

use std::path::PathBuf;

use clap::Args;
use vane_config::SiteConfig;
use vane_nav::Navigation;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    /// Route path to resolve (e.g. "/guide/start").
    route: String,

    /// Path to configuration file (default: auto-discover vane.json).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the resolved navigation as JSON on stdout.
    #[arg(long)]
    json: bool,
}

impl NavArgs {
    /// Execute the nav command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = SiteConfig::load(self.config.as_deref())?;
        let nav = Navigation::resolve(&config, &self.route);

        if self.json {
            output.data(&serde_json::to_string_pretty(&nav)?);
            return Ok(());
        }

        match &nav.active {
            Some(item) => output.highlight(&format!("Active nav item: {}", item.text)),
            None => output.info("Active nav item: none"),
        }

        if nav.groups.is_empty() {
            output.info(&format!("No sidebar groups for {}", self.route));
            return Ok(());
        }

        for group in &nav.groups {
            output.info(&format!("{}:", group.text));
            for item in &group.children {
                match &item.link {
                    Some(link) => output.info(&format!("  {} -> {link}", item.text)),
                    None => output.info(&format!("  {}", item.text)),
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_path(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("vane.json");
        std::fs::write(
            &path,
            r#"{
                "title": "Acme Docs",
                "description": "Documentation for the Acme platform",
                "base": "/",
                "themeConfig": {
                    "sidebar": {"/": [{"text": "Introduction", "children": [{"text": "Start", "link": "/guide/start"}]}]},
                    "nav": [{"text": "Guide", "link": "/", "activeMatch": "^/$|^/guide/"}]
                }
            }"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn test_nav_resolves_route() {
        let dir = tempfile::tempdir().unwrap();
        let args = NavArgs {
            route: "/guide/start".to_owned(),
            config: Some(fixture_path(&dir)),
            json: false,
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_nav_json_output() {
        let dir = tempfile::tempdir().unwrap();
        let args = NavArgs {
            route: "/guide/start".to_owned(),
            config: Some(fixture_path(&dir)),
            json: true,
        };
        assert!(args.execute().is_ok());
    }
}
