//! List command

use anyhow::Result;
use clap::Args;
use console::{style, Emoji};
use std::path::PathBuf;
use ui_forge::registry::ComponentKind;

static INFO: Emoji = Emoji("ℹ", "i");

/// List registered components
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl ListCommand {
    /// Execute the list command
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be parsed.
    pub fn execute(&self) -> Result<()> {
        let manager = super::load_manager(self.config.as_deref())?;
        let registry = manager.registry();

        if registry.is_empty() {
            println!("{INFO} No components registered");
            return Ok(());
        }

        println!("{}", style("Registered components:").bold());
        for entry in registry.entries() {
            println!(
                "  {:<24} {:<10} {} {}",
                style(entry.alias).cyan(),
                kind_label(entry.kind),
                style(entry.class).dim(),
                style(format!("({})", entry.namespace)).dim(),
            );
        }
        println!();
        println!("{INFO} {} aliases, prefix `{}`", registry.len(), manager.prefix());

        Ok(())
    }
}

const fn kind_label(kind: ComponentKind) -> &'static str {
    match kind {
        ComponentKind::Reactive => "reactive",
        ComponentKind::Templated => "templated",
        ComponentKind::Generic => "generic",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(kind_label(ComponentKind::Reactive), "reactive");
        assert_eq!(kind_label(ComponentKind::Generic), "generic");
    }

    #[test]
    fn test_lists_missing_config_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = ListCommand {
            config: Some(dir.path().join("absent.toml")),
        };
        assert!(cmd.execute().is_ok());
    }
}
