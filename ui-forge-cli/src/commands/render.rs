//! Render command

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use ui_forge::markup::{AttributeBag, Contents};

/// Render one component
#[derive(Debug, Args)]
pub struct RenderCommand {
    /// Component alias (e.g. `date-input`)
    pub alias: String,

    /// Attribute as `name=value`, repeatable
    #[arg(short, long = "attr", value_parser = parse_attr)]
    pub attrs: Vec<(String, String)>,

    /// Boolean attribute set to true, repeatable
    #[arg(short, long = "flag")]
    pub flags: Vec<String>,

    /// Inner content; configured contents apply when omitted
    #[arg(short, long)]
    pub content: Option<String>,

    /// Configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl RenderCommand {
    /// Execute the render command
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration file cannot be parsed
    /// - The template engine rejects the generated markup
    pub fn execute(&self) -> Result<()> {
        let manager = super::load_manager(self.config.as_deref())?;
        tracing::debug!(
            alias = %self.alias,
            registered = manager.find(&self.alias).is_some(),
            "Rendering component"
        );
        let html = manager
            .make(&self.alias, self.attributes(), self.content.as_deref().map(Contents::from))
            .with_context(|| format!("Failed to render {}", self.alias))?;

        println!("{html}");
        Ok(())
    }

    fn attributes(&self) -> AttributeBag {
        let mut attributes: AttributeBag = self.attrs.iter().cloned().collect();
        for flag in &self.flags {
            attributes.insert(flag.clone(), true);
        }
        attributes
    }
}

fn parse_attr(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .filter(|(name, _)| !name.trim().is_empty())
        .map(|(name, value)| (name.trim().to_string(), value.to_string()))
        .ok_or_else(|| format!("expected name=value, got `{raw}`"))
}
