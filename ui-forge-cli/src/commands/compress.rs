//! Compress command

use anyhow::{Context, Result};
use clap::Args;
use std::io::Read;
use std::path::PathBuf;

/// Compress HTML
#[derive(Debug, Args)]
pub struct CompressCommand {
    /// Input file; stdin when omitted
    pub file: Option<PathBuf>,
}

impl CompressCommand {
    /// Execute the compress command
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read.
    pub fn execute(&self) -> Result<()> {
        let input = self.read_input()?;
        println!("{}", ui_forge::markup::compress(&input));
        Ok(())
    }

    fn read_input(&self) -> Result<String> {
        match &self.file {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
            None => {
                let mut input = String::new();
                std::io::stdin()
                    .read_to_string(&mut input)
                    .context("Failed to read stdin")?;
                Ok(input)
            }
        }
    }
}
