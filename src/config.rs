//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Command line configuration for Pageshell.
#[derive(Debug, Clone, Parser)]
#[command(name = "pageshell", version, about, long_about = None)]
pub struct Config {
    /// Content file to wrap (Markdown unless --raw is given)
    pub input: PathBuf,

    /// Output HTML file
    #[arg(short, long, default_value = "dist/index.html")]
    pub output: PathBuf,

    /// Render the home page header variant
    #[arg(long)]
    pub home: bool,

    /// Treat input as an HTML fragment instead of Markdown
    #[arg(long)]
    pub raw: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if input path does not exist or is a directory.
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            bail!("Input path does not exist: {}", self.input.display());
        }
        if self.input.is_dir() {
            bail!("Input path is a directory: {}", self.input.display());
        }

        Ok(())
    }
}
