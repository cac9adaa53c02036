use anyhow::{Context, Result};
use pageshell::{Config, ContentFormat};
use std::fs;

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let format = if config.raw {
        ContentFormat::Html
    } else {
        ContentFormat::Markdown
    };

    let is_empty = fs::metadata(&config.input)
        .map(|m| m.len() == 0)
        .unwrap_or(false);
    if is_empty {
        eprintln!(
            "Warning: {} is empty, rendering page without content",
            config.input.display()
        );
    }

    let page = pageshell::generate_page(&config.input, config.home, format)
        .context("Failed to generate page")?;

    pageshell::write_page(&config.output, &page).context("Failed to write page")?;

    println!("Generated: {}", config.output.display());

    Ok(())
}
