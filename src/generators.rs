//! HTML page generators for blog content.

use anyhow::{Context, Result};
use maud::{Markup, PreEscaped};
use std::fs;
use std::path::Path;

use crate::components::layout::page_shell;
use crate::markdown::MarkdownRenderer;

/// Source format of page content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    /// Markdown rendered with GitHub Flavored extensions
    Markdown,
    /// HTML fragment inserted verbatim
    Html,
}

/// Converts page source text into content markup.
///
/// # Arguments
///
/// * `source`: Page source text
/// * `format`: How the source should be interpreted
///
/// # Errors
///
/// Returns error if markdown rendering fails
pub fn render_content(source: &str, format: ContentFormat) -> Result<Markup> {
    match format {
        ContentFormat::Markdown => MarkdownRenderer::new()
            .render(source)
            .context("Failed to render markdown content"),
        ContentFormat::Html => Ok(PreEscaped(source.to_string())),
    }
}

/// Generates a complete page from a content file.
///
/// Reads the file, converts it according to `format`, and wraps the result
/// in the page shell.
///
/// # Arguments
///
/// * `input`: Path to the content file
/// * `home`: Whether the page is the home page
/// * `format`: Content source format
///
/// # Returns
///
/// HTML markup ready for writing to disk
///
/// # Errors
///
/// Returns error if:
/// - Input file cannot be read
/// - File content contains invalid UTF8
/// - Markdown rendering fails
///
/// # Examples
///
/// ```no_run
/// use pageshell::{ContentFormat, generate_page};
/// use std::path::Path;
///
/// let html = generate_page(Path::new("posts/hello.md"), false, ContentFormat::Markdown)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn generate_page(
    input: impl AsRef<Path>,
    home: bool,
    format: ContentFormat,
) -> Result<Markup> {
    let input = input.as_ref();
    let bytes =
        fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;
    let source = String::from_utf8(bytes)
        .with_context(|| format!("Content contains invalid UTF8: {}", input.display()))?;

    let content = render_content(&source, format)?;
    Ok(page_shell(home, content))
}

/// Writes rendered page to disk, creating missing parent directories.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_page(output: impl AsRef<Path>, page: &Markup) -> Result<()> {
    let output = output.as_ref();
    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    fs::write(output, &page.0)
        .with_context(|| format!("Failed to write page: {}", output.display()))?;
    Ok(())
}
