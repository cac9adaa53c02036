//! Markdown rendering with GitHub Flavored Markdown support.
//!
//! Converts post sources into markup for the page shell content slot.
//! Fenced code blocks keep comrak's `language-*` class so the highlight.js
//! stylesheet linked from the document head styles them.

use anyhow::{Context, Result};
use comrak::{Arena, Options};
use maud::{Markup, PreEscaped};

/// Renders markdown to HTML with GitHub Flavored Markdown extensions.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with GitHub Flavored Markdown options.
    ///
    /// Enables tables, strikethrough, autolinks, task lists and footnotes,
    /// smart punctuation, and raw HTML passthrough for authored posts.
    pub fn new() -> Self {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.footnotes = true;

        options.parse.smart = true;

        // Posts are authored locally and trusted
        options.render.unsafe_ = true;

        Self { options }
    }

    /// Renders markdown source into content markup.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown source text
    ///
    /// # Returns
    ///
    /// Pre-escaped markup ready for the page shell content slot
    ///
    /// # Errors
    ///
    /// Returns error if HTML formatting fails or produces invalid UTF8
    pub fn render(&self, content: &str) -> Result<Markup> {
        let arena = Arena::new();
        let root = comrak::parse_document(&arena, content, &self.options);

        let mut buffer = Vec::with_capacity(content.len() * 2);
        comrak::format_html(root, &self.options, &mut buffer)
            .context("Failed to format markdown as HTML")?;

        let html = String::from_utf8(buffer).context("Rendered markdown is not valid UTF8")?;
        Ok(PreEscaped(html))
    }
}

impl Default for MarkdownRenderer<'_> {
    fn default() -> Self {
        Self::new()
    }
}
