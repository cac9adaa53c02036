//! Page shell renderer for the aar2dee2 writes blog.

pub mod components;
mod config;
mod generators;
mod markdown;
pub mod site;
mod social;

pub use components::layout::page_shell;
pub use config::Config;
pub use generators::{ContentFormat, generate_page, render_content, write_page};
pub use markdown::MarkdownRenderer;
pub use social::og_image_url;
