//! Site-wide constants shared by every rendered page.

/// Author display name shown in the page header.
pub const NAME: &str = "aar2dee2";

/// Site title used for social card metadata.
pub const SITE_TITLE: &str = "aar2dee2 writes";

/// Meta description advertised to crawlers.
pub const DESCRIPTION: &str = "Building with NextJS, Typescript, Elixir";

/// Favicon path relative to site root.
pub const FAVICON: &str = "/favicon.ico";

/// Stylesheet for client-side highlighted code blocks.
///
/// Matches the `language-*` classes emitted by the markdown renderer.
pub const CODE_STYLESHEET: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.4.0/styles/github-dark.min.css";

/// Profile picture path relative to site root.
pub const PROFILE_IMAGE: &str = "/images/profile.jpg";

/// Profile picture edge length in pixels on the home page.
pub const HOME_IMAGE_SIZE: u32 = 144;

/// Profile picture edge length in pixels on every other page.
pub const PAGE_IMAGE_SIZE: u32 = 108;

/// Root-relative link target for the home page.
pub const ROOT: &str = "/";

/// Label of the link rendered below inner page content.
pub const BACK_HOME_LABEL: &str = "← Back to home";

/// Twitter card layout.
pub const TWITTER_CARD: &str = "summary_large_image";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_image_larger_than_page_image() {
        // Arrange & Act & Assert
        assert!(
            HOME_IMAGE_SIZE > PAGE_IMAGE_SIZE,
            "Home page profile picture should be the larger variant"
        );
    }

    #[test]
    fn test_title_contains_name() {
        // Arrange & Act & Assert
        assert!(
            SITE_TITLE.starts_with(NAME),
            "Site title should lead with the display name"
        );
    }
}
