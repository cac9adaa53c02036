//! Profile header component

use maud::{Markup, html};

use crate::site::{HOME_IMAGE_SIZE, NAME, PAGE_IMAGE_SIZE, PROFILE_IMAGE, ROOT};

/// Renders the profile header
///
/// The home page shows a large, unlinked profile picture above a level one
/// heading. Every other page shows a smaller picture and a level two heading,
/// both linking back to the site root.
///
/// # Arguments
///
/// * `home`: Whether the current page is the home page
///
/// # Returns
///
/// Header markup for the selected variant
pub fn profile_header(home: bool) -> Markup {
    html! {
        header class="flex flex-col" {
            @if home {
                (profile_image(HOME_IMAGE_SIZE, true))
                h1 class="heading-2xl" { (NAME) }
            } @else {
                a href=(ROOT) {
                    (profile_image(PAGE_IMAGE_SIZE, false))
                }
                h2 class="heading-lg" {
                    a href=(ROOT) class="color-inherit" { (NAME) }
                }
            }
        }
    }
}

fn profile_image(size: u32, fill: bool) -> Markup {
    html! {
        img src=(PROFILE_IMAGE)
            class="border-circle"
            height=(size)
            width=(size)
            style=[fill.then_some("object-fit: fill")]
            fetchpriority="high"
            alt=(NAME);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_header_home() {
        // Arrange & Act
        let html = profile_header(true).into_string();

        // Assert
        assert!(html.contains(r#"height="144" width="144""#));
        assert!(html.contains(r#"<h1 class="heading-2xl">aar2dee2</h1>"#));
        assert!(!html.contains("<a "), "Home header should contain no links");
        assert!(!html.contains("<h2"), "Home header should not use h2");
    }

    #[test]
    fn test_profile_header_page() {
        // Arrange & Act
        let html = profile_header(false).into_string();

        // Assert
        assert!(html.contains(r#"height="108" width="108""#));
        assert!(
            html.contains(r#"<a href="/"><img src="/images/profile.jpg""#),
            "Image should be wrapped in root link: {}",
            html
        );
        assert!(html.contains(
            r#"<h2 class="heading-lg"><a href="/" class="color-inherit">aar2dee2</a></h2>"#
        ));
        assert!(!html.contains("<h1"), "Inner page header should not use h1");
    }

    #[test]
    fn test_profile_image_fill_only_on_home() {
        // Arrange & Act
        let home = profile_header(true).into_string();
        let page = profile_header(false).into_string();

        // Assert
        assert!(home.contains(r#"style="object-fit: fill""#));
        assert!(!page.contains("object-fit"));
    }

    #[test]
    fn test_profile_image_alt_text() {
        // Arrange & Act
        let html = profile_image(PAGE_IMAGE_SIZE, false).into_string();

        // Assert
        assert!(html.contains(r#"alt="aar2dee2""#));
        assert!(html.contains(r#"class="border-circle""#));
    }
}
