//! Back-home navigation component

use maud::{Markup, html};

use crate::site::{BACK_HOME_LABEL, ROOT};

/// Renders the link back to the home page shown below inner page content
pub fn back_home() -> Markup {
    html! {
        div class="mt-4" {
            a href=(ROOT) { (BACK_HOME_LABEL) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_home_link() {
        // Arrange & Act
        let html = back_home().into_string();

        // Assert
        assert_eq!(
            html,
            r#"<div class="mt-4"><a href="/">← Back to home</a></div>"#
        );
    }
}
