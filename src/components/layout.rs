//! Page shell layout component

use maud::{DOCTYPE, Markup, html};

use super::head::head_metadata;
use super::header::profile_header;
use super::nav::back_home;

/// Wraps page content in the site shell
///
/// Produces a complete document: head metadata, the profile header variant
/// selected by `home`, the content inside `main`, and on inner pages a link
/// back to the home page. Content is inserted as is.
///
/// # Arguments
///
/// * `home`: Whether the page being rendered is the home page
/// * `content`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_shell(home: bool, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                (head_metadata())
            }
            body {
                div class="layout-container" {
                    (profile_header(home))
                    main {
                        (content)
                    }
                    @if !home {
                        (back_home())
                    }
                }
            }
        }
    }
}
