//! Document head metadata component

use maud::{Markup, html};

use crate::site::{CODE_STYLESHEET, DESCRIPTION, FAVICON, SITE_TITLE, TWITTER_CARD};
use crate::social::og_image_url;

/// Renders the head metadata shared by every page
///
/// Emits, in order: favicon link, code highlight stylesheet, description,
/// Open Graph image and title, and the Twitter card type. Output depends
/// only on site constants.
///
/// # Returns
///
/// Link and meta elements for placement inside `head`
pub fn head_metadata() -> Markup {
    html! {
        link rel="icon" href=(FAVICON);
        link rel="stylesheet" href=(CODE_STYLESHEET);
        meta name="description" content=(DESCRIPTION);
        meta property="og:image" content=(og_image_url(SITE_TITLE));
        meta name="og:title" content=(SITE_TITLE);
        meta name="twitter:card" content=(TWITTER_CARD);
    }
}
