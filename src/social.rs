//! Social card image URL generation

/// Base of the hosted Open Graph image service.
const OG_IMAGE_BASE: &str = "https://og-image.vercel.app";

/// Fixed query string appended after the rendered title.
///
/// The `images` value is already percent-encoded and must be emitted as is.
const OG_IMAGE_QUERY: &str = "theme=light&md=0&fontSize=75px&images=https%3A%2F%2Fassets.vercel.com%2Fimage%2Fupload%2Ffront%2Fassets%2Fdesign%2Fnextjs-black-logo.svg";

/// Builds the social card image URL for a page title.
///
/// The title becomes the path segment of the generated image, so it is
/// percent-encoded before interpolation.
///
/// # Arguments
///
/// * `title`: Title text to render onto the card
///
/// # Returns
///
/// Absolute URL of the card image
pub fn og_image_url(title: &str) -> String {
    format!(
        "{}/{}.png?{}",
        OG_IMAGE_BASE,
        urlencoding::encode(title),
        OG_IMAGE_QUERY
    )
}
