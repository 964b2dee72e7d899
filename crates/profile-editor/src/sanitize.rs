//! Default display sanitizer.

use maud::html;
use url::Url;

use crate::collaborators::Sanitizer;

/// Escapes values as HTML text and drops `javascript:` URLs.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlSanitizer;

impl Sanitizer for HtmlSanitizer {
    fn clean(&self, raw: &str) -> String {
        if is_script_url(raw) {
            return String::new();
        }
        html! { (raw) }.into_string()
    }
}

/// URL parsing strips surrounding whitespace and embedded tabs or newlines
/// and lowercases the scheme, the same way a browser reads an `href`.
fn is_script_url(raw: &str) -> bool {
    Url::parse(raw).is_ok_and(|url| url.scheme() == "javascript")
}
