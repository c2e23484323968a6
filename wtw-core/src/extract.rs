//! Pulling clothing items out of the advice service's HTML.
//!
//! The page lists each item as `<strong><a href="...">Item</a></strong>`.
//! `AnchorExtractor` scans for that exact shape with a regex; anything that
//! needs real HTML parsing can implement `Extractor` instead.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::{Result, WtwError};

/// Turns a response body into an ordered list of item names.
pub trait Extractor: Send + Sync {
    /// Items in document order. Zero matches is `WtwError::NoAnswer`.
    fn extract(&self, body: &str) -> Result<Vec<String>>;
}

// Non-empty href, no nested tag inside the anchor text.
static STRONG_ANCHOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<strong><a href="[^"]+">(?P<text>[^<]+)</a></strong>"#)
        .unwrap_or_else(|e| panic!("invalid anchor pattern: {e}"))
});

/// Regex scan for bold anchors.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchorExtractor;

impl Extractor for AnchorExtractor {
    fn extract(&self, body: &str) -> Result<Vec<String>> {
        let items: Vec<String> = STRONG_ANCHOR
            .captures_iter(body)
            .map(|caps| caps["text"].to_string())
            .collect();

        debug!(matches = items.len(), "extracted anchors");

        if items.is_empty() {
            return Err(WtwError::NoAnswer);
        }
        Ok(items)
    }
}
