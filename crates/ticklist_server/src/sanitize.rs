//! Markup stripping at the write boundary.
//!
//! Item text is sanitized before it reaches the store or is echoed back:
//! every tag and attribute is removed, script and style elements lose
//! their contents entirely, and surviving text is entity-escaped. The
//! result can be embedded in the page without further treatment, and
//! sanitizing already-sanitized text yields the same text.

use ammonia::Builder;
use once_cell::sync::Lazy;
use std::collections::HashSet;

// Empty allowlists: no tags survive, no attributes survive.
static STRIPPER: Lazy<Builder<'static>> = Lazy::new(|| {
    let mut builder = Builder::default();
    builder.tags(HashSet::new());
    builder.generic_attributes(HashSet::new());
    builder
});

/// Strips all markup from user-supplied item text.
///
/// # Example
///
/// ```
/// use ticklist_server::sanitize_text;
///
/// assert_eq!(sanitize_text("<b>hi</b>"), "hi");
/// assert_eq!(sanitize_text("<script>x</script>done"), "done");
/// ```
#[must_use]
pub fn sanitize_text(raw: &str) -> String {
    STRIPPER.clean(raw).to_string()
}
