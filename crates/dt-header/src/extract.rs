//! Structural extraction of nodes and properties from comment-free text.
//!
//! Only single-level `label : type { ... };` blocks are recognized. A node body ends at the
//! first `}`, so a nested `{ ... }` truncates its parent and every property after the inner
//! closing brace is lost. Text that doesn't match is skipped without a diagnostic.

use once_cell::sync::Lazy;
use regex::Regex;

static NODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\w+)\s*:\s*(\w+)\s*\{([^}]*)\};").expect("node pattern should compile")
});

static PROPERTY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\S+)\s*=\s*([^;]+);").expect("property pattern should compile")
});

/// A node as found in the source, before its properties are extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawNode<'i> {
    pub label: &'i str,
    pub node_type: &'i str,
    /// Everything between the braces, untrimmed
    pub body: &'i str,
}

/// Returns the nodes in `text` in source order.
///
/// # Example
///
/// ```
/// use dt_header::extract::{nodes, RawNode};
/// let mut iter = nodes("uart0: uart { baud = <9600>; };");
///
/// assert_eq!(
///     iter.next(),
///     Some(RawNode { label: "uart0", node_type: "uart", body: " baud = <9600>; " })
/// );
/// assert!(iter.next().is_none());
/// ```
pub fn nodes(text: &str) -> impl Iterator<Item = RawNode<'_>> {
    NODE_REGEX.captures_iter(text).map(|captures| {
        let (_, [label, node_type, body]) = captures.extract();
        RawNode {
            label,
            node_type,
            body,
        }
    })
}

/// Returns the `(key, value)` pairs of a node body in source order.
///
/// The value is trimmed at both edges; inner whitespace is kept. Duplicate keys are yielded as
/// is.
pub fn properties(body: &str) -> impl Iterator<Item = (&str, &str)> {
    PROPERTY_REGEX.captures_iter(body).map(|captures| {
        let (_, [key, value]) = captures.extract();
        (key, value.trim())
    })
}
