//! Resolution of token references to literal values.

use crate::profile::{is_token_path, AttributeTree};

/// Resolves a value against the attribute tree.
///
/// Text that is not a token path (no `.`, a hex color, a `var(--…)` call,
/// a number) is returned unchanged. A token path resolves to its token's
/// value, or `None` when the tree has no such token; callers omit the
/// declaration in that case.
///
/// # Example
///
/// ```rust
/// use tokensheet::{resolve_reference, TokenGroup};
///
/// let tree = TokenGroup::new().group("spacing", TokenGroup::new().token("small", "8px"));
///
/// assert_eq!(resolve_reference("spacing.small", &tree).as_deref(), Some("8px"));
/// assert_eq!(resolve_reference("#ffffff", &tree).as_deref(), Some("#ffffff"));
/// assert_eq!(resolve_reference("spacing.huge", &tree), None);
/// ```
pub fn resolve_reference(value: &str, tree: &AttributeTree) -> Option<String> {
    if !is_token_path(value) {
        return Some(value.to_string());
    }
    tree.lookup(value).map(|token| token.value.clone())
}
