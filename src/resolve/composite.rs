//! Conversion of declared property values into emitted CSS values.

use crate::profile::{is_token_path, PropertyValue};

use super::variable::map_to_variable;

/// Produces the CSS value text for a property value.
///
/// Composite values are split on spaces and each part is mapped on its own,
/// so shorthands such as `padding` or `transition` can mix token paths and
/// literals. Groups produce no text.
///
/// # Example
///
/// ```rust
/// use tokensheet::{process_value, PropertyValue};
///
/// let padding = PropertyValue::parse("spacing.small spacing.medium");
/// assert_eq!(process_value(&padding), "var(--spacing-small) var(--spacing-medium)");
///
/// let border = PropertyValue::parse("colors.accent borders.width.thin solid");
/// assert_eq!(process_value(&border), "var(--color-accent) var(--border-width-thin) solid");
/// ```
pub fn process_value(value: &PropertyValue) -> String {
    match value {
        PropertyValue::Composite(text) => text
            .split(' ')
            .filter(|part| !part.is_empty())
            .map(map_part)
            .collect::<Vec<_>>()
            .join(" "),
        PropertyValue::Reference(path) => map_to_variable(path),
        PropertyValue::Literal(text) => text.clone(),
        PropertyValue::VariantGroup(_) => String::new(),
    }
}

fn map_part(part: &str) -> String {
    if is_token_path(part) {
        map_to_variable(part)
    } else {
        part.to_string()
    }
}
