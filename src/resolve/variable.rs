//! Canonical custom-property names for token paths.
//!
//! | path | property |
//! |------|----------|
//! | `colors.X` | `--color-X` |
//! | `spacing.X` | `--spacing-X` |
//! | `typography.fontFamily` | `--font-family` |
//! | `typography.fontSize[.X]` | `--font-size-X` (default `base`) |
//! | `typography.fontWeight[.X]` | `--font-weight-X` (default `regular`) |
//! | `typography.lineHeight[.X]` | `--line-height-X` (default `normal`) |
//! | `typography.X` | `--typography-X` |
//! | `borders.radius[.X]` | `--border-radius-X` (default `medium`) |
//! | `borders.width[.X]` | `--border-width-X` (default `thin`) |
//! | `borders.X` | `--border-X` |
//! | `shadows.X` | `--shadow-X` |
//! | `animations.duration[.X]` | `--duration-X` (default `normal`) |
//! | `animations.easing[.X]` | `--easing-X` (default `easeOut`) |
//! | `animations.X` | `--animation-X` |
//! | `A.B` | `--A-B` |
//! | `A.B.C…` | `--A-B-C` |

use crate::profile::is_token_path;

/// Returns the custom-property name (`--…`) for a token path.
///
/// Returns `None` if `path` is not a token path.
pub fn variable_name(path: &str) -> Option<String> {
    if !is_token_path(path) {
        return None;
    }

    let segments: Vec<&str> = path.split('.').collect();
    let first = segments[0];
    let second = segments.get(1).copied();
    let third = segments.get(2).copied();

    let name = match (first, second) {
        ("colors", Some(key)) => format!("color-{key}"),
        ("spacing", Some(key)) => format!("spacing-{key}"),
        ("typography", Some("fontFamily")) => "font-family".to_string(),
        ("typography", Some("fontSize")) => format!("font-size-{}", third.unwrap_or("base")),
        ("typography", Some("fontWeight")) => {
            format!("font-weight-{}", third.unwrap_or("regular"))
        }
        ("typography", Some("lineHeight")) => {
            format!("line-height-{}", third.unwrap_or("normal"))
        }
        ("typography", Some(key)) => format!("typography-{key}"),
        ("borders", Some("radius")) => format!("border-radius-{}", third.unwrap_or("medium")),
        ("borders", Some("width")) => format!("border-width-{}", third.unwrap_or("thin")),
        ("borders", Some(key)) => format!("border-{key}"),
        ("shadows", key) => format!("shadow-{}", key.unwrap_or("medium")),
        ("animations", Some("duration")) => format!("duration-{}", third.unwrap_or("normal")),
        ("animations", Some("easing")) => format!("easing-{}", third.unwrap_or("easeOut")),
        ("animations", Some(key)) => format!("animation-{key}"),
        (category, Some(key)) => match third {
            Some(leaf) => format!("{category}-{key}-{leaf}"),
            None => format!("{category}-{key}"),
        },
        (_, None) => return None,
    };

    Some(format!("--{name}"))
}

/// Maps a token path to a `var(--…)` reference.
///
/// Anything that is not a token path is returned unchanged.
///
/// # Example
///
/// ```rust
/// use tokensheet::map_to_variable;
///
/// assert_eq!(map_to_variable("colors.accent"), "var(--color-accent)");
/// assert_eq!(map_to_variable("typography.fontSize.large"), "var(--font-size-large)");
/// assert_eq!(map_to_variable("typography.fontSize"), "var(--font-size-base)");
/// assert_eq!(map_to_variable("#3d7aff"), "#3d7aff");
/// ```
pub fn map_to_variable(value: &str) -> String {
    match variable_name(value) {
        Some(name) => format!("var({name})"),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_categories() {
        assert_eq!(map_to_variable("colors.accent"), "var(--color-accent)");
        assert_eq!(map_to_variable("colors.accentLight"), "var(--color-accentLight)");
        assert_eq!(map_to_variable("spacing.large"), "var(--spacing-large)");
        assert_eq!(map_to_variable("shadows.small"), "var(--shadow-small)");
    }

    #[test]
    fn test_flat_categories_ignore_extra_segments() {
        assert_eq!(map_to_variable("colors.brand.dark"), "var(--color-brand)");
        assert_eq!(map_to_variable("spacing.inset.small"), "var(--spacing-inset)");
    }

    #[test]
    fn test_typography() {
        assert_eq!(map_to_variable("typography.fontFamily"), "var(--font-family)");
        assert_eq!(map_to_variable("typography.fontSize.large"), "var(--font-size-large)");
        assert_eq!(map_to_variable("typography.fontSize"), "var(--font-size-base)");
        assert_eq!(map_to_variable("typography.fontWeight.bold"), "var(--font-weight-bold)");
        assert_eq!(map_to_variable("typography.fontWeight"), "var(--font-weight-regular)");
        assert_eq!(map_to_variable("typography.lineHeight"), "var(--line-height-normal)");
        assert_eq!(map_to_variable("typography.letterSpacing"), "var(--typography-letterSpacing)");
    }

    #[test]
    fn test_borders() {
        assert_eq!(map_to_variable("borders.radius.round"), "var(--border-radius-round)");
        assert_eq!(map_to_variable("borders.radius"), "var(--border-radius-medium)");
        assert_eq!(map_to_variable("borders.width"), "var(--border-width-thin)");
        assert_eq!(map_to_variable("borders.style"), "var(--border-style)");
    }

    #[test]
    fn test_animations() {
        assert_eq!(map_to_variable("animations.duration.fast"), "var(--duration-fast)");
        assert_eq!(map_to_variable("animations.duration"), "var(--duration-normal)");
        assert_eq!(map_to_variable("animations.easing"), "var(--easing-easeOut)");
        assert_eq!(map_to_variable("animations.easing.linear"), "var(--easing-linear)");
        assert_eq!(map_to_variable("animations.bounce"), "var(--animation-bounce)");
    }

    #[test]
    fn test_unknown_categories() {
        assert_eq!(map_to_variable("motion.fast"), "var(--motion-fast)");
        assert_eq!(map_to_variable("z.layer.modal"), "var(--z-layer-modal)");
        assert_eq!(map_to_variable("z.layer.modal.top"), "var(--z-layer-modal)");
    }

    #[test]
    fn test_pass_through() {
        assert_eq!(map_to_variable("none"), "none");
        assert_eq!(map_to_variable("#2c682c"), "#2c682c");
        assert_eq!(map_to_variable("var(--color-accent)"), "var(--color-accent)");
        assert_eq!(map_to_variable("1.5"), "1.5");
        assert_eq!(variable_name("solid"), None);
    }

    #[test]
    fn test_variable_name_is_bare() {
        assert_eq!(variable_name("colors.accent").as_deref(), Some("--color-accent"));
    }
}
