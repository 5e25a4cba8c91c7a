//! Fixed blocks emitted alongside certain component kinds.
//!
//! Each [`Partial`] is a selector suffix plus a declaration table. Structural
//! partials are appended to the component class (`.nav` → `.nav-brand`);
//! the button templates are appended to the selector as given. Token references in a table carry a literal
//! fallback for profiles that do not define the token. Unlike the generic
//! property loop, partial blocks emit every declaration they list.

use crate::emit::Block;
use crate::profile::PropertyValue;
use crate::resolve::{process_value, variable_name};

/// The value side of a partial declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartialValue {
    /// Processed like a declared property value: token paths become
    /// `var(--…)` references, everything else is literal.
    Expr(&'static str),
    /// A token reference with a literal CSS fallback.
    Fallback {
        path: &'static str,
        literal: &'static str,
    },
}

impl PartialValue {
    /// Renders the CSS value text.
    pub fn render(&self) -> String {
        match self {
            PartialValue::Expr(expr) => process_value(&PropertyValue::parse(expr)),
            PartialValue::Fallback { path, literal } => match variable_name(path) {
                Some(name) => format!("var({name}, {literal})"),
                None => literal.to_string(),
            },
        }
    }
}

/// A fixed block addressed relative to a component selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partial {
    /// Appended verbatim to the component selector (`-wrapper`, `.primary`).
    pub suffix: &'static str,
    pub declarations: &'static [(&'static str, PartialValue)],
}

impl Partial {
    /// Builds the block for the given component selector.
    pub fn block(&self, base: &str) -> Block {
        let mut block = Block::new(format!("{base}{}", self.suffix));
        for (property, value) in self.declarations {
            block.push(*property, value.render());
        }
        block
    }
}

use PartialValue::{Expr, Fallback};

const fn fallback(path: &'static str, literal: &'static str) -> PartialValue {
    Fallback { path, literal }
}

pub const BUTTON_PRIMARY: Partial = Partial {
    suffix: ".primary",
    declarations: &[
        ("background", Expr("colors.accent")),
        ("color", Expr("#ffffff")),
        ("padding", Expr("spacing.small spacing.medium")),
        ("border-radius", Expr("borders.radius.medium")),
        ("font-weight", Expr("typography.fontWeight.medium")),
        (
            "transition",
            Expr("background-color animations.duration.fast animations.easing.easeOut"),
        ),
    ],
};

pub const BUTTON_SECONDARY: Partial = Partial {
    suffix: ".secondary",
    declarations: &[
        ("background", Expr("colors.accentLight")),
        ("color", Expr("colors.accent")),
        ("padding", Expr("spacing.small spacing.medium")),
        ("border-radius", Expr("borders.radius.medium")),
        ("font-weight", Expr("typography.fontWeight.medium")),
        (
            "transition",
            Expr("background-color animations.duration.fast animations.easing.easeOut"),
        ),
    ],
};

/// Returns the fixed button template for a variant name.
pub fn button_variant(variant: &str) -> Option<&'static Partial> {
    match variant {
        "primary" => Some(&BUTTON_PRIMARY),
        "secondary" => Some(&BUTTON_SECONDARY),
        _ => None,
    }
}

pub const INPUT_PARTIALS: &[Partial] = &[
    Partial {
        suffix: "-wrapper",
        declarations: &[
            ("display", Expr("flex")),
            ("flex-direction", Expr("column")),
            ("margin-bottom", fallback("spacing.medium", "16px")),
        ],
    },
    Partial {
        suffix: "-wrapper label",
        declarations: &[
            ("margin-bottom", fallback("spacing.small", "8px")),
            ("font-weight", fallback("typography.fontWeight.medium", "500")),
        ],
    },
];

pub const NAV_PARTIALS: &[Partial] = &[
    Partial {
        suffix: "-brand",
        declarations: &[
            ("font-size", fallback("typography.fontSize.large", "20px")),
            ("font-weight", fallback("typography.fontWeight.bold", "700")),
            ("color", fallback("colors.accent", "#3d7aff")),
        ],
    },
    Partial {
        suffix: "-menu",
        declarations: &[
            ("display", Expr("flex")),
            ("list-style", Expr("none")),
            ("margin", Expr("0")),
            ("padding", Expr("0")),
            ("gap", fallback("spacing.medium", "16px")),
        ],
    },
    Partial {
        suffix: "-item",
        declarations: &[("margin", Expr("0"))],
    },
    Partial {
        suffix: "-link",
        declarations: &[
            ("color", fallback("colors.textPrimary", "#1a1a1a")),
            ("text-decoration", Expr("none")),
            ("font-weight", fallback("typography.fontWeight.medium", "500")),
        ],
    },
];

pub const BADGE_PARTIALS: &[Partial] = &[Partial {
    suffix: "-container",
    declarations: &[
        ("display", Expr("flex")),
        ("flex-wrap", Expr("wrap")),
        ("gap", fallback("spacing.small", "8px")),
    ],
}];

/// Emitted when a modal does not declare `overlay`.
pub const MODAL_OVERLAY: Partial = Partial {
    suffix: "-overlay",
    declarations: &[
        ("background", Expr("rgba(0, 0, 0, 0.5)")),
        ("position", Expr("fixed")),
        ("top", Expr("0")),
        ("left", Expr("0")),
        ("right", Expr("0")),
        ("bottom", Expr("0")),
        ("display", Expr("flex")),
        ("justify-content", Expr("center")),
        ("align-items", Expr("center")),
        ("z-index", Expr("1000")),
    ],
};

/// Emitted when a modal does not declare `closeButton`.
pub const MODAL_CLOSE_BUTTON: Partial = Partial {
    suffix: "-close-button",
    declarations: &[
        ("position", Expr("absolute")),
        ("top", fallback("spacing.medium", "16px")),
        ("right", fallback("spacing.medium", "16px")),
        ("background", Expr("none")),
        ("border", Expr("none")),
        ("cursor", Expr("pointer")),
        ("font-size", fallback("typography.fontSize.large", "20px")),
        ("color", fallback("colors.textSecondary", "#6b6b6b")),
    ],
};

pub const MODAL_PARTIALS: &[Partial] = &[
    Partial {
        suffix: "-demo",
        declarations: &[
            ("position", Expr("relative")),
            ("padding", fallback("spacing.large", "24px")),
        ],
    },
    Partial {
        suffix: "-title",
        declarations: &[
            ("margin-top", Expr("0")),
            ("margin-bottom", fallback("spacing.medium", "16px")),
            ("font-size", fallback("typography.fontSize.large", "20px")),
            ("font-weight", fallback("typography.fontWeight.bold", "700")),
        ],
    },
    Partial {
        suffix: "-content",
        declarations: &[
            ("margin-bottom", fallback("spacing.medium", "16px")),
            ("color", fallback("colors.textPrimary", "#1a1a1a")),
        ],
    },
    Partial {
        suffix: "-footer",
        declarations: &[
            ("display", Expr("flex")),
            ("justify-content", Expr("flex-end")),
            ("gap", fallback("spacing.small", "8px")),
        ],
    },
];

pub const ALERT_PARTIALS: &[Partial] = &[Partial {
    suffix: "-container",
    declarations: &[
        ("display", Expr("flex")),
        ("flex-direction", Expr("column")),
        ("gap", fallback("spacing.medium", "16px")),
    ],
}];
