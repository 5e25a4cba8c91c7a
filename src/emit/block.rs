//! Selector blocks and the generic property loop.

use std::fmt;

use crate::profile::ComponentDecl;
use crate::resolve::process_value;

/// A single `property: value;` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

/// A selector with its declarations.
///
/// Renders as:
///
/// ```text
/// .card {
///   background: var(--color-accent);
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

impl Block {
    /// Creates a block with no declarations.
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    /// Appends a declaration.
    pub fn push(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.declarations.push(Declaration {
            property: property.into(),
            value: value.into(),
        });
    }

    /// Returns the value of the first declaration of `property`.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|decl| decl.property == property)
            .map(|decl| decl.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.selector)?;
        for decl in &self.declarations {
            writeln!(f, "  {}: {};", decl.property, decl.value)?;
        }
        writeln!(f, "}}")
    }
}

/// Converts a camelCase property name to its hyphenated CSS spelling.
///
/// ```rust
/// use tokensheet::emit::css_property_name;
///
/// assert_eq!(css_property_name("borderRadius"), "border-radius");
/// assert_eq!(css_property_name("zIndex"), "z-index");
/// assert_eq!(css_property_name("color"), "color");
/// ```
pub fn css_property_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Emits one block from a declaration's scalar properties.
///
/// Groups and the names in `exclude` are skipped. Properties whose value
/// processes to empty text are omitted.
pub fn property_block(selector: impl Into<String>, decl: &ComponentDecl, exclude: &[&str]) -> Block {
    let mut block = Block::new(selector);
    for (name, value) in decl.iter() {
        if value.is_group() || exclude.contains(&name) {
            continue;
        }
        let css_value = process_value(value);
        if css_value.is_empty() {
            tracing::trace!(selector = %block.selector, property = name, "omitting empty declaration");
            continue;
        }
        block.push(css_property_name(name), css_value);
    }
    block
}
