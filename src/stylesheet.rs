//! Stylesheet assembly.
//!
//! A stylesheet is the `:root` custom-property block followed by component
//! blocks. The variable block is derived from the attribute tree alone and
//! is emitted once per stylesheet, however many components it covers.

use std::collections::HashSet;
use std::fmt;

use crate::emit::{Block, ComponentKind};
use crate::profile::{AttributeTree, ComponentDecl, Profile, CATEGORIES};
use crate::resolve::{resolve_reference, variable_name};

/// An ordered list of blocks, rendered one blank line apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    blocks: Vec<Block>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Returns the first block with exactly this selector.
    pub fn block(&self, selector: &str) -> Option<&Block> {
        self.blocks.iter().find(|block| block.selector == selector)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl Extend<Block> for Stylesheet {
    fn extend<I: IntoIterator<Item = Block>>(&mut self, iter: I) {
        self.blocks.extend(iter);
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{block}")?;
        }
        Ok(())
    }
}

/// Builds the `:root` block declaring every token of the known categories.
///
/// Categories are emitted in [`CATEGORIES`] order and tokens in declaration
/// order. A token whose property name was already emitted is skipped.
pub fn root_block(tree: &AttributeTree) -> Block {
    let mut block = Block::new(":root");
    let mut seen = HashSet::new();
    let leaves = tree.leaves();

    for category in CATEGORIES {
        for (path, _) in &leaves {
            if path.split('.').next() != Some(*category) {
                continue;
            }
            let Some(name) = variable_name(path) else {
                continue;
            };
            let Some(value) = resolve_reference(path, tree) else {
                continue;
            };
            if seen.insert(name.clone()) {
                block.push(name, value);
            }
        }
    }
    block
}

/// Strips one leading `.` or `#` from a selector to get the component key.
pub fn component_key(selector: &str) -> &str {
    selector
        .strip_prefix('.')
        .or_else(|| selector.strip_prefix('#'))
        .unwrap_or(selector)
}

/// Emits the blocks for one component without the variable block.
pub fn component_blocks(name: &str, selector: &str, decl: &ComponentDecl) -> Vec<Block> {
    let kind = ComponentKind::from_name(name);
    let blocks = kind.emit(selector, decl);
    tracing::debug!(component = name, ?kind, blocks = blocks.len(), "emitted component");
    blocks
}

/// Builds the stylesheet for a single component, including the `:root`
/// block. Returns `None` if the profile does not declare the component.
pub fn component_stylesheet(profile: &Profile, selector: &str) -> Option<Stylesheet> {
    let name = component_key(selector);
    let decl = profile.component(name)?;

    let mut sheet = Stylesheet::new();
    sheet.push(root_block(&profile.attributes));
    sheet.extend(component_blocks(name, selector, decl));
    Some(sheet)
}

/// Generates the stylesheet text for one component addressed by selector
/// (`.card` or `#card`).
///
/// Unknown components yield a CSS comment naming the component rather than
/// an error.
///
/// # Example
///
/// ```rust
/// use tokensheet::{generate_component_css, Profile};
///
/// let css = generate_component_css(&Profile::new("Empty"), ".ghost");
/// assert_eq!(css, r#"/* Component "ghost" not found in the profile */"#);
/// ```
pub fn generate_component_css(profile: &Profile, selector: &str) -> String {
    match component_stylesheet(profile, selector) {
        Some(sheet) => sheet.to_string(),
        None => {
            let name = component_key(selector);
            tracing::debug!(component = name, "component not declared in profile");
            // `*/` in the name would end the comment early
            let name = name.replace("*/", "*\\/");
            format!("/* Component \"{name}\" not found in the profile */")
        }
    }
}

/// Builds the stylesheet for every component of a profile.
pub fn design_system(profile: &Profile) -> Stylesheet {
    let mut sheet = Stylesheet::new();
    sheet.push(root_block(&profile.attributes));
    for (name, decl) in profile.components.iter() {
        let selector = format!(".{name}");
        sheet.extend(component_blocks(name, &selector, decl));
    }
    sheet
}

/// Generates the complete stylesheet text for a profile: one `:root` block
/// then each component, in declaration order, addressed as `.{name}`.
pub fn generate_design_system(profile: &Profile) -> String {
    design_system(profile).to_string()
}
