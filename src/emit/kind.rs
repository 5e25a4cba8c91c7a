//! Per-kind emission strategies.

use crate::emit::partials::{
    button_variant, Partial, ALERT_PARTIALS, BADGE_PARTIALS, INPUT_PARTIALS, MODAL_CLOSE_BUTTON,
    MODAL_OVERLAY, MODAL_PARTIALS, NAV_PARTIALS,
};
use crate::emit::{property_block, Block};
use crate::profile::ComponentDecl;
use crate::stylesheet::component_key;

/// Pseudo-state keys, in emission order.
pub const PSEUDO_STATES: &[&str] = &["hover", "focus", "active"];

/// Alert variant keys, in emission order.
pub const ALERT_VARIANTS: &[&str] = &["success", "error", "warning", "info"];

/// Table keys that describe sub-parts rather than the table itself.
const TABLE_PARTS: &[&str] = &["header", "cell", "row"];

/// Modal keys that describe sub-parts rather than the dialog itself.
const MODAL_PARTS: &[(&str, &Partial)] = &[
    ("overlay", &MODAL_OVERLAY),
    ("closeButton", &MODAL_CLOSE_BUTTON),
];

/// The closed set of component behaviors, chosen by component name.
///
/// Names without a dedicated strategy use [`ComponentKind::Generic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    /// Generic handling, except that `primary` and `secondary` variants are
    /// fixed templates.
    Button,
    Input,
    Nav,
    Badge,
    Modal,
    Alert,
    Table,
    Generic,
}

impl ComponentKind {
    /// Selects the kind for a component key.
    pub fn from_name(name: &str) -> Self {
        match name {
            "button" => ComponentKind::Button,
            "input" => ComponentKind::Input,
            "nav" => ComponentKind::Nav,
            "badge" => ComponentKind::Badge,
            "modal" => ComponentKind::Modal,
            "alert" => ComponentKind::Alert,
            "table" => ComponentKind::Table,
            _ => ComponentKind::Generic,
        }
    }

    /// Emits every block for a component addressed by `selector`.
    pub fn emit(self, selector: &str, decl: &ComponentDecl) -> Vec<Block> {
        match self {
            ComponentKind::Button | ComponentKind::Generic => emit_generic(self, selector, decl),
            ComponentKind::Input => emit_with_partials(selector, decl, INPUT_PARTIALS),
            ComponentKind::Nav => emit_with_partials(selector, decl, NAV_PARTIALS),
            ComponentKind::Badge => emit_with_partials(selector, decl, BADGE_PARTIALS),
            ComponentKind::Modal => emit_modal(selector, decl),
            ComponentKind::Alert => emit_alert(selector, decl),
            ComponentKind::Table => emit_table(selector, decl),
        }
    }
}

/// Returns `true` if any non-pseudo-state key holds a nested group.
fn has_variants(decl: &ComponentDecl) -> bool {
    decl.groups().any(|(name, _)| !PSEUDO_STATES.contains(&name))
}

fn state_blocks(selector: &str, decl: &ComponentDecl) -> Vec<Block> {
    PSEUDO_STATES
        .iter()
        .filter_map(|state| {
            decl.group(state)
                .map(|group| property_block(format!("{selector}:{state}"), group, &[]))
        })
        .collect()
}

fn emit_generic(kind: ComponentKind, selector: &str, decl: &ComponentDecl) -> Vec<Block> {
    let mut blocks = Vec::new();

    if has_variants(decl) {
        for (variant, group) in decl.groups() {
            if PSEUDO_STATES.contains(&variant) {
                continue;
            }
            let variant_selector = format!("{selector}.{variant}");
            let template = match kind {
                ComponentKind::Button => button_variant(variant),
                _ => None,
            };
            match template {
                Some(partial) => blocks.push(partial.block(selector)),
                None => blocks.push(property_block(variant_selector.as_str(), group, &[])),
            }
            blocks.extend(state_blocks(&variant_selector, group));
        }
    } else {
        blocks.push(property_block(selector, decl, &[]));
    }

    blocks.extend(state_blocks(selector, decl));
    blocks
}

/// Structural partials always hang off the component class, whatever sigil
/// the component was addressed with.
fn partial_base(selector: &str) -> String {
    format!(".{}", component_key(selector))
}

fn emit_with_partials(selector: &str, decl: &ComponentDecl, partials: &[Partial]) -> Vec<Block> {
    let base = partial_base(selector);
    let mut blocks = vec![property_block(selector, decl, &[])];
    blocks.extend(partials.iter().map(|partial| partial.block(&base)));
    blocks
}

fn emit_modal(selector: &str, decl: &ComponentDecl) -> Vec<Block> {
    let base = partial_base(selector);
    let exclude: Vec<&str> = MODAL_PARTS.iter().map(|(key, _)| *key).collect();
    let mut blocks = vec![property_block(selector, decl, &exclude)];

    for (key, fallback) in MODAL_PARTS {
        match decl.group(key) {
            Some(group) => blocks.push(property_block(
                format!("{base}{}", fallback.suffix),
                group,
                &[],
            )),
            None => blocks.push(fallback.block(&base)),
        }
    }

    blocks.extend(MODAL_PARTIALS.iter().map(|partial| partial.block(&base)));
    blocks
}

fn emit_alert(selector: &str, decl: &ComponentDecl) -> Vec<Block> {
    let base = partial_base(selector);
    let mut blocks = vec![property_block(selector, decl, ALERT_VARIANTS)];
    blocks.extend(ALERT_PARTIALS.iter().map(|partial| partial.block(&base)));

    for variant in ALERT_VARIANTS {
        if let Some(group) = decl.group(variant) {
            blocks.push(property_block(format!("{selector}.{variant}"), group, &[]));
        }
    }
    blocks
}

fn emit_table(selector: &str, decl: &ComponentDecl) -> Vec<Block> {
    let mut blocks = vec![property_block(selector, decl, TABLE_PARTS)];

    if let Some(header) = decl.group("header") {
        blocks.push(property_block(format!("{selector} th"), header, &[]));
    }
    if let Some(cell) = decl.group("cell") {
        blocks.push(property_block(format!("{selector} td"), cell, &[]));
    }
    if let Some(hover) = decl.group("row").and_then(|row| row.group("hover")) {
        blocks.push(property_block(format!("{selector} tr:hover"), hover, &[]));
    }
    blocks
}
