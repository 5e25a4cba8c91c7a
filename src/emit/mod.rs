//! Component block emission.
//!
//! This module provides:
//!
//! - [`Block`] / [`Declaration`]: emitted selector blocks
//! - [`ComponentKind`]: the per-kind emission strategies
//! - [`Partial`] / [`PartialValue`]: the fixed structural block catalog
//! - [`property_block`]: the generic property loop shared by every kind
//!
//! Every component produces a base block (or variant blocks), then any
//! pseudo-state and structural blocks its kind calls for. Variant selectors
//! are compound classes: `.button.primary`.

mod block;
mod kind;
pub mod partials;

pub use block::{css_property_name, property_block, Block, Declaration};
pub use kind::{ComponentKind, ALERT_VARIANTS, PSEUDO_STATES};
pub use partials::{Partial, PartialValue};
