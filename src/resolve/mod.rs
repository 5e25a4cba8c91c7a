//! Token reference handling.
//!
//! - [`resolve_reference`]: dotted path → literal token value (`:root` block)
//! - [`variable_name`] / [`map_to_variable`]: dotted path → custom property
//! - [`process_value`]: property value → emitted CSS value text
//!
//! Component declarations never inline token values: references become
//! `var(--…)` calls and the `:root` block carries the literals.

mod composite;
mod reference;
mod variable;

pub use composite::process_value;
pub use reference::resolve_reference;
pub use variable::{map_to_variable, variable_name};
