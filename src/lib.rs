//! # Tokensheet - Design Tokens to Stylesheets
//!
//! `tokensheet` turns a design profile into CSS. A profile holds an attribute
//! tree of design tokens (colors, spacing, typography and so on) and a set of
//! component declarations whose property values may reference those tokens
//! by dotted path.
//!
//! Generation produces a `:root` block declaring one CSS custom property per
//! token, followed by one or more blocks per component in which token
//! references have been rewritten as `var(--…)` expressions.
//!
//! ## Quick Start
//!
//! ```rust
//! use tokensheet::{generate_component_css, ComponentDecl, Profile, TokenGroup};
//!
//! let profile = Profile::new("Studio")
//!     .with_attributes(
//!         TokenGroup::new()
//!             .group("colors", TokenGroup::new().token("accent", "#3d7aff"))
//!             .group(
//!                 "spacing",
//!                 TokenGroup::new().token("small", "8px").token("medium", "16px"),
//!             ),
//!     )
//!     .with_component(
//!         "card",
//!         ComponentDecl::new()
//!             .with("background", "colors.accent")
//!             .with("padding", "spacing.small spacing.medium"),
//!     );
//!
//! let css = generate_component_css(&profile, ".card");
//! assert!(css.starts_with(":root {\n  --color-accent: #3d7aff;\n"));
//! assert!(css.contains(".card {\n  background: var(--color-accent);\n"));
//! assert!(css.contains("  padding: var(--spacing-small) var(--spacing-medium);\n"));
//! ```
//!
//! ## Value Classification
//!
//! A declared property value is one of:
//!
//! - a literal (`#ffffff`, `1px`, `var(--custom)`) emitted verbatim
//! - a token reference (`colors.accent`) emitted as `var(--color-accent)`
//! - a composite (`1px solid colors.border`) whose token-path parts are
//!   rewritten individually
//! - a nested group, used for variants (`primary`) and pseudo-states (`hover`)
//!
//! ```rust
//! use tokensheet::PropertyValue;
//!
//! assert_eq!(PropertyValue::parse("colors.accent"), PropertyValue::Reference("colors.accent".into()));
//! assert_eq!(PropertyValue::parse("0.5rem"), PropertyValue::Literal("0.5rem".into()));
//! assert!(matches!(PropertyValue::parse("1px solid colors.border"), PropertyValue::Composite(_)));
//! ```
//!
//! ## Variable Names
//!
//! Token paths map to custom-property names through a fixed rule table,
//! e.g. `colors.accent` → `--color-accent`, `typography.fontSize.small` →
//! `--font-size-small`. See [`resolve::variable`](crate::resolve) for the
//! full table.
//!
//! ```rust
//! use tokensheet::{map_to_variable, resolve_reference, TokenGroup};
//!
//! let tree = TokenGroup::new().group("colors", TokenGroup::new().token("accent", "#3d7aff"));
//! assert_eq!(resolve_reference("colors.accent", &tree).as_deref(), Some("#3d7aff"));
//! assert_eq!(map_to_variable("colors.accent"), "var(--color-accent)");
//! assert_eq!(map_to_variable("#ffffff"), "#ffffff");
//! ```
//!
//! ## Beyond Generation
//!
//! - [`Profile::load`] reads JSON or YAML profiles
//! - [`Profile::validate`] checks required metadata and token categories
//! - [`templates`] provides starter components and [`skeleton_profile`]
//! - [`PreviewRenderer`] pairs a component's CSS with sample markup
//! - [`Profile::summary`] produces a compact description of a profile

pub mod emit;
pub mod preview;
pub mod profile;
pub mod resolve;
pub mod stylesheet;
pub mod templates;

pub use preview::{Preview, PreviewError, PreviewRenderer};
pub use profile::{
    is_token_path, AttributeTree, ComponentDecl, Components, Profile, ProfileError,
    ProfileSummary, PropertyValue, Token, TokenGroup, TokenNode,
};
pub use resolve::{map_to_variable, process_value, resolve_reference, variable_name};
pub use stylesheet::{
    component_stylesheet, design_system, generate_component_css, generate_design_system,
    root_block, Stylesheet,
};
pub use templates::{skeleton_profile, SkeletonRequest, TemplateError};
