//! Bundled starter components and skeleton profiles.
//!
//! The catalog holds one ready-made declaration per common component kind
//! and a default attribute tree that satisfies every reference those
//! declarations make. [`skeleton_profile`] combines the two into a new
//! profile.
//!
//! # Example
//!
//! ```rust
//! use tokensheet::templates::{skeleton_profile, SkeletonRequest};
//!
//! let request = SkeletonRequest::new("Studio", "Ada", "studio")
//!     .component("button")
//!     .component("card");
//! let profile = skeleton_profile(&request).unwrap();
//!
//! assert_eq!(profile.description.as_deref(), Some("A design system created by Ada"));
//! assert_eq!(profile.components.names().collect::<Vec<_>>(), vec!["button", "card"]);
//! ```

use chrono::{SecondsFormat, Utc};
use once_cell::sync::Lazy;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::profile::{AttributeTree, ComponentDecl, Components, Profile};

const COMPONENTS_JSON: &str = include_str!("components.json");
const ATTRIBUTES_JSON: &str = include_str!("attributes.json");

static CATALOG: Lazy<Components> = Lazy::new(|| {
    serde_json::from_str(COMPONENTS_JSON).expect("bundled component catalog is valid JSON")
});

static DEFAULT_ATTRIBUTES: Lazy<AttributeTree> = Lazy::new(|| {
    serde_json::from_str(ATTRIBUTES_JSON).expect("bundled attribute tree is valid JSON")
});

/// A catalog entry as shown in listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub name: String,
    pub description: &'static str,
}

/// Error returned when a skeleton profile cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("at least one component must be specified")]
    NoComponents,

    #[error("invalid component(s): {} (available: {})", .names.join(", "), .available.join(", "))]
    UnknownComponents {
        names: Vec<String>,
        available: Vec<String>,
    },
}

/// Inputs for [`skeleton_profile`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkeletonRequest {
    pub name: String,
    pub author: String,
    pub slug: String,
    pub description: Option<String>,
    pub components: Vec<String>,
}

impl SkeletonRequest {
    pub fn new(name: impl Into<String>, author: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            slug: slug.into(),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Requests a starter component by name.
    pub fn component(mut self, name: impl Into<String>) -> Self {
        self.components.push(name.into());
        self
    }
}

/// Returns the bundled starter components, in catalog order.
pub fn catalog() -> &'static Components {
    &CATALOG
}

/// Returns the starter declaration for a component name.
pub fn component(name: &str) -> Option<&'static ComponentDecl> {
    CATALOG.get(name)
}

/// Returns the attribute tree used by skeleton profiles.
pub fn default_attributes() -> &'static AttributeTree {
    &DEFAULT_ATTRIBUTES
}

/// Lists the starter components with their descriptions.
pub fn available() -> Vec<TemplateInfo> {
    CATALOG
        .names()
        .map(|name| TemplateInfo {
            name: name.to_string(),
            description: describe(name),
        })
        .collect()
}

fn describe(name: &str) -> &'static str {
    match name {
        "button" => "A button component with primary and secondary variants",
        "card" => "A card container with hover effect and shadow",
        "input" => "A text input field with focus state",
        "nav" => "A navigation bar component",
        "badge" => "A badge or tag component for labels",
        "modal" => "A modal dialog with overlay",
        "alert" => "An alert/notification component with different states",
        "table" => "A table component with styled header and rows",
        _ => "A UI component",
    }
}

/// Builds a new profile from the default attributes and the requested
/// starter components.
///
/// The profile is stamped with a fresh v4 `id` and a UTC `created`
/// timestamp.
pub fn skeleton_profile(request: &SkeletonRequest) -> Result<Profile, TemplateError> {
    if request.name.is_empty() {
        return Err(TemplateError::MissingField("name"));
    }
    if request.author.is_empty() {
        return Err(TemplateError::MissingField("author"));
    }
    if request.slug.is_empty() {
        return Err(TemplateError::MissingField("slug"));
    }
    if request.components.is_empty() {
        return Err(TemplateError::NoComponents);
    }

    let unknown: Vec<String> = request
        .components
        .iter()
        .filter(|name| !CATALOG.contains(name))
        .cloned()
        .collect();
    if !unknown.is_empty() {
        return Err(TemplateError::UnknownComponents {
            names: unknown,
            available: CATALOG.names().map(str::to_string).collect(),
        });
    }

    let description = request
        .description
        .clone()
        .unwrap_or_else(|| format!("A design system created by {}", request.author));

    let mut profile = Profile::new(request.name.clone())
        .with_author(request.author.clone())
        .with_slug(request.slug.clone())
        .with_description(description)
        .with_attributes(default_attributes().clone());
    profile.id = Some(Uuid::new_v4().to_string());
    profile.created = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));

    for name in &request.components {
        if let Some(decl) = CATALOG.get(name) {
            profile.components.insert(name, decl.clone());
        }
    }

    tracing::debug!(slug = %profile.slug, components = profile.components.len(), "built skeleton profile");
    Ok(profile)
}
