//! Design profiles: metadata, an attribute tree of tokens, and component
//! declarations.
//!
//! This module provides:
//!
//! - [`Profile`]: the immutable input to every generation call
//! - [`AttributeTree`] / [`TokenGroup`] / [`Token`]: the token store
//! - [`ComponentDecl`] / [`PropertyValue`]: component declarations
//! - [`ProfileError`]: loading and validation failures
//! - [`ProfileSummary`]: a compact description of a profile for listings

mod error;
mod load;
mod summary;
mod token;
mod validate;
mod value;

pub use error::ProfileError;
pub use summary::{ComponentSummary, PaletteEntry, ProfileMetadata, ProfileSummary};
pub use token::{AttributeTree, Token, TokenGroup, TokenNode, CATEGORIES};
pub use value::{is_token_path, ComponentDecl, PropertyValue};

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

fn default_version() -> String {
    "1.0.0".to_string()
}

/// A design profile.
///
/// Profiles are supplied by a storage collaborator and treated as read-only
/// input; generation never mutates them.
///
/// # Example
///
/// ```rust
/// use tokensheet::{ComponentDecl, Profile, TokenGroup};
///
/// let profile = Profile::new("Studio")
///     .with_attributes(
///         TokenGroup::new().group("colors", TokenGroup::new().token("accent", "#3d7aff")),
///     )
///     .with_component("card", ComponentDecl::new().with("background", "colors.accent"));
///
/// let css = tokensheet::generate_design_system(&profile);
/// assert!(css.contains("--color-accent: #3d7aff;"));
/// assert!(css.contains("background: var(--color-accent);"));
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default)]
    pub attributes: AttributeTree,
    #[serde(default)]
    pub components: Components,
}

impl Profile {
    /// Creates an empty profile with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            author: String::new(),
            slug: String::new(),
            description: None,
            version: default_version(),
            created: None,
            attributes: AttributeTree::new(),
            components: Components::new(),
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_attributes(mut self, attributes: AttributeTree) -> Self {
        self.attributes = attributes;
        self
    }

    /// Adds or replaces a component declaration.
    pub fn with_component(mut self, name: &str, decl: ComponentDecl) -> Self {
        self.components.insert(name, decl);
        self
    }

    /// Returns the declaration of a component by key (no selector sigil).
    pub fn component(&self, name: &str) -> Option<&ComponentDecl> {
        self.components.get(name)
    }
}

/// Component declarations of a profile, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Components {
    entries: Vec<(String, ComponentDecl)>,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a declaration, replacing an existing one in place.
    pub fn insert(&mut self, name: &str, decl: ComponentDecl) {
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some(entry) => entry.1 = decl,
            None => self.entries.push((name.to_string(), decl)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ComponentDecl> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, decl)| decl)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ComponentDecl)> {
        self.entries.iter().map(|(name, decl)| (name.as_str(), decl))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Components {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, decl) in &self.entries {
            map.serialize_entry(name, decl)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Components {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        let entries = map
            .iter()
            .map(|(name, value)| (name.clone(), ComponentDecl::from_value(value)))
            .collect();
        Ok(Self { entries })
    }
}
