//! Component declarations and their property values.
//!
//! Property values are classified once, when a declaration is parsed, into
//! the [`PropertyValue`] union. Everything downstream pattern-matches on the
//! variant instead of re-inspecting text.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use super::token::value_to_text;

/// A single component property value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// Plain CSS text: keywords, lengths, hex colors, `var(--…)` calls.
    Literal(String),
    /// A dotted token path such as `colors.accent`.
    Reference(String),
    /// Space-separated parts, each either a literal or a token path.
    Composite(String),
    /// A nested declaration: a variant, a pseudo-state or a structural part.
    VariantGroup(ComponentDecl),
}

impl PropertyValue {
    /// Classifies a text value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tokensheet::PropertyValue;
    ///
    /// assert!(matches!(PropertyValue::parse("colors.accent"), PropertyValue::Reference(_)));
    /// assert!(matches!(PropertyValue::parse("spacing.small 2px"), PropertyValue::Composite(_)));
    /// assert!(matches!(PropertyValue::parse("#3d7aff"), PropertyValue::Literal(_)));
    /// assert!(matches!(PropertyValue::parse("0.5rem"), PropertyValue::Literal(_)));
    /// ```
    pub fn parse(text: &str) -> Self {
        if text.contains(' ') {
            PropertyValue::Composite(text.to_string())
        } else if is_token_path(text) {
            PropertyValue::Reference(text.to_string())
        } else {
            PropertyValue::Literal(text.to_string())
        }
    }

    /// Classifies a raw JSON value.
    ///
    /// Token-shaped objects (`{ "value": … }`) are unwrapped to their value;
    /// other objects become variant groups; scalars are coerced to text.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Object(map) if !map.contains_key("value") => {
                PropertyValue::VariantGroup(ComponentDecl::from_map(map))
            }
            other => Self::parse(&value_to_text(other)),
        }
    }

    /// Returns the text of a scalar value, or `None` for groups.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Literal(text)
            | PropertyValue::Reference(text)
            | PropertyValue::Composite(text) => Some(text),
            PropertyValue::VariantGroup(_) => None,
        }
    }

    /// Returns the nested declaration of a group value.
    pub fn as_group(&self) -> Option<&ComponentDecl> {
        match self {
            PropertyValue::VariantGroup(decl) => Some(decl),
            _ => None,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, PropertyValue::VariantGroup(_))
    }
}

impl From<&str> for PropertyValue {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl From<ComponentDecl> for PropertyValue {
    fn from(decl: ComponentDecl) -> Self {
        PropertyValue::VariantGroup(decl)
    }
}

impl Serialize for PropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PropertyValue::VariantGroup(decl) => decl.serialize(serializer),
            PropertyValue::Literal(text)
            | PropertyValue::Reference(text)
            | PropertyValue::Composite(text) => serializer.serialize_str(text),
        }
    }
}

/// Returns `true` if `text` addresses a token in the attribute tree.
///
/// A token path has at least two `.`-separated segments made of ASCII
/// letters, digits, `_` or `-`, and starts with a letter. Hex colors,
/// `var(--…)` calls and numbers such as `0.5rem` are not paths.
pub fn is_token_path(text: &str) -> bool {
    if !text.contains('.') || text.starts_with('#') || text.starts_with("var(--") {
        return false;
    }
    if !text.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return false;
    }
    text.split('.').all(|segment| {
        !segment.is_empty()
            && segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    })
}

/// The declared properties of one component, in declaration order.
///
/// # Example
///
/// ```rust
/// use tokensheet::ComponentDecl;
///
/// let card = ComponentDecl::new()
///     .with("background", "colors.background")
///     .with("padding", "spacing.large")
///     .with("hover", ComponentDecl::new().with("boxShadow", "shadows.medium"));
///
/// assert_eq!(card.len(), 3);
/// assert!(card.group("hover").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentDecl {
    properties: Vec<(String, PropertyValue)>,
}

impl ComponentDecl {
    /// Creates an empty declaration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a property, returning the declaration for chaining.
    ///
    /// Redeclaring a property replaces its value in place.
    pub fn with<V: Into<PropertyValue>>(mut self, name: &str, value: V) -> Self {
        let value = value.into();
        match self.properties.iter_mut().find(|(key, _)| key == name) {
            Some(entry) => entry.1 = value,
            None => self.properties.push((name.to_string(), value)),
        }
        self
    }

    /// Returns the value of a property.
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.properties
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Returns the nested declaration stored under `name`, if it is a group.
    pub fn group(&self, name: &str) -> Option<&ComponentDecl> {
        self.get(name).and_then(PropertyValue::as_group)
    }

    /// Iterates over the nested groups in declaration order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &ComponentDecl)> {
        self.iter()
            .filter_map(|(name, value)| value.as_group().map(|group| (name, group)))
    }

    /// Iterates over all properties in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Returns the property names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub(crate) fn from_map(map: &Map<String, Value>) -> Self {
        let properties = map
            .iter()
            .map(|(name, value)| (name.clone(), PropertyValue::from_json(value)))
            .collect();
        Self { properties }
    }

    /// Builds a declaration from any JSON value; non-objects are empty.
    pub(crate) fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self::from_map(map),
            _ => Self::default(),
        }
    }
}

impl Serialize for ComponentDecl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.properties.len()))?;
        for (name, value) in &self.properties {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ComponentDecl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_token_path_accepts_dotted_identifiers() {
        assert!(is_token_path("colors.accent"));
        assert!(is_token_path("typography.fontSize.large"));
        assert!(is_token_path("spacing.2xl"));
        assert!(is_token_path("brand.primary-dark"));
    }

    #[test]
    fn test_token_path_rejects_literals() {
        assert!(!is_token_path("flex"));
        assert!(!is_token_path("#3d7aff"));
        assert!(!is_token_path("var(--color.accent)"));
        assert!(!is_token_path("0.5rem"));
        assert!(!is_token_path("1.5"));
        assert!(!is_token_path("0.5)"));
        assert!(!is_token_path("colors."));
        assert!(!is_token_path("colors..accent"));
    }

    #[test]
    fn test_parse_classification() {
        assert_eq!(
            PropertyValue::parse("colors.accent"),
            PropertyValue::Reference("colors.accent".into())
        );
        assert_eq!(
            PropertyValue::parse("spacing.small spacing.medium"),
            PropertyValue::Composite("spacing.small spacing.medium".into())
        );
        assert_eq!(
            PropertyValue::parse("var(--color-accent)"),
            PropertyValue::Literal("var(--color-accent)".into())
        );
        assert_eq!(PropertyValue::parse(""), PropertyValue::Literal(String::new()));
    }

    #[test]
    fn test_from_json_unwraps_token_objects() {
        let value = PropertyValue::from_json(&json!({ "value": "var(--color-secondary)", "weight": 0.8 }));
        assert_eq!(value, PropertyValue::Literal("var(--color-secondary)".into()));

        let value = PropertyValue::from_json(&json!({ "value": "0.5rem 1rem" }));
        assert_eq!(value, PropertyValue::Composite("0.5rem 1rem".into()));
    }

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(PropertyValue::from_json(&json!(null)), PropertyValue::Literal(String::new()));
        assert_eq!(PropertyValue::from_json(&json!(1000)), PropertyValue::Literal("1000".into()));
        assert_eq!(
            PropertyValue::from_json(&json!(["a", "b"])),
            PropertyValue::Literal("a,b".into())
        );
    }

    #[test]
    fn test_from_json_nested_objects_are_groups() {
        let value = PropertyValue::from_json(&json!({ "background": "colors.accentDark" }));
        let group = value.as_group().unwrap();
        assert_eq!(
            group.get("background"),
            Some(&PropertyValue::Reference("colors.accentDark".into()))
        );
    }

    #[test]
    fn test_decl_preserves_declaration_order() {
        let decl: ComponentDecl = serde_json::from_value(json!({
            "zIndex": "10",
            "background": "colors.background",
            "hover": { "color": "colors.accent" },
            "alpha": "1"
        }))
        .unwrap();
        assert_eq!(
            decl.names().collect::<Vec<_>>(),
            vec!["zIndex", "background", "hover", "alpha"]
        );
        assert_eq!(decl.groups().map(|(name, _)| name).collect::<Vec<_>>(), vec!["hover"]);
    }

    #[test]
    fn test_decl_serialize_round_shape() {
        let decl = ComponentDecl::new()
            .with("padding", "spacing.small spacing.medium")
            .with("hover", ComponentDecl::new().with("color", "#fff"));
        assert_eq!(
            serde_json::to_value(&decl).unwrap(),
            json!({ "padding": "spacing.small spacing.medium", "hover": { "color": "#fff" } })
        );
    }

    #[test]
    fn test_non_object_decl_is_empty() {
        let decl: ComponentDecl = serde_json::from_value(json!("oops")).unwrap();
        assert!(decl.is_empty());
    }
}
