//! Design tokens and the attribute tree that holds them.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

/// Token categories emitted into the `:root` block, in emission order.
pub const CATEGORIES: &[&str] = &[
    "colors",
    "spacing",
    "typography",
    "borders",
    "shadows",
    "animations",
];

/// A named leaf value in the attribute tree.
///
/// `weight` is carried through for collaborators; generation ignores it.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Token {
    pub value: String,
    pub weight: f64,
}

impl Token {
    pub fn new(value: impl Into<String>, weight: f64) -> Self {
        Self {
            value: value.into(),
            weight,
        }
    }

    fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            value: map.get("value").map(value_to_text).unwrap_or_default(),
            weight: map.get("weight").and_then(Value::as_f64).unwrap_or(0.0),
        }
    }
}

/// A node in the attribute tree: either a token or a nested group.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum TokenNode {
    Token(Token),
    Group(TokenGroup),
}

impl TokenNode {
    /// Classifies a raw JSON value. Objects with a `value` field are tokens,
    /// other objects are groups, and anything else carries no token.
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Object(map) if map.contains_key("value") => {
                Some(TokenNode::Token(Token::from_map(map)))
            }
            Value::Object(map) => Some(TokenNode::Group(TokenGroup::from_map(map))),
            _ => None,
        }
    }
}

/// An ordered group of named token nodes.
///
/// The top-level group of a profile is its [`AttributeTree`], keyed by
/// category. Declaration order is preserved.
///
/// # Example
///
/// ```rust
/// use tokensheet::TokenGroup;
///
/// let tree = TokenGroup::new()
///     .group("colors", TokenGroup::new().token("accent", "#3d7aff"))
///     .group(
///         "typography",
///         TokenGroup::new().group("fontSize", TokenGroup::new().token("large", "20px")),
///     );
///
/// assert_eq!(tree.lookup("colors.accent").unwrap().value, "#3d7aff");
/// assert_eq!(tree.lookup("typography.fontSize.large").unwrap().value, "20px");
/// assert!(tree.lookup("colors.missing").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenGroup {
    entries: Vec<(String, TokenNode)>,
}

/// The attribute tree of a profile: categories of tokens.
pub type AttributeTree = TokenGroup;

impl TokenGroup {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a token with zero weight, returning the group for chaining.
    pub fn token(self, name: &str, value: impl Into<String>) -> Self {
        self.insert(name, TokenNode::Token(Token::new(value, 0.0)))
    }

    /// Adds a nested group, returning the group for chaining.
    pub fn group(self, name: &str, group: TokenGroup) -> Self {
        self.insert(name, TokenNode::Group(group))
    }

    /// Inserts a node, replacing any existing node of the same name in place.
    pub fn insert(mut self, name: &str, node: TokenNode) -> Self {
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some(entry) => entry.1 = node,
            None => self.entries.push((name.to_string(), node)),
        }
        self
    }

    /// Returns the direct child with the given name.
    pub fn get(&self, name: &str) -> Option<&TokenNode> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, node)| node)
    }

    /// Walks a dotted path and returns the token it addresses.
    ///
    /// Returns `None` when a segment is missing, when the path continues past
    /// a token or stops on a group, or when the token's value is empty.
    pub fn lookup(&self, path: &str) -> Option<&Token> {
        let mut segments = path.split('.');
        let mut node = self.get(segments.next()?)?;
        for segment in segments {
            match node {
                TokenNode::Group(group) => node = group.get(segment)?,
                TokenNode::Token(_) => return None,
            }
        }
        match node {
            TokenNode::Token(token) if !token.value.is_empty() => Some(token),
            _ => None,
        }
    }

    /// Returns every token below this group with its full dotted path,
    /// depth first in declaration order.
    pub fn leaves(&self) -> Vec<(String, &Token)> {
        let mut out = Vec::new();
        self.collect_leaves("", &mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, prefix: &str, out: &mut Vec<(String, &'a Token)>) {
        for (name, node) in &self.entries {
            let path = if prefix.is_empty() {
                name.clone()
            } else {
                format!("{prefix}.{name}")
            };
            match node {
                TokenNode::Token(token) => out.push((path, token)),
                TokenNode::Group(group) => group.collect_leaves(&path, out),
            }
        }
    }

    /// Iterates over direct children in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenNode)> {
        self.entries.iter().map(|(name, node)| (name.as_str(), node))
    }

    /// Returns the names of the direct children.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn from_map(map: &Map<String, Value>) -> Self {
        let entries = map
            .iter()
            .filter_map(|(name, value)| {
                TokenNode::from_value(value).map(|node| (name.clone(), node))
            })
            .collect();
        Self { entries }
    }
}

impl Serialize for TokenGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, node) in &self.entries {
            map.serialize_entry(name, node)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TokenGroup {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self::from_map(&map))
    }
}

/// Coerces a raw JSON value to CSS text.
///
/// Strings pass through, `null` becomes empty, numbers and booleans use their
/// display form, and arrays join their elements with `,`.
pub(crate) fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::Array(items) => items
            .iter()
            .map(value_to_text)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(map) => match map.get("value") {
            Some(inner) => value_to_text(inner),
            None => value.to_string(),
        },
    }
}
