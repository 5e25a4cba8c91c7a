//! Compact, serializable descriptions of profiles.

use serde::Serialize;

use super::{Profile, TokenNode};

/// A listing-friendly view of a profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub id: String,
    pub metadata: ProfileMetadata,
    pub components: Vec<ComponentSummary>,
    pub attribute_categories: Vec<String>,
    pub color_palette: Vec<PaletteEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileMetadata {
    pub name: String,
    pub author: String,
    pub description: Option<String>,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentSummary {
    pub name: String,
    pub properties: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteEntry {
    pub name: String,
    pub value: String,
    pub weight: f64,
}

impl Profile {
    /// Summarizes the profile's metadata, components and color palette.
    pub fn summary(&self) -> ProfileSummary {
        let components = self
            .components
            .iter()
            .map(|(name, decl)| ComponentSummary {
                name: name.to_string(),
                properties: decl.names().map(str::to_string).collect(),
            })
            .collect();

        let color_palette = match self.attributes.get("colors") {
            Some(TokenNode::Group(colors)) => colors
                .iter()
                .filter_map(|(name, node)| match node {
                    TokenNode::Token(token) => Some(PaletteEntry {
                        name: name.to_string(),
                        value: token.value.clone(),
                        weight: token.weight,
                    }),
                    TokenNode::Group(_) => None,
                })
                .collect(),
            _ => Vec::new(),
        };

        ProfileSummary {
            kind: "design_profile",
            id: self.slug.clone(),
            metadata: ProfileMetadata {
                name: self.name.clone(),
                author: self.author.clone(),
                description: self.description.clone(),
                version: self.version.clone(),
            },
            components,
            attribute_categories: self.attributes.names().map(str::to_string).collect(),
            color_palette,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ComponentDecl, TokenGroup};
    use serde_json::json;

    #[test]
    fn test_summary_json_shape() {
        let profile = Profile::new("Studio")
            .with_author("Ada")
            .with_slug("studio")
            .with_attributes(
                TokenGroup::new()
                    .group("colors", TokenGroup::new().token("accent", "#3d7aff"))
                    .group("spacing", TokenGroup::new().token("small", "8px")),
            )
            .with_component(
                "card",
                ComponentDecl::new()
                    .with("background", "colors.accent")
                    .with("hover", ComponentDecl::new().with("color", "#fff")),
            );

        let value = serde_json::to_value(profile.summary()).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "design_profile",
                "id": "studio",
                "metadata": {
                    "name": "Studio",
                    "author": "Ada",
                    "description": null,
                    "version": "1.0.0"
                },
                "components": [
                    { "name": "card", "properties": ["background", "hover"] }
                ],
                "attributeCategories": ["colors", "spacing"],
                "colorPalette": [
                    { "name": "accent", "value": "#3d7aff", "weight": 0.0 }
                ]
            })
        );
    }

    #[test]
    fn test_summary_without_colors() {
        let summary = Profile::new("Empty").summary();
        assert!(summary.color_palette.is_empty());
        assert!(summary.attribute_categories.is_empty());
    }
}
