//! Component previews: sample markup plus the component's stylesheet.
//!
//! Markup comes from a small set of minijinja templates compiled once per
//! [`PreviewRenderer`]. The template is picked from the component name; any
//! name without a dedicated template gets a generic `div`.

use minijinja::Environment;
use serde::Serialize;
use thiserror::Error;

use crate::profile::Profile;
use crate::stylesheet::{component_key, component_stylesheet};

const TEMPLATES: &[(&str, &str)] = &[
    ("alert.html", include_str!("templates/alert.html")),
    ("badge.html", include_str!("templates/badge.html")),
    ("button.html", include_str!("templates/button.html")),
    ("card.html", include_str!("templates/card.html")),
    ("generic.html", include_str!("templates/generic.html")),
    ("heading.html", include_str!("templates/heading.html")),
    ("input.html", include_str!("templates/input.html")),
    ("modal.html", include_str!("templates/modal.html")),
    ("nav.html", include_str!("templates/nav.html")),
    ("table.html", include_str!("templates/table.html")),
    ("text.html", include_str!("templates/text.html")),
];

const SAMPLE_ROWS: &[[&str; 4]] = &[
    ["John Doe", "john@example.com", "Developer", "Active"],
    ["Jane Smith", "jane@example.com", "Designer", "Active"],
    ["Mike Johnson", "mike@example.com", "Manager", "Inactive"],
];

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("component \"{name}\" not found in profile")]
    ComponentNotFound { name: String },

    #[error("failed to render preview markup: {0}")]
    Template(#[from] minijinja::Error),
}

/// A rendered component preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub component: String,
    pub profile: String,
    pub html: String,
    pub css: String,
}

#[derive(Serialize)]
struct MarkupContext<'a> {
    component: &'a str,
    profile: &'a str,
    rows: &'static [[&'static str; 4]],
}

/// Renders previews with pre-compiled markup templates.
///
/// # Example
///
/// ```rust
/// use tokensheet::{ComponentDecl, PreviewRenderer, Profile};
///
/// let profile = Profile::new("Studio")
///     .with_component("badge", ComponentDecl::new().with("display", "inline-block"));
///
/// let renderer = PreviewRenderer::new().unwrap();
/// let preview = renderer.render(&profile, ".badge").unwrap();
///
/// assert_eq!(preview.component, "badge");
/// assert!(preview.html.contains(r#"<span class="badge">Sale</span>"#));
/// assert!(preview.css.contains(".badge-container {"));
/// ```
pub struct PreviewRenderer {
    env: Environment<'static>,
}

impl PreviewRenderer {
    /// Creates a renderer with every markup template compiled.
    ///
    /// # Errors
    ///
    /// Returns an error if a bundled template fails to compile.
    pub fn new() -> Result<Self, PreviewError> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Renders the preview for a component addressed by selector.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::ComponentNotFound`] if the profile does not
    /// declare the component.
    pub fn render(&self, profile: &Profile, selector: &str) -> Result<Preview, PreviewError> {
        let name = component_key(selector);
        let css = component_stylesheet(profile, selector)
            .ok_or_else(|| PreviewError::ComponentNotFound {
                name: name.to_string(),
            })?
            .to_string();

        let template = self.env.get_template(template_for(name))?;
        let html = template.render(MarkupContext {
            component: name,
            profile: &profile.name,
            rows: SAMPLE_ROWS,
        })?;

        Ok(Preview {
            component: name.to_string(),
            profile: profile.name.clone(),
            html,
            css,
        })
    }
}

fn template_for(name: &str) -> &'static str {
    match name {
        "card" => "card.html",
        "button" => "button.html",
        _ if name.contains("heading") => "heading.html",
        _ if name.contains("text") => "text.html",
        "input" => "input.html",
        "nav" => "nav.html",
        "badge" => "badge.html",
        "modal" => "modal.html",
        "alert" => "alert.html",
        "table" => "table.html",
        _ => "generic.html",
    }
}
