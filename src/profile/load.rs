//! Reading and writing profiles as JSON or YAML.

use std::path::Path;

use super::{Profile, ProfileError};

impl Profile {
    /// Parses a profile from JSON text.
    pub fn from_json_str(source: &str) -> Result<Self, ProfileError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Parses a profile from YAML text.
    pub fn from_yaml_str(source: &str) -> Result<Self, ProfileError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Loads a profile from disk.
    ///
    /// Files ending in `.yaml` or `.yml` are parsed as YAML; anything else
    /// is parsed as JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_yaml = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yaml") | Some("yml")
        );
        let profile = if is_yaml {
            Self::from_yaml_str(&source)?
        } else {
            Self::from_json_str(&source)?
        };

        tracing::debug!(
            path = %path.display(),
            slug = %profile.slug,
            components = profile.components.len(),
            "loaded profile"
        );
        Ok(profile)
    }

    /// Serializes the profile as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, ProfileError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
