//! Structural validation of profiles supplied by storage collaborators.

use super::{Profile, ProfileError};

/// Attribute categories every stored profile must declare.
const REQUIRED_CATEGORIES: &[&str] = &["colors", "typography", "spacing"];

impl Profile {
    /// Returns every structural problem with this profile.
    ///
    /// Generation never requires a valid profile; this check exists for
    /// collaborators that persist profiles.
    pub fn validation_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.name.is_empty() {
            issues.push("Profile name is required".to_string());
        }
        if self.author.is_empty() {
            issues.push("Profile author is required".to_string());
        }
        if self.slug.is_empty() {
            issues.push("Profile slug is required".to_string());
        } else if !is_valid_slug(&self.slug) {
            issues.push(
                "Profile slug must contain only lowercase letters, numbers, and dashes"
                    .to_string(),
            );
        }

        for category in REQUIRED_CATEGORIES {
            if self.attributes.get(category).is_none() {
                issues.push(format!("Profile must have {category} attributes"));
            }
        }

        if self.components.is_empty() {
            issues.push("Profile must have at least one component".to_string());
        }

        issues
    }

    /// Validates the profile, returning all issues at once on failure.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let issues = self.validation_issues();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(ProfileError::Invalid(issues))
        }
    }
}

pub(crate) fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ComponentDecl, TokenGroup};

    fn valid_profile() -> Profile {
        Profile::new("Valid")
            .with_author("Ada")
            .with_slug("valid-1")
            .with_attributes(
                TokenGroup::new()
                    .group("colors", TokenGroup::new().token("accent", "#000"))
                    .group("typography", TokenGroup::new().token("fontFamily", "serif"))
                    .group("spacing", TokenGroup::new().token("small", "4px")),
            )
            .with_component("card", ComponentDecl::new().with("color", "colors.accent"))
    }

    #[test]
    fn test_valid_profile_passes() {
        assert!(valid_profile().validate().is_ok());
    }

    #[test]
    fn test_empty_profile_reports_everything() {
        let issues = Profile::new("").validation_issues();
        assert_eq!(issues.len(), 7);
        assert!(issues.contains(&"Profile must have typography attributes".to_string()));
        assert!(issues.contains(&"Profile must have at least one component".to_string()));
    }

    #[test]
    fn test_bad_slug() {
        let profile = valid_profile().with_slug("Not A Slug");
        let err = profile.validate().unwrap_err();
        assert!(err.to_string().contains("lowercase letters"));
    }

    #[test]
    fn test_slug_charset() {
        assert!(is_valid_slug("studio-2024"));
        assert!(!is_valid_slug("studio_2024"));
        assert!(!is_valid_slug("Studio"));
        assert!(!is_valid_slug(""));
    }
}
