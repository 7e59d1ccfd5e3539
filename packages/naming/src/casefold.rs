//! Case folding applied to destination-bound names.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

/// How destination names are folded relative to their source spelling.
///
/// One value is chosen per run and applied to both directory and file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseFold {
    /// Leave names exactly as the source spells them.
    Identity,
    /// Force names to lowercase.
    Lower,
    /// Force names to uppercase.
    Upper,
}

impl CaseFold {
    /// Apply the fold to a single name.
    #[must_use]
    pub fn apply(self, name: &str) -> String {
        match self {
            Self::Identity => name.to_string(),
            Self::Lower => name.to_lowercase(),
            Self::Upper => name.to_uppercase(),
        }
    }
}

impl std::fmt::Display for CaseFold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identity => write!(f, "unchanged"),
            Self::Lower => write!(f, "lowercase"),
            Self::Upper => write!(f, "uppercase"),
        }
    }
}

/// Whether the name contains any uppercase letter.
///
/// Names without letters ("100_2024") report `false` here and in
/// [`contains_lowercase`].
#[must_use]
pub fn contains_uppercase(name: &str) -> bool {
    name.chars().any(char::is_uppercase)
}

/// Whether the name contains any lowercase letter.
#[must_use]
pub fn contains_lowercase(name: &str) -> bool {
    name.chars().any(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_identity() {
        assert_eq!(CaseFold::Identity.apply("Img_0001.Jpg"), "Img_0001.Jpg");
    }

    #[test]
    fn test_apply_lower() {
        assert_eq!(CaseFold::Lower.apply("IMG_0001.JPG"), "img_0001.jpg");
    }

    #[test]
    fn test_apply_upper() {
        assert_eq!(CaseFold::Upper.apply("img_0001.jpg"), "IMG_0001.JPG");
    }

    #[test]
    fn test_casing_predicates() {
        assert!(contains_uppercase("IMG_0001.jpg"));
        assert!(contains_lowercase("IMG_0001.jpg"));
        assert!(!contains_uppercase("img_0001.jpg"));
        assert!(!contains_lowercase("IMG_0001.JPG"));
        // Digits and punctuation are neither.
        assert!(!contains_uppercase("100_2024"));
        assert!(!contains_lowercase("100_2024"));
    }
}
