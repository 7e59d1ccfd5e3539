//! Matchers for numbered directory and file names.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::sync::LazyLock;

use regex::Regex;

/// Numbered subdirectories: exactly three ASCII digits followed by at least
/// one non-digit. Trailing characters are unconstrained.
static SUBDIR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{3})[^0-9]").expect("invalid subdir pattern"));

/// Numbered files: a four-character `[A-Za-z0-9_]` prefix, a digit run, a
/// single dot, and a non-empty extension with no further dots.
static FILE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_]{4}([0-9]+)\.([^.]+)$").expect("invalid file pattern")
});

/// A recognized numbered subdirectory name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubdirMatch {
    /// The leading three digits parsed as an integer ("017" -> 17).
    pub number: u32,
    /// The entire entry name, digits and suffix included.
    pub name: String,
}

/// A recognized numbered file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMatch {
    /// The digit run after the four-character prefix.
    pub number: u32,
    /// Everything after the dot.
    pub extension: String,
}

/// Match a directory entry name against the numbered-subdirectory pattern.
///
/// Returns `None` for names that don't start with three digits and a
/// non-digit, e.g. plain files or `DCIM` metadata entries.
#[must_use]
pub fn match_subdir(name: &str) -> Option<SubdirMatch> {
    let captures = SUBDIR_RE.captures(name)?;
    let number = captures[1].parse().ok()?;

    Some(SubdirMatch {
        number,
        name: name.to_string(),
    })
}

/// Match a file entry name against the numbered-file pattern.
///
/// The whole name must match: prefix, digits, dot, extension. Names with a
/// second dot, or a digit run too large for `u32`, return `None`.
#[must_use]
pub fn match_file(name: &str) -> Option<FileMatch> {
    let captures = FILE_RE.captures(name)?;
    let number = captures[1].parse().ok()?;

    Some(FileMatch {
        number,
        extension: captures[2].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_subdir_typical() {
        let m = match_subdir("100CANON").unwrap();
        assert_eq!(m.number, 100);
        assert_eq!(m.name, "100CANON");
    }

    #[test]
    fn test_match_subdir_leading_zeros() {
        let m = match_subdir("017_OLD").unwrap();
        assert_eq!(m.number, 17);
        assert_eq!(m.name, "017_OLD");
    }

    #[test]
    fn test_match_subdir_trailing_digits_allowed() {
        // Only the fourth character must be a non-digit.
        let m = match_subdir("100ABC1").unwrap();
        assert_eq!(m.number, 100);
        assert_eq!(m.name, "100ABC1");
    }

    #[test]
    fn test_match_subdir_rejects() {
        assert!(match_subdir("").is_none());
        assert!(match_subdir("100").is_none());
        assert!(match_subdir("1000ABC").is_none());
        assert!(match_subdir("10CANON").is_none());
        assert!(match_subdir("CANON100").is_none());
        assert!(match_subdir(".Trashes").is_none());
    }

    #[test]
    fn test_match_file_typical() {
        let m = match_file("IMG_0042.JPG").unwrap();
        assert_eq!(m.number, 42);
        assert_eq!(m.extension, "JPG");
    }

    #[test]
    fn test_match_file_digit_prefix() {
        // The four-character prefix may itself contain digits.
        let m = match_file("DSC00001.jpg").unwrap();
        assert_eq!(m.number, 1);
        assert_eq!(m.extension, "jpg");
    }

    #[test]
    fn test_match_file_rejects() {
        assert!(match_file("").is_none());
        assert!(match_file("IMG_.JPG").is_none());
        assert!(match_file("IM1.JPG").is_none());
        assert!(match_file("IMG_0042").is_none());
        assert!(match_file("IMG_0042.").is_none());
        assert!(match_file("IMG_0042.tar.gz").is_none());
        assert!(match_file("IMG-0042.JPG").is_none());
        assert!(match_file("IMG_0042A.JPG").is_none());
    }

    #[test]
    fn test_match_file_oversized_number() {
        assert!(match_file("IMG_99999999999999999999.JPG").is_none());
    }

    #[test]
    fn test_matchers_are_stable() {
        for name in ["100CANON", "IMG_0042.JPG", "junk", ""] {
            assert_eq!(match_subdir(name), match_subdir(name));
            assert_eq!(match_file(name), match_file(name));
        }
    }
}
