//! Name keys
//!
//! Validated, case-folded lookup keys. Validation happens at construction,
//! so table operations never see an invalid key and reject nothing at the
//! lock boundary.

use std::fmt;
use std::str::FromStr;

use crate::error::{CacheError, Result};

/// Maximum length of a name, in bytes
pub const MAX_NAME_LEN: usize = 253;

/// A validated lookup key, e.g. a host name.
///
/// Invariants (enforced by [`Name::new`]):
/// - non-empty
/// - at most [`MAX_NAME_LEN`] bytes
/// - ASCII letters folded to lowercase, so `Example.COM` and `example.com`
///   are the same key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    /// Validate and construct a name.
    pub fn new(name: impl AsRef<str>) -> Result<Self> {
        let name = name.as_ref();

        if name.is_empty() {
            return Err(CacheError::InvalidName("name is empty".to_string()));
        }

        if name.len() > MAX_NAME_LEN {
            return Err(CacheError::InvalidName(format!(
                "name is {} bytes, limit is {}",
                name.len(),
                MAX_NAME_LEN
            )));
        }

        Ok(Self(name.to_ascii_lowercase()))
    }

    /// The folded form of the name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Name {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_name() {
        let name = Name::new("example.com").unwrap();
        assert_eq!(name.as_str(), "example.com");
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = Name::new("").unwrap_err();
        assert!(matches!(err, CacheError::InvalidName(_)));
    }

    #[test]
    fn test_overlong_name_rejected() {
        let long = "a".repeat(MAX_NAME_LEN + 1);
        let err = Name::new(&long).unwrap_err();
        assert!(matches!(err, CacheError::InvalidName(_)));
    }

    #[test]
    fn test_max_length_name_accepted() {
        let name = "a".repeat(MAX_NAME_LEN);
        assert!(Name::new(&name).is_ok());
    }

    #[test]
    fn test_case_folding() {
        let upper = Name::new("Example.COM").unwrap();
        let lower = Name::new("example.com").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.as_str(), "example.com");
    }

    #[test]
    fn test_from_str() {
        let name: Name = "example.com".parse().unwrap();
        assert_eq!(name.as_str(), "example.com");

        let err = "".parse::<Name>().unwrap_err();
        assert!(matches!(err, CacheError::InvalidName(_)));
    }
}
