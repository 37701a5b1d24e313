//! Name value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for contact names.
///
/// This ensures that names are validated at construction time and
/// cannot be empty.
///
/// # Example
///
/// ```
/// use assistant_bot::domain::Name;
///
/// let name = Name::new("John").unwrap();
/// assert_eq!(name.as_str(), "John");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a new Name, validating that it's not empty.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the provided name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the name with its first character uppercased and the rest
    /// lowercased, the form used when rendering a contact.
    pub fn capitalized(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        }
    }
}

// Serde support - serialize as string
impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_valid() {
        let name = Name::new("John").unwrap();
        assert_eq!(name.as_str(), "John");
    }

    #[test]
    fn test_name_rejects_empty() {
        assert_eq!(Name::new(""), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_name_display() {
        let name = Name::new("Jane").unwrap();
        assert_eq!(format!("{}", name), "Jane");
    }

    #[test]
    fn test_name_capitalized() {
        assert_eq!(Name::new("john").unwrap().capitalized(), "John");
        assert_eq!(Name::new("aNNa").unwrap().capitalized(), "Anna");
        assert_eq!(Name::new("John").unwrap().capitalized(), "John");
    }

    #[test]
    fn test_name_serialization() {
        let name = Name::new("John").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"John\"");
    }

    #[test]
    fn test_name_deserialization() {
        let name: Name = serde_json::from_str("\"John\"").unwrap();
        assert_eq!(name.as_str(), "John");
    }

    #[test]
    fn test_name_deserialization_empty_fails() {
        let result: Result<Name, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
