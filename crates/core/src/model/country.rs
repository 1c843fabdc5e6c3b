use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CountryError {
    #[error("country name cannot be empty")]
    EmptyName,
}

/// A single item a round can ask about.
///
/// The `emoji` stands in for the flag artwork and `description` is the
/// spoken label for the flag, written for screen readers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Country {
    name: String,
    emoji: String,
    description: String,
}

impl Country {
    /// Creates a country, trimming surrounding whitespace from every field.
    ///
    /// # Errors
    ///
    /// Returns `CountryError::EmptyName` if the name is blank.
    pub fn new(
        name: impl Into<String>,
        emoji: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, CountryError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(CountryError::EmptyName);
        }

        Ok(Self {
            name,
            emoji: emoji.into().trim().to_string(),
            description: description.into().trim().to_string(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
