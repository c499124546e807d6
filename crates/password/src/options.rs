//! Options for password generation.
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::Result;

/// Character classes and exclusion rules for generated passwords.
///
/// Options serialize with the field names as keys so they can be
/// kept in a TOML file; missing keys take the default value:
///
/// ```toml
/// length = 20
/// include_symbols = false
/// exclude_similar = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    /// Requested number of characters.
    pub length: usize,
    /// Use uppercase roman letters.
    pub include_uppercase: bool,
    /// Use lowercase roman letters.
    pub include_lowercase: bool,
    /// Use numeric digits.
    pub include_numbers: bool,
    /// Use punctuation symbols.
    pub include_symbols: bool,
    /// Remove characters that are easily confused with each other.
    pub exclude_similar: bool,
    /// Remove brackets, slashes and other ambiguous punctuation.
    pub exclude_ambiguous: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self::new_ascii_printable(16)
    }
}

impl GenerationOptions {
    /// Options with the given length and no character classes.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
            exclude_similar: false,
            exclude_ambiguous: false,
        }
    }

    /// Create with lowercase and uppercase character sets.
    pub fn new_alpha(length: usize) -> Self {
        Self::new(length).uppercase().lowercase()
    }

    /// Create with numeric digits only.
    pub fn new_numeric(length: usize) -> Self {
        Self::new(length).numbers()
    }

    /// Create with numeric digits, uppercase and lowercase
    /// roman letters.
    pub fn new_alpha_numeric(length: usize) -> Self {
        Self::new(length).uppercase().lowercase().numbers()
    }

    /// Options using every character class.
    pub fn new_ascii_printable(length: usize) -> Self {
        Self::new(length)
            .uppercase()
            .lowercase()
            .numbers()
            .symbols()
    }

    /// Parse options from a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load options from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Requested length of generated passwords.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Determine if the requested length is zero.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of enabled character classes.
    pub fn enabled_classes(&self) -> usize {
        [
            self.include_uppercase,
            self.include_lowercase,
            self.include_numbers,
            self.include_symbols,
        ]
        .iter()
        .filter(|enabled| **enabled)
        .count()
    }

    /// Use uppercase roman letters.
    pub fn uppercase(mut self) -> Self {
        self.include_uppercase = true;
        self
    }

    /// Use lowercase roman letters.
    pub fn lowercase(mut self) -> Self {
        self.include_lowercase = true;
        self
    }

    /// Use numeric digits.
    pub fn numbers(mut self) -> Self {
        self.include_numbers = true;
        self
    }

    /// Use punctuation symbols.
    pub fn symbols(mut self) -> Self {
        self.include_symbols = true;
        self
    }

    /// Remove similar looking characters.
    pub fn exclude_similar(mut self) -> Self {
        self.exclude_similar = true;
        self
    }

    /// Remove ambiguous punctuation.
    pub fn exclude_ambiguous(mut self) -> Self {
        self.exclude_ambiguous = true;
        self
    }
}
