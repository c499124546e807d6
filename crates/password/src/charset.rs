//! Character set construction for password generation.
//!
//! The full charset is the concatenation of the pools for every
//! enabled class with the exclusion filters applied. Required
//! characters are drawn from separate per-class pools whose
//! similarity exclusions are narrower than the full charset filter:
//! uppercase drops only `O`, lowercase only `i` and `l`, numbers only
//! `1` and `0`. A required character can therefore be one that the
//! full charset filters out (for example `L` or `o`). The asymmetry
//! is probably unintended; it is kept until the per-class lists are
//! reconciled with [SIMILAR].
use crate::{Error, IndexSource, Result, TARGET};

/// Uppercase roman letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Lowercase roman letters.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// Numerical digits.
pub const DIGITS: &str = "0123456789";
/// Punctuation symbols.
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Characters that are easily mistaken for one another.
pub const SIMILAR: &str = "il1Lo0O";
/// Punctuation that is awkward to read or to type in some contexts.
pub const AMBIGUOUS: &str = "{}[]()/\\`~,;.<>";

const UPPERCASE_SIMILAR: &str = "O";
const LOWERCASE_SIMILAR: &str = "il";
const DIGITS_SIMILAR: &str = "10";

/// Effective alphabet and required characters for one generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    characters: Vec<char>,
    required: Vec<char>,
}

impl Charset {
    /// Characters random positions are drawn from.
    pub fn characters(&self) -> &[char] {
        &self.characters
    }

    /// One character per enabled class in class order.
    pub fn required(&self) -> &[char] {
        &self.required
    }

    /// Split into the full charset and the required characters.
    pub(crate) fn into_parts(self) -> (Vec<char>, Vec<char>) {
        (self.characters, self.required)
    }
}

/// Pool of a single character class before filtering.
struct Class {
    name: &'static str,
    pool: &'static str,
    enabled: bool,
    /// Removed from the required pool when similar characters
    /// are excluded.
    similar: &'static str,
    /// Whether ambiguous characters are removed from the
    /// required pool.
    ambiguous: bool,
}

fn classes(options: &crate::GenerationOptions) -> [Class; 4] {
    [
        Class {
            name: "uppercase",
            pool: UPPERCASE,
            enabled: options.include_uppercase,
            similar: UPPERCASE_SIMILAR,
            ambiguous: false,
        },
        Class {
            name: "lowercase",
            pool: LOWERCASE,
            enabled: options.include_lowercase,
            similar: LOWERCASE_SIMILAR,
            ambiguous: false,
        },
        Class {
            name: "numbers",
            pool: DIGITS,
            enabled: options.include_numbers,
            similar: DIGITS_SIMILAR,
            ambiguous: false,
        },
        Class {
            name: "symbols",
            pool: SYMBOLS,
            enabled: options.include_symbols,
            similar: "",
            ambiguous: true,
        },
    ]
}

/// Build the full charset and draw the required characters.
pub fn build(
    options: &crate::GenerationOptions,
    rng: &mut impl IndexSource,
) -> Result<Charset> {
    let classes = classes(options);

    let mut characters: Vec<char> = classes
        .iter()
        .filter(|class| class.enabled)
        .flat_map(|class| class.pool.chars())
        .collect();

    if options.exclude_similar {
        characters.retain(|c| !SIMILAR.contains(*c));
    }
    if options.exclude_ambiguous {
        characters.retain(|c| !AMBIGUOUS.contains(*c));
    }

    if characters.is_empty() {
        return Err(Error::Configuration(
            if options.enabled_classes() == 0 {
                "at least one character type must be selected"
            } else {
                "character set is empty after exclusions"
            }
            .to_owned(),
        ));
    }

    let mut required = Vec::with_capacity(classes.len());
    for class in classes.iter().filter(|class| class.enabled) {
        let mut exclude = String::new();
        if options.exclude_similar {
            exclude.push_str(class.similar);
        }
        if options.exclude_ambiguous && class.ambiguous {
            exclude.push_str(AMBIGUOUS);
        }
        let pool: Vec<char> = class
            .pool
            .chars()
            .filter(|c| !exclude.contains(*c))
            .collect();
        if pool.is_empty() {
            return Err(Error::Configuration(format!(
                "no characters left in the {} pool",
                class.name
            )));
        }
        required.push(pool[rng.next_index(pool.len())]);
    }

    tracing::debug!(
        target: TARGET,
        characters = characters.len(),
        required = required.len(),
        "charset::build"
    );

    Ok(Charset {
        characters,
        required,
    })
}
