//! Utility for generating random passwords.
use secrecy::{ExposeSecret, SecretString};
use zxcvbn::Entropy;

use crate::{
    charset, csprng, measure_entropy, Csprng, Error, GenerationOptions,
    IndexSource, Result, TARGET,
};

/// Generated password result.
#[derive(Debug, Clone)]
pub struct PasswordResult {
    /// The generated password.
    pub password: SecretString,
    /// The computed entropy for the password.
    pub entropy: Entropy,
}

/// Generates passwords from [GenerationOptions].
///
/// The default source of randomness is the operating system CSPRNG
/// which is stronger than the uniform source the algorithm requires;
/// use [PasswordGenerator::with_source] to supply another
/// [IndexSource], for example a seeded generator in tests.
#[derive(Debug, Clone)]
pub struct PasswordGenerator<R = Csprng> {
    rng: R,
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordGenerator {
    /// Create a generator backed by the operating system CSPRNG.
    pub fn new() -> Self {
        Self { rng: csprng() }
    }
}

impl<R: IndexSource> PasswordGenerator<R> {
    /// Create a generator using the given source of randomness.
    pub fn with_source(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a random password.
    ///
    /// Every enabled character class appears at least once. When the
    /// requested length is smaller than the number of enabled classes
    /// the password is longer than requested, it is never truncated.
    pub fn generate(
        &mut self,
        options: &GenerationOptions,
    ) -> Result<SecretString> {
        if options.is_empty() {
            return Err(Error::InvalidLength(options.len()));
        }

        let (characters, mut password) =
            charset::build(options, &mut self.rng)?.into_parts();

        if password.len() > options.len() {
            tracing::warn!(
                target: TARGET,
                requested = options.len(),
                length = password.len(),
                "password longer than requested length"
            );
        }

        password.reserve(options.len().saturating_sub(password.len()));
        while password.len() < options.len() {
            password
                .push(characters[self.rng.next_index(characters.len())]);
        }

        shuffle(&mut password, &mut self.rng);

        tracing::debug!(
            target: TARGET,
            length = password.len(),
            classes = options.enabled_classes(),
            "generator::generate"
        );

        Ok(SecretString::new(
            password.into_iter().collect::<String>().into(),
        ))
    }

    /// Generate `count` passwords, stopping at the first error.
    pub fn generate_multiple(
        &mut self,
        count: usize,
        options: &GenerationOptions,
    ) -> Result<Vec<SecretString>> {
        let mut passwords = Vec::new();
        for _ in 0..count {
            passwords.push(self.generate(options)?);
        }
        Ok(passwords)
    }

    /// Generate a random password and measure its entropy.
    pub fn one(
        &mut self,
        options: &GenerationOptions,
    ) -> Result<PasswordResult> {
        let password = self.generate(options)?;
        let entropy = measure_entropy(password.expose_secret(), &[]);
        Ok(PasswordResult { password, entropy })
    }

    /// Generate multiple passwords with entropy.
    pub fn many(
        &mut self,
        count: usize,
        options: &GenerationOptions,
    ) -> Result<Vec<PasswordResult>> {
        let mut results = Vec::new();
        for _ in 0..count {
            results.push(self.one(options)?);
        }
        Ok(results)
    }
}

/// Fisher-Yates shuffle in place.
///
/// Walks from the last index down to 1 swapping each position with
/// a uniformly chosen index no greater than itself.
pub fn shuffle<T>(items: &mut [T], rng: &mut impl IndexSource) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}
