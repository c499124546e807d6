#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]
//! Constrained random password generation and strength scoring.
//!
//! Passwords are built from the character classes enabled in
//! [GenerationOptions]; one character of every enabled class is
//! guaranteed to appear and the result is shuffled so those
//! characters are not predictably placed.
//!
//! Randomness is drawn through the [IndexSource] trait. The default
//! source is the operating system CSPRNG; tests and callers that need
//! reproducible output can inject their own.
//!
//! ```
//! use passforge_password::{
//!     check_strength, GenerationOptions, PasswordGenerator,
//! };
//! use secrecy::ExposeSecret;
//!
//! let options = GenerationOptions::new_ascii_printable(16);
//! let mut generator = PasswordGenerator::new();
//! let password = generator.generate(&options).unwrap();
//! assert_eq!(16, password.expose_secret().chars().count());
//!
//! let report = check_strength(password.expose_secret());
//! assert!(report.score <= 8);
//! ```

pub mod charset;
mod error;
pub mod generator;
mod options;
mod rng;
mod strength;

pub use error::Error;
pub use generator::{shuffle, PasswordGenerator, PasswordResult};
pub use options::GenerationOptions;
pub use rng::{csprng, Csprng, IndexSource, RngSource};
pub use strength::{
    check_strength, measure_entropy, StrengthLabel, StrengthReport,
    MAX_SCORE,
};

pub use zxcvbn;

/// Target for tracing macros.
pub const TARGET: &str = "passforge";

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
