use thiserror::Error;

/// Errors generated by the password library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when the requested length is zero.
    #[error("password length must be at least 1, got {0}")]
    InvalidLength(usize),

    /// Error generated when the options yield no usable characters.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Error generated by the io module.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Error generated deserializing options from TOML.
    #[error(transparent)]
    TomlDeser(#[from] toml::de::Error),
}
