// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type for local operations.
//!
//! Service calls report [`crate::generation::GenerateError`] instead.

use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    /// Reading a local file failed.
    Io(String),
    /// `settings.toml` could not be parsed.
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(detail) => write!(f, "file access failed: {detail}"),
            Error::Config(detail) => write!(f, "invalid settings: {detail}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.message().to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
