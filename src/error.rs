//! Conversion error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested script converter is not one of [`crate::Converter::ALL`].
    #[error("Invalid translator: {0:?}")]
    InvalidConverter(String),
}

pub type Result<T> = std::result::Result<T, Error>;
