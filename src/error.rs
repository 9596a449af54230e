//! Typed errors for option synthesis.
//!
//! The builders are pure transformations, so every failure here is a
//! validation problem the caller can report and recover from.
use thiserror::Error;

/// Errors raised while building runner argument vectors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    /// No configured feature path contains the reference's directory fragment.
    #[error("no configured feature path contains {fragment:?} (reference {reference:?})")]
    UnresolvedFeature { reference: String, fragment: String },

    /// A scenario reference is not `<path>:<line>[:<line>...]`.
    #[error("invalid scenario reference {0:?} (expected <path>:<line>[:<line>...])")]
    InvalidScenarioRef(String),

    /// The descriptor or run scope failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl OptionsError {
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, OptionsError>;
