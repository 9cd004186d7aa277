//! Errors raised while resolving a color.
//!
//! Every error is local to the call that raised it. Nothing is partially
//! resolved, and callers decide whether to propagate or fall back to another
//! color.

use thiserror::Error;

use crate::color::Component;

/// Failure to resolve a color argument, expression or hex string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The argument is not a number, percentage, angle or `none`.
    #[error("malformed argument {argument:?}: {reason}")]
    MalformedArgument {
        /// The argument as given.
        argument: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// A numeric argument lies outside a domain that rejects rather than
    /// clamps.
    #[error("value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        /// The resolved value.
        value: Component,
        /// Lower bound of the domain.
        min: Component,
        /// Upper bound of the domain.
        max: Component,
    },

    /// A hex color with the wrong number of digits or non-hex characters.
    #[error("malformed hex color {0:?}")]
    MalformedHex(String),

    /// A color expression that is neither hex, a function, nor a known name.
    #[error("unknown color {0:?}")]
    UnknownColor(String),

    /// A color function with broken syntax or the wrong number of arguments.
    #[error("malformed color function {0:?}")]
    MalformedFunction(String),
}

/// Result type for color resolution.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn malformed(argument: impl Into<String>, reason: &'static str) -> Self {
        Error::MalformedArgument {
            argument: argument.into(),
            reason,
        }
    }
}
