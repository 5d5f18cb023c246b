//! Error types for template scanning, argument binding and rendering.
//!
//! All errors abort the surrounding `format` call entirely: no partial output
//! is ever returned. Every parsing error carries the byte offset of the
//! offending placeholder so callers can point at the exact spot in the
//! template.
//!
//! ## Error Categories
//!
//! - **Template errors**: unmatched braces, named placeholders
//! - **Binding errors**: not enough arguments for the placeholders present
//! - **Rendering errors**: a format-spec type character incompatible with the
//!   bound argument's runtime kind
//!
//! Out-of-range explicit indices are NOT errors; they render the placeholder
//! literally (see [`crate::format`]).
//!
//! ## Examples
//!
//! ```rust
//! use bracefmt::{format, args, Error};
//!
//! let result = format("Unmatched {", &args![1]);
//! assert!(matches!(result, Err(Error::UnmatchedBrace { offset: 10 })));
//! ```

use crate::value::Kind;
use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while formatting a template.
///
/// Each variant includes contextual information to aid debugging.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Fewer arguments supplied than the template's placeholders require.
    #[error("insufficient arguments: template requires {required}, {supplied} supplied")]
    InsufficientArguments { required: usize, supplied: usize },

    /// An opening `{` with no corresponding `}` (or a stray `}`) outside any
    /// escape sequence.
    #[error("unmatched brace at byte {offset}")]
    UnmatchedBrace { offset: usize },

    /// Placeholder content begins with a non-digit, non-colon character.
    #[error("named arguments are not supported: {{{content}}} at byte {offset}")]
    NamedArgument { offset: usize, content: String },

    /// A format-spec type character incompatible with the bound argument.
    #[error("type mismatch at byte {offset}: format type '{type_char}' cannot render a {kind} argument")]
    TypeMismatch {
        offset: usize,
        type_char: char,
        kind: Kind,
    },

    /// The auto-index cursor ran out of arguments before satisfying all `{}`
    /// and `{:spec}` placeholders.
    #[error("missing argument for {{}} placeholder at byte {offset}")]
    MissingArgument { offset: usize },

    /// A value that cannot be converted into a format argument (compound
    /// serde types such as sequences, maps and structs).
    #[error("unsupported argument type: {0}")]
    UnsupportedType(String),

    /// Generic message, used by the serde bridge.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates an unmatched-brace error at the given byte offset.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bracefmt::Error;
    ///
    /// let err = Error::unmatched_brace(7);
    /// assert!(err.to_string().contains("byte 7"));
    /// ```
    pub fn unmatched_brace(offset: usize) -> Self {
        Error::UnmatchedBrace { offset }
    }

    /// Creates a named-argument error, reporting the offending content.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bracefmt::Error;
    ///
    /// let err = Error::named_argument(0, "name");
    /// assert!(err.to_string().contains("{name}"));
    /// ```
    pub fn named_argument(offset: usize, content: &str) -> Self {
        Error::NamedArgument {
            offset,
            content: content.to_string(),
        }
    }

    /// Creates a type-mismatch error for a spec type character applied to an
    /// argument of an incompatible runtime kind.
    pub fn type_mismatch(offset: usize, type_char: char, kind: Kind) -> Self {
        Error::TypeMismatch {
            offset,
            type_char,
            kind,
        }
    }

    /// Creates an insufficient-arguments error.
    pub fn insufficient_arguments(required: usize, supplied: usize) -> Self {
        Error::InsufficientArguments { required, supplied }
    }

    /// Creates a missing-argument error for an exhausted auto-index cursor.
    pub fn missing_argument(offset: usize) -> Self {
        Error::MissingArgument { offset }
    }

    /// Creates an unsupported-type error for values that cannot become
    /// format arguments.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
