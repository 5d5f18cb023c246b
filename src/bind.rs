//! Argument binding.
//!
//! Maps each scanned placeholder to a concrete argument position, driving the
//! auto-index cursor for `{}` and `{:spec}` placeholders and resolving
//! explicit `{N}` indices.
//!
//! ## Binding rules
//!
//! - Placeholders resolve left to right, in template order.
//! - `{}` and `{:spec}` take the lowest argument position not yet consumed;
//!   positions reserved by an explicit index encountered earlier are skipped.
//! - `{N}` binds directly to position `N` and may be repeated freely; an
//!   out-of-range `N` is not an error: the placeholder text passes through
//!   to the output unchanged, so templates can be applied to partial
//!   argument sets.
//! - Before any resolution, the total demand (auto placeholders plus
//!   distinct in-range explicit indices) is checked against the argument
//!   count; a shortfall aborts the call with
//!   [`Error::InsufficientArguments`](crate::Error::InsufficientArguments)
//!   before anything is rendered.

use crate::scan::{PlaceholderKind, Token};
use crate::{Error, Result};
use indexmap::IndexSet;

/// One resolved output fragment.
#[derive(Clone, Debug, PartialEq)]
pub enum Binding {
    /// Literal template text, escapes already unfolded.
    Literal(String),
    /// A placeholder bound to `arguments[index]`, with its raw spec if any.
    Arg {
        index: usize,
        spec: Option<String>,
        offset: usize,
    },
    /// An out-of-range `{N}` re-emitted verbatim.
    Passthrough(String),
}

/// Resolves scanned tokens against `arg_count` available arguments.
///
/// # Errors
///
/// [`Error::InsufficientArguments`](crate::Error::InsufficientArguments) when
/// the template demands more positions than supplied, and
/// [`Error::MissingArgument`](crate::Error::MissingArgument) when the auto
/// cursor runs out mid-resolution.
pub fn bind(tokens: Vec<Token>, arg_count: usize) -> Result<Vec<Binding>> {
    check_demand(&tokens, arg_count)?;

    let mut used: IndexSet<usize> = IndexSet::new();
    let mut cursor = 0usize;
    let mut bindings = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token {
            Token::Literal(text) => bindings.push(Binding::Literal(text)),
            Token::Placeholder(p) => match p.kind {
                PlaceholderKind::Empty | PlaceholderKind::FormatOnly => {
                    while cursor < arg_count && used.contains(&cursor) {
                        cursor += 1;
                    }
                    if cursor >= arg_count {
                        return Err(Error::missing_argument(p.offset));
                    }
                    used.insert(cursor);
                    bindings.push(Binding::Arg {
                        index: cursor,
                        spec: p.spec,
                        offset: p.offset,
                    });
                    cursor += 1;
                }
                PlaceholderKind::Indexed => {
                    // Index is always present for Indexed placeholders.
                    let index = p.index.unwrap_or(u64::MAX);
                    if index >= arg_count as u64 {
                        bindings.push(Binding::Passthrough(p.raw));
                    } else {
                        let index = index as usize;
                        used.insert(index);
                        bindings.push(Binding::Arg {
                            index,
                            spec: None,
                            offset: p.offset,
                        });
                    }
                }
            },
        }
    }

    Ok(bindings)
}

/// Counts the argument positions the template demands: one per auto
/// placeholder plus each distinct in-range explicit index. Out-of-range
/// explicit indices demand nothing (they pass through).
fn check_demand(tokens: &[Token], arg_count: usize) -> Result<()> {
    let mut autos = 0usize;
    let mut explicit: IndexSet<u64> = IndexSet::new();

    for token in tokens {
        if let Token::Placeholder(p) = token {
            match p.kind {
                PlaceholderKind::Empty | PlaceholderKind::FormatOnly => autos += 1,
                PlaceholderKind::Indexed => {
                    if let Some(index) = p.index {
                        if index < arg_count as u64 {
                            explicit.insert(index);
                        }
                    }
                }
            }
        }
    }

    let required = autos + explicit.len();
    if required > arg_count {
        return Err(Error::insufficient_arguments(required, arg_count));
    }
    Ok(())
}
