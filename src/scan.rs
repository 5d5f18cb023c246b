//! Template scanning.
//!
//! This module locates every `{...}` placeholder in a template, distinguishes
//! them from escape sequences, and classifies their content.
//!
//! ## Overview
//!
//! - **Single-pass scanning**: one left-to-right walk over the template, no
//!   backtracking
//! - **Escapes**: `{{` and `}}` emit literal braces; a `{` preceded by an odd
//!   run of backslashes leaves the whole group in the output untouched
//! - **Classification**: placeholders come out as [`PlaceholderKind::Empty`]
//!   (`{}`), [`PlaceholderKind::Indexed`] (`{3}`) or
//!   [`PlaceholderKind::FormatOnly`] (`{:.2f}`)
//! - **Error reporting**: unmatched braces and named placeholders fail with
//!   the byte offset of the offending token
//!
//! ## Usage
//!
//! Most users should go through [`crate::format`]; the scanner is exposed for
//! callers that want to inspect a template without rendering it:
//!
//! ```rust
//! use bracefmt::scan::{scan, Token};
//!
//! let tokens = scan("Hello, {}!").unwrap();
//! assert_eq!(tokens.len(), 3);
//! assert!(matches!(tokens[1], Token::Placeholder(_)));
//! ```

use crate::{Error, Result};

/// How a placeholder binds to an argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceholderKind {
    /// `{}`: bound via the auto-index cursor.
    Empty,
    /// `{3}`: bound to an explicit zero-based argument index.
    Indexed,
    /// `{:spec}`: auto-indexed like `{}`, but carrying a format spec.
    FormatOnly,
}

/// One parsed `{...}` token.
#[derive(Clone, Debug, PartialEq)]
pub struct Placeholder {
    /// Byte offset of the opening `{` in the template.
    pub offset: usize,
    /// The original source text, braces included, for literal passthrough.
    pub raw: String,
    pub kind: PlaceholderKind,
    /// Explicit index for [`PlaceholderKind::Indexed`].
    ///
    /// A `-` sign wraps the parsed digits (the historical `stoul` quirk), so
    /// `{-1}` carries a huge index and falls into out-of-range passthrough.
    pub index: Option<u64>,
    /// Raw spec string for [`PlaceholderKind::FormatOnly`], untrimmed.
    pub spec: Option<String>,
}

/// A template fragment: literal text or a placeholder.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Literal(String),
    Placeholder(Placeholder),
}

/// Splits a template into literal text and placeholders.
///
/// Escape sequences are resolved here: `{{`/`}}` become single braces in the
/// literal output and backslash-escaped groups stay verbatim, so later stages
/// never see them as placeholders.
///
/// # Errors
///
/// [`Error::UnmatchedBrace`] for a `{` without `}` (or a stray `}`) outside
/// any escape, and [`Error::NamedArgument`] for content that is neither
/// empty, an index, nor a `:spec`.
///
/// # Examples
///
/// ```rust
/// use bracefmt::scan::{scan, Token};
///
/// let tokens = scan("{{}}").unwrap();
/// assert_eq!(tokens, vec![Token::Literal("{}".to_string())]);
/// ```
pub fn scan(template: &str) -> Result<Vec<Token>> {
    let bytes = template.as_bytes();
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'{' => {
                if bytes.get(pos + 1) == Some(&b'{') {
                    literal.push('{');
                    pos += 2;
                    continue;
                }
                let close = find_close(template, pos)?;
                if backslash_run(bytes, pos) % 2 == 1 {
                    // Backslash-escaped group: keep it verbatim.
                    literal.push_str(&template[pos..=close]);
                } else {
                    if !literal.is_empty() {
                        tokens.push(Token::Literal(std::mem::take(&mut literal)));
                    }
                    let content = &template[pos + 1..close];
                    let raw = &template[pos..=close];
                    tokens.push(Token::Placeholder(classify(content, raw, pos)?));
                }
                pos = close + 1;
            }
            b'}' => {
                if bytes.get(pos + 1) == Some(&b'}') {
                    literal.push('}');
                    pos += 2;
                } else {
                    return Err(Error::unmatched_brace(pos));
                }
            }
            _ => {
                // Braces and backslashes are ASCII, so byte stepping is safe;
                // multi-byte characters are copied through in one slice below.
                let start = pos;
                while pos < bytes.len() && bytes[pos] != b'{' && bytes[pos] != b'}' {
                    pos += 1;
                }
                literal.push_str(&template[start..pos]);
            }
        }
    }

    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }
    Ok(tokens)
}

/// Finds the `}` closing the group opened at `open`.
///
/// Groups are innermost and non-nested: a second `{` before the close is an
/// unmatched brace, as is running off the end of the template.
fn find_close(template: &str, open: usize) -> Result<usize> {
    let bytes = template.as_bytes();
    let mut pos = open + 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'}' => return Ok(pos),
            b'{' => return Err(Error::unmatched_brace(open)),
            _ => pos += 1,
        }
    }
    Err(Error::unmatched_brace(open))
}

/// Counts consecutive backslashes immediately before `pos`.
fn backslash_run(bytes: &[u8], pos: usize) -> usize {
    let mut count = 0;
    while count < pos && bytes[pos - 1 - count] == b'\\' {
        count += 1;
    }
    count
}

fn classify(content: &str, raw: &str, offset: usize) -> Result<Placeholder> {
    let trimmed = content.trim_matches(|c: char| c.is_ascii_whitespace());

    if trimmed.is_empty() {
        return Ok(Placeholder {
            offset,
            raw: raw.to_string(),
            kind: PlaceholderKind::Empty,
            index: None,
            spec: None,
        });
    }

    if let Some(spec) = trimmed.strip_prefix(':') {
        return Ok(Placeholder {
            offset,
            raw: raw.to_string(),
            kind: PlaceholderKind::FormatOnly,
            index: None,
            spec: Some(spec.to_string()),
        });
    }

    let (negative, digits) = if let Some(rest) = trimmed.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = trimmed.strip_prefix('+') {
        (false, rest)
    } else {
        (false, trimmed)
    };

    if digits.starts_with(|c: char| c.is_ascii_digit()) {
        let run: String = digits.chars().take_while(|c| c.is_ascii_digit()).collect();
        // Anything after the digit run ({N:spec} and friends) is ignored;
        // the placeholder behaves like a bare {N}.
        let mut index = run.parse::<u64>().unwrap_or(u64::MAX);
        if negative {
            index = index.wrapping_neg();
        }
        return Ok(Placeholder {
            offset,
            raw: raw.to_string(),
            kind: PlaceholderKind::Indexed,
            index: Some(index),
            spec: None,
        });
    }

    Err(Error::named_argument(offset, trimmed))
}
