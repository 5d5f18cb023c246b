//! Placeholder Mini-Language Reference
//!
//! This module documents the template syntax accepted by [`crate::format`].
//! It contains no code; it is the authoritative description of the grammar
//! this library implements.
//!
//! # Placeholders
//!
//! | Form | Name | Binding |
//! |------|------|---------|
//! | `{}` | empty | next auto-index position |
//! | `{3}` | indexed | explicit zero-based argument index |
//! | `{:spec}` | format-only | next auto-index position, rendered via `spec` |
//!
//! Inner content is trimmed of ASCII whitespace before classification, so
//! `{ 2 }` is the same as `{2}`. Content that starts with anything other
//! than a digit, a sign or a colon is a named argument, which this library
//! does not support; the call fails with
//! [`NamedArgument`](crate::Error::NamedArgument).
//!
//! ## Auto-indexing
//!
//! Empty and format-only placeholders consume argument positions left to
//! right. A position already consumed, whether by an earlier auto
//! placeholder or an earlier explicit `{N}`, is skipped:
//!
//! ```rust
//! use bracefmt::bfmt;
//!
//! let s = bfmt!("{} {0} {}", "a", "b", "c").unwrap();
//! assert_eq!(s, "a a b");
//! ```
//!
//! ## Explicit indices
//!
//! `{N}` may repeat freely, and an out-of-range `N` is not an error: the
//! placeholder text passes through verbatim, which lets one template be
//! applied against partial argument sets in stages:
//!
//! ```rust
//! use bracefmt::bfmt;
//!
//! assert_eq!(bfmt!("{5}", 1, 2).unwrap(), "{5}");
//! ```
//!
//! `{N:spec}` is accepted but the spec part is ignored; it behaves exactly
//! like `{N}`. Digit-prefixed-with-colon content was handled inconsistently
//! by the historical engines, and silently dropping the spec is the
//! resolution this library commits to.
//!
//! # Escapes
//!
//! - `{{` renders `{`, `}}` renders `}`.
//! - A `{...}` group preceded by an odd run of backslashes is left in the
//!   output untouched, backslashes included. This mirrors an older escape
//!   convention and is kept for compatibility.
//!
//! A `{` or `}` that is neither escaped nor part of a well-formed group
//! fails with [`UnmatchedBrace`](crate::Error::UnmatchedBrace).
//!
//! # Format specs
//!
//! ```text
//! spec := [fill][align][width]['.'precision][type]
//! ```
//!
//! | Part | Values | Default |
//! |------|--------|---------|
//! | fill | any char; `0` enables zero-pad shorthand | space |
//! | align | `<` left, `^` center, `>` right | right |
//! | width | decimal digits; `0` = no minimum | 0 |
//! | precision | `.` + decimal digits | 6 for `f`/`e` |
//! | type | `d x X o f e g b B` | natural conversion |
//!
//! ## Types
//!
//! | Type | Meaning | Accepts |
//! |------|---------|---------|
//! | `d` | decimal integer | integers |
//! | `x` / `X` | hex lower/upper, unsigned bit pattern | integers |
//! | `o` | octal, unsigned bit pattern | integers |
//! | `f` | fixed-point | floats |
//! | `e` | scientific | floats |
//! | `g` | general, shortest form; precision counts significant digits | floats |
//! | `b` / `B` | bit string over the low *width* bits (default 8) | integers |
//!
//! Applying an integer type to a non-integer argument, or a float type to a
//! non-float argument, fails with
//! [`TypeMismatch`](crate::Error::TypeMismatch). Without a type character the
//! argument renders through its natural conversion (integers base 10, floats
//! shortest form, booleans `true`/`false`, chars and strings verbatim) and
//! precision is ignored, though fill/align/width still apply:
//!
//! ```rust
//! use bracefmt::bfmt;
//!
//! assert_eq!(bfmt!("{:08x}", 255).unwrap(), "000000ff");
//! assert_eq!(bfmt!("{:<10}", "Bob").unwrap(), "Bob       ");
//! assert_eq!(bfmt!("{:.2f}", 3.14159).unwrap(), "3.14");
//! ```
//!
//! # Notes
//!
//! - Width counts characters, not bytes and not display cells; there is no
//!   Unicode-aware width handling.
//! - `{:b}` consumes the width as a bit count: `{:16b}` of 5 is
//!   `0000000000000101`, and high bits beyond the count are truncated.
//! - A negative explicit index such as `{-1}` parses into a huge wrapped
//!   index (the historical unsigned-parse quirk) and therefore passes
//!   through like any other out-of-range index.
