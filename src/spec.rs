//! Format-spec decoding.
//!
//! A spec is the portion of a placeholder after the colon, e.g. the `08x` in
//! `{:08x}`. The grammar is, in strict order:
//!
//! ```text
//! [fill][align][width]['.'precision][type]
//! ```
//!
//! - **fill**: any single character; `'0'` is the zero-pad shorthand
//! - **align**: `<` left, `^` center, `>` right (default right)
//! - **width**: minimum field width in characters, `0` means none
//! - **precision**: digits after `.`; unset means the default of 6 for
//!   fixed/scientific float output
//! - **type**: `d x X o f e g b B`, detected as the single trailing
//!   character; absent means natural string conversion
//!
//! Decoding is lenient: characters that fit nowhere in the grammar are
//! ignored, the way the reference engines behaved.
//!
//! ## Examples
//!
//! ```rust
//! use bracefmt::{Align, FormatSpec, TypeChar};
//!
//! let spec = FormatSpec::parse("08x");
//! assert_eq!(spec.fill, '0');
//! assert_eq!(spec.width, 8);
//! assert_eq!(spec.type_char, Some(TypeChar::HexLower));
//! assert_eq!(spec.align, Align::Right);
//! ```

/// Field alignment within the padded width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Align {
    Left,
    Center,
    #[default]
    Right,
}

/// The trailing type character of a spec.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeChar {
    /// `d`: decimal integer.
    Decimal,
    /// `x`: lowercase hex, unsigned.
    HexLower,
    /// `X`: uppercase hex, unsigned.
    HexUpper,
    /// `o`: octal, unsigned.
    Octal,
    /// `f`: fixed-point float.
    Fixed,
    /// `e`: scientific float.
    Scientific,
    /// `g`: general (shortest) float.
    General,
    /// `b`/`B`: fixed-width bit string.
    Binary,
}

impl TypeChar {
    /// Maps a spec character to its type, if it is one.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'd' => Some(TypeChar::Decimal),
            'x' => Some(TypeChar::HexLower),
            'X' => Some(TypeChar::HexUpper),
            'o' => Some(TypeChar::Octal),
            'f' => Some(TypeChar::Fixed),
            'e' => Some(TypeChar::Scientific),
            'g' => Some(TypeChar::General),
            'b' | 'B' => Some(TypeChar::Binary),
            _ => None,
        }
    }

    /// Returns the canonical spec character for diagnostics.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            TypeChar::Decimal => 'd',
            TypeChar::HexLower => 'x',
            TypeChar::HexUpper => 'X',
            TypeChar::Octal => 'o',
            TypeChar::Fixed => 'f',
            TypeChar::Scientific => 'e',
            TypeChar::General => 'g',
            TypeChar::Binary => 'b',
        }
    }

    /// Returns `true` for integer-only types (`d x X o b B`).
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(
            self,
            TypeChar::Decimal
                | TypeChar::HexLower
                | TypeChar::HexUpper
                | TypeChar::Octal
                | TypeChar::Binary
        )
    }

    /// Returns `true` for float-only types (`f e g`).
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(
            self,
            TypeChar::Fixed | TypeChar::Scientific | TypeChar::General
        )
    }
}

/// A decoded format spec.
///
/// Every field has the documented default, so `FormatSpec::default()` is the
/// spec of a bare `{}` placeholder. Specs are decoded fresh per placeholder;
/// no state carries over between placeholders within a call.
#[derive(Clone, Debug, PartialEq)]
pub struct FormatSpec {
    pub fill: char,
    pub align: Align,
    pub width: usize,
    pub precision: Option<usize>,
    pub type_char: Option<TypeChar>,
}

impl Default for FormatSpec {
    fn default() -> Self {
        FormatSpec {
            fill: ' ',
            align: Align::Right,
            width: 0,
            precision: None,
            type_char: None,
        }
    }
}

impl FormatSpec {
    /// Decodes a raw spec string.
    ///
    /// The type character is detected first, from the end, so that a
    /// one-character spec like `d` is a type rather than a fill character.
    /// The `'0'` fill is special-cased to keep the `{:08x}` zero-pad
    /// shorthand working even though `0` is also a width digit; a zero fill
    /// without an explicit alignment stays right-aligned so zero padding
    /// lands in front of the digits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bracefmt::{Align, FormatSpec};
    ///
    /// let spec = FormatSpec::parse("*^12");
    /// assert_eq!(spec.fill, '*');
    /// assert_eq!(spec.align, Align::Center);
    /// assert_eq!(spec.width, 12);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut spec = FormatSpec::default();

        let body = match raw.chars().last().and_then(TypeChar::from_char) {
            Some(ty) => {
                spec.type_char = Some(ty);
                // Type characters are ASCII, one byte.
                &raw[..raw.len() - 1]
            }
            None => raw,
        };

        let mut rest = body;

        if let Some(c) = rest.chars().next() {
            let is_reserved = matches!(c, '<' | '^' | '>' | '.');
            if c == '0' || (!is_reserved && !c.is_ascii_digit()) {
                spec.fill = c;
                rest = &rest[c.len_utf8()..];
            }
        }

        if let Some(c) = rest.chars().next() {
            let align = match c {
                '<' => Some(Align::Left),
                '^' => Some(Align::Center),
                '>' => Some(Align::Right),
                _ => None,
            };
            if let Some(align) = align {
                spec.align = align;
                rest = &rest[1..];
            }
        }

        let digits = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if digits > 0 {
            spec.width = rest[..digits].parse().unwrap_or(0);
            rest = &rest[digits..];
        }

        if let Some(after) = rest.strip_prefix('.') {
            let digits = after
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(after.len());
            spec.precision = Some(after[..digits].parse().unwrap_or(0));
        }

        spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_spec_is_default() {
        assert_eq!(FormatSpec::parse(""), FormatSpec::default());
    }

    #[test]
    fn test_zero_pad_shorthand() {
        let spec = FormatSpec::parse("08x");
        assert_eq!(spec.fill, '0');
        assert_eq!(spec.align, Align::Right);
        assert_eq!(spec.width, 8);
        assert_eq!(spec.type_char, Some(TypeChar::HexLower));
    }

    #[test]
    fn test_single_char_is_type_not_fill() {
        let spec = FormatSpec::parse("d");
        assert_eq!(spec.type_char, Some(TypeChar::Decimal));
        assert_eq!(spec.fill, ' ');
    }

    #[test]
    fn test_fill_and_align() {
        let spec = FormatSpec::parse("*^12");
        assert_eq!(spec.fill, '*');
        assert_eq!(spec.align, Align::Center);
        assert_eq!(spec.width, 12);
        assert_eq!(spec.type_char, None);
    }

    #[test]
    fn test_align_without_fill() {
        let spec = FormatSpec::parse("<10");
        assert_eq!(spec.fill, ' ');
        assert_eq!(spec.align, Align::Left);
        assert_eq!(spec.width, 10);
    }

    #[test]
    fn test_precision() {
        let spec = FormatSpec::parse(".2f");
        assert_eq!(spec.precision, Some(2));
        assert_eq!(spec.type_char, Some(TypeChar::Fixed));
        assert_eq!(spec.width, 0);
    }

    #[test]
    fn test_width_and_precision() {
        let spec = FormatSpec::parse(">8.3f");
        assert_eq!(spec.align, Align::Right);
        assert_eq!(spec.width, 8);
        assert_eq!(spec.precision, Some(3));
        assert_eq!(spec.type_char, Some(TypeChar::Fixed));
    }

    #[test]
    fn test_uppercase_binary_alias() {
        assert_eq!(
            FormatSpec::parse("B").type_char,
            FormatSpec::parse("b").type_char
        );
    }

    #[test]
    fn test_multibyte_fill() {
        let spec = FormatSpec::parse("é>4");
        assert_eq!(spec.fill, 'é');
        assert_eq!(spec.align, Align::Right);
        assert_eq!(spec.width, 4);
    }

    #[test]
    fn test_unknown_trailing_chars_ignored() {
        let spec = FormatSpec::parse("5?");
        assert_eq!(spec.width, 5);
        assert_eq!(spec.type_char, None);
    }
}
