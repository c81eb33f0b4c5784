//! The call number data model
//!
//! A [`CallNumber`] is the immutable result of parsing (or building) one
//! Library of Congress call number:
//!
//! ```text
//! PR192.4.B3.N4
//! ^^              class letters
//!   ^^^           class number
//!       ^         class fraction (read as .4)
//!         ^^ ^^   cutters (B .3, N .4)
//! ```
//!
//! Digit strings are kept exactly as written. The class number is compared
//! as an integer, while the fraction and every cutter decimal are compared
//! as base-10 fractions (see [`crate::lcc::ordering`]).
//!
//! Equality is textual: two values are `==` only when their original text is
//! identical. Shelf order is semantic, so `A4.B2` and `A4.B20` tie on the
//! shelf without being equal. For that reason `CallNumber` deliberately does
//! not implement `Ord`; use [`crate::lcc::ordering::compare`] or
//! [`crate::lcc::ordering::ShelfKey`].

use crate::lcc::formats::{render, DisplayMode};
use crate::lcc::ordering;
use crate::lcc::parsing::{self, ParseError};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Letters a class may start with. O clashes with another naming standard;
/// I, W, X and Y are unused.
pub const CLASS_START_LETTERS: &str = "ABCDEFGHJKLMNPQRSTUVZ";

/// Longest class letter group.
pub const MAX_CLASS_LETTERS: usize = 3;

/// One cutter: a letter followed by digits read as a decimal fraction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Cutter {
    letter: char,
    decimal: String,
}

impl Cutter {
    pub(crate) fn new(letter: char, decimal: String) -> Self {
        Cutter { letter, decimal }
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    /// The digits after the letter, e.g. `"235"` for `B235` (read as .235).
    pub fn decimal(&self) -> &str {
        &self.decimal
    }
}

impl fmt::Display for Cutter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.decimal)
    }
}

/// A parsed Library of Congress call number.
#[derive(Debug, Clone, Serialize)]
pub struct CallNumber {
    #[serde(rename = "text")]
    original_text: String,
    class_letters: String,
    class_number: String,
    class_fraction: Option<String>,
    cutters: Vec<Cutter>,
}

impl CallNumber {
    /// Parse a call number from its separated text form.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        parsing::parse(text)
    }

    /// Start building a call number from its parts.
    ///
    /// The built value's original text is its separated rendering.
    pub fn builder(
        class_letters: impl Into<String>,
        class_number: impl Into<String>,
    ) -> CallNumberBuilder {
        CallNumberBuilder {
            class_letters: class_letters.into(),
            class_number: class_number.into(),
            class_fraction: None,
            cutters: Vec::new(),
        }
    }

    pub(crate) fn from_parts(
        original_text: String,
        class_letters: String,
        class_number: String,
        class_fraction: Option<String>,
        cutters: Vec<Cutter>,
    ) -> Self {
        CallNumber {
            original_text,
            class_letters,
            class_number,
            class_fraction,
            cutters,
        }
    }

    pub fn class_letters(&self) -> &str {
        &self.class_letters
    }

    /// Digits of the class number as written (compared as an integer).
    pub fn class_number(&self) -> &str {
        &self.class_number
    }

    /// Digits of the class fraction, if any (`"36"` means .36).
    pub fn class_fraction(&self) -> Option<&str> {
        self.class_fraction.as_deref()
    }

    pub fn cutters(&self) -> &[Cutter] {
        &self.cutters
    }

    /// The exact text this value was parsed from.
    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    /// Render in the given display mode.
    pub fn render(&self, mode: DisplayMode) -> String {
        render(self, mode)
    }

    /// Shelf order of `self` relative to `other`.
    pub fn shelf_cmp(&self, other: &CallNumber) -> Ordering {
        ordering::compare(self, other)
    }
}

impl PartialEq for CallNumber {
    fn eq(&self, other: &Self) -> bool {
        self.original_text == other.original_text
    }
}

impl Eq for CallNumber {}

impl Hash for CallNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.original_text.hash(state);
    }
}

impl fmt::Display for CallNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original_text)
    }
}

impl FromStr for CallNumber {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parsing::parse(s)
    }
}

/// Builds a [`CallNumber`] from parts, applying the same checks as the parser.
#[derive(Debug, Clone)]
pub struct CallNumberBuilder {
    class_letters: String,
    class_number: String,
    class_fraction: Option<String>,
    cutters: Vec<(char, String)>,
}

impl CallNumberBuilder {
    pub fn fraction(mut self, digits: impl Into<String>) -> Self {
        self.class_fraction = Some(digits.into());
        self
    }

    /// Append a cutter after any already added.
    pub fn cutter(mut self, letter: char, decimal: impl Into<String>) -> Self {
        self.cutters.push((letter, decimal.into()));
        self
    }

    pub fn build(self) -> Result<CallNumber, ParseError> {
        if !is_class_letters(&self.class_letters) {
            return Err(ParseError::InvalidClassLetters);
        }
        if self.class_number.is_empty() {
            return Err(ParseError::MissingClassNumber);
        }
        if !is_digits(&self.class_number) {
            return Err(ParseError::InvalidClassNumber);
        }
        match self.class_fraction.as_deref() {
            Some("") => return Err(ParseError::EmptyFraction),
            Some(digits) if !is_digits(digits) => return Err(ParseError::InvalidFraction),
            _ => {}
        }

        let cutters = self
            .cutters
            .into_iter()
            .enumerate()
            .map(|(index, (letter, decimal))| {
                if !letter.is_ascii_uppercase() {
                    Err(ParseError::InvalidCutter(index))
                } else if decimal.is_empty() {
                    Err(ParseError::EmptyCutterDecimal(index))
                } else if !is_digits(&decimal) {
                    Err(ParseError::InvalidCutter(index))
                } else {
                    Ok(Cutter::new(letter, decimal))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut value = CallNumber::from_parts(
            String::new(),
            self.class_letters,
            self.class_number,
            self.class_fraction,
            cutters,
        );
        value.original_text = render(&value, DisplayMode::Separated);
        Ok(value)
    }
}

/// 1-3 uppercase ASCII letters, the first one a valid class start letter.
pub(crate) fn is_class_letters(letters: &str) -> bool {
    let mut chars = letters.chars();
    match chars.next() {
        Some(first) if CLASS_START_LETTERS.contains(first) => {
            letters.len() <= MAX_CLASS_LETTERS && chars.all(|c| c.is_ascii_uppercase())
        }
        _ => false,
    }
}

/// Non-empty and ASCII digits only.
pub(crate) fn is_digits(digits: &str) -> bool {
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
