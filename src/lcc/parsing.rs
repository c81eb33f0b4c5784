//! Call number parser
//!
//! Parsing works on period-separated segments of the token stream:
//!
//! 1. Segment 0 is the class: letters fused to digits (`PR192`).
//! 2. Segment 1, when it starts with a digit, is the class fraction (`.4`).
//! 3. Every remaining segment is a cutter: one letter then digits (`.B3`).
//!
//! The source text is kept verbatim as the value's original text. No
//! trimming is done, so surrounding whitespace is a parse error.

use crate::lcc::call_number::{is_class_letters, CallNumber, Cutter};
use crate::lcc::lexing::{segments, tokenize, Token};
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that can occur while parsing a call number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("class number is missing: no digits in the class segment")]
    MissingClassNumber,
    #[error("invalid class letters: expected 1-3 uppercase letters starting with one of ABCDEFGHJKLMNPQRSTUVZ")]
    InvalidClassLetters,
    #[error("invalid class number: only digits may follow the class letters")]
    InvalidClassNumber,
    #[error("empty class fraction")]
    EmptyFraction,
    #[error("invalid class fraction: expected digits only")]
    InvalidFraction,
    #[error("invalid cutter at position {0}: expected a letter followed by digits")]
    InvalidCutter(usize),
    #[error("cutter at position {0} has no digits")]
    EmptyCutterDecimal(usize),
}

/// Parse a call number from its separated text form.
pub fn parse(text: &str) -> Result<CallNumber, ParseError> {
    trace!(text, "parsing call number");
    parse_segments(text).inspect_err(|error| debug!(text, %error, "rejected call number"))
}

fn parse_segments(text: &str) -> Result<CallNumber, ParseError> {
    let mut parts = segments(tokenize(text)).into_iter().peekable();

    let class = parts.next().unwrap_or_default();
    let (class_letters, class_number) = parse_class(&class)?;

    let class_fraction = match parts.peek().map(Vec::as_slice) {
        Some([]) => return Err(ParseError::EmptyFraction),
        Some([Token::Digits(digits)]) => {
            let digits = digits.clone();
            parts.next();
            Some(digits)
        }
        Some([Token::Digits(_), ..]) => return Err(ParseError::InvalidFraction),
        _ => None,
    };

    let cutters = parts
        .enumerate()
        .map(|(index, segment)| parse_cutter(index, &segment))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CallNumber::from_parts(
        text.to_string(),
        class_letters,
        class_number,
        class_fraction,
        cutters,
    ))
}

/// Split the class segment at its first digit run.
fn parse_class(segment: &[Token]) -> Result<(String, String), ParseError> {
    let first_digits = segment
        .iter()
        .position(Token::is_digits)
        .ok_or(ParseError::MissingClassNumber)?;

    let letters = match &segment[..first_digits] {
        [Token::Letters(letters)] if is_class_letters(letters) => letters.clone(),
        _ => return Err(ParseError::InvalidClassLetters),
    };

    match &segment[first_digits..] {
        [Token::Digits(digits)] => Ok((letters, digits.clone())),
        _ => Err(ParseError::InvalidClassNumber),
    }
}

fn parse_cutter(index: usize, segment: &[Token]) -> Result<Cutter, ParseError> {
    match segment {
        [Token::Letters(letters), Token::Digits(digits)] => single_letter(letters)
            .map(|letter| Cutter::new(letter, digits.clone()))
            .ok_or(ParseError::InvalidCutter(index)),
        [Token::Letters(letters)] if single_letter(letters).is_some() => {
            Err(ParseError::EmptyCutterDecimal(index))
        }
        _ => Err(ParseError::InvalidCutter(index)),
    }
}

fn single_letter(letters: &str) -> Option<char> {
    let mut chars = letters.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => Some(letter),
        _ => None,
    }
}
