//! Tokenizer for call number text
//!
//! Call numbers are tokenized with logos into runs of uppercase letters,
//! runs of digits, and periods. Anything else (whitespace, lowercase,
//! punctuation) becomes a [`Token::Stray`] run so tokenization itself never
//! fails; the parser decides which shapes are errors.

use logos::Logos;

/// All tokens that can appear in call number text
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    // Segment separator
    #[token(".")]
    Period,

    #[regex(r"[A-Z]+", |lex| lex.slice().to_string())]
    Letters(String),

    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Digits(String),

    // Catch-all for characters outside the grammar
    #[regex(r"[^A-Z0-9.]+", |lex| lex.slice().to_string())]
    Stray(String),
}

impl Token {
    pub fn is_period(&self) -> bool {
        matches!(self, Token::Period)
    }

    pub fn is_digits(&self) -> bool {
        matches!(self, Token::Digits(_))
    }
}

/// Tokenize a string. Input the lexer cannot match is kept as [`Token::Stray`].
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push(result.unwrap_or_else(|_| Token::Stray(lexer.slice().to_string())));
    }

    tokens
}

/// Split a token stream into period-separated segments.
///
/// Always returns at least one segment; empty segments are kept so that
/// `"A4."` yields two segments, the second one empty.
pub fn segments(tokens: Vec<Token>) -> Vec<Vec<Token>> {
    let mut segments = vec![Vec::new()];
    for token in tokens {
        if token.is_period() {
            segments.push(Vec::new());
        } else if let Some(current) = segments.last_mut() {
            current.push(token);
        }
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_call_number() {
        assert_eq!(
            tokenize("PR192.4.B3"),
            vec![
                Token::Letters("PR".to_string()),
                Token::Digits("192".to_string()),
                Token::Period,
                Token::Digits("4".to_string()),
                Token::Period,
                Token::Letters("B".to_string()),
                Token::Digits("3".to_string()),
            ]
        );
    }

    #[test]
    fn test_period_runs() {
        assert_eq!(
            tokenize("A4..B"),
            vec![
                Token::Letters("A".to_string()),
                Token::Digits("4".to_string()),
                Token::Period,
                Token::Period,
                Token::Letters("B".to_string()),
            ]
        );
    }

    #[test]
    fn test_stray_runs() {
        assert_eq!(
            tokenize(" a4-"),
            vec![
                Token::Stray(" a".to_string()),
                Token::Digits("4".to_string()),
                Token::Stray("-".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_source() {
        assert!(tokenize("").is_empty());
        assert_eq!(segments(tokenize("")), vec![Vec::<Token>::new()]);
    }

    #[test]
    fn test_segments_keep_empty_parts() {
        let parts = segments(tokenize("A4..B2."));
        assert_eq!(parts.len(), 4);
        assert_eq!(
            parts[0],
            vec![Token::Letters("A".to_string()), Token::Digits("4".to_string())]
        );
        assert!(parts[1].is_empty());
        assert_eq!(
            parts[2],
            vec![Token::Letters("B".to_string()), Token::Digits("2".to_string())]
        );
        assert!(parts[3].is_empty());
    }
}
