use std::fmt;

use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Only the first eight variants ever reach the transformer; the rest are
/// consumed by the lexer itself.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Non-negative integer literal tokens, such as `42` or
    /// `123456789012345678901234567890`. The digits are kept as text.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Number(String),
    /// Identifier tokens; variable names such as `x` or `total_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Variable(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `=`
    #[token("=")]
    Equal,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks; skipped after bumping the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns `true` for `+` and `-`.
    #[must_use]
    pub const fn is_additive(&self) -> bool {
        matches!(self, Self::Plus | Self::Minus)
    }

    /// Returns `true` for number literals and variables.
    #[must_use]
    pub const fn is_operand(&self) -> bool {
        matches!(self, Self::Number(_) | Self::Variable(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(lexeme) | Self::Variable(lexeme) => f.write_str(lexeme),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Equal => f.write_str("="),
            Self::LeftParen => f.write_str("("),
            Self::RightParen => f.write_str(")"),
            Self::Semicolon => f.write_str(";"),
            Self::Comment | Self::NewLine | Self::Ignored => Ok(()),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Splits `source` into tokens, each paired with the line it starts on.
///
/// Lines are counted from 1.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` for the first character sequence that
/// does not form a token.
///
/// # Example
/// ```
/// use digitwise::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x = 12 +\n y;").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|(token, _)| token.clone()).collect();
/// assert_eq!(kinds,
///            vec![Token::Variable("x".into()),
///                 Token::Equal,
///                 Token::Number("12".into()),
///                 Token::Plus,
///                 Token::Variable("y".into()),
///                 Token::Semicolon]);
/// assert_eq!(tokens[4].1, 2);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                     line:  lexer.extras.line, });
        }
    }

    Ok(tokens)
}
