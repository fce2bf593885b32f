use thiserror::Error;

/// Represents all errors that can occur while lexing a program or turning its
/// tokens into an expression tree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Found a character sequence that is not part of the language.
    #[error("Error on line {line}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The offending source text.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The last statement is not followed by `;`.
    #[error("Error on line {line}: Expected ';' at the end of the program.")]
    MissingTerminator {
        /// The source line of the last token.
        line: usize,
    },
    /// Tokens were left over after the expression tree was built.
    #[error("Error: {count} token(s) left over after building the expression tree: {tokens}.")]
    TrailingTokens {
        /// How many postfix tokens were not consumed.
        count:  usize,
        /// The unconsumed tokens, in postfix order.
        tokens: String,
    },
}
