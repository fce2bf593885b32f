use thiserror::Error;

/// Parsing errors.
///
/// Defines all error types that can occur during lexing of source code and
/// while shaping its tokens into an expression tree.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation under the
/// strict policy: missing operands, unknown variables, non-canonical operands,
/// invalid literals and invalid assignment targets.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced while running a program.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The program could not be lexed or shaped into a tree.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The program failed during evaluation.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
