//! # digitwise
//!
//! digitwise evaluates programs in a tiny scripting language over
//! non-negative integers of unbounded size. A program is a sequence of
//! statements, each ended by `;`, that either assign an expression to a
//! variable (`x = 12 + y;`) or are a bare expression. Expressions combine
//! number literals and variables with `+`, `-` (absolute difference) and
//! parentheses.
//!
//! Evaluation runs in four stages: the source is lexed into tokens, the tokens
//! are reordered into postfix form, the postfix stack is folded into a binary
//! expression tree, and the tree is evaluated against a variable table.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{
        evaluator::{core::Evaluator, variables::VariableTable},
        lexer::tokenize,
        parser::core::parse_program,
        value::big_int::BigInt,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` tree and the `BinaryOperator` enum. The
/// tree is built by the parser from postfix tokens and walked by the
/// evaluator.
///
/// # Responsibilities
/// - Defines leaves, operator nodes and the marker for missing operands.
/// - Renders trees for diagnostics.
pub mod ast;
/// Command-line front end.
///
/// Parses the `digitwise` arguments and writes a run's value, variables or
/// error, returning the process exit status. The binary is a thin wrapper
/// around [`cli::execute`].
pub mod cli;
/// Evaluation settings.
///
/// Defines the `Policy` that decides whether malformed input degrades
/// silently or is reported as an error.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing, or
/// evaluating code, and the crate-level `Error` wrapping them.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers or the offending text for context.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and the value type.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and values.
/// - Provides the building blocks used by [`run`].
pub mod interpreter;
/// General utilities.
///
/// # Responsibilities
/// - Keep deep recursion from overflowing the stack.
pub mod util;

pub use config::Policy;

/// What a program run produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// The value of the last statement.
    pub value:     BigInt,
    /// Every variable bound while the program ran.
    pub variables: VariableTable,
}

/// Runs a whole program and returns its final value and variable table.
///
/// # Errors
/// Returns `Error::Parse` if the source contains characters outside the
/// language. Under [`Policy::Strict`] also returns `Error::Parse` for an
/// unterminated program or leftover tokens, and `Error::Runtime` for any
/// evaluation error.
///
/// # Examples
/// ```
/// use digitwise::{Policy, run};
///
/// let outcome = run("x = 3 + 4 ; x - 2 ;", Policy::Permissive).unwrap();
/// assert_eq!(outcome.value.to_string(), "5");
/// assert_eq!(outcome.variables.get("x").unwrap().to_string(), "7");
///
/// // Parentheses change the grouping.
/// assert_eq!(run("(1 + 2) - 3;", Policy::Strict).unwrap().value.to_string(), "0");
/// assert_eq!(run("1 + (2 - 3);", Policy::Strict).unwrap().value.to_string(), "2");
/// ```
#[tracing::instrument(level = "debug", skip(source), fields(len = source.len()))]
pub fn run(source: &str, policy: Policy) -> Result<Outcome, Error> {
    let tokens = tokenize(source)?;
    tracing::debug!(count = tokens.len(), "lexed");

    let tree = parse_program(&tokens, policy)?;

    let mut variables = VariableTable::new();
    let value = Evaluator::new(policy).eval(&tree, &mut variables)?;
    tracing::debug!(%value, variables = variables.len(), "evaluated");

    Ok(Outcome { value, variables })
}

/// Runs a program with the permissive policy, optionally printing its final
/// value.
///
/// # Errors
/// Returns an error if the source contains characters outside the language.
///
/// # Examples
/// ```
/// use digitwise::get_result;
///
/// assert!(get_result("total = 99999999999999999999 + 1;", false).is_ok());
///
/// // `*` is not part of the language.
/// assert!(get_result("2 * 3;", false).is_err());
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<(), Error> {
    let outcome = run(source, Policy::Permissive)?;

    if auto_print {
        println!("{}", outcome.value);
    }

    Ok(())
}
