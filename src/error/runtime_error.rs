use thiserror::Error;

/// Represents all errors that can occur during evaluation.
///
/// None of these are raised under the permissive policy, which degrades to the
/// empty value instead; see `Policy`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuntimeError {
    /// An operator is missing one of its operands.
    #[error("Error on line {line}: Operator '{operator}' is missing an operand.")]
    MalformedExpression {
        /// The operator whose operand is missing.
        operator: String,
        /// The source line of the operator.
        line:     usize,
    },
    /// A variable was read before it was assigned.
    #[error("Error on line {line}: Unknown variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line of the read.
        line: usize,
    },
    /// A subtraction operand has superfluous leading zeros (or no digits), so
    /// ordering it against the other operand would be meaningless.
    #[error("Error on line {line}: Operand '{value}' is not in canonical form.")]
    NonCanonicalOperand {
        /// The rendered operand.
        value: String,
        /// The source line of the `-`.
        line:  usize,
    },
    /// A number literal contains something other than decimal digits.
    #[error("Error on line {line}: Invalid digit literal '{literal}'.")]
    InvalidDigitLiteral {
        /// The offending literal.
        literal: String,
        /// The source line of the literal.
        line:    usize,
    },
    /// The left side of `=` is not a variable.
    #[error("Error on line {line}: Cannot assign to '{target}'.")]
    InvalidAssignmentTarget {
        /// The rendered left-hand side.
        target: String,
        /// The source line of the `=`.
        line:   usize,
    },
}
