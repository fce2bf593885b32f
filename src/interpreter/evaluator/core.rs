use crate::{
    ast::{BinaryOperator, Expr},
    config::Policy,
    error::RuntimeError,
    interpreter::{evaluator::variables::VariableTable, value::big_int::BigInt},
    util::stack::ensure_sufficient_stack,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Walks expression trees and computes their values.
///
/// The evaluator itself holds only its [`Policy`]. The variable table is
/// owned by the caller and passed to every call, so one table can be threaded
/// through several trees.
///
/// ## Usage
///
/// ```
/// use digitwise::{
///     Policy,
///     interpreter::{
///         evaluator::{core::Evaluator, variables::VariableTable},
///         lexer::tokenize,
///         parser::core::parse_program,
///     },
/// };
///
/// let tokens = tokenize("x = 3 + 4 ; x - 2 ;").unwrap();
/// let tree = parse_program(&tokens, Policy::Permissive).unwrap();
///
/// let mut variables = VariableTable::new();
/// let value = Evaluator::new(Policy::Permissive).eval(&tree, &mut variables).unwrap();
///
/// assert_eq!(value.to_string(), "5");
/// assert_eq!(variables.get("x").unwrap().to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    policy: Policy,
}

impl Evaluator {
    /// Creates an evaluator applying `policy`.
    #[must_use]
    pub const fn new(policy: Policy) -> Self {
        Self { policy }
    }

    /// The policy this evaluator applies.
    #[must_use]
    pub const fn policy(&self) -> Policy {
        self.policy
    }

    /// Evaluates `expr` and returns its value.
    ///
    /// Left operands are evaluated before right operands. Assignments update
    /// `variables`; a `;` node evaluates everything before it for effect and
    /// returns the value of the statement after it.
    ///
    /// A tree that is just [`Expr::Missing`] (an empty program) evaluates to
    /// the empty value.
    ///
    /// # Errors
    /// Never fails under [`Policy::Permissive`]. Under [`Policy::Strict`]:
    /// - `MalformedExpression` for an operator with a missing operand.
    /// - `UndefinedVariable` for a read before any assignment.
    /// - `InvalidDigitLiteral` for a number that is not all digits.
    /// - `NonCanonicalOperand` for a `-` operand with leading zeros.
    /// - `InvalidAssignmentTarget` when the left of `=` is not a variable.
    pub fn eval(&self, expr: &Expr, variables: &mut VariableTable) -> EvalResult<BigInt> {
        ensure_sufficient_stack(|| match expr {
            Expr::Missing => Ok(BigInt::empty()),
            Expr::Number { lexeme, line } => self.eval_number(lexeme, *line),
            Expr::Variable { name, line } => self.eval_variable(name, *line, variables),
            Expr::Binary { op, left, right, line } => {
                self.eval_binary(*op, left, right, *line, variables)
            },
        })
    }

    fn eval_number(&self, lexeme: &str, line: usize) -> EvalResult<BigInt> {
        if self.policy.is_strict() {
            return lexeme.parse().map_err(|_| {
                RuntimeError::InvalidDigitLiteral { literal: lexeme.to_string(),
                                                    line }
            });
        }
        Ok(BigInt::from_digits(lexeme))
    }

    fn eval_variable(&self,
                     name: &str,
                     line: usize,
                     variables: &mut VariableTable)
                     -> EvalResult<BigInt> {
        if self.policy.is_strict() {
            return variables.get(name)
                            .cloned()
                            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                                             line });
        }

        if !variables.contains(name) {
            tracing::warn!(variable = name,
                           line,
                           "reading unassigned variable, defining it as empty");
        }
        Ok(variables.get_or_define(name).clone())
    }

    /// Evaluates an operand of `op` (found on `line`), applying the policy
    /// when it is missing.
    pub(in crate::interpreter::evaluator) fn eval_operand(&self,
                                                          op: BinaryOperator,
                                                          line: usize,
                                                          operand: &Expr,
                                                          variables: &mut VariableTable)
                                                          -> EvalResult<BigInt> {
        if operand.is_missing() {
            if self.policy.is_strict() {
                return Err(RuntimeError::MalformedExpression { operator: op.to_string(),
                                                               line });
            }
            tracing::warn!(operator = %op, line, "operand missing, using the empty value");
            return Ok(BigInt::empty());
        }
        self.eval(operand, variables)
    }
}
