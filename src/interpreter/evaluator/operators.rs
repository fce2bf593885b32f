use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            variables::VariableTable,
        },
        value::big_int::BigInt,
    },
};

impl Evaluator {
    /// Evaluates an operator node.
    ///
    /// - `+` adds the operands.
    /// - `-` takes their absolute difference.
    /// - `=` evaluates the right side and binds it to the variable on the
    ///   left.
    /// - `;` evaluates the left side for effect and returns the right side.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Source line of the operator, for error reporting.
    /// - `variables`: The table read by variables and written by `=`.
    pub(in crate::interpreter::evaluator) fn eval_binary(&self,
                                                         op: BinaryOperator,
                                                         left: &Expr,
                                                         right: &Expr,
                                                         line: usize,
                                                         variables: &mut VariableTable)
                                                         -> EvalResult<BigInt> {
        tracing::trace!(operator = %op, line, "evaluating operator");

        match op {
            BinaryOperator::Add => {
                let lhs = self.eval_operand(op, line, left, variables)?;
                let rhs = self.eval_operand(op, line, right, variables)?;
                Ok(&lhs + &rhs)
            },
            BinaryOperator::Sub => {
                let lhs = self.eval_operand(op, line, left, variables)?;
                let rhs = self.eval_operand(op, line, right, variables)?;
                if self.policy().is_strict() {
                    require_canonical(&lhs, line)?;
                    require_canonical(&rhs, line)?;
                }
                Ok(lhs.abs_diff(&rhs))
            },
            BinaryOperator::Assign => self.eval_assign(left, right, line, variables),
            BinaryOperator::Sequence => {
                // The first statement's `;` has nothing before it.
                if !left.is_missing() {
                    self.eval(left, variables)?;
                }
                self.eval_operand(op, line, right, variables)
            },
        }
    }

    fn eval_assign(&self,
                   target: &Expr,
                   value: &Expr,
                   line: usize,
                   variables: &mut VariableTable)
                   -> EvalResult<BigInt> {
        let op = BinaryOperator::Assign;

        if let Expr::Variable { name, .. } = target {
            let value = self.eval_operand(op, line, value, variables)?;
            tracing::debug!(variable = %name, %value, "assigning");
            variables.assign(name, value.clone());
            return Ok(value);
        }

        if self.policy().is_strict() {
            return Err(if target.is_missing() {
                           RuntimeError::MalformedExpression { operator: op.to_string(),
                                                               line }
                       } else {
                           RuntimeError::InvalidAssignmentTarget { target: target.to_string(),
                                                                   line }
                       });
        }

        tracing::warn!(lhs = %target, line, "left of '=' is not a variable, value is not stored");
        self.eval_operand(op, line, value, variables)
    }
}

fn require_canonical(value: &BigInt, line: usize) -> EvalResult<()> {
    if value.is_canonical() {
        Ok(())
    } else {
        Err(RuntimeError::NonCanonicalOperand { value: value.to_string(),
                                                line })
    }
}
