use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::lexer::Token,
    util::stack::ensure_sufficient_stack,
};

/// Builds an expression tree by consuming a postfix token stack from the top.
///
/// An operand becomes a leaf. An operator becomes a node whose **right**
/// child is built first and whose left child is built second, both from the
/// same stack, which restores the original left-to-right operand order.
///
/// An empty stack yields [`Expr::Missing`], and so does a token that cannot
/// head a node (a `(` flushed by an unbalanced statement). Malformed input
/// therefore produces `Missing` children rather than an error. For a
/// well-formed program one call drains the whole stack.
///
/// Every node takes the line of the token it was built from.
///
/// # Example
/// ```
/// use digitwise::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::Token, parser::tree::build_tree},
/// };
///
/// let mut postfix = vec![(Token::Number("3".into()), 1),
///                        (Token::Number("4".into()), 2),
///                        (Token::Plus, 1)];
/// let tree = build_tree(&mut postfix);
///
/// assert_eq!(tree,
///            Expr::binary(BinaryOperator::Add, Expr::number("3", 1), Expr::number("4", 2), 1));
/// assert!(postfix.is_empty());
/// ```
pub fn build_tree(postfix: &mut Vec<(Token, usize)>) -> Expr {
    ensure_sufficient_stack(|| {
        let Some((token, line)) = postfix.pop() else {
            return Expr::Missing;
        };

        match token {
            Token::Number(lexeme) => Expr::number(lexeme, line),
            Token::Variable(name) => Expr::variable(name, line),
            other => match BinaryOperator::from_token(&other) {
                Some(op) => {
                    let right = build_tree(postfix);
                    let left = build_tree(postfix);
                    Expr::binary(op, left, right, line)
                },
                None => {
                    tracing::trace!(token = %other, line, "token cannot head a node");
                    Expr::Missing
                },
            },
        }
    })
}
