use std::{fmt, mem};

use crate::{interpreter::lexer::Token, util::stack::ensure_sufficient_stack};

/// A node of the binary expression tree built from a postfix token stream.
///
/// Leaves hold a number literal or a variable name. Every operator node owns
/// exactly two children. Where the postfix stream ran out of operands, or
/// held a token that cannot become a node, the tree holds
/// [`Expr::Missing`] instead of a child.
///
/// Leaves and operator nodes remember the source line of the token they were
/// built from, so evaluation errors can point back at it.
#[derive(Debug, PartialEq, Eq)]
pub enum Expr {
    /// A number literal, kept as written.
    Number {
        /// The digits as they appear in the source.
        lexeme: String,
        /// Line number in the source code.
        line:   usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// An operator applied to two operands.
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Line number of the operator token.
        line:  usize,
    },
    /// An absent operand.
    ///
    /// Also the left child of the `;` node that ends the first statement, since
    /// nothing precedes it.
    Missing,
}

impl Expr {
    /// Builds a number leaf.
    #[must_use]
    pub fn number(lexeme: impl Into<String>, line: usize) -> Self {
        Self::Number { lexeme: lexeme.into(),
                       line }
    }

    /// Builds a variable leaf.
    #[must_use]
    pub fn variable(name: impl Into<String>, line: usize) -> Self {
        Self::Variable { name: name.into(),
                         line }
    }

    /// Builds an operator node.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self, line: usize) -> Self {
        Self::Binary { op,
                       left: Box::new(left),
                       right: Box::new(right),
                       line }
    }

    /// Gets the source line of the node, or `None` for [`Expr::Missing`].
    /// ## Example
    /// ```
    /// use digitwise::ast::Expr;
    ///
    /// assert_eq!(Expr::variable("x", 5).line_number(), Some(5));
    /// assert_eq!(Expr::Missing.line_number(), None);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> Option<usize> {
        match self {
            Self::Number { line, .. } | Self::Variable { line, .. } | Self::Binary { line, .. } => {
                Some(*line)
            },
            Self::Missing => None,
        }
    }

    /// Returns `true` for [`Expr::Missing`].
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Moves operator children onto `pending` so they are dropped by a loop
    /// instead of by recursion.
    fn detach_children(&mut self, pending: &mut Vec<Self>) {
        if let Self::Binary { left, right, .. } = self {
            for child in [left, right] {
                if matches!(**child, Self::Binary { .. }) {
                    pending.push(mem::replace(&mut **child, Self::Missing));
                }
            }
        }
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

/// Renders the tree fully parenthesized, with `?` for missing operands.
///
/// # Example
/// ```
/// use digitwise::ast::{BinaryOperator, Expr};
///
/// let tree = Expr::binary(BinaryOperator::Sub,
///                         Expr::number("1", 1),
///                         Expr::binary(BinaryOperator::Add,
///                                      Expr::variable("x", 1),
///                                      Expr::Missing,
///                                      1),
///                         1);
/// assert_eq!(tree.to_string(), "(1 - (x + ?))");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Self::Number { lexeme, .. } => f.write_str(lexeme),
            Self::Variable { name, .. } => f.write_str(name),
            Self::Binary { op: BinaryOperator::Sequence,
                           left,
                           right,
                           .. } => {
                if !left.is_missing() {
                    write!(f, "{left} ")?;
                }
                write!(f, "{right};")
            },
            Self::Binary { op, left, right, .. } => write!(f, "({left} {op} {right})"),
            Self::Missing => f.write_str("?"),
        })
    }
}

/// Represents a binary operator.
///
/// Assignment and statement sequencing are operators too: `x = e` is an
/// `Assign` node and `a ; b` is a `Sequence` node whose left side holds every
/// earlier statement.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Absolute difference (`-`)
    Sub,
    /// Assignment (`=`)
    Assign,
    /// Statement sequencing (`;`)
    Sequence,
}

impl BinaryOperator {
    /// Maps an operator token to its operator, or `None` for operands and
    /// parentheses.
    #[must_use]
    pub const fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Plus => Some(Self::Add),
            Token::Minus => Some(Self::Sub),
            Token::Equal => Some(Self::Assign),
            Token::Semicolon => Some(Self::Sequence),
            _ => None,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Assign => "=",
            Self::Sequence => ";",
        };
        write!(f, "{operator}")
    }
}
