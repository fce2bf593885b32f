/// Program-level parsing.
///
/// Chains the postfix transform and the tree builder, and applies the policy
/// checks that need the whole token stream.
pub mod core;

/// The infix-to-postfix transform.
///
/// Implements the shunting-yard reordering of `+`, `-`, `=`, parentheses and
/// `;` into reverse Polish order.
pub mod postfix;

/// The postfix-to-tree builder.
///
/// Consumes a postfix stack from the top and rebuilds the binary expression
/// tree.
pub mod tree;
