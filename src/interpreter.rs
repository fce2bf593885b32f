/// The evaluator module computes the value of expression trees.
///
/// The evaluator walks the tree built by the parser, performs additions and
/// absolute-difference subtractions, and records assignments in the variable
/// table passed to it.
///
/// # Responsibilities
/// - Evaluates leaves, operators, assignments and statement sequences.
/// - Applies the configured policy to missing operands, unknown variables and
///   malformed literals.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens:
/// number literals, variable names, `+`, `-`, `=`, parentheses and `;`, each
/// paired with its source line.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line numbers.
/// - Skips whitespace and `//` comments.
/// - Reports characters that do not belong to the language.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// Parsing happens in two steps: the infix token stream is reordered into
/// postfix form, then the postfix stack is folded back into a binary tree.
///
/// # Responsibilities
/// - Reorders tokens with the shunting-yard algorithm.
/// - Rebuilds the tree from the postfix stack.
/// - Checks program termination and leftover tokens under the strict policy.
pub mod parser;
/// The value module defines the runtime number type.
///
/// All values are non-negative integers of unbounded size, stored as decimal
/// digits.
///
/// # Responsibilities
/// - Defines `BigInt` and its canonical form.
/// - Implements addition and absolute-difference subtraction.
pub mod value;
