use crate::{
    ast::Expr,
    config::Policy,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            postfix::{render_postfix, to_postfix},
            tree::build_tree,
        },
    },
};

/// Result type used by the lexer and the parser.
///
/// All parsing functions return either a value of type `T` or a `ParseError`
/// describing the failure.
pub type ParseResult<T> = Result<T, ParseError>;

/// Turns a program's tokens into a single expression tree.
///
/// The tokens are reordered into postfix form and the tree is built from the
/// resulting stack. Every statement ends up under a chain of `;` nodes, with
/// the last statement as the right child of the root.
///
/// # Parameters
/// - `tokens`: `(Token, line)` pairs as produced by the lexer.
/// - `policy`: How to treat a program that is not terminated by `;` or that
///   leaves tokens behind.
///
/// # Errors
/// Only under [`Policy::Strict`]:
/// - `MissingTerminator` if the last token is not `;`.
/// - `TrailingTokens` if building the tree did not consume every postfix
///   token.
pub fn parse_program(tokens: &[(Token, usize)], policy: Policy) -> ParseResult<Expr> {
    if policy.is_strict()
       && let Some((last, line)) = tokens.last()
       && *last != Token::Semicolon
    {
        return Err(ParseError::MissingTerminator { line: *line });
    }

    let mut postfix = to_postfix(tokens);
    tracing::debug!(postfix = %render_postfix(&postfix), "transformed to postfix");

    let tree = build_tree(&mut postfix);

    if !postfix.is_empty() {
        let leftover = render_postfix(&postfix);
        if policy.is_strict() {
            return Err(ParseError::TrailingTokens { count:  postfix.len(),
                                                    tokens: leftover, });
        }
        tracing::warn!(%leftover, "ignoring tokens left over after building the tree");
    }

    Ok(tree)
}
