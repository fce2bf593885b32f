use crate::interpreter::lexer::Token;

/// Reorders an infix token stream into postfix (reverse Polish) order.
///
/// Shunting-yard with an output stack and an operator stack:
///
/// - operands go straight to the output;
/// - `+` and `-` first move every operator on top of the operator stack to
///   the output, stopping below a `(` or `=`, then wait on the stack
///   themselves;
/// - `(` and `=` are pushed onto the operator stack;
/// - `)` moves operators to the output down to the nearest `(`, which is
///   dropped; without one the `)` has no effect;
/// - `;` moves the whole operator stack to the output and is then appended
///   itself, closing the statement.
///
/// Operators still waiting when the input ends without a `;` are not emitted.
///
/// Each token keeps the source line it was lexed on. The returned vector is a
/// stack: its last element is the top.
///
/// # Example
/// ```
/// use digitwise::interpreter::{
///     lexer::tokenize,
///     parser::postfix::{render_postfix, to_postfix},
/// };
///
/// let tokens = tokenize("x = 3 + 4 ; x - 2 ;").unwrap();
/// let postfix = to_postfix(&tokens);
/// assert_eq!(render_postfix(&postfix), "x 3 4 + = ; x 2 - ;");
/// ```
pub fn to_postfix<'a, I>(infix: I) -> Vec<(Token, usize)>
    where I: IntoIterator<Item = &'a (Token, usize)>
{
    let mut output = Vec::new();
    let mut operators: Vec<(Token, usize)> = Vec::new();

    for (token, line) in infix {
        match token {
            operand if operand.is_operand() => output.push((operand.clone(), *line)),
            additive if additive.is_additive() => {
                transfer_until(&mut operators, &mut output, |top| {
                    matches!(top, Token::LeftParen | Token::Equal)
                });
                operators.push((additive.clone(), *line));
            },
            Token::LeftParen | Token::Equal => operators.push((token.clone(), *line)),
            Token::RightParen => {
                transfer_until(&mut operators, &mut output, |top| *top == Token::LeftParen);
                operators.pop();
            },
            Token::Semicolon => {
                transfer_until(&mut operators, &mut output, |_| false);
                output.push((Token::Semicolon, *line));
            },
            _ => {},
        }
    }

    if !operators.is_empty() {
        tracing::debug!(pending = operators.len(),
                        "input ended without ';', dropping pending operators");
    }

    output
}

/// Pops operators onto `output` until the operator stack is empty or its top
/// satisfies `is_barrier`. The barrier itself stays on the stack.
fn transfer_until(operators: &mut Vec<(Token, usize)>,
                  output: &mut Vec<(Token, usize)>,
                  is_barrier: impl Fn(&Token) -> bool) {
    while let Some((top, _)) = operators.last() {
        if is_barrier(top) {
            break;
        }
        output.extend(operators.pop());
    }
}

/// Renders tokens separated by single spaces, without their lines.
#[must_use]
pub fn render_postfix(tokens: &[(Token, usize)]) -> String {
    tokens.iter()
          .map(|(token, _)| token.to_string())
          .collect::<Vec<_>>()
          .join(" ")
}
