use crate::converter::token::Token;

/// A token together with the index of the character it was read from.
pub type PositionedToken = (usize, Token);

/// The order in which a scan visits the characters of an expression.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScanDirection {
    LeftToRight,
    RightToLeft,
}

/// Splits the given expression into single-character tokens, skipping whitespace.
///
/// # Arguments
///
/// * `expression`: The text to split.
/// * `direction`: The order the tokens are returned in. Positions always count
///   characters from the start of the expression.
///
/// returns: The tokens of the expression, each with its character index.
///
/// # Examples
///
/// ```
/// use notation_converter::converter::lexer::{tokenize, ScanDirection};
/// use notation_converter::converter::token::Token;
///
/// let tokens = tokenize("+ a b", ScanDirection::RightToLeft);
///
/// assert_eq!(tokens[0], (4, Token::Operand('b')));
/// assert_eq!(tokens.len(), 3);
/// ```
pub fn tokenize(expression: &str, direction: ScanDirection) -> Vec<PositionedToken> {
    let mut tokens: Vec<PositionedToken> = expression
        .chars()
        .enumerate()
        .filter_map(|(position, character)| {
            Token::from_char(character).map(|token| (position, token))
        })
        .collect();

    if direction == ScanDirection::RightToLeft {
        tokens.reverse();
    }
    tokens
}

/// Returns the expression with every whitespace character removed.
pub fn strip_whitespace(expression: &str) -> String {
    expression.chars().filter(|c| !c.is_whitespace()).collect()
}
