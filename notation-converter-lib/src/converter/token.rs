use crate::converter::operator::BinaryOperator;
use std::fmt;
use std::fmt::Formatter;

/// A single-character unit of an expression.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Operand(char),
    Operator(BinaryOperator),
    LeftParentheses,
    RightParentheses,
}

impl Token {
    /// Classifies a character. Whitespace is not a token and yields `None`;
    /// anything that is neither an operator nor a parenthesis is an operand.
    pub fn from_char(character: char) -> Option<Token> {
        if character.is_whitespace() {
            return None;
        }
        let token = match character {
            '(' => Token::LeftParentheses,
            ')' => Token::RightParentheses,
            symbol => match BinaryOperator::from_symbol(symbol) {
                Some(operator) => Token::Operator(operator),
                None => Token::Operand(symbol),
            },
        };
        Some(token)
    }

    pub fn symbol(&self) -> char {
        match self {
            Token::Operand(symbol) => *symbol,
            Token::Operator(operator) => operator.symbol(),
            Token::LeftParentheses => '(',
            Token::RightParentheses => ')',
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
