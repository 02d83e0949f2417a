use crate::converter::deque::Deque;
use crate::converter::discipline::{assemble, Discipline};
use crate::converter::lexer::{tokenize, ScanDirection};
use crate::converter::token::Token;
use anyhow::Result;
use log::trace;

/// Scans a prefix expression right to left. Because the scan runs backwards, the
/// first popped partial result is the left operand of the operator.
pub(crate) fn prefix_to_infix<D: Discipline>(expression: &str) -> Result<String> {
    let tokens = tokenize(expression, ScanDirection::RightToLeft);
    let mut results: Deque<String> = Deque::with_capacity(tokens.len());

    for (position, token) in tokens {
        match token {
            Token::Operand(symbol) => results.push_front(symbol.to_string()),
            Token::Operator(operator) => {
                let left_operand = D::pop_operand(&mut results, position)?;
                let right_operand = D::pop_operand(&mut results, position)?;
                let group = assemble(&[
                    "(",
                    &left_operand,
                    &operator.to_string(),
                    &right_operand,
                    ")",
                ])?;
                trace!("prefix {} at {} reduced to {}", operator, position, group);
                results.push_front(group);
            }
            Token::LeftParentheses | Token::RightParentheses => {
                results.push_front(D::stray_parenthesis(token, position)?)
            }
        }
    }

    D::finish(results, Deque::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::discipline::{Lenient, Strict};
    use crate::converter::error::ConversionError;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_popped_operand_becomes_left_operand() {
        assert_eq!(prefix_to_infix::<Lenient>("/ab").unwrap(), "(a/b)");
    }

    #[test]
    fn nested_reductions_nest_groups() {
        // (a - b) * (c + d)
        let actual = prefix_to_infix::<Lenient>("*-ab+cd").unwrap();

        assert_eq!(actual, "((a-b)*(c+d))");
    }

    #[test]
    fn single_operand_is_its_own_result() {
        assert_eq!(prefix_to_infix::<Lenient>("a").unwrap(), "a");
    }

    #[test]
    fn lenient_parenthesis_is_carried_as_operand() {
        assert_eq!(prefix_to_infix::<Lenient>("+(a").unwrap(), "((+a)");
    }

    #[test]
    fn strict_parenthesis_is_rejected() {
        let error = prefix_to_infix::<Strict>("+(ab").unwrap_err();

        assert_eq!(
            error.downcast_ref::<ConversionError>(),
            Some(&ConversionError::UnexpectedParenthesis { position: 1 })
        );
    }

    #[test]
    fn strict_missing_operand_reports_operator_position() {
        let error = prefix_to_infix::<Strict>("+a").unwrap_err();

        assert_eq!(
            error.downcast_ref::<ConversionError>(),
            Some(&ConversionError::MissingOperand { position: 0 })
        );
    }

    #[test]
    fn strict_surplus_operand_is_rejected() {
        let error = prefix_to_infix::<Strict>("+abc").unwrap_err();

        assert_eq!(
            error.downcast_ref::<ConversionError>(),
            Some(&ConversionError::LeftoverTokens { count: 2 })
        );
    }
}
