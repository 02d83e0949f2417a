use crate::converter::deque::Deque;
use crate::converter::discipline::{assemble, Discipline};
use crate::converter::lexer::{tokenize, PositionedToken, ScanDirection};
use crate::converter::token::Token;
use anyhow::Result;
use log::trace;

/// Where a reduced group puts its operator relative to its two operands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum OperatorPlacement {
    Before,
    After,
}

pub(crate) fn infix_to_postfix<D: Discipline>(expression: &str) -> Result<String> {
    reduce_parenthesized::<D>(expression, OperatorPlacement::After)
}

pub(crate) fn infix_to_prefix<D: Discipline>(expression: &str) -> Result<String> {
    reduce_parenthesized::<D>(expression, OperatorPlacement::Before)
}

/// Scans a fully parenthesized infix expression left to right. Every `)` closes a
/// group holding exactly one operator and two operands, which are reduced into a
/// single partial result.
fn reduce_parenthesized<D: Discipline>(
    expression: &str,
    placement: OperatorPlacement,
) -> Result<String> {
    let tokens = tokenize(expression, ScanDirection::LeftToRight);
    let mut results: Deque<String> = Deque::with_capacity(tokens.len());
    let mut operators: Deque<PositionedToken> = Deque::new();

    for (position, token) in tokens {
        match token {
            Token::Operand(symbol) => results.push_front(symbol.to_string()),
            Token::LeftParentheses | Token::Operator(_) => {
                operators.push_front((position, token))
            }
            Token::RightParentheses => {
                let right_operand = D::pop_operand(&mut results, position)?;
                let left_operand = D::pop_operand(&mut results, position)?;
                let operator = D::pop_operator(&mut operators, position)?;

                let group = match placement {
                    OperatorPlacement::Before => {
                        assemble(&[&operator, &left_operand, &right_operand])?
                    }
                    OperatorPlacement::After => {
                        assemble(&[&left_operand, &right_operand, &operator])?
                    }
                };
                trace!("group closed at {} reduced to {}", position, group);
                results.push_front(group);

                D::discard_left_parentheses(&mut operators, position)?;
            }
        }
    }

    D::finish(results, operators)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::discipline::{Lenient, Strict};
    use crate::converter::error::ConversionError;
    use pretty_assertions::assert_eq;

    #[test]
    fn infix_to_postfix_simple_expression() {
        assert_eq!(infix_to_postfix::<Lenient>("(x+y)").unwrap(), "xy+");
    }

    #[test]
    fn infix_to_postfix_simple_parenthesised_expression() {
        // x - (y + z)
        let actual = infix_to_postfix::<Lenient>("(x-(y+z))").unwrap();

        assert_eq!(actual, "xyz+-");
    }

    #[test]
    fn infix_to_postfix_nested_parenthesis_expression() {
        // a + ((b + c) * d)
        let actual = infix_to_postfix::<Lenient>("(a+((b+c)*d))").unwrap();

        assert_eq!(actual, "abc+d*+");
    }

    #[test]
    fn infix_to_prefix_nested_parenthesis_expression() {
        let actual = infix_to_prefix::<Lenient>("(a+((b+c)*d))").unwrap();

        assert_eq!(actual, "+a*+bcd");
    }

    #[test]
    fn infix_to_prefix_keeps_operand_order_of_non_commutative_operators() {
        let actual = infix_to_prefix::<Lenient>("((a-b)/(c-d))").unwrap();

        assert_eq!(actual, "/-ab-cd");
    }

    #[test]
    fn spaces_between_tokens_are_ignored() {
        let actual = infix_to_postfix::<Lenient>(" ( ( a + b ) * c ) ").unwrap();

        assert_eq!(actual, "ab+c*");
    }

    #[test]
    fn lone_operand_passes_through() {
        assert_eq!(infix_to_prefix::<Lenient>("a").unwrap(), "a");
    }

    #[test]
    fn infix_to_postfix_mismatched_parenthesis_should_return_err() {
        // (x + y))
        let error = infix_to_postfix::<Strict>("(x+y))").unwrap_err();

        assert_eq!(
            error.downcast_ref::<ConversionError>(),
            Some(&ConversionError::MissingOperand { position: 5 })
        );
    }

    #[test]
    fn strict_unclosed_group_is_rejected() {
        let error = infix_to_postfix::<Strict>("((a+b)*c").unwrap_err();

        assert_eq!(
            error.downcast_ref::<ConversionError>(),
            Some(&ConversionError::UnbalancedParenthesis { position: 0 })
        );
    }

    #[test]
    fn strict_group_without_operator_is_rejected() {
        let error = infix_to_prefix::<Strict>("(ab)").unwrap_err();

        assert_eq!(
            error.downcast_ref::<ConversionError>(),
            Some(&ConversionError::MissingOperator { position: 3 })
        );
    }

    #[test]
    fn strict_group_with_two_operators_reports_the_surplus_one() {
        // (a + b + c)
        let error = infix_to_postfix::<Strict>("(a+b+c)").unwrap_err();

        assert_eq!(
            error.downcast_ref::<ConversionError>(),
            Some(&ConversionError::SurplusOperator { position: 2 })
        );
    }

    #[test]
    fn strict_unparenthesized_expression_is_rejected() {
        let error = infix_to_postfix::<Strict>("a+b").unwrap_err();

        assert_eq!(
            error.downcast_ref::<ConversionError>(),
            Some(&ConversionError::LeftoverTokens { count: 3 })
        );
    }

    #[test]
    fn lenient_malformed_expression_does_not_panic() {
        for expression in ["(x+y))", ")", "((", "+", "(a+b", "a+b", "(()"] {
            infix_to_postfix::<Lenient>(expression).unwrap();
            infix_to_prefix::<Lenient>(expression).unwrap();
        }
    }
}
