use crate::converter::deque::Deque;
use crate::converter::error::ConversionError;
use crate::converter::lexer::PositionedToken;
use crate::converter::token::Token;
use anyhow::{bail, Context, Result};
use string_builder::Builder;

/// Decides what a scan does when its working stacks do not hold what a well-formed
/// expression would have put there.
///
/// All scans are written once against this trait. [`Lenient`] keeps going with empty
/// values, [`Strict`] stops with a [`ConversionError`].
pub(crate) trait Discipline {
    /// Pops the most recent partial result.
    fn pop_operand(results: &mut Deque<String>, position: usize) -> Result<String>;

    /// Pops the operator of the group that the `)` at `position` closes.
    fn pop_operator(operators: &mut Deque<PositionedToken>, position: usize) -> Result<String>;

    /// Pops the `(` that opened the group closed at `position`.
    fn discard_left_parentheses(
        operators: &mut Deque<PositionedToken>,
        position: usize,
    ) -> Result<()>;

    /// Handles a parenthesis found in a prefix or postfix expression.
    fn stray_parenthesis(token: Token, position: usize) -> Result<String>;

    /// Produces the final result once every token has been scanned.
    fn finish(results: Deque<String>, operators: Deque<PositionedToken>) -> Result<String>;
}

/// Never fails: empty pops yield empty strings and leftovers are ignored.
pub(crate) struct Lenient;

/// Rejects any expression that does not reduce to exactly one result.
pub(crate) struct Strict;

impl Discipline for Lenient {
    fn pop_operand(results: &mut Deque<String>, _position: usize) -> Result<String> {
        Ok(results.pop_front())
    }

    fn pop_operator(operators: &mut Deque<PositionedToken>, _position: usize) -> Result<String> {
        Ok(operators
            .try_pop_front()
            .map(|(_, token)| token.to_string())
            .unwrap_or_default())
    }

    fn discard_left_parentheses(
        operators: &mut Deque<PositionedToken>,
        _position: usize,
    ) -> Result<()> {
        operators.try_pop_front();
        Ok(())
    }

    fn stray_parenthesis(token: Token, _position: usize) -> Result<String> {
        Ok(token.to_string())
    }

    fn finish(mut results: Deque<String>, _operators: Deque<PositionedToken>) -> Result<String> {
        Ok(results.pop_front())
    }
}

impl Discipline for Strict {
    fn pop_operand(results: &mut Deque<String>, position: usize) -> Result<String> {
        match results.try_pop_front() {
            Some(operand) => Ok(operand),
            None => bail!(ConversionError::MissingOperand { position }),
        }
    }

    fn pop_operator(operators: &mut Deque<PositionedToken>, position: usize) -> Result<String> {
        match operators.front() {
            Some((_, Token::Operator(_))) => {}
            _ => bail!(ConversionError::MissingOperator { position }),
        }
        let (_, operator) = operators
            .try_pop_front()
            .context("Operator stack emptied while reading it")?;
        Ok(operator.to_string())
    }

    fn discard_left_parentheses(
        operators: &mut Deque<PositionedToken>,
        position: usize,
    ) -> Result<()> {
        match operators.try_pop_front() {
            Some((_, Token::LeftParentheses)) => Ok(()),
            Some((surplus, Token::Operator(_))) => {
                bail!(ConversionError::SurplusOperator { position: surplus })
            }
            _ => bail!(ConversionError::UnbalancedParenthesis { position }),
        }
    }

    fn stray_parenthesis(_token: Token, position: usize) -> Result<String> {
        bail!(ConversionError::UnexpectedParenthesis { position })
    }

    fn finish(mut results: Deque<String>, mut operators: Deque<PositionedToken>) -> Result<String> {
        let mut leftover_operators = 0;
        while let Some((position, token)) = operators.try_pop_back() {
            if token == Token::LeftParentheses {
                bail!(ConversionError::UnbalancedParenthesis { position });
            }
            leftover_operators += 1;
        }

        if results.len() > 1 || leftover_operators > 0 {
            bail!(ConversionError::LeftoverTokens {
                count: results.len() + leftover_operators
            });
        }
        Ok(results.pop_front())
    }
}

/// Concatenates the parts of a reduced sub-expression.
pub(crate) fn assemble(parts: &[&str]) -> Result<String> {
    let capacity = parts.iter().map(|part| part.len()).sum();
    let mut builder = Builder::new(capacity);
    for part in parts {
        builder.append(*part);
    }
    builder.string().context("Failed to build sub-expression")
}
