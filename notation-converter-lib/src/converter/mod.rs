pub mod deque;
mod discipline;
pub mod error;
mod infix_converter;
pub mod lexer;
pub mod operator;
mod postfix_converter;
mod prefix_converter;
pub mod strict;
pub mod token;

use crate::converter::discipline::Lenient;
use crate::converter::lexer::strip_whitespace;
use anyhow::{anyhow, Error};
use log::debug;
use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;

/// One of the three linear notations an expression can be written in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Notation {
    Infix,
    Prefix,
    Postfix,
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Notation::Infix => write!(f, "infix"),
            Notation::Prefix => write!(f, "prefix"),
            Notation::Postfix => write!(f, "postfix"),
        }
    }
}

impl FromStr for Notation {
    type Err = Error;

    fn from_str(input: &str) -> Result<Notation, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "infix" => Ok(Notation::Infix),
            "prefix" => Ok(Notation::Prefix),
            "postfix" => Ok(Notation::Postfix),
            other => Err(anyhow!("Unknown notation: {}", other)),
        }
    }
}

/// Converts the given expression from one notation into another.
///
/// Malformed input never panics; it produces an unspecified string instead.
/// See [`strict::convert`] for a variant that reports malformed input.
///
/// # Arguments
///
/// * `expression`: The expression, with single-character operands. Infix input
///   must be fully parenthesized.
/// * `from`: The notation `expression` is written in.
/// * `to`: The notation to convert into.
///
/// returns: The equivalent expression, without any whitespace.
///
/// # Examples
///
/// ```
/// use notation_converter::converter::{convert, Notation};
///
/// let prefix = convert("ab+c*", Notation::Postfix, Notation::Prefix);
///
/// assert_eq!(prefix, "*+abc");
/// ```
pub fn convert(expression: &str, from: Notation, to: Notation) -> String {
    match (from, to) {
        (Notation::Postfix, Notation::Infix) => postfix_to_infix(expression),
        (Notation::Infix, Notation::Postfix) => infix_to_postfix(expression),
        (Notation::Infix, Notation::Prefix) => infix_to_prefix(expression),
        (Notation::Prefix, Notation::Infix) => prefix_to_infix(expression),
        (Notation::Postfix, Notation::Prefix) => postfix_to_prefix(expression),
        (Notation::Prefix, Notation::Postfix) => prefix_to_postfix(expression),
        (Notation::Infix, Notation::Infix)
        | (Notation::Prefix, Notation::Prefix)
        | (Notation::Postfix, Notation::Postfix) => strip_whitespace(expression),
    }
}

/// Converts a postfix expression into a fully parenthesized infix expression.
///
/// # Examples
///
/// ```
/// use notation_converter::converter::postfix_to_infix;
///
/// assert_eq!(postfix_to_infix("ab+c*"), "((a+b)*c)");
/// ```
pub fn postfix_to_infix(expression: &str) -> String {
    let infix = postfix_converter::postfix_to_infix::<Lenient>(expression).unwrap_or_default();
    debug!("postfix {:?} -> infix {:?}", expression, infix);
    infix
}

/// Converts a fully parenthesized infix expression into postfix.
///
/// # Examples
///
/// ```
/// use notation_converter::converter::infix_to_postfix;
///
/// assert_eq!(infix_to_postfix("((a+b)*c)"), "ab+c*");
/// ```
pub fn infix_to_postfix(expression: &str) -> String {
    let postfix = infix_converter::infix_to_postfix::<Lenient>(expression).unwrap_or_default();
    debug!("infix {:?} -> postfix {:?}", expression, postfix);
    postfix
}

/// Converts a fully parenthesized infix expression into prefix.
pub fn infix_to_prefix(expression: &str) -> String {
    let prefix = infix_converter::infix_to_prefix::<Lenient>(expression).unwrap_or_default();
    debug!("infix {:?} -> prefix {:?}", expression, prefix);
    prefix
}

/// Converts a prefix expression into a fully parenthesized infix expression.
pub fn prefix_to_infix(expression: &str) -> String {
    let infix = prefix_converter::prefix_to_infix::<Lenient>(expression).unwrap_or_default();
    debug!("prefix {:?} -> infix {:?}", expression, infix);
    infix
}

/// Converts postfix into prefix by way of infix.
pub fn postfix_to_prefix(expression: &str) -> String {
    infix_to_prefix(&postfix_to_infix(expression))
}

/// Converts prefix into postfix by way of infix.
pub fn prefix_to_postfix(expression: &str) -> String {
    infix_to_postfix(&prefix_to_infix(expression))
}
