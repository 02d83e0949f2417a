//! Validating variants of the conversions.
//!
//! These run the same scans as the functions in [`crate::converter`], but stop at the
//! first sign of a malformed expression. The returned error can be downcast into a
//! [`ConversionError`](crate::converter::error::ConversionError):
//!
//! ```
//! use notation_converter::converter::error::ConversionError;
//! use notation_converter::converter::strict;
//!
//! let error = strict::postfix_to_infix("a+").unwrap_err();
//!
//! assert_eq!(
//!     error.downcast_ref::<ConversionError>(),
//!     Some(&ConversionError::MissingOperand { position: 1 })
//! );
//! ```

use crate::converter::discipline::Strict;
use crate::converter::lexer::strip_whitespace;
use crate::converter::{infix_converter, postfix_converter, prefix_converter, Notation};
use anyhow::{Context, Result};
use log::debug;

/// Converts between notations, failing on malformed input.
///
/// Converting into the same notation still validates the expression.
pub fn convert(expression: &str, from: Notation, to: Notation) -> Result<String> {
    let converted = match (from, to) {
        (Notation::Postfix, Notation::Infix) => postfix_to_infix(expression),
        (Notation::Infix, Notation::Postfix) => infix_to_postfix(expression),
        (Notation::Infix, Notation::Prefix) => infix_to_prefix(expression),
        (Notation::Prefix, Notation::Infix) => prefix_to_infix(expression),
        (Notation::Postfix, Notation::Prefix) => postfix_to_prefix(expression),
        (Notation::Prefix, Notation::Postfix) => prefix_to_postfix(expression),
        (Notation::Infix, Notation::Infix) => {
            infix_to_postfix(expression).map(|_| strip_whitespace(expression))
        }
        (Notation::Prefix, Notation::Prefix) => {
            prefix_to_infix(expression).map(|_| strip_whitespace(expression))
        }
        (Notation::Postfix, Notation::Postfix) => {
            postfix_to_infix(expression).map(|_| strip_whitespace(expression))
        }
    };
    converted.with_context(|| format!("Could not convert {} expression {:?}", from, expression))
}

pub fn postfix_to_infix(expression: &str) -> Result<String> {
    let infix = postfix_converter::postfix_to_infix::<Strict>(expression)?;
    debug!("postfix {:?} -> infix {:?}", expression, infix);
    Ok(infix)
}

pub fn infix_to_postfix(expression: &str) -> Result<String> {
    let postfix = infix_converter::infix_to_postfix::<Strict>(expression)?;
    debug!("infix {:?} -> postfix {:?}", expression, postfix);
    Ok(postfix)
}

pub fn infix_to_prefix(expression: &str) -> Result<String> {
    let prefix = infix_converter::infix_to_prefix::<Strict>(expression)?;
    debug!("infix {:?} -> prefix {:?}", expression, prefix);
    Ok(prefix)
}

pub fn prefix_to_infix(expression: &str) -> Result<String> {
    let infix = prefix_converter::prefix_to_infix::<Strict>(expression)?;
    debug!("prefix {:?} -> infix {:?}", expression, infix);
    Ok(infix)
}

pub fn postfix_to_prefix(expression: &str) -> Result<String> {
    infix_to_prefix(&postfix_to_infix(expression)?)
}

pub fn prefix_to_postfix(expression: &str) -> Result<String> {
    infix_to_postfix(&prefix_to_infix(expression)?)
}
