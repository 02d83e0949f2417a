use thiserror::Error;

/// Ways an expression can be malformed, as reported by the strict conversions.
///
/// Positions are 0-based character indices into the input expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("Missing operand for the token at position {position}")]
    MissingOperand { position: usize },

    #[error("Missing operator inside the group closed at position {position}")]
    MissingOperator { position: usize },

    #[error("Operator at position {position} has no operands left in its group")]
    SurplusOperator { position: usize },

    #[error("Unbalanced parenthesis at position {position}")]
    UnbalancedParenthesis { position: usize },

    #[error("Unexpected parenthesis at position {position}")]
    UnexpectedParenthesis { position: usize },

    #[error("{count} entries were left unreduced at the end of the expression")]
    LeftoverTokens { count: usize },
}
