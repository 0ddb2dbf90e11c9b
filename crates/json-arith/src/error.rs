use crate::value::Value;
use thiserror::Error;

/// An operator was applied to a pair of operand kinds it has no rule for.
///
/// Carries the operator verb and both operands exactly as they were passed
/// in, so the caller can report them or turn the failure into a stream error.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("cannot {verb}: {} ({left}) and {} ({right})", .left.kind().name(), .right.kind().name())]
pub struct BinopTypeError {
    verb: &'static str,
    left: Value,
    right: Value,
}

impl BinopTypeError {
    pub(crate) fn new(verb: &'static str, left: Value, right: Value) -> Self {
        Self { verb, left, right }
    }

    pub fn verb(&self) -> &'static str {
        self.verb
    }

    pub fn left(&self) -> &Value {
        &self.left
    }

    pub fn right(&self) -> &Value {
        &self.right
    }

    pub fn into_operands(self) -> (Value, Value) {
        (self.left, self.right)
    }
}

/// A symbol that is not one of `+`, `-`, `*`, `/`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown operator: {0:?}")]
pub struct UnknownOperator(pub String);

/// Failure produced by [`crate::evaluate`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error(transparent)]
    Type(#[from] BinopTypeError),

    #[error("{left} and {right} cannot be divided because the divisor is zero")]
    DivisionByZero { left: Value, right: Value },

    #[error("repeat string result too long: {left} * {right}")]
    RepeatOverflow { left: Value, right: Value },
}

impl EvalError {
    pub fn left(&self) -> &Value {
        match self {
            EvalError::Type(e) => e.left(),
            EvalError::DivisionByZero { left, .. } | EvalError::RepeatOverflow { left, .. } => left,
        }
    }

    pub fn right(&self) -> &Value {
        match self {
            EvalError::Type(e) => e.right(),
            EvalError::DivisionByZero { right, .. } | EvalError::RepeatOverflow { right, .. } => {
                right
            }
        }
    }
}
