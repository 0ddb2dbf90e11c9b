//! Operator tags and the symbol table used by the parser and diagnostics.

use crate::binop;
use crate::error::{EvalError, UnknownOperator};
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

/// One of the four binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

/// A row of the operator table: tag, source symbol and long name.
struct OperatorDefinition {
    op: Operator,
    symbol: &'static str,
    name: &'static str,
}

static OPERATORS: [OperatorDefinition; 4] = [
    OperatorDefinition { op: Operator::Add, symbol: "+", name: "add" },
    OperatorDefinition { op: Operator::Sub, symbol: "-", name: "subtract" },
    OperatorDefinition { op: Operator::Mul, symbol: "*", name: "multiply" },
    OperatorDefinition { op: Operator::Div, symbol: "/", name: "divide" },
];

impl Operator {
    /// All tags in declaration order.
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    fn definition(self) -> &'static OperatorDefinition {
        match self {
            Operator::Add => &OPERATORS[0],
            Operator::Sub => &OPERATORS[1],
            Operator::Mul => &OPERATORS[2],
            Operator::Div => &OPERATORS[3],
        }
    }

    /// The source symbol: `+`, `-`, `*` or `/`.
    pub fn symbol(self) -> &'static str {
        self.definition().symbol
    }

    /// Verb used in type error messages, e.g. `"subtract"`.
    pub fn verb(self) -> &'static str {
        self.definition().name
    }

    /// Resolves the tokens captured by the parser for an operator node.
    ///
    /// Only the first token is significant.
    pub fn capture(tokens: &[&str]) -> Result<Operator, UnknownOperator> {
        match tokens.first() {
            Some(s) => parse_symbol(s),
            None => Err(UnknownOperator(String::new())),
        }
    }

    /// Applies the operator to two evaluated operands. See [`crate::evaluate`].
    pub fn eval(self, left: Value, right: Value) -> Result<Value, EvalError> {
        binop::evaluate(self, left, right)
    }
}

/// Maps a source symbol to its operator tag.
pub fn parse_symbol(symbol: &str) -> Result<Operator, UnknownOperator> {
    OPERATORS
        .iter()
        .find(|def| def.symbol == symbol)
        .map(|def| def.op)
        .ok_or_else(|| UnknownOperator(symbol.to_string()))
}

/// Renders an operator back to its source symbol.
pub fn render(op: Operator) -> &'static str {
    op.symbol()
}

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_symbol(s)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_tags() {
        for op in Operator::ALL {
            assert_eq!(op.definition().op, op);
        }
    }

    #[test]
    fn test_parse_symbol() {
        assert_eq!(parse_symbol("+"), Ok(Operator::Add));
        assert_eq!(parse_symbol("-"), Ok(Operator::Sub));
        assert_eq!(parse_symbol("*"), Ok(Operator::Mul));
        assert_eq!(parse_symbol("/"), Ok(Operator::Div));
    }

    #[test]
    fn test_render_roundtrip() {
        for s in ["+", "-", "*", "/"] {
            assert_eq!(render(parse_symbol(s).unwrap()), s);
        }
    }

    #[test]
    fn test_unknown_symbol() {
        assert_eq!(parse_symbol("%"), Err(UnknownOperator("%".to_string())));
        assert!("add".parse::<Operator>().is_err());
        assert!("".parse::<Operator>().is_err());
    }

    #[test]
    fn test_verbs() {
        let verbs: Vec<&str> = Operator::ALL.iter().map(|op| op.verb()).collect();
        assert_eq!(verbs, vec!["add", "subtract", "multiply", "divide"]);
    }

    #[test]
    fn test_capture_uses_first_token() {
        assert_eq!(Operator::capture(&["*", "ignored"]), Ok(Operator::Mul));
        assert_eq!(Operator::capture(&[]), Err(UnknownOperator(String::new())));
    }

    #[test]
    fn test_display() {
        assert_eq!(Operator::Div.to_string(), "/");
        assert_eq!(format!("{}", Operator::Sub), "-");
    }
}
