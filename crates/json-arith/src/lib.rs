//! Binary arithmetic for a jq-style JSON query language.
//!
//! # Overview
//!
//! `+`, `-`, `*` and `/` are polymorphic over the value kinds of the
//! language: numbers add, strings concatenate, arrays subtract as sets,
//! objects merge, a string times a number repeats it, a string divided by a
//! string splits it, and `null + x` is `x`. Any pairing without a rule is
//! reported as an [`EvalError`] value instead of panicking, so the calling
//! evaluator can end just the affected output stream.
//!
//! # Example
//!
//! ```
//! use json_arith::{evaluate, parse_symbol, Value};
//! use serde_json::json;
//!
//! let op = parse_symbol("+").unwrap();
//! let result = evaluate(op, Value::from(json!({"a": 1})), Value::from(json!({"b": 2}))).unwrap();
//! assert_eq!(result, Value::from(json!({"a": 1, "b": 2})));
//!
//! let err = evaluate(parse_symbol("-").unwrap(), Value::from("a"), Value::from("b")).unwrap_err();
//! assert_eq!(err.to_string(), r#"cannot subtract: string ("a") and string ("b")"#);
//! ```

pub mod binop;
pub mod equal;
pub mod error;
pub mod operator;
pub mod value;

pub use binop::evaluate;
pub use equal::deep_equal;
pub use error::{BinopTypeError, EvalError, UnknownOperator};
pub use operator::{parse_symbol, render, Operator};
pub use value::{Kind, Mapping, Value};
