//! Binary dispatch for `+`, `-`, `*` and `/`.
//!
//! Every operator goes through `binop_type_switch`, which pairs operands of
//! the same kind (promoting mixed `Int`/`Float` to `Float`) and hands
//! everything else to the operator's fallback. Each operator only spells out
//! the rules it has; the rest default to a [`BinopTypeError`].

use crate::equal::deep_equal;
use crate::error::{BinopTypeError, EvalError};
use crate::operator::Operator;
use crate::value::{Mapping, Value};

type BinopResult = Result<Value, EvalError>;

fn type_error(verb: &'static str, left: Value, right: Value) -> EvalError {
    EvalError::Type(BinopTypeError::new(verb, left, right))
}

/// Per-operator rules, one method per same-kind pairing.
trait BinopRules {
    const OP: Operator;

    fn ints(l: i64, r: i64) -> Value;

    fn floats(l: f64, r: f64) -> Value;

    fn strings(l: String, r: String) -> BinopResult {
        Err(type_error(Self::OP.verb(), Value::String(l), Value::String(r)))
    }

    fn sequences(l: Vec<Value>, r: Vec<Value>) -> BinopResult {
        Err(type_error(Self::OP.verb(), Value::Sequence(l), Value::Sequence(r)))
    }

    fn mappings(l: Mapping, r: Mapping) -> BinopResult {
        Err(type_error(Self::OP.verb(), Value::Mapping(l), Value::Mapping(r)))
    }

    fn fallback(l: Value, r: Value) -> BinopResult {
        Err(type_error(Self::OP.verb(), l, r))
    }
}

fn binop_type_switch<R: BinopRules>(l: Value, r: Value) -> BinopResult {
    match (l, r) {
        (Value::Int(l), Value::Int(r)) => Ok(R::ints(l, r)),
        (Value::Int(l), Value::Float(r)) => Ok(R::floats(l as f64, r)),
        (Value::Float(l), Value::Int(r)) => Ok(R::floats(l, r as f64)),
        (Value::Float(l), Value::Float(r)) => Ok(R::floats(l, r)),
        (Value::String(l), Value::String(r)) => R::strings(l, r),
        (Value::Sequence(l), Value::Sequence(r)) => R::sequences(l, r),
        (Value::Mapping(l), Value::Mapping(r)) => R::mappings(l, r),
        (l, r) => R::fallback(l, r),
    }
}

/// Right-hand keys overwrite left-hand ones; left key order is kept and new
/// keys are appended.
fn merge(mut l: Mapping, r: Mapping) -> Value {
    l.extend(r);
    Value::Mapping(l)
}

struct Add;

impl BinopRules for Add {
    const OP: Operator = Operator::Add;

    fn ints(l: i64, r: i64) -> Value {
        Value::Int(l.wrapping_add(r))
    }

    fn floats(l: f64, r: f64) -> Value {
        Value::Float(l + r)
    }

    fn strings(mut l: String, r: String) -> BinopResult {
        l.push_str(&r);
        Ok(Value::String(l))
    }

    fn sequences(mut l: Vec<Value>, r: Vec<Value>) -> BinopResult {
        l.extend(r);
        Ok(Value::Sequence(l))
    }

    fn mappings(l: Mapping, r: Mapping) -> BinopResult {
        Ok(merge(l, r))
    }
}

fn add(l: Value, r: Value) -> BinopResult {
    // null is the identity for `+`, whatever the other side is.
    if l.is_null() {
        return Ok(r);
    }
    if r.is_null() {
        return Ok(l);
    }
    binop_type_switch::<Add>(l, r)
}

struct Sub;

impl BinopRules for Sub {
    const OP: Operator = Operator::Sub;

    fn ints(l: i64, r: i64) -> Value {
        Value::Int(l.wrapping_sub(r))
    }

    fn floats(l: f64, r: f64) -> Value {
        Value::Float(l - r)
    }

    fn sequences(l: Vec<Value>, r: Vec<Value>) -> BinopResult {
        Ok(Value::Sequence(
            l.into_iter()
                .filter(|v| !r.iter().any(|w| deep_equal(v, w)))
                .collect(),
        ))
    }
}

struct Mul;

impl BinopRules for Mul {
    const OP: Operator = Operator::Mul;

    fn ints(l: i64, r: i64) -> Value {
        Value::Int(l.wrapping_mul(r))
    }

    fn floats(l: f64, r: f64) -> Value {
        Value::Float(l * r)
    }

    fn mappings(l: Mapping, r: Mapping) -> BinopResult {
        Ok(merge(l, r))
    }

    fn fallback(l: Value, r: Value) -> BinopResult {
        let repeated = match (&l, &r) {
            (Value::String(s), n) | (n, Value::String(s)) => {
                n.as_f64().map(|count| repeat_string(s, count))
            }
            _ => None,
        };
        match repeated {
            Some(Some(v)) => Ok(v),
            Some(None) => Err(EvalError::RepeatOverflow { left: l, right: r }),
            None => Err(type_error(Self::OP.verb(), l, r)),
        }
    }
}

/// Longest string repetition will produce, in bytes.
const MAX_REPEAT_LEN: usize = i32::MAX as usize;

/// `s` repeated `floor(count)` times. Negative (or NaN) counts give null and
/// counts below one give `s` itself. `None` when the result would be longer
/// than [`MAX_REPEAT_LEN`].
fn repeat_string(s: &str, count: f64) -> Option<Value> {
    if count.is_nan() || count < 0.0 {
        return Some(Value::Null);
    }
    if count < 1.0 {
        return Some(Value::String(s.to_string()));
    }
    // Saturates for huge and infinite counts.
    let n = count as usize;
    s.len()
        .checked_mul(n)
        .filter(|&len| len <= MAX_REPEAT_LEN)?;
    Some(Value::String(s.repeat(n)))
}

struct Div;

impl BinopRules for Div {
    const OP: Operator = Operator::Div;

    fn ints(l: i64, r: i64) -> Value {
        Value::Int(l.wrapping_div(r))
    }

    fn floats(l: f64, r: f64) -> Value {
        Value::Float(l / r)
    }

    fn strings(l: String, r: String) -> BinopResult {
        Ok(Value::Sequence(split(&l, &r)))
    }
}

/// An empty separator splits into single characters.
fn split(s: &str, sep: &str) -> Vec<Value> {
    if sep.is_empty() {
        return s.chars().map(|c| Value::String(c.to_string())).collect();
    }
    s.split(sep).map(Value::from).collect()
}

/// Only an integer pair can divide by zero; once promoted to floats the
/// quotient is the IEEE one (`inf`, `-inf` or `NaN`).
fn div(l: Value, r: Value) -> BinopResult {
    if let (Value::Int(_), Value::Int(0)) = (&l, &r) {
        return Err(EvalError::DivisionByZero { left: l, right: r });
    }
    binop_type_switch::<Div>(l, r)
}

/// Applies `op` to two already-evaluated operands.
///
/// Never panics: kind pairings the operator has no rule for come back as
/// [`EvalError::Type`] carrying both operands unchanged.
#[tracing::instrument(level = "trace", skip_all, fields(op = %op, left = ?left.kind(), right = ?right.kind()))]
pub fn evaluate(op: Operator, left: Value, right: Value) -> Result<Value, EvalError> {
    let result = match op {
        Operator::Add => add(left, right),
        Operator::Sub => binop_type_switch::<Sub>(left, right),
        Operator::Mul => binop_type_switch::<Mul>(left, right),
        Operator::Div => div(left, right),
    };
    if let Err(err) = &result {
        tracing::debug!(op = %op, error = %err, "binary operator failed");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn v(j: serde_json::Value) -> Value {
        Value::from(j)
    }

    #[test]
    fn test_merge_keeps_left_order() {
        let merged = add(v(json!({"a": 1, "b": 2})), v(json!({"c": 3, "a": 9}))).unwrap();
        match merged {
            Value::Mapping(map) => {
                let keys: Vec<&str> = map.keys().map(String::as_str).collect();
                assert_eq!(keys, vec!["a", "b", "c"]);
                assert_eq!(map["a"], Value::Int(9));
            }
            other => panic!("expected mapping, got {:?}", other),
        }
    }

    #[test]
    fn test_repeat_string_boundaries() {
        assert_eq!(repeat_string("ab", -0.5), Some(Value::Null));
        assert_eq!(repeat_string("ab", f64::NAN), Some(Value::Null));
        assert_eq!(repeat_string("ab", 0.0), Some(Value::from("ab")));
        assert_eq!(repeat_string("ab", 0.99), Some(Value::from("ab")));
        assert_eq!(repeat_string("ab", 1.0), Some(Value::from("ab")));
        assert_eq!(repeat_string("ab", 2.7), Some(Value::from("abab")));
    }

    #[test]
    fn test_repeat_string_too_large() {
        assert_eq!(repeat_string("ab", f64::INFINITY), None);
        assert_eq!(repeat_string("", f64::INFINITY), Some(Value::from("")));
    }

    #[test]
    fn test_split_empty_separator() {
        assert_eq!(split("héllo", ""), vec![
            Value::from("h"),
            Value::from("é"),
            Value::from("l"),
            Value::from("l"),
            Value::from("o"),
        ]);
        assert!(split("", "").is_empty());
    }

    #[test]
    fn test_split_keeps_empty_fields() {
        assert_eq!(split(",a,,b,", ","), vec![
            Value::from(""),
            Value::from("a"),
            Value::from(""),
            Value::from("b"),
            Value::from(""),
        ]);
        assert_eq!(split("", ","), vec![Value::from("")]);
    }

    #[test]
    fn test_integer_overflow_wraps() {
        assert_eq!(
            evaluate(Operator::Add, Value::Int(i64::MAX), Value::Int(1)),
            Ok(Value::Int(i64::MIN))
        );
        assert_eq!(
            evaluate(Operator::Div, Value::Int(i64::MIN), Value::Int(-1)),
            Ok(Value::Int(i64::MIN))
        );
    }

    #[test]
    fn test_float_division_by_zero_is_ieee() {
        assert_eq!(
            evaluate(Operator::Div, Value::Float(1.0), Value::Float(0.0)),
            Ok(Value::Float(f64::INFINITY))
        );
        assert_eq!(
            evaluate(Operator::Div, Value::Float(-2.5), Value::Int(0)),
            Ok(Value::Float(f64::NEG_INFINITY))
        );
        assert!(matches!(
            evaluate(Operator::Div, Value::Float(0.0), Value::Float(0.0)),
            Ok(Value::Float(f)) if f.is_nan()
        ));
    }

    #[test]
    fn test_bool_takes_fallback() {
        let err = evaluate(Operator::Add, Value::Bool(true), Value::Int(1)).unwrap_err();
        assert_eq!(
            err,
            EvalError::Type(BinopTypeError::new("add", Value::Bool(true), Value::Int(1)))
        );
        assert_eq!(
            evaluate(Operator::Add, Value::Bool(false), Value::Null),
            Ok(Value::Bool(false))
        );
    }
}
