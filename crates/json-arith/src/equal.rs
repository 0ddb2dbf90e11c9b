//! Structural equality over [`Value`] trees.

use crate::value::Value;

/// Structural equality over the whole value tree.
///
/// - Kinds must match: `Int(1)` and `Float(1.0)` are different values.
/// - Sequences compare element-by-element, in order.
/// - Mappings compare key-by-key; insertion order does not matter.
///
/// Floats compare with IEEE semantics, so `NaN` never equals itself.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Float(a), Value::Float(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,

        (Value::Sequence(seq_a), Value::Sequence(seq_b)) => {
            seq_a.len() == seq_b.len()
                && seq_a.iter().zip(seq_b).all(|(x, y)| deep_equal(x, y))
        }

        (Value::Mapping(map_a), Value::Mapping(map_b)) => {
            if map_a.len() != map_b.len() {
                return false;
            }
            for (key, val_a) in map_a {
                match map_b.get(key) {
                    Some(val_b) => {
                        if !deep_equal(val_a, val_b) {
                            return false;
                        }
                    }
                    None => return false,
                }
            }
            true
        }

        _ => false,
    }
}
