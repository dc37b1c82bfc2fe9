use crate::Value;

/// Performs a deep equality check between two dynamic values.
///
/// Numbers compare with `==`, so `NaN` never equals itself. Functions
/// compare by identity. Records compare by key set and per-key deep
/// equality, regardless of insertion order.
///
/// # Examples
///
/// ```
/// use random_streams_value::{deep_equal, Value};
///
/// let a = Value::from(vec![1u32, 2, 3]);
/// let b = Value::from(vec![1u32, 2, 3]);
/// let c = Value::from(vec![Value::from(1), Value::from(2), Value::from(3)]);
///
/// assert!(deep_equal(&a, &b));
/// assert!(!deep_equal(&a, &c));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) => true,
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,

        (Value::Uint32Array(a), Value::Uint32Array(b)) => a == b,

        (Value::Array(arr_a), Value::Array(arr_b)) => {
            arr_a.len() == arr_b.len()
                && arr_a
                    .iter()
                    .zip(arr_b.iter())
                    .all(|(x, y)| deep_equal(x, y))
        }

        (Value::Object(obj_a), Value::Object(obj_b)) => obj_a == obj_b,

        (Value::Function(a), Value::Function(b)) => a.same_fn(b),

        // Different types are never equal
        _ => false,
    }
}
