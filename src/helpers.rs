use serde_json::{Number, Value};

/// Tolerance for numeric comparisons. Two numbers closer than this are
/// considered the same value.
const CLOSENESS: f64 = 1e-8;

#[inline]
pub(crate) fn almost_equals(left: f64, right: f64) -> bool {
    (left - right).abs() <= CLOSENESS
}

#[inline]
pub(crate) fn as_f64(number: &Number) -> f64 {
    number.as_f64().unwrap_or(f64::NAN)
}

/// `true` for JSON integer tokens. `1.0` is parsed as a float and is not
/// an integer under Draft 4.
#[inline]
pub(crate) fn is_integer(number: &Number) -> bool {
    !number.is_f64()
}

/// Structural equality as used by `enum`.
///
/// Numbers compare by value with the closeness tolerance, so `1` equals
/// `1.0`. Booleans only ever equal booleans; `1 == true` does not hold.
/// Arrays are order-sensitive, objects are not.
pub(crate) fn equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(left), Value::Number(right)) => {
            if is_integer(left) && is_integer(right) {
                left == right
            } else {
                almost_equals(as_f64(left), as_f64(right))
            }
        }
        (Value::Array(left), Value::Array(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .zip(right.iter())
                    .all(|(left, right)| equal(left, right))
        }
        (Value::Object(left), Value::Object(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .all(|(key, value)| right.get(key).map_or(false, |other| equal(value, other)))
        }
        (left, right) => left == right,
    }
}
