//! Fallible narrowing from Value to concrete Rust types.
//!
//! Conversions are directed and explicit: `TryFrom<&Value>` is implemented
//! per target type, and [`Value::to`] dispatches to them generically.
//! Failure is a returned [`Error`] — `TypeMismatch` when the active variant
//! cannot serve the target at all, `OutOfRange` when a numeric source does
//! not fit. A failed conversion never modifies the source and never
//! coerces: there is no truthy/falsy interpretation here.
//!
//! Numeric policy: integral targets accept `Integer` sources with a range
//! check and `Float` sources by truncation toward zero; out-of-range and
//! non-finite sources fail rather than wrap or saturate.

use std::sync::Arc;

use crate::core::value::Value;
use crate::error::{Error, Result};
use crate::list::List;
use crate::object::ObjectRef;
use crate::text::Text;

// One past i64::MAX / one below i64::MIN, exactly representable in f64.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Truncate a float toward zero if the result fits in i64.
fn float_to_i64(f: f64) -> Result<i64> {
    if !f.is_finite() {
        return Err(Error::numeric_out_of_range(f, "i64"));
    }
    let truncated = f.trunc();
    if (-I64_BOUND..I64_BOUND).contains(&truncated) {
        Ok(truncated as i64)
    } else {
        Err(Error::numeric_out_of_range(f, "i64"))
    }
}

impl Value {
    /// Narrow to a concrete type.
    ///
    /// Generic front end over the `TryFrom<&Value>` impls below:
    /// `v.to::<i64>()`, `v.to::<String>()`, and so on.
    pub fn to<T>(&self) -> Result<T>
    where
        T: for<'a> TryFrom<&'a Value, Error = Error>,
    {
        T::try_from(self)
    }
}

impl TryFrom<&Value> for bool {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        value
            .as_boolean()
            .ok_or_else(|| Error::type_mismatch("boolean", value.kind()))
    }
}

impl TryFrom<&Value> for i64 {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Integer(i) => Ok(*i),
            Value::Float(f) => float_to_i64(*f),
            _ => Err(Error::type_mismatch("integer", value.kind())),
        }
    }
}

impl TryFrom<&Value> for i32 {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        let wide = i64::try_from(value)?;
        i32::try_from(wide).map_err(|_| Error::numeric_out_of_range(wide, "i32"))
    }
}

impl TryFrom<&Value> for u32 {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        let wide = i64::try_from(value)?;
        u32::try_from(wide).map_err(|_| Error::numeric_out_of_range(wide, "u32"))
    }
}

impl TryFrom<&Value> for u64 {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        let wide = i64::try_from(value)?;
        u64::try_from(wide).map_err(|_| Error::numeric_out_of_range(wide, "u64"))
    }
}

impl TryFrom<&Value> for f64 {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        value
            .as_number()
            .ok_or_else(|| Error::type_mismatch("float", value.kind()))
    }
}

impl TryFrom<&Value> for f32 {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        f64::try_from(value).map(|f| f as f32)
    }
}

impl TryFrom<&Value> for String {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| Error::type_mismatch("text", value.kind()))
    }
}

impl TryFrom<&Value> for Text {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        value
            .as_text()
            .cloned()
            .ok_or_else(|| Error::type_mismatch("text", value.kind()))
    }
}

impl TryFrom<&Value> for Arc<List> {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::List(l) => Ok(Arc::clone(l)),
            _ => Err(Error::type_mismatch("list", value.kind())),
        }
    }
}

impl TryFrom<&Value> for ObjectRef {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Object(o) => Ok(Arc::clone(o)),
            _ => Err(Error::type_mismatch("object", value.kind())),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        i64::try_from(&value)
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        f64::try_from(&value)
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        String::try_from(&value)
    }
}
