//! JSON conversion for Value
//!
//! Extension-trait based conversion between [`Value`] and
//! `serde_json::Value`, gated behind the `serde` feature. The value model
//! has no map variant, so JSON objects do not convert; everything else
//! round-trips.

use crate::core::value::Value;
use crate::error::{Error, Result};
use crate::list::List;

/// Extension trait for `&Value` providing conversion to `serde_json::Value`.
pub trait ValueRefExt {
    /// Convert a reference to Value into `serde_json::Value`.
    ///
    /// Errors and objects have no JSON shape of their own and are rendered
    /// as their textual forms; non-finite floats become JSON null.
    fn to_json(&self) -> serde_json::Value;
}

impl ValueRefExt for Value {
    fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Boolean(b) => serde_json::Value::Bool(*b),
            Value::Integer(i) => serde_json::Value::Number((*i).into()),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Text(t) => serde_json::Value::String(t.as_str().to_string()),
            Value::List(list) => {
                let mut vec = Vec::with_capacity(list.len());
                vec.extend(list.iter().map(ValueRefExt::to_json));
                serde_json::Value::Array(vec)
            }
            Value::Error(e) => serde_json::Value::String(e.to_string()),
            Value::Object(obj) => serde_json::Value::String(obj.to_text()),
        }
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = Error;

    fn try_from(json: serde_json::Value) -> Result<Self> {
        match json {
            serde_json::Value::Null => Ok(Value::Null),
            serde_json::Value::Bool(b) => Ok(Value::Boolean(b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::integer(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(Value::float(f))
                } else {
                    Err(Error::numeric_out_of_range(n, "i64 or f64"))
                }
            }
            serde_json::Value::String(s) => Ok(Value::text(s)),
            serde_json::Value::Array(items) => {
                let mut list = List::new();
                for item in items {
                    list.push(Value::try_from(item)?);
                }
                Ok(Value::list(list))
            }
            serde_json::Value::Object(_) => Err(Error::with_message(
                crate::ErrorKind::UnsupportedOperation,
                "JSON objects have no value-model representation",
            )),
        }
    }
}
