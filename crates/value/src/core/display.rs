//! Display implementation for Value
//!
//! Human-readable formatting for every variant: `null`, bare numbers with
//! `NaN`/`+Infinity`/`-Infinity` spelled out, unquoted text, bracketed
//! lists, and the object's own textual form.

use std::fmt;

use crate::core::value::Value;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),

            Value::Boolean(b) => write!(f, "{b}"),

            Value::Integer(i) => write!(f, "{i}"),

            Value::Float(fl) => {
                if fl.is_nan() {
                    write!(f, "NaN")
                } else if fl.is_infinite() {
                    let sign = if fl.is_sign_positive() { '+' } else { '-' };
                    write!(f, "{sign}Infinity")
                } else {
                    write!(f, "{fl}")
                }
            }

            Value::Text(t) => write!(f, "{t}"),

            Value::List(list) => {
                write!(f, "[")?;
                let mut first = true;
                for item in list.iter() {
                    if !first {
                        write!(f, ", ")?;
                    }
                    first = false;
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }

            Value::Error(e) => write!(f, "{e}"),

            Value::Object(obj) => write!(f, "{}", obj.to_text()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::list::List;
    use pretty_assertions::assert_eq;

    #[test]
    fn scalars() {
        assert_eq!(Value::null().to_string(), "null");
        assert_eq!(Value::boolean(true).to_string(), "true");
        assert_eq!(Value::integer(-3).to_string(), "-3");
        assert_eq!(Value::float(2.5).to_string(), "2.5");
        assert_eq!(Value::text("plain").to_string(), "plain");
    }

    #[test]
    fn non_finite_floats_are_spelled_out() {
        assert_eq!(Value::float(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::float(f64::INFINITY).to_string(), "+Infinity");
        assert_eq!(Value::float(f64::NEG_INFINITY).to_string(), "-Infinity");
    }

    #[test]
    fn lists_are_bracketed() {
        let mut list = List::new();
        list.push(1);
        list.push("two");
        list.push(Value::null());
        assert_eq!(Value::list(list).to_string(), "[1, two, null]");
        assert_eq!(Value::list(List::new()).to_string(), "[]");
    }

    #[test]
    fn errors_show_kind_and_message() {
        assert_eq!(
            Value::error(Error::illegal_argument("expected number")).to_string(),
            "illegal argument: expected number"
        );
    }
}
