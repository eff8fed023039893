//! Native function wrapper.
//!
//! `NativeFunction` turns a plain Rust closure into a shared [`Callable`]:
//! the closure works with `Result`, and `invoke` translates a failure into
//! an error value, keeping the error-as-value propagation of the model.

use std::fmt;
use std::sync::Arc;

use vega_value::{
    Callable, FunctionRef, List, Object, Result, TypeId, TypeRegistry, Value, callable,
};

type NativeFnInner = dyn Fn(&List) -> Result<Value> + Send + Sync;

/// A named callable backed by a Rust closure.
pub struct NativeFunction {
    name: String,
    func: Box<NativeFnInner>,
}

impl NativeFunction {
    /// Wrap `func` under `name`, returning a shared callable handle.
    pub fn new(
        name: impl Into<String>,
        func: impl Fn(&List) -> Result<Value> + Send + Sync + 'static,
    ) -> FunctionRef {
        Arc::new(Self {
            name: name.into(),
            func: Box::new(func),
        })
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeFunction({})", self.name)
    }
}

impl Object for NativeFunction {
    fn type_of(&self) -> TypeId {
        TypeRegistry::of::<NativeFunction>()
    }

    fn to_text(&self) -> String {
        callable::function_text(&self.name)
    }

    fn as_callable(&self) -> Option<&dyn Callable> {
        Some(self)
    }
}

impl Callable for NativeFunction {
    fn invoke(&self, args: Option<&List>) -> Value {
        let args = args.unwrap_or_else(|| List::empty());
        match (self.func)(args) {
            Ok(value) => value,
            Err(error) => Value::Error(error),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Call, check_min_arg_count};
    use pretty_assertions::assert_eq;
    use vega_value::{Error, ErrorKind};

    fn concat() -> FunctionRef {
        NativeFunction::new("concat", |args| {
            let mut out = String::new();
            for arg in args {
                out.push_str(
                    arg.as_str()
                        .ok_or_else(|| Error::illegal_argument("concat takes text"))?,
                );
            }
            Ok(Value::text(out))
        })
    }

    #[test]
    fn closure_result_becomes_value() {
        let f = concat();
        assert_eq!(f.call2("ab", "cd").as_str(), Some("abcd"));
    }

    #[test]
    fn closure_error_becomes_error_value() {
        let f = concat();
        let result = f.call2("ab", 5);
        assert!(result.instance_of(TypeId::ERROR));
        assert_eq!(result.as_error().unwrap().kind(), ErrorKind::IllegalArgument);
    }

    #[test]
    fn absent_arguments_are_an_empty_list() {
        let min_one = NativeFunction::new("min_one", |args| {
            check_min_arg_count("min_one", args, 1)?;
            Ok(Value::boolean(true))
        });
        let absent = min_one.invoke(None);
        let empty = min_one.invoke(Some(&List::new()));
        assert_eq!(absent, empty);
        assert!(absent.is_error());
    }

    #[test]
    fn text_form_is_js_like() {
        let f = concat();
        let as_value = Value::from(Arc::clone(&f));
        assert_eq!(as_value.to_string(), "function concat() {}");
        assert!(as_value.instance_of(TypeId::FUNCTION));
    }
}
