//! End-to-end tests for the callable contract: a summing callable driven
//! through the canonical invoke entry point, the fixed-arity sugar, and
//! the value-level type tests.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use vega_function::{Call, NativeFunction, check_min_arg_count};
use vega_value::{
    Callable, CallableExt, Error, ErrorKind, FunctionRef, List, Object, TypeId, TypeRegistry,
    Value, callable,
};

/// Sums its integer-convertible arguments; requires at least one.
#[derive(Debug)]
struct Add;

impl Add {
    fn create() -> FunctionRef {
        Arc::new(Add)
    }
}

impl Object for Add {
    fn type_of(&self) -> TypeId {
        TypeRegistry::of::<Add>()
    }

    fn to_text(&self) -> String {
        callable::function_text(self.name())
    }

    fn as_callable(&self) -> Option<&dyn Callable> {
        Some(self)
    }
}

impl Callable for Add {
    fn invoke(&self, args: Option<&List>) -> Value {
        let args = args.unwrap_or_else(|| List::empty());
        if args.is_empty() {
            return Value::error(Error::illegal_argument("add requires arguments"));
        }

        let mut sum = 0i64;
        for arg in args {
            match arg.to::<i64>() {
                Ok(n) => sum += n,
                Err(_) => return Value::error(Error::new(ErrorKind::IllegalArgument)),
            }
        }
        Value::integer(sum)
    }

    fn name(&self) -> &str {
        "add"
    }
}

#[test]
fn invoke_with_explicit_list() {
    let add = Add::create();
    let mut args = List::new();
    args.push(2);
    args.push(3);
    assert_eq!(add.invoke(Some(&args)), Value::integer(5));
}

#[test]
fn absent_arguments_type_test_as_error() {
    let add = Add::create();
    let result = add.invoke(None);
    assert!(result.instance_of(TypeId::ERROR));
    assert_eq!(result.as_error().unwrap().kind(), ErrorKind::IllegalArgument);
}

#[test]
fn call_ladder_sums_every_arity() {
    let add = Add::create();
    assert!(add.call0().instance_of(TypeId::ERROR));
    assert_eq!(add.call1(1), Value::integer(1));
    assert_eq!(add.call2(1, 2), Value::integer(3));
    assert_eq!(add.call3(1, 2, 3), Value::integer(6));
    assert_eq!(add.call4(1, 2, 3, 4), Value::integer(10));
    assert_eq!(add.call5(1, 2, 3, 4, 5), Value::integer(15));
    assert_eq!(add.call6(1, 2, 3, 4, 5, 6), Value::integer(21));
    assert_eq!(add.call7(1, 2, 3, 4, 5, 6, 7), Value::integer(28));
    assert_eq!(add.call8(1, 2, 3, 4, 5, 6, 7, 8), Value::integer(36));
    assert_eq!(add.call9(1, 2, 3, 4, 5, 6, 7, 8, 9), Value::integer(45));
}

#[test]
fn zero_arguments_and_empty_list_are_identical() {
    let add = Add::create();
    let empty = List::new();
    let via_empty = add.invoke(Some(&empty));
    let via_absent = add.invoke(None);
    let via_sugar = add.call0();

    assert_eq!(via_empty, via_absent);
    assert_eq!(via_empty, via_sugar);
    assert!(via_empty.is_error());
}

#[test]
fn non_numeric_argument_fails_validation() {
    let add = Add::create();
    let result = add.call3(1, "two", 3);
    assert!(result.instance_of(TypeId::ERROR));
    assert_eq!(result.as_error().unwrap().kind(), ErrorKind::IllegalArgument);

    // Floats convert by truncation, so mixed numerics still sum.
    assert_eq!(add.call2(1, 2.9), Value::integer(3));
}

#[test]
fn identity_comparison() {
    let add1 = Add::create();
    let add2 = Add::create();
    let alias = Arc::clone(&add1);

    assert_eq!(add1.compare_to(&alias), std::cmp::Ordering::Equal);
    assert_ne!(add1.compare_to(&add2), std::cmp::Ordering::Equal);
    assert!(add1.identity_eq(&alias));
    assert!(!add1.identity_eq(&add2));
}

#[test]
fn use_count_of_fresh_callable() {
    let add = Add::create();
    assert_eq!(Arc::strong_count(&add), 1);
    let as_value = Value::from(Arc::clone(&add));
    assert_eq!(Arc::strong_count(&add), 2);
    drop(as_value);
    assert_eq!(Arc::strong_count(&add), 1);
}

#[test]
fn text_form_derives_from_name() {
    let add = Add::create();
    assert_eq!(Value::from(add).to_string(), "function add() {}");
}

#[test]
fn callable_flows_through_value() {
    let add = Add::create();
    let as_value = Value::from(add);

    assert!(as_value.instance_of(TypeId::FUNCTION));
    assert!(as_value.instance_of(TypeId::OBJECT));
    assert_eq!(as_value.type_of(), TypeRegistry::of::<Add>());

    let callable = as_value.as_callable().unwrap();
    assert_eq!(callable.call2(20, 22), Value::integer(42));

    let concrete = as_value.downcast_ref::<Add>().unwrap();
    assert_eq!(concrete.name(), "add");
}

#[test]
fn native_function_matches_handwritten_callable() {
    let native = NativeFunction::new("add", |args| {
        check_min_arg_count("add", args, 1)?;
        let mut sum = 0i64;
        for arg in args {
            sum += arg.to::<i64>()?;
        }
        Ok(Value::integer(sum))
    });
    let handwritten = Add::create();

    assert_eq!(
        native.call9(1, 2, 3, 4, 5, 6, 7, 8, 9),
        handwritten.call9(1, 2, 3, 4, 5, 6, 7, 8, 9)
    );
    assert_eq!(native.call0(), handwritten.call0());
    assert_eq!(
        native.call1("nope").as_error().map(Error::kind),
        handwritten.call1("nope").as_error().map(Error::kind)
    );
}
