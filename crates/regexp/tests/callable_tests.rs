//! A compiled pattern is just another callable: drive RegExp through the
//! generic dispatch surface.

use pretty_assertions::assert_eq;
use vega_function::{Call, FunctionRegistry};
use vega_regexp::{RegExp, RegExpFlags};
use vega_value::{ErrorKind, TypeId, Value};

#[test]
fn invoke_through_call_sugar() {
    let re = RegExp::new(r"(\d+)-(\d+)", RegExpFlags::new()).unwrap();

    let result = re.call1("range 10-25 units");
    let groups = result.as_list().unwrap();
    assert_eq!(groups.get(0).and_then(Value::as_str), Some("10-25"));
    assert_eq!(groups.get(1).and_then(Value::as_str), Some("10"));
    assert_eq!(groups.get(2).and_then(Value::as_str), Some("25"));

    assert_eq!(re.call1("no numbers here"), Value::null());
}

#[test]
fn offset_argument_through_sugar() {
    let re = RegExp::new("ab", RegExpFlags::new()).unwrap();
    assert!(re.call2("ab ab", 1).is_list());
    assert_eq!(re.call2("ab", 1), Value::null());
}

#[test]
fn bad_arguments_follow_the_error_vocabulary() {
    let re = RegExp::new("x", RegExpFlags::new()).unwrap();

    let no_args = re.call0();
    assert!(no_args.instance_of(TypeId::ERROR));
    assert_eq!(no_args.as_error().unwrap().kind(), ErrorKind::IllegalArgument);

    let bad_subject = re.call1(42);
    assert_eq!(
        bad_subject.as_error().unwrap().kind(),
        ErrorKind::IllegalArgument
    );

    let bad_offset = re.call2("text", -1);
    assert!(bad_offset.instance_of(TypeId::ERROR));
}

#[test]
fn patterns_register_alongside_native_functions() {
    let mut registry = FunctionRegistry::new();
    registry.register(
        "find_word",
        std::sync::Arc::new(RegExp::new(r"\w+", RegExpFlags::new()).unwrap()),
    );

    let mut args = vega_value::List::new();
    args.push("  hello");
    let result = registry.call("find_word", Some(&args));
    assert_eq!(
        result.as_list().and_then(|l| l.get(0)).and_then(Value::as_str),
        Some("hello")
    );
}

#[test]
fn pattern_value_type_tests() {
    let re = std::sync::Arc::new(RegExp::new("a", RegExpFlags::new()).unwrap());
    let as_value = Value::shared_object(re);
    assert!(as_value.instance_of(TypeId::FUNCTION));
    assert!(as_value.instance_of(TypeId::OBJECT));
    assert!(as_value.downcast_ref::<RegExp>().is_some());
    assert_eq!(as_value.to_string(), "/a/");
}
