//! The callable capability.
//!
//! A [`Callable`] is an [`Object`] that can be invoked with an ordered
//! argument list and produces a [`Value`]. There is exactly one canonical
//! invocation entry point, [`Callable::invoke`]; the fixed-arity `call0`
//! through `call9` sugar in `vega-function` builds argument lists and
//! forwards here.
//!
//! Invocation never panics over argument problems: validation and
//! conversion failures come back as `Value::Error`.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::core::value::Value;
use crate::list::List;
use crate::object::Object;

/// An object invocable with an argument list.
pub trait Callable: Object {
    /// Invoke with the given arguments.
    ///
    /// An absent argument list is equivalent to an empty one; use
    /// [`List::empty`] as the borrowed default. Failures are returned as
    /// `Value::Error`, never raised.
    fn invoke(&self, args: Option<&List>) -> Value;

    /// Declared name of this callable. Empty is permitted.
    fn name(&self) -> &str {
        ""
    }
}

/// Shared-ownership handle to a callable.
pub type FunctionRef = Arc<dyn Callable>;

/// The JS-like fixed textual form of a function, derived from its name.
pub fn function_text(name: &str) -> String {
    format!("function {name}() {{}}")
}

/// Identity comparison for shared callables.
///
/// Two distinct instances compare unequal even if behaviorally identical;
/// an instance compared with itself is equal. The ordering is total but
/// arbitrary (allocation address), useful only as an identity key.
pub trait CallableExt {
    /// Whether both handles refer to the same instance.
    fn identity_eq(&self, other: &FunctionRef) -> bool;

    /// Identity ordering; `Ordering::Equal` iff `identity_eq`.
    fn compare_to(&self, other: &FunctionRef) -> Ordering;
}

impl CallableExt for FunctionRef {
    fn identity_eq(&self, other: &FunctionRef) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(self), Arc::as_ptr(other))
    }

    fn compare_to(&self, other: &FunctionRef) -> Ordering {
        let lhs = Arc::as_ptr(self) as *const () as usize;
        let rhs = Arc::as_ptr(other) as *const () as usize;
        lhs.cmp(&rhs)
    }
}
