//! Callable dispatch for vega values.
//!
//! This crate is the convenience surface over the canonical
//! [`Callable::invoke`](vega_value::Callable::invoke) entry point:
//!
//! - [`Call`] — fixed-arity call forms `call0` through `call9`, each
//!   building a fresh argument [`List`](vega_value::List) and forwarding
//!   to `invoke`.
//! - [`NativeFunction`] — wraps a plain Rust closure plus a name into a
//!   shared callable.
//! - [`FunctionRegistry`] — a named table of callables.
//!
//! Argument-validation helpers [`check_arg_count`] and
//! [`check_min_arg_count`] translate arity problems into the shared
//! error vocabulary.

pub mod call;
pub mod native;
pub mod registry;

pub use call::Call;
pub use native::NativeFunction;
pub use registry::FunctionRegistry;

use vega_value::{Error, List, Result};

/// Check that exactly `expected` arguments were supplied.
pub fn check_arg_count(func_name: &str, args: &List, expected: usize) -> Result<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(Error::illegal_argument(format!(
            "{func_name}: expected {expected} arguments, got {}",
            args.len()
        )))
    }
}

/// Check that at least `min` arguments were supplied.
pub fn check_min_arg_count(func_name: &str, args: &List, min: usize) -> Result<()> {
    if args.len() >= min {
        Ok(())
    } else {
        Err(Error::illegal_argument(format!(
            "{func_name}: expected at least {min} arguments, got {}",
            args.len()
        )))
    }
}
