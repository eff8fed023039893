//! Dynamic value model for vega.
//!
//! This crate lets statically-typed Rust host values and functions with
//! dynamic calling conventions: a type-erased [`Value`] flows through
//! generic containers and calls without compile-time knowledge of its
//! concrete type, type mismatches are recoverable [`Error`] values rather
//! than panics, and any [`Object`] implementing [`Callable`] can be invoked
//! with an ordered [`List`] of arguments.
//!
//! ## Core components
//!
//! - [`Value`] — closed union over null, boolean, integer, float, text,
//!   list, error, and polymorphic object. Cheap to clone; the list and
//!   object variants use shared ownership.
//! - [`TypeRegistry`] / [`TypeId`] — process-wide, write-once-per-type
//!   assignment of stable identifiers to every representable kind, built-in
//!   or user-defined.
//! - Conversions — `TryFrom<&Value>` narrowings plus [`Value::to`], failing
//!   with a typed [`Error`] instead of coercing.
//! - [`Error`] / [`ErrorKind`] — recoverable failures carried as ordinary
//!   values.
//! - [`List`] — the ordered, resizable argument vehicle.
//! - [`Object`] / [`Callable`] — the polymorphic capability surface.

pub mod callable;
pub mod core;
pub mod error;
pub mod list;
pub mod object;
pub mod text;
pub mod types;

pub use crate::callable::{Callable, CallableExt, FunctionRef};
pub use crate::core::kind::ValueKind;
pub use crate::core::value::Value;
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::list::List;
pub use crate::object::{Object, ObjectRef};
pub use crate::text::Text;
pub use crate::types::{TypeId, TypeRegistry};

#[cfg(feature = "serde")]
pub use crate::core::serde::ValueRefExt;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Callable, CallableExt, Error, ErrorKind, FunctionRef, List, Object, ObjectRef, Result,
        Text, TypeId, TypeRegistry, Value, ValueKind,
    };
}
