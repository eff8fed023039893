//! Polymorphic objects.
//!
//! An [`Object`] is any user-defined type a [`Value`](crate::Value) can
//! hold by shared reference. Objects carry their registered [`TypeId`],
//! a textual representation, and two opt-in capabilities: being callable
//! (`as_callable`) and defining their own equality (`object_eq`, which
//! otherwise falls back to reference identity at the Value level).
//!
//! Downcasting is always checked: it returns an `Option`, never an
//! unchecked cast.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::callable::Callable;
use crate::types::{TypeId, TypeRegistry};

/// A polymorphic object representable as a `Value`.
///
/// Implementations report their registered type id and may override the
/// capability hooks. The `Any` supertrait makes checked downcasting
/// available to every object.
pub trait Object: Any + fmt::Debug + Send + Sync {
    /// The registered dynamic type of this object.
    ///
    /// Conventionally `TypeRegistry::of::<Self>()`.
    fn type_of(&self) -> TypeId;

    /// Human-readable name of the dynamic type.
    fn type_name(&self) -> String {
        TypeRegistry::name(self.type_of()).unwrap_or_else(|| String::from("object"))
    }

    /// Textual representation of this object.
    fn to_text(&self) -> String {
        format!("[object {}]", self.type_name())
    }

    /// The callable capability, when this object can be invoked.
    fn as_callable(&self) -> Option<&dyn Callable> {
        None
    }

    /// Custom equality hook.
    ///
    /// Returning `false` (the default) leaves comparison to reference
    /// identity.
    fn object_eq(&self, _other: &dyn Object) -> bool {
        false
    }
}

/// Shared-ownership handle to a polymorphic object.
pub type ObjectRef = Arc<dyn Object>;

/// Checked downcast of an object reference to a concrete type.
pub fn downcast_ref<T: Object>(object: &dyn Object) -> Option<&T> {
    let any: &dyn Any = object;
    any.downcast_ref::<T>()
}

/// Checked downcast of a shared handle, preserving shared ownership.
pub fn downcast_arc<T: Object>(object: &ObjectRef) -> Option<Arc<T>> {
    let any: Arc<dyn Any + Send + Sync> = object.clone();
    any.downcast::<T>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug)]
    struct Point {
        x: i64,
        y: i64,
    }

    impl Object for Point {
        fn type_of(&self) -> TypeId {
            TypeRegistry::of::<Point>()
        }

        fn object_eq(&self, other: &dyn Object) -> bool {
            downcast_ref::<Point>(other).is_some_and(|p| p.x == self.x && p.y == self.y)
        }
    }

    #[test]
    fn default_text_names_the_type() {
        let p = Point { x: 1, y: 2 };
        assert_eq!(p.to_text(), "[object Point]");
        assert_eq!(p.type_name(), "Point");
    }

    #[test]
    fn downcast_is_checked() {
        let p: ObjectRef = Arc::new(Point { x: 3, y: 4 });
        assert_eq!(downcast_ref::<Point>(p.as_ref()).map(|p| p.x), Some(3));

        #[derive(Debug)]
        struct Other;
        impl Object for Other {
            fn type_of(&self) -> TypeId {
                TypeRegistry::of::<Other>()
            }
        }
        assert!(downcast_ref::<Other>(p.as_ref()).is_none());
    }

    #[test]
    fn downcast_arc_shares_ownership() {
        let p: ObjectRef = Arc::new(Point { x: 5, y: 6 });
        let concrete = downcast_arc::<Point>(&p).unwrap();
        assert_eq!(concrete.y, 6);
        assert_eq!(Arc::strong_count(&concrete), 2);
    }

    #[test]
    fn object_eq_hook_overrides_identity() {
        let a = Point { x: 1, y: 1 };
        let b = Point { x: 1, y: 1 };
        let c = Point { x: 9, y: 9 };
        assert!(a.object_eq(&b));
        assert!(!a.object_eq(&c));
    }
}
