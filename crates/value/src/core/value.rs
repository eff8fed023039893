//! The unified Value enum.
//!
//! `Value` is the universal, type-erased holder the rest of the system is
//! built on: exactly one variant is active at a time, cloning is cheap,
//! and the list/object variants share ownership of their payload — the
//! underlying data is destroyed only when the last owner drops.

use std::sync::Arc;

use static_assertions::{assert_impl_all, const_assert};

use crate::callable::{Callable, FunctionRef};
use crate::core::kind::ValueKind;
use crate::error::Error;
use crate::list::List;
use crate::object::{self, Object, ObjectRef};
use crate::text::Text;
use crate::types::TypeId;

/// Unified value type: null, boolean, integer, float, text, list, error,
/// or a reference to a polymorphic object (which may itself be callable).
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Null/absent value
    #[default]
    Null,

    /// Boolean value
    Boolean(bool),

    /// Integer number (i64)
    Integer(i64),

    /// Floating point number (f64)
    Float(f64),

    /// UTF-8 text
    Text(Text),

    /// Shared ordered collection of values
    List(Arc<List>),

    /// Recoverable failure, carried as a value
    Error(Error),

    /// Shared polymorphic object
    Object(ObjectRef),
}

// Keep the payload small enough that a Value moves in four machine words.
const_assert!(std::mem::size_of::<Value>() <= 32);
assert_impl_all!(Value: Send, Sync, Clone);

impl Value {
    // ==================== Constructors ====================

    /// Create a null value
    pub const fn null() -> Self {
        Self::Null
    }

    /// Create a boolean value
    pub const fn boolean(v: bool) -> Self {
        Self::Boolean(v)
    }

    /// Create an integer value
    pub const fn integer(v: i64) -> Self {
        Self::Integer(v)
    }

    /// Create a float value
    pub const fn float(v: f64) -> Self {
        Self::Float(v)
    }

    /// Create a text value
    pub fn text(v: impl Into<Text>) -> Self {
        Self::Text(v.into())
    }

    /// Create a list value, taking sole initial ownership
    pub fn list(v: List) -> Self {
        Self::List(Arc::new(v))
    }

    /// Create a list value sharing an existing allocation
    pub fn shared_list(v: Arc<List>) -> Self {
        Self::List(v)
    }

    /// Create an error value
    pub fn error(v: impl Into<Error>) -> Self {
        Self::Error(v.into())
    }

    /// Create an object value, taking sole initial ownership
    pub fn object(v: impl Object) -> Self {
        Self::Object(Arc::new(v))
    }

    /// Create an object value sharing an existing handle
    pub fn shared_object(v: ObjectRef) -> Self {
        Self::Object(v)
    }

    // ==================== Type queries ====================

    /// Get the kind of this value
    #[inline]
    pub fn kind(&self) -> ValueKind {
        ValueKind::from_value(self)
    }

    /// The registered type identifier of the active variant.
    ///
    /// For object values this is the referenced object's dynamic type, not
    /// the generic object id.
    pub fn type_of(&self) -> TypeId {
        match self {
            Self::Object(obj) => obj.type_of(),
            other => other.kind().type_id(),
        }
    }

    /// Runtime type test.
    ///
    /// True iff `type_of()` equals `id`, or — for object values — the
    /// referenced object's dynamic type is `id` or a capability it
    /// implements ([`TypeId::OBJECT`] always; [`TypeId::FUNCTION`] when the
    /// object is callable).
    pub fn instance_of(&self, id: TypeId) -> bool {
        match self {
            Self::Object(obj) => {
                id == TypeId::OBJECT
                    || obj.type_of() == id
                    || (id == TypeId::FUNCTION && obj.as_callable().is_some())
            }
            other => other.type_of() == id,
        }
    }

    /// Check if null
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if boolean
    #[inline]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(_))
    }

    /// Check if integer
    #[inline]
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// Check if float
    #[inline]
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Check if integer or float
    #[inline]
    pub fn is_numeric(&self) -> bool {
        self.kind().is_numeric()
    }

    /// Check if text
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Check if list
    #[inline]
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Check if error
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Check if object
    #[inline]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    // ==================== Accessors ====================

    /// Boolean payload, if active
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Integer payload, if active
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Float payload, if active
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Either numeric payload, widened to f64
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Text payload as `&str`, if active
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t.as_str()),
            _ => None,
        }
    }

    /// Text payload, if active
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Self::Text(t) => Some(t),
            _ => None,
        }
    }

    /// List payload, if active
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    /// Error payload, if active
    pub fn as_error(&self) -> Option<&Error> {
        match self {
            Self::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Object payload, if active
    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// The callable capability of an object value, if present
    pub fn as_callable(&self) -> Option<&dyn Callable> {
        match self {
            Self::Object(o) => o.as_callable(),
            _ => None,
        }
    }

    /// Checked downcast of an object value to a concrete type
    pub fn downcast_ref<T: Object>(&self) -> Option<&T> {
        match self {
            Self::Object(o) => object::downcast_ref::<T>(o.as_ref()),
            _ => None,
        }
    }

    /// Checked downcast of an object value, preserving shared ownership
    pub fn downcast_arc<T: Object>(&self) -> Option<Arc<T>> {
        match self {
            Self::Object(o) => object::downcast_arc::<T>(o),
            _ => None,
        }
    }

    // ==================== Identity ====================

    /// Reference identity for the shared variants.
    ///
    /// True iff both values are lists or both are objects referring to the
    /// same allocation. Always false for unshared variants.
    pub fn ref_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::List(a), Self::List(b)) => Arc::ptr_eq(a, b),
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Per-variant equality.
///
/// Numeric values compare by value across the integer/float divide; text
/// by content; errors by kind; lists and objects by reference identity,
/// except where the object type overrides comparison via
/// [`Object::object_eq`].
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Integer(a), Self::Float(b)) | (Self::Float(b), Self::Integer(a)) => {
                (*a as f64) == *b
            }
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Error(a), Self::Error(b)) => a == b,
            (Self::List(a), Self::List(b)) => Arc::ptr_eq(a, b),
            (Self::Object(a), Self::Object(b)) => {
                Arc::ptr_eq(a, b) || a.object_eq(b.as_ref())
            }
            _ => false,
        }
    }
}

/// Per-variant ordering: numeric, boolean, text, and null pairings are
/// ordered; everything else is incomparable.
impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        match (self, other) {
            (Self::Null, Self::Null) => Some(std::cmp::Ordering::Equal),
            (Self::Boolean(a), Self::Boolean(b)) => a.partial_cmp(b),
            (Self::Integer(a), Self::Integer(b)) => a.partial_cmp(b),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b),
            (Self::Integer(a), Self::Float(b)) => (*a as f64).partial_cmp(b),
            (Self::Float(a), Self::Integer(b)) => a.partial_cmp(&(*b as f64)),
            (Self::Text(a), Self::Text(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

// ==================== From impls ====================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(Text::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(Text::from(v))
    }
}

impl From<Text> for Value {
    fn from(v: Text) -> Self {
        Self::Text(v)
    }
}

impl From<List> for Value {
    fn from(v: List) -> Self {
        Self::List(Arc::new(v))
    }
}

impl From<Arc<List>> for Value {
    fn from(v: Arc<List>) -> Self {
        Self::List(v)
    }
}

impl From<Error> for Value {
    fn from(v: Error) -> Self {
        Self::Error(v)
    }
}

impl From<crate::ErrorKind> for Value {
    fn from(v: crate::ErrorKind) -> Self {
        Self::Error(Error::new(v))
    }
}

impl From<ObjectRef> for Value {
    fn from(v: ObjectRef) -> Self {
        Self::Object(v)
    }
}

impl From<FunctionRef> for Value {
    fn from(v: FunctionRef) -> Self {
        let object: ObjectRef = v;
        Self::Object(object)
    }
}
