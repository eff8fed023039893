//! Runtime type identifiers and the process-wide type registry.
//!
//! Every representable kind — the built-in [`Value`](crate::Value) variants
//! and any user-defined [`Object`](crate::Object) type — carries a stable
//! [`TypeId`] usable for runtime type tests and for selecting a conversion
//! routine. Built-in kinds own fixed identifiers; object types are assigned
//! one lazily the first time [`TypeRegistry::of`] sees them.
//!
//! The registry is process-wide, write-once-per-type, read-many: entries
//! are immutable once created and there is no teardown. Concurrent first
//! use of the same type from multiple threads yields a single identifier.

use std::any::{Any, type_name};
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use dashmap::DashMap;
use once_cell::sync::Lazy;

/// Stable runtime identifier for a representable kind.
///
/// Identifiers below [`TypeId::FIRST_DYNAMIC`] are reserved for built-in
/// kinds and capabilities; everything above is handed out sequentially to
/// registered object types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeId(u32);

impl TypeId {
    pub const NULL: TypeId = TypeId(0);
    pub const BOOLEAN: TypeId = TypeId(1);
    pub const INTEGER: TypeId = TypeId(2);
    pub const FLOAT: TypeId = TypeId(3);
    pub const TEXT: TypeId = TypeId(4);
    pub const LIST: TypeId = TypeId(5);
    pub const ERROR: TypeId = TypeId(6);
    /// Capability id: any polymorphic object satisfies it.
    pub const OBJECT: TypeId = TypeId(7);
    /// Capability id: objects implementing `Callable` satisfy it.
    pub const FUNCTION: TypeId = TypeId(8);

    /// First identifier available to dynamically registered types.
    pub const FIRST_DYNAMIC: u32 = 16;

    /// The raw numeric identifier.
    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }

    /// Whether this id names a built-in kind or capability.
    #[inline]
    pub fn is_builtin(self) -> bool {
        self.0 < Self::FIRST_DYNAMIC
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match TypeRegistry::name(*self) {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "type#{}", self.0),
        }
    }
}

/// Process-wide assignment of stable identifiers to representable kinds.
///
/// Registration is atomically idempotent: the entry for a given Rust type
/// is created at most once, no matter how many threads race on first use.
pub struct TypeRegistry {
    ids: DashMap<std::any::TypeId, TypeId>,
    names: DashMap<TypeId, String>,
    next: AtomicU32,
}

static REGISTRY: Lazy<TypeRegistry> = Lazy::new(TypeRegistry::with_builtins);

impl TypeRegistry {
    fn with_builtins() -> Self {
        let registry = Self {
            ids: DashMap::new(),
            names: DashMap::new(),
            next: AtomicU32::new(TypeId::FIRST_DYNAMIC),
        };
        for kind in crate::ValueKind::all() {
            registry.names.insert(kind.type_id(), kind.name().to_string());
        }
        registry.names.insert(TypeId::FUNCTION, "function".to_string());
        registry
    }

    /// The global registry instance.
    pub fn global() -> &'static TypeRegistry {
        &REGISTRY
    }

    /// Identifier for `T`, registering it under `name` on first use.
    ///
    /// Repeat registration is a no-op returning the original identifier;
    /// a later registration under a different name keeps the first name.
    pub fn register<T: Any>(name: &str) -> TypeId {
        let registry = Self::global();
        *registry
            .ids
            .entry(std::any::TypeId::of::<T>())
            .or_insert_with(|| {
                let id = TypeId(registry.next.fetch_add(1, Ordering::Relaxed));
                registry.names.insert(id, name.to_string());
                tracing::trace!(type_name = name, id = id.raw(), "registered object type");
                id
            })
    }

    /// Identifier for `T`, registering it on first use under its short
    /// Rust type name.
    pub fn of<T: Any>() -> TypeId {
        Self::register::<T>(short_name(type_name::<T>()))
    }

    /// Human-readable name recorded for `id`, if any.
    pub fn name(id: TypeId) -> Option<String> {
        Self::global().names.get(&id).map(|entry| entry.value().clone())
    }

    /// Number of dynamically registered types.
    pub fn registered_count() -> usize {
        Self::global().ids.len()
    }
}

/// Last path segment of a fully-qualified type name.
fn short_name(full: &str) -> &str {
    full.rsplit("::").next().unwrap_or(full)
}
