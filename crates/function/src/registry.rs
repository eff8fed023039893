//! Named function registry.
//!
//! A `FunctionRegistry` maps names to shared callables so heterogeneous
//! capabilities — native closures, user objects, external collaborators —
//! are invocable through one table. Lookup failure follows the error
//! vocabulary of the model: calling an unknown name returns an
//! unsupported-operation error value.

use std::collections::HashMap;

use vega_value::{Error, FunctionRef, List, Value};

/// Registry of named callables.
#[derive(Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, FunctionRef>,
}

impl FunctionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// Register a callable under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, func: FunctionRef) {
        let name = name.into();
        tracing::trace!(function = %name, "registered function");
        self.functions.insert(name, func);
    }

    /// Look up a callable by name
    pub fn get(&self, name: &str) -> Option<&FunctionRef> {
        self.functions.get(name)
    }

    /// Check if a function exists
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// All registered names
    pub fn names(&self) -> Vec<String> {
        self.functions.keys().cloned().collect()
    }

    /// Invoke the callable registered under `name`.
    ///
    /// Unknown names produce an `UnsupportedOperation` error value rather
    /// than a separate error channel.
    pub fn call(&self, name: &str, args: Option<&List>) -> Value {
        match self.functions.get(name) {
            Some(func) => func.invoke(args),
            None => Value::error(Error::unsupported_operation(format!(
                "unknown function: {name}"
            ))),
        }
    }
}

impl std::fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("functions", &self.names())
            .finish()
    }
}
