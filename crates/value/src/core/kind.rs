//! Value kinds.
//!
//! `ValueKind` is a lightweight classification for [`Value`]: one variant
//! per built-in representation. Polymorphic objects all classify as
//! `Object`; their precise dynamic type lives in the
//! [`TypeRegistry`](crate::TypeRegistry).

use std::fmt;

use crate::core::value::Value;
use crate::types::TypeId;

/// Represents the kind of a Value
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ValueKind {
    Null,
    Boolean,
    Integer,
    Float,
    Text,
    List,
    Error,
    Object,
}

impl ValueKind {
    /// All built-in kinds
    pub fn all() -> [Self; 8] {
        [
            Self::Null,
            Self::Boolean,
            Self::Integer,
            Self::Float,
            Self::Text,
            Self::List,
            Self::Error,
            Self::Object,
        ]
    }

    /// Check if this kind is numeric
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }

    /// Check if this kind uses shared ownership for its payload
    pub const fn is_shared(&self) -> bool {
        matches!(self, Self::List | Self::Object)
    }

    /// Get the kind from a Value
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Boolean(_) => Self::Boolean,
            Value::Integer(_) => Self::Integer,
            Value::Float(_) => Self::Float,
            Value::Text(_) => Self::Text,
            Value::List(_) => Self::List,
            Value::Error(_) => Self::Error,
            Value::Object(_) => Self::Object,
        }
    }

    /// Get a descriptive name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Text => "text",
            Self::List => "list",
            Self::Error => "error",
            Self::Object => "object",
        }
    }

    /// The stable type identifier assigned to this kind
    pub const fn type_id(&self) -> TypeId {
        match self {
            Self::Null => TypeId::NULL,
            Self::Boolean => TypeId::BOOLEAN,
            Self::Integer => TypeId::INTEGER,
            Self::Float => TypeId::FLOAT,
            Self::Text => TypeId::TEXT,
            Self::List => TypeId::LIST,
            Self::Error => TypeId::ERROR,
            Self::Object => TypeId::OBJECT,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn kind_from_value() {
        assert_eq!(ValueKind::from_value(&Value::null()), ValueKind::Null);
        assert_eq!(ValueKind::from_value(&Value::integer(1)), ValueKind::Integer);
        assert_eq!(ValueKind::from_value(&Value::text("x")), ValueKind::Text);
    }

    #[test]
    fn numeric_and_shared_classification() {
        assert!(ValueKind::Integer.is_numeric());
        assert!(ValueKind::Float.is_numeric());
        assert!(!ValueKind::Text.is_numeric());
        assert!(ValueKind::List.is_shared());
        assert!(ValueKind::Object.is_shared());
        assert!(!ValueKind::Error.is_shared());
    }

    #[test]
    fn every_kind_has_a_distinct_type_id() {
        let mut ids: Vec<_> = ValueKind::all().iter().map(|k| k.type_id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), ValueKind::all().len());
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(ValueKind::Float.to_string(), "float");
        assert_eq!(ValueKind::Error.name(), "error");
    }
}
