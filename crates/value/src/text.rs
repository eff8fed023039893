//! Text (UTF-8 string) type for vega-value
//!
//! This module provides a Text type that:
//! - Guarantees UTF-8 validity
//! - Efficient cloning via `Arc<str>`
//! - Zero-copy conversions where possible

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// UTF-8 text with efficient cloning
///
/// Uses `Arc<str>` internally so cloning a large string is a reference-count
/// bump, never a copy.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Text {
    inner: Arc<str>,
}

impl Text {
    /// Create a new Text from anything string-like
    pub fn new(s: impl Into<Arc<str>>) -> Self {
        Self { inner: s.into() }
    }

    /// Get the string as `&str`
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Get the byte length
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Number of additional owners of the underlying allocation
    pub fn owner_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl Deref for Text {
    type Target = str;

    fn deref(&self) -> &str {
        &self.inner
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<Text> for String {
    fn from(t: Text) -> Self {
        t.as_str().to_string()
    }
}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
