//! Ordered value sequence — the universal argument-passing vehicle.
//!
//! `List` is an insertion-ordered, resizable sequence of [`Value`] backed
//! by a persistent vector (`im::Vector`), so cloning shares structure
//! instead of copying. A list embedded in a value (`Value::List`) is held
//! behind an `Arc` and jointly owned by everything holding that value.
//!
//! Mutation takes `&mut self`; iterating a list while mutating it is
//! therefore rejected at compile time rather than left undefined.

use im::Vector;
use once_cell::sync::Lazy;

use crate::core::value::Value;
use crate::error::{Error, Result};

/// Insertion-ordered sequence of values with cheap structural-sharing clones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct List {
    items: Vector<Value>,
}

static EMPTY: Lazy<List> = Lazy::new(List::new);

impl List {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            items: Vector::new(),
        }
    }

    /// A shared empty list, for call sites that need a borrowed default.
    pub fn empty() -> &'static List {
        &EMPTY
    }

    /// Create from a Vec
    pub fn from_vec(items: Vec<Value>) -> Self {
        Self {
            items: Vector::from(items),
        }
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a value at the end
    pub fn push(&mut self, value: impl Into<Value>) {
        self.items.push_back(value.into());
    }

    /// Element at `index`
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Element at `index`, or an out-of-range error when `index >= len()`
    pub fn try_get(&self, index: usize) -> Result<&Value> {
        self.get(index)
            .ok_or_else(|| Error::index_out_of_bounds(index, self.len()))
    }

    /// First element
    pub fn first(&self) -> Option<&Value> {
        self.items.front()
    }

    /// Last element
    pub fn last(&self) -> Option<&Value> {
        self.items.back()
    }

    /// Remove all elements
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Forward iterator over the current contents, in insertion order.
    ///
    /// The iterator is finite and yields each element exactly once; obtain
    /// a fresh one at any time to traverse again.
    pub fn iter(&self) -> im::vector::Iter<'_, Value> {
        self.items.iter()
    }
}

impl FromIterator<Value> for List {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<Value> for List {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl From<Vec<Value>> for List {
    fn from(items: Vec<Value>) -> Self {
        Self::from_vec(items)
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = im::vector::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = im::vector::ConsumingIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl std::ops::Index<usize> for List {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.items[index]
    }
}
