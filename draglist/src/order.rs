use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use crate::{ItemId, OrderError};

/// Moves the element at `from` to `to`, shifting everything in between by one slot.
///
/// Returns a new vector; `order` is left untouched.
///
/// # Panics
///
/// Panics if `from` or `to` is out of bounds. Callers are expected to clamp target rows before
/// reordering; use [`try_reorder`] to get an error instead.
pub fn reorder<K: Clone>(order: &[K], from: usize, to: usize) -> Vec<K> {
    match try_reorder(order, from, to) {
        Ok(out) => out,
        Err(err) => panic!("reorder: {err}"),
    }
}

/// Checked variant of [`reorder`].
pub fn try_reorder<K: Clone>(order: &[K], from: usize, to: usize) -> Result<Vec<K>, OrderError> {
    let len = order.len();
    for index in [from, to] {
        if index >= len {
            return Err(OrderError::IndexOutOfBounds { index, len });
        }
    }

    let mut out = order.to_vec();
    if from < to {
        out[from..=to].rotate_left(1);
    } else if to < from {
        out[to..=from].rotate_right(1);
    }
    Ok(out)
}

/// An immutable display order: every item exactly once.
///
/// Orders are shared snapshots. Reordering never mutates in place; it produces a new `Order`,
/// so renderers holding an older snapshot keep seeing a consistent permutation, and a change can
/// be detected cheaply with [`Order::ptr_eq`].
///
/// With `feature = "serde"`, this type (de)serializes as a plain sequence and rejects duplicates
/// on deserialization.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "Vec<K>", try_from = "Vec<K>"),
    serde(bound(
        serialize = "K: Clone + serde::Serialize",
        deserialize = "K: PartialEq + serde::Deserialize<'de>"
    ))
)]
pub struct Order<K = ItemId> {
    items: Arc<[K]>,
}

impl Order<ItemId> {
    /// The order `[0, 1, .., count - 1]`.
    pub fn identity(count: usize) -> Self {
        Self {
            items: (0..count).collect(),
        }
    }
}

impl<K> Order<K> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[K] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&K> {
        self.items.get(index)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, K> {
        self.items.iter()
    }

    /// Returns `true` when both orders are the very same snapshot.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.items, &b.items)
    }
}

impl<K: PartialEq> Order<K> {
    /// Builds an order from a sequence of distinct items.
    pub fn from_vec(items: Vec<K>) -> Result<Self, OrderError> {
        for (position, item) in items.iter().enumerate() {
            if items[..position].contains(item) {
                return Err(OrderError::DuplicateItem { position });
            }
        }
        Ok(Self {
            items: Arc::from(items),
        })
    }

    /// Row index of `item`, or `None` if it is not part of this order.
    pub fn index_of(&self, item: &K) -> Option<usize> {
        self.items.iter().position(|k| k == item)
    }

    pub fn contains(&self, item: &K) -> bool {
        self.index_of(item).is_some()
    }

    /// Returns `true` when `other` holds exactly the same items, in any order.
    pub fn is_permutation_of(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|item| other.contains(item))
    }
}

impl<K: Clone> Order<K> {
    /// Returns a new order with the item at `from` moved to `to`.
    ///
    /// When `from == to`, the returned order shares the same snapshot as `self`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn reorder(&self, from: usize, to: usize) -> Self {
        match self.try_reorder(from, to) {
            Ok(order) => order,
            Err(err) => panic!("Order::reorder: {err}"),
        }
    }

    /// Checked variant of [`Order::reorder`].
    pub fn try_reorder(&self, from: usize, to: usize) -> Result<Self, OrderError> {
        if from == to {
            if from >= self.len() {
                return Err(OrderError::IndexOutOfBounds {
                    index: from,
                    len: self.len(),
                });
            }
            return Ok(self.clone());
        }
        let items = try_reorder(&self.items, from, to)?;
        Ok(Self {
            items: Arc::from(items),
        })
    }

    pub fn to_vec(&self) -> Vec<K> {
        self.items.to_vec()
    }
}

impl<K> Clone for Order<K> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<K: PartialEq> PartialEq for Order<K> {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other) || self.items[..] == other.items[..]
    }
}

impl<K: Eq> Eq for Order<K> {}

impl<K: fmt::Debug> fmt::Debug for Order<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<K: PartialEq> TryFrom<Vec<K>> for Order<K> {
    type Error = OrderError;

    fn try_from(items: Vec<K>) -> Result<Self, Self::Error> {
        Self::from_vec(items)
    }
}

impl<K: Clone> From<Order<K>> for Vec<K> {
    fn from(order: Order<K>) -> Self {
        order.to_vec()
    }
}

impl<'a, K> IntoIterator for &'a Order<K> {
    type Item = &'a K;
    type IntoIter = core::slice::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
