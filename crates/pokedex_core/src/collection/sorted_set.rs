//! Vec-backed sorted set with an injectable ordering.
//!
//! # Responsibility
//! - Keep a duplicate-free sequence of elements.
//! - Re-sort on batch inserts and produce sorted/filtered/ranged views.
//!
//! # Invariants
//! - No two `==` elements are stored at the same time.
//! - Backing order matches the active ordering only right after `add_all`,
//!   `sort` or `filter`. A single `add` appends without re-sorting, so
//!   `first`, `last` and the range views read the backing order as-is.
//! - `sort`, `filter` and range views never mutate the receiver.

use log::trace;
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::ops::Range;
use std::sync::Arc;

/// Shared ordering function injected at construction time.
pub type Comparator<E> = Arc<dyn Fn(&E, &E) -> Ordering + Send + Sync>;

pub type SetResult<T> = Result<T, SetError>;

/// Contract violations reported by positional set operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetError {
    /// A boundary element is not present in the set.
    NotFound,
    /// `first`/`last` was called on an empty set.
    Empty,
    /// The lower bound sits after the upper bound in backing order.
    InvalidRange { from: usize, to: usize },
}

impl Display for SetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "boundary element is not in the set"),
            Self::Empty => write!(f, "set is empty"),
            Self::InvalidRange { from, to } => {
                write!(f, "invalid range: from position {from} is after to position {to}")
            }
        }
    }
}

impl Error for SetError {}

/// Duplicate-free container ordered by `E: Ord` or by an injected comparator.
#[derive(Clone)]
pub struct SortedSet<E> {
    elems: Vec<E>,
    comparator: Option<Comparator<E>>,
}

impl<E> Default for SortedSet<E> {
    fn default() -> Self {
        Self {
            elems: Vec::new(),
            comparator: None,
        }
    }
}

impl<E> SortedSet<E> {
    /// Creates an empty set using `E`'s natural ordering.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty set ordered by `comparator`.
    pub fn with_comparator<F>(comparator: F) -> Self
    where
        F: Fn(&E, &E) -> Ordering + Send + Sync + 'static,
    {
        let comparator: Comparator<E> = Arc::new(comparator);
        Self::with_shared_comparator(Some(comparator))
    }

    fn with_shared_comparator(comparator: Option<Comparator<E>>) -> Self {
        Self {
            elems: Vec::new(),
            comparator,
        }
    }

    /// Returns the injected ordering, or `None` for natural ordering.
    pub fn comparator(&self) -> Option<&Comparator<E>> {
        self.comparator.as_ref()
    }

    pub fn len(&self) -> usize {
        self.elems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    pub fn clear(&mut self) {
        self.elems.clear();
    }

    /// Returns the element at backing position 0.
    ///
    /// This is the comparator-minimal element only if the set was just
    /// produced or re-sorted by `add_all`, `sort` or `filter`.
    pub fn first(&self) -> SetResult<&E> {
        self.elems.first().ok_or(SetError::Empty)
    }

    /// Returns the element at the last backing position.
    ///
    /// Same staleness caveat as `first`.
    pub fn last(&self) -> SetResult<&E> {
        self.elems.last().ok_or(SetError::Empty)
    }

    /// Iterates in backing order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.elems.iter()
    }

    pub fn as_slice(&self) -> &[E] {
        &self.elems
    }
}

impl<E: Ord> SortedSet<E> {
    /// Appends `value` unless an equal element is already present.
    ///
    /// Does not re-sort; see the module invariants.
    pub fn add(&mut self, value: E) -> bool {
        if self.contains(&value) {
            return false;
        }
        self.elems.push(value);
        true
    }

    /// Adds every item, then re-sorts the whole backing sequence.
    ///
    /// Returns `true` when at least one item was inserted.
    pub fn add_all<I>(&mut self, items: I) -> bool
    where
        I: IntoIterator<Item = E>,
    {
        let mut changed = false;
        for item in items {
            changed |= self.add(item);
        }
        self.resort();
        changed
    }

    pub fn remove(&mut self, value: &E) -> bool {
        match self.position_of(value) {
            Ok(idx) => {
                self.elems.remove(idx);
                true
            }
            Err(_) => false,
        }
    }

    /// Removes every element equal to one of `items`.
    pub fn remove_all<'a, I>(&mut self, items: I) -> bool
    where
        I: IntoIterator<Item = &'a E>,
        E: 'a,
    {
        let mut changed = false;
        for item in items {
            changed |= self.remove(item);
        }
        changed
    }

    /// Keeps only elements equal to one of `items`.
    pub fn retain_all<'a, I>(&mut self, items: I) -> bool
    where
        I: IntoIterator<Item = &'a E>,
        E: 'a,
    {
        let keep: Vec<&E> = items.into_iter().collect();
        let before = self.elems.len();
        self.elems.retain(|elem| keep.contains(&elem));
        self.elems.len() != before
    }

    pub fn contains(&self, value: &E) -> bool {
        self.elems.contains(value)
    }

    pub fn contains_all<'a, I>(&self, items: I) -> bool
    where
        I: IntoIterator<Item = &'a E>,
        E: 'a,
    {
        items.into_iter().all(|item| self.contains(item))
    }

    fn position_of(&self, value: &E) -> SetResult<usize> {
        self.elems
            .iter()
            .position(|elem| elem == value)
            .ok_or(SetError::NotFound)
    }

    fn resort(&mut self) {
        match &self.comparator {
            Some(comparator) => self.elems.sort_by(|a, b| comparator(a, b)),
            None => self.elems.sort(),
        }
        trace!(
            "event=set_resort module=collection status=ok len={} ordering={}",
            self.elems.len(),
            if self.comparator.is_some() {
                "custom"
            } else {
                "natural"
            }
        );
    }
}

impl<E: Ord + Clone> SortedSet<E> {
    /// Elements strictly before `to` in backing order.
    ///
    /// # Errors
    /// - `NotFound` when `to` is not in the set.
    pub fn head_set(&self, to: &E) -> SetResult<Self> {
        let end = self.position_of(to)?;
        Ok(self.view(0..end))
    }

    /// Elements from `from` (inclusive) up to `to` (exclusive) in backing order.
    ///
    /// # Errors
    /// - `NotFound` when either bound is not in the set.
    /// - `InvalidRange` when `from` sits after `to`.
    pub fn sub_set(&self, from: &E, to: &E) -> SetResult<Self> {
        let start = self.position_of(from)?;
        let end = self.position_of(to)?;
        if start > end {
            return Err(SetError::InvalidRange {
                from: start,
                to: end,
            });
        }
        Ok(self.view(start..end))
    }

    /// Elements from `from` through `last()`, both inclusive.
    ///
    /// # Errors
    /// - `NotFound` when `from` is not in the set.
    pub fn tail_set(&self, from: &E) -> SetResult<Self> {
        let start = self.position_of(from)?;
        Ok(self.view(start..self.elems.len()))
    }

    /// Returns a new set with the elements matching `predicate`, carrying and
    /// sorted by this set's ordering.
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&E) -> bool,
    {
        let mut filtered = Self::with_shared_comparator(self.comparator.clone());
        filtered.add_all(self.elems.iter().filter(|elem| predicate(*elem)).cloned());
        filtered
    }

    /// Returns a new set with every element, carrying and sorted by
    /// `comparator`.
    pub fn sort<F>(&self, comparator: F) -> Self
    where
        F: Fn(&E, &E) -> Ordering + Send + Sync + 'static,
    {
        let mut sorted = Self::with_comparator(comparator);
        sorted.add_all(self.elems.iter().cloned());
        sorted
    }

    /// Snapshot of the backing order.
    pub fn to_vec(&self) -> Vec<E> {
        self.elems.clone()
    }

    // Range views keep the receiver's ordering and backing order; no re-sort.
    fn view(&self, range: Range<usize>) -> Self {
        Self {
            elems: self.elems[range].to_vec(),
            comparator: self.comparator.clone(),
        }
    }
}

impl<E: Ord> FromIterator<E> for SortedSet<E> {
    /// Collects through `add`: natural ordering, first occurrence wins, no
    /// re-sort.
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut set = Self::new();
        for item in iter {
            set.add(item);
        }
        set
    }
}

impl<'a, E> IntoIterator for &'a SortedSet<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.iter()
    }
}

impl<E> IntoIterator for SortedSet<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.into_iter()
    }
}

impl<E: Display> Display for SortedSet<E> {
    /// One element per line, each line terminated by `\n`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for elem in &self.elems {
            writeln!(f, "{elem}")?;
        }
        Ok(())
    }
}

impl<E: Debug> Debug for SortedSet<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.elems.iter()).finish()
    }
}
