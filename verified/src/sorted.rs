//! A slice whose order has been established once, up front.
//!
//! The plain search functions trust their caller. [`SortedSlice::new`] pays a
//! single linear pass to check the order, after which every search on the
//! wrapper is logarithmic.

use crate::error::SearchError;
use crate::search::{self, SearchTrace};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortedSlice<'a, T> {
    items: &'a [T],
}

impl<'a, T: Ord> SortedSlice<'a, T> {
    /// Wrap `items` after checking they are in non-decreasing order.
    ///
    /// Equal neighbours are allowed.
    pub fn new(items: &'a [T]) -> Result<Self, SearchError> {
        if let Some(index) = first_descent(items) {
            log::debug!("rejecting unsorted input: descent at index {index}");
            return Err(SearchError::NotSorted { index });
        }
        Ok(SortedSlice { items })
    }

    /// Wrap `items` without checking the order.
    ///
    /// If `items` is not sorted, searches on the wrapper give unspecified
    /// answers.
    pub fn new_unchecked(items: &'a [T]) -> Self {
        SortedSlice { items }
    }

    pub fn contains(&self, target: &T) -> bool {
        search::contains(self.items, target)
    }

    pub fn position(&self, target: &T) -> Option<usize> {
        search::position(self.items, target)
    }

    pub fn trace(&self, target: &T) -> SearchTrace {
        search::trace(self.items, target)
    }
}

impl<'a, T> SortedSlice<'a, T> {
    pub fn as_slice(&self) -> &'a [T] {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T: Ord> TryFrom<&'a [T]> for SortedSlice<'a, T> {
    type Error = SearchError;

    fn try_from(items: &'a [T]) -> Result<Self, Self::Error> {
        SortedSlice::new(items)
    }
}

/// Index of the first element smaller than its predecessor.
fn first_descent<T: Ord>(items: &[T]) -> Option<usize> {
    items
        .windows(2)
        .position(|pair| pair[1] < pair[0])
        .map(|i| i + 1)
}
