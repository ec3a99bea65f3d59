//! Errors reported by the checked search wrapper.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The element at `index` is smaller than the one before it.
    #[error("sequence is not sorted: element {index} is smaller than its predecessor")]
    NotSorted { index: usize },
}
