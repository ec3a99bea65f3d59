//! # Halving Search
//!
//! Membership tests over sorted slices in logarithmic time, plus the small
//! complexity walkthrough (constant, linear, quadratic, quasilinear time)
//! the search is usually taught alongside.
//!
//! The library works with both:
//! - `cargo build/test` - specs stripped, compiles as pure Rust
//! - `verus` - the `u64` search below is verified for termination and bounds
//!
//! ## Precondition
//!
//! Every search entry point expects its input sorted in non-decreasing order.
//! The order is **not** checked: on unsorted input the answer is unspecified.
//! Use [`SortedSlice::new`] when the order should be validated once up front.
//!
//! ## Usage
//!
//! ```rust
//! use halving_search::{contains, position, SortedSlice};
//!
//! let numbers = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
//! assert!(contains(&numbers, &7));
//! assert!(!contains(&numbers, &12));
//! assert_eq!(position(&numbers, &3), Some(3));
//!
//! let checked = SortedSlice::new(&numbers[..]).unwrap();
//! assert!(checked.contains(&9));
//! ```

pub mod complexity;
pub mod error;
pub mod search;
pub mod sorted;

pub use complexity::ComplexityClass;
pub use error::SearchError;
pub use search::{contains, position, position_by, step_bound, trace, SearchState, SearchTrace};
pub use sorted::SortedSlice;

use verus_builtin_macros::verus;

verus! {

// ============================================================================
// VERIFIED u64 SEARCH
// ============================================================================
//
// The same halving walk as `search::position_by`, specialised to u64 so the
// contract can be stated without trait specs. The loop carries a half-open
// range [lo, hi) into the original slice; nothing is re-sliced.

/// Specification: is the slice sorted in non-decreasing order?
pub open spec fn sorted_u64(arr: &[u64]) -> bool {
    forall|i: int, j: int| 0 <= i <= j < arr.len() ==> arr[i] <= arr[j]
}

/// Specification: does `target` occur anywhere in the slice?
pub open spec fn occurs_u64(arr: &[u64], target: u64) -> bool {
    exists|k: int| 0 <= k < arr.len() && arr[k] == target
}

/// Halving membership test over a sorted `u64` slice.
///
/// Caller must ensure the slice is sorted; Verus rejects call sites where it
/// cannot prove it.
pub fn contains_u64(arr: &[u64], target: u64) -> (found: bool)
    requires
        sorted_u64(arr),
    ensures
        found <==> occurs_u64(arr, target),
{
    let mut lo: usize = 0;
    let mut hi: usize = arr.len();
    while lo < hi
        invariant
            lo <= hi,
            hi <= arr.len(),
            sorted_u64(arr),
            // Everything left of the range is too small...
            forall|k: int| 0 <= k < lo ==> arr[k] < target,
            // ...and everything right of it is too large.
            forall|k: int| hi <= k < arr.len() ==> arr[k] > target,
        decreases
            hi - lo,
    {
        let mid = lo + (hi - lo) / 2;
        let probe = arr[mid];
        if probe == target {
            return true;
        } else if probe < target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    false
}

} // verus!
