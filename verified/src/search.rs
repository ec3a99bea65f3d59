//! Halving search over sorted slices.
//!
//! The search walks a half-open range `[lo, hi)` into the caller's slice,
//! halving it on every comparison. No sub-slice is ever copied, so a search
//! costs `O(log n)` time and `O(1)` space ([`trace`] excepted, which records
//! the ranges it visits).
//!
//! All functions here require the input sorted in non-decreasing order. That
//! precondition is not checked; on unsorted input results are unspecified.

use std::cmp::Ordering;

/// One state of a running search.
///
/// A search starts in [`SearchState::start`] and moves through
/// [`SearchState::advance_by`] until it reaches `Found` or `NotFound`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    /// Candidates remain in the half-open range `[lo, hi)`.
    Searching { lo: usize, hi: usize },
    /// The element at this index compared equal.
    Found(usize),
    /// The active range became empty.
    NotFound,
}

impl SearchState {
    /// Initial state for a slice of `len` elements.
    pub fn start(len: usize) -> Self {
        if len == 0 {
            SearchState::NotFound
        } else {
            SearchState::Searching { lo: 0, hi: len }
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, SearchState::Searching { .. })
    }

    /// Perform one midpoint comparison.
    ///
    /// `cmp(x)` reports how `x` orders relative to the target. Terminal states
    /// are returned unchanged. Indexing goes through `get`, so a hand-built
    /// range reaching past the slice ends as `NotFound` rather than panicking.
    pub fn advance_by<T, F>(self, seq: &[T], mut cmp: F) -> Self
    where
        F: FnMut(&T) -> Ordering,
    {
        match self {
            SearchState::Searching { lo, hi } if lo < hi => {
                let mid = lo + (hi - lo) / 2;
                let Some(probe) = seq.get(mid) else {
                    return SearchState::NotFound;
                };
                match cmp(probe) {
                    Ordering::Equal => SearchState::Found(mid),
                    Ordering::Greater => Self::narrow(lo, mid),
                    Ordering::Less => Self::narrow(mid + 1, hi),
                }
            }
            SearchState::Searching { .. } => SearchState::NotFound,
            terminal => terminal,
        }
    }

    fn narrow(lo: usize, hi: usize) -> Self {
        if lo < hi {
            SearchState::Searching { lo, hi }
        } else {
            SearchState::NotFound
        }
    }
}

/// Index of an element for which `cmp` returns `Equal`, if any.
///
/// Among several equal elements, which index is reported is unspecified.
pub fn position_by<T, F>(seq: &[T], mut cmp: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let mut state = SearchState::start(seq.len());
    loop {
        match state {
            SearchState::Found(index) => return Some(index),
            SearchState::NotFound => return None,
            searching => state = searching.advance_by(seq, &mut cmp),
        }
    }
}

/// Index of an element equal to `target` in a sorted slice.
///
/// # Examples
///
/// ```
/// use halving_search::position;
///
/// assert_eq!(position(&[1, 3, 5, 7, 9], &7), Some(3));
/// assert_eq!(position(&[1, 3, 5, 7, 9], &4), None);
/// ```
pub fn position<T: Ord>(seq: &[T], target: &T) -> Option<usize> {
    position_by(seq, |probe| probe.cmp(target))
}

/// Whether `target` occurs in a sorted slice.
///
/// # Time Complexity
///
/// At most [`step_bound`]`(seq.len())` comparisons.
pub fn contains<T: Ord>(seq: &[T], target: &T) -> bool {
    position(seq, target).is_some()
}

/// Worst-case number of midpoint comparisons for `n` elements:
/// `ceil(log2(n)) + 1`, and zero for an empty slice.
pub fn step_bound(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let ceil_log2 = (usize::BITS - (n - 1).leading_zeros()) as usize;
    ceil_log2 + 1
}

/// A finished search together with the path it took.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTrace {
    /// Length of the searched slice.
    pub len: usize,
    /// Index of the match, if one was found.
    pub position: Option<usize>,
    /// Number of midpoint comparisons performed.
    pub steps: usize,
    /// Every active range `[lo, hi)` that was probed, in order.
    pub ranges: Vec<(usize, usize)>,
}

impl SearchTrace {
    pub fn found(&self) -> bool {
        self.position.is_some()
    }

    /// Whether the search stayed within [`step_bound`] for its length.
    pub fn within_bound(&self) -> bool {
        self.steps <= step_bound(self.len)
    }
}

/// Run a search and record every range it probes.
pub fn trace<T: Ord>(seq: &[T], target: &T) -> SearchTrace {
    let mut state = SearchState::start(seq.len());
    let mut ranges = Vec::with_capacity(step_bound(seq.len()));

    while let SearchState::Searching { lo, hi } = state {
        log::trace!("probing [{lo}, {hi}) of {}", seq.len());
        ranges.push((lo, hi));
        state = state.advance_by(seq, |probe| probe.cmp(target));
    }

    let position = match state {
        SearchState::Found(index) => Some(index),
        _ => None,
    };
    log::debug!(
        "search over {} elements finished after {} steps: {:?}",
        seq.len(),
        ranges.len(),
        position
    );

    SearchTrace {
        len: seq.len(),
        position,
        steps: ranges.len(),
        ranges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIGITS: [i32; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];

    #[test]
    fn test_target_above_all() {
        assert!(!contains(&DIGITS, &12));
    }

    #[test]
    fn test_target_present() {
        assert!(contains(&DIGITS, &7));
        assert_eq!(position(&DIGITS, &7), Some(7));
    }

    #[test]
    fn test_empty() {
        let empty: [i32; 0] = [];
        assert!(!contains(&empty, &5));
        assert_eq!(trace(&empty, &5).steps, 0);
    }

    #[test]
    fn test_single_element() {
        assert!(contains(&[5], &5));
        assert!(!contains(&[5], &4));
        assert!(!contains(&[5], &6));
        assert_eq!(trace(&[5], &5).steps, 1);
    }

    #[test]
    fn test_duplicates() {
        let seq = [1, 1, 2, 2, 3, 3];
        assert!(contains(&seq, &2));
        let index = position(&seq, &2).unwrap();
        assert_eq!(seq[index], 2);
    }

    #[test]
    fn test_gap_between_elements() {
        assert!(!contains(&[1, 3, 5, 7, 9], &4));
    }

    #[test]
    fn test_target_below_all() {
        assert!(!contains(&DIGITS, &-1));
        assert!(!contains(&[i32::MIN + 1, 0], &i32::MIN));
    }

    #[test]
    fn test_strings() {
        let names = ["alice", "bob", "carol", "dave"];
        assert!(contains(&names, &"carol"));
        assert!(!contains(&names, &"bobby"));

        let owned: Vec<String> = names.iter().map(|n| n.to_string()).collect();
        assert_eq!(position(&owned, &"dave".to_string()), Some(3));
    }

    #[test]
    fn test_repeated_calls_agree() {
        let first = trace(&DIGITS, &4);
        for _ in 0..5 {
            assert_eq!(trace(&DIGITS, &4), first);
            assert!(contains(&DIGITS, &4));
        }
    }

    #[test]
    fn test_position_by_reverse_order() {
        // A descending slice is sorted under the reversed comparator.
        let seq = [9, 7, 5, 3, 1];
        assert_eq!(position_by(&seq, |probe| 3.cmp(probe)), Some(3));
        assert_eq!(position_by(&seq, |probe| 4.cmp(probe)), None);
    }

    #[test]
    fn test_step_bound() {
        assert_eq!(step_bound(0), 0);
        assert_eq!(step_bound(1), 1);
        assert_eq!(step_bound(2), 2);
        assert_eq!(step_bound(10), 5);
        assert_eq!(step_bound(16), 5);
        assert_eq!(step_bound(17), 6);
    }

    #[test]
    fn test_every_length_finds_members_within_bound() {
        for n in 0..=130i32 {
            let seq: Vec<i32> = (0..n).map(|i| 2 * i).collect();
            for i in 0..n {
                let t = trace(&seq, &(2 * i));
                assert_eq!(t.position, Some(i as usize), "n={n} target={}", 2 * i);
                assert!(t.within_bound(), "n={n} took {} steps", t.steps);
            }
        }
    }

    #[test]
    fn test_every_length_rejects_non_members_within_bound() {
        for n in 0..=130i32 {
            let seq: Vec<i32> = (0..n).map(|i| 2 * i).collect();
            for target in (-1..=2 * n + 1).step_by(2) {
                let t = trace(&seq, &target);
                assert!(!t.found(), "n={n} target={target}");
                assert!(t.within_bound(), "n={n} took {} steps", t.steps);
            }
        }
    }

    #[test]
    fn test_ranges_strictly_shrink_and_stay_in_bounds() {
        let seq: Vec<u32> = (0..1000).map(|i| i / 3).collect();
        for target in 0..=340u32 {
            let t = trace(&seq, &target);
            let mut last_width = usize::MAX;
            for &(lo, hi) in &t.ranges {
                assert!(lo < hi && hi <= seq.len());
                assert!(hi - lo < last_width);
                last_width = hi - lo;
            }
            if let Some(index) = t.position {
                assert_eq!(seq[index], target);
            }
        }
    }

    #[test]
    fn test_terminal_states_do_not_advance() {
        let cmp = |probe: &i32| probe.cmp(&3);
        assert_eq!(SearchState::Found(2).advance_by(&DIGITS, cmp), SearchState::Found(2));
        assert_eq!(SearchState::NotFound.advance_by(&DIGITS, cmp), SearchState::NotFound);
        assert!(SearchState::start(0).is_terminal());
        assert!(!SearchState::start(3).is_terminal());
    }

    #[test]
    fn test_out_of_range_state_ends_without_panic() {
        let mut state = SearchState::Searching { lo: 0, hi: 100 };
        while !state.is_terminal() {
            state = state.advance_by(&DIGITS, |probe| probe.cmp(&9));
        }
        assert_eq!(state, SearchState::NotFound);
    }
}
