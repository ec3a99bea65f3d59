//! Toy functions from the complexity walkthrough.
//!
//! Each one is small enough to read in a glance and grows with its input in
//! a different way. Nothing here prints; rendering is left to the caller.

use std::fmt;

/// Big-O growth classes used in the walkthrough.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ComplexityClass {
    Constant,
    Logarithmic,
    Linear,
    Quasilinear,
    Quadratic,
}

impl ComplexityClass {
    /// All classes, from slowest-growing to fastest-growing.
    pub const ALL: [ComplexityClass; 5] = [
        ComplexityClass::Constant,
        ComplexityClass::Logarithmic,
        ComplexityClass::Linear,
        ComplexityClass::Quasilinear,
        ComplexityClass::Quadratic,
    ];

    pub fn notation(&self) -> &'static str {
        match self {
            ComplexityClass::Constant => "O(1)",
            ComplexityClass::Logarithmic => "O(log n)",
            ComplexityClass::Linear => "O(n)",
            ComplexityClass::Quasilinear => "O(n log n)",
            ComplexityClass::Quadratic => "O(n^2)",
        }
    }

    /// One-line description of how work grows with input size.
    pub fn summary(&self) -> &'static str {
        match self {
            ComplexityClass::Constant => "same number of steps regardless of input size",
            ComplexityClass::Logarithmic => "remaining work is halved at every step",
            ComplexityClass::Linear => "work grows in step with the input",
            ComplexityClass::Quasilinear => "typical of comparison sorts; far better than quadratic",
            ComplexityClass::Quadratic => "nested passes over the input",
        }
    }
}

impl fmt::Display for ComplexityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notation())
    }
}

/// First name in the list. Constant time.
pub fn first_name<S: AsRef<str>>(names: &[S]) -> Option<&str> {
    names.first().map(|name| name.as_ref())
}

/// One output line per name. Linear time.
pub fn linear_listing<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    names.iter().map(|name| name.as_ref().to_string()).collect()
}

/// `size x size` products, `table[a - 1][b - 1] == a * b`. Quadratic time.
pub fn multiplication_table(size: u32) -> Vec<Vec<u64>> {
    (1..=u64::from(size))
        .map(|a| (1..=u64::from(size)).map(|b| a * b).collect())
        .collect()
}

/// Render a table from [`multiplication_table`] one row per line, in the
/// form ` | 2 * 1 = 2 | 2 * 2 = 4 | `.
pub fn render_table(table: &[Vec<u64>]) -> String {
    let mut out = String::new();
    for (row, products) in table.iter().enumerate() {
        out.push_str(" | ");
        for (col, product) in products.iter().enumerate() {
            out.push_str(&format!("{} * {} = {} | ", row + 1, col + 1, product));
        }
        out.push('\n');
    }
    out
}

/// Sorted copy of `values`; the input is left untouched.
///
/// `O(n log n)` time and `O(n)` extra space for the copy.
pub fn sorted_copy<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    let mut sorted = values.to_vec();
    sorted.sort();
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_name() {
        assert_eq!(first_name(&["Name 1", "Name 2", "Name 3"]), Some("Name 1"));
        let none: [String; 0] = [];
        assert_eq!(first_name(&none), None);
    }

    #[test]
    fn test_linear_listing() {
        let names = vec!["Name 1".to_string(), "Name 2".to_string()];
        assert_eq!(linear_listing(&names), names);
    }

    #[test]
    fn test_multiplication_table() {
        assert_eq!(multiplication_table(2), vec![vec![1, 2], vec![2, 4]]);
        assert!(multiplication_table(0).is_empty());

        let table = multiplication_table(9);
        assert_eq!(table.len(), 9);
        assert!(table.iter().all(|row| row.len() == 9));
        assert_eq!(table[6][7], 56);
    }

    #[test]
    fn test_render_table() {
        let rendered = render_table(&multiplication_table(2));
        assert_eq!(
            rendered,
            " | 1 * 1 = 1 | 1 * 2 = 2 | \n | 2 * 1 = 2 | 2 * 2 = 4 | \n"
        );
        assert_eq!(render_table(&[]), "");
    }

    #[test]
    fn test_sorted_copy_leaves_input() {
        let values = vec![3, 1, 2, 1];
        assert_eq!(sorted_copy(&values), vec![1, 1, 2, 3]);
        assert_eq!(values, vec![3, 1, 2, 1]);
    }

    #[test]
    fn test_class_notation() {
        assert_eq!(ComplexityClass::Logarithmic.to_string(), "O(log n)");
        assert_eq!(ComplexityClass::Quadratic.to_string(), "O(n^2)");
        assert!(ComplexityClass::Constant < ComplexityClass::Quadratic);
        assert_eq!(ComplexityClass::ALL.len(), 5);
    }
}
