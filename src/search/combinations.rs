//! Lazy enumeration of index triples
//!
//! Triples are produced in lexicographic order over `i < j < k`, which is also the
//! tie-break order used when ranking results.

use std::iter::FusedIterator;

/// Number of unordered triples that can be drawn from `n` items, C(n, 3)
///
/// # Examples
/// ```
/// use word_triples::search::combination_count;
///
/// assert_eq!(combination_count(2), 0);
/// assert_eq!(combination_count(3), 1);
/// assert_eq!(combination_count(10), 120);
/// ```
#[must_use]
pub const fn combination_count(n: usize) -> u64 {
    if n < 3 {
        return 0;
    }
    let n = n as u64;
    n * (n - 1) * (n - 2) / 6
}

/// Iterator over every `[i, j, k]` with `i < j < k < n`
///
/// Produced on demand; nothing is materialized up front.
#[derive(Debug, Clone)]
pub struct Triples {
    n: usize,
    next: Option<[usize; 3]>,
    remaining: u64,
}

impl Triples {
    #[must_use]
    pub const fn new(n: usize) -> Self {
        Self {
            n,
            next: if n >= 3 { Some([0, 1, 2]) } else { None },
            remaining: combination_count(n),
        }
    }
}

impl Iterator for Triples {
    type Item = [usize; 3];

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let [i, j, k] = current;
        let n = self.n;

        self.next = if k + 1 < n {
            Some([i, j, k + 1])
        } else if j + 2 < n {
            Some([i, j + 1, j + 2])
        } else if i + 3 < n {
            Some([i + 1, i + 2, i + 3])
        } else {
            None
        };
        self.remaining -= 1;

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Triples {}

impl FusedIterator for Triples {}

/// Triples that start with the pair `(i, j)`, in the same order `Triples` yields them
///
/// Used to split the index space into independent units of work of at most `n`
/// triples each.
pub fn triples_from(n: usize, i: usize, j: usize) -> impl Iterator<Item = [usize; 3]> {
    (j + 1..n).map(move |k| [i, j, k])
}
