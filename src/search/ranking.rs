//! Result ranking
//!
//! Both sorts are stable: results with equal coverage keep their enumeration order.

use super::engine::CoverageResult;
use rayon::prelude::*;

/// Sort results by coverage, best first
pub fn rank(results: &mut [CoverageResult<'_>]) {
    results.sort_by(|a, b| b.percentage().total_cmp(&a.percentage()));
}

/// Parallel form of [`rank`] with the same ordering guarantees
pub fn rank_parallel(results: &mut [CoverageResult<'_>]) {
    results.par_sort_by(|a, b| b.percentage().total_cmp(&a.percentage()));
}

/// Length of the run of perfect matches at the front of ranked results
#[must_use]
pub fn count_perfect(ranked: &[CoverageResult<'_>]) -> usize {
    ranked.partition_point(CoverageResult::is_perfect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Target, Word};
    use crate::search::scored_combinations;

    fn setup(target: &str, words: &[&str]) -> (Target, Vec<Word>) {
        let target = Target::parse(target).unwrap();
        let words = words.iter().map(|w| Word::new(w).unwrap()).collect();
        (target, words)
    }

    #[test]
    fn rank_orders_by_coverage_then_enumeration() {
        let (target, words) = setup("ABCDE FGHIJ KLMNO", &["ABCDZ", "FGHIJ", "KLMNO", "ABCDE"]);
        let candidates: Vec<&Word> = words.iter().collect();
        let mut results: Vec<_> = scored_combinations(&target, &candidates).collect();

        rank(&mut results);

        let order: Vec<_> = results.iter().map(|r| r.indices).collect();
        // [1,2,3] is perfect; [0,1,2] misses E; [0,1,3] and [0,2,3] both miss five letters
        assert_eq!(order, vec![[1, 2, 3], [0, 1, 2], [0, 1, 3], [0, 2, 3]]);
        assert_eq!(count_perfect(&results), 1);
    }

    #[test]
    fn parallel_rank_matches_sequential() {
        let (target, words) = setup(
            "CHILL EAT THEATRE",
            &["CHEAT", "LITHE", "TATER", "LATHE", "THETA", "HEART", "LEACH", "ETHIC"],
        );
        let candidates: Vec<&Word> = words.iter().collect();

        let mut sequential: Vec<_> = scored_combinations(&target, &candidates).collect();
        let mut parallel = sequential.clone();
        rank(&mut sequential);
        rank_parallel(&mut parallel);

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn count_perfect_on_empty() {
        assert_eq!(count_perfect(&[]), 0);
    }
}
