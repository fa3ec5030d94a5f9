//! Fuzzy label similarity for concept deduplication.
//!
//! Provides two levels of matching:
//! - [`similarity`]: Normalized similarity score between two labels.
//! - [`find_best_match`]: Selects the best-scoring candidate above a
//!   threshold from a candidate set.
//!
//! Both functions are pure and total over any two strings. Empty inputs
//! are valid and simply fail to match.

use crate::id::ConceptId;

/// Default merge threshold used by the graph builder.
pub const DEFAULT_THRESHOLD: f64 = 0.75;

/// Computes a normalized similarity score between two labels.
///
/// Returns a score in `[0, 1]`, where 1 is identical. Symmetric in its
/// arguments. Both labels are lowercased and trimmed before comparison.
///
/// When one normalized label contains the other, the score is the ratio of
/// the shorter length to the longer -- labels such as "transactions" and
/// "types of transactions" name the same concept at different specificity,
/// and the containment check settles that case without running the full
/// edit-distance table. Otherwise the score is Levenshtein distance
/// normalized by the longer length.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();

    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let min_len = a_chars.len().min(b_chars.len());
    let max_len = a_chars.len().max(b_chars.len());

    if a.contains(b.as_str()) || b.contains(a.as_str()) {
        return min_len as f64 / max_len as f64;
    }

    let distance = levenshtein(&a_chars, &b_chars);
    1.0 - distance as f64 / max_len as f64
}

/// Standard unit-cost edit distance (insert/delete/substitute) over char
/// sequences, using the two-row form of the dynamic-programming table.
fn levenshtein(a: &[char], b: &[char]) -> usize {
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Finds the best match for `label` among `candidates`.
///
/// Scores every candidate, keeps the maximum, and returns its id only if
/// the maximum clears `threshold`. Returns `None` when no candidate
/// qualifies or the candidate set is empty. On exact score ties the first
/// maximal candidate in iteration order wins.
pub fn find_best_match<'a, I>(label: &str, candidates: I, threshold: f64) -> Option<ConceptId>
where
    I: IntoIterator<Item = (ConceptId, &'a str)>,
{
    let mut best: Option<(ConceptId, f64)> = None;

    for (id, candidate) in candidates {
        let score = similarity(label, candidate);
        if score >= threshold {
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((id, score)),
            }
        }
    }

    best.map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn identical_labels_score_one() {
        assert_eq!(similarity("React", "React"), 1.0);
        assert_eq!(similarity("", ""), 1.0);
    }

    #[test]
    fn case_and_whitespace_normalized() {
        assert_eq!(similarity("React", "react"), 1.0);
        assert_eq!(similarity("  hooks ", "Hooks"), 1.0);
    }

    #[test]
    fn empty_vs_nonempty_scores_zero() {
        assert_eq!(similarity("", "React"), 0.0);
        assert_eq!(similarity("React", ""), 0.0);
    }

    #[test]
    fn containment_uses_length_ratio() {
        // "transactions" (12) inside "types of transactions" (21).
        let score = similarity("transactions", "types of transactions");
        assert!((score - 12.0 / 21.0).abs() < 1e-9);

        // Near-containment pairs clear the default threshold.
        let score = similarity("transaction", "transactions");
        assert!(score >= DEFAULT_THRESHOLD);
    }

    #[test]
    fn edit_distance_fallback() {
        // "hooks" vs "books": one substitution over five chars.
        let score = similarity("hooks", "books");
        assert!((score - 0.8).abs() < 1e-9);
    }

    #[test]
    fn dissimilar_labels_score_low() {
        assert!(similarity("React", "PostgreSQL") < 0.3);
    }

    #[test]
    fn best_match_selects_closest_candidate() {
        let candidates = vec![
            (ConceptId(1), "Component"),
            (ConceptId(2), "Hooks"),
        ];
        let found = find_best_match("Components", candidates, 0.75);
        assert_eq!(found, Some(ConceptId(1)));
    }

    #[test]
    fn best_match_rejects_below_threshold() {
        let candidates = vec![(ConceptId(1), "Hooks"), (ConceptId(2), "Router")];
        assert_eq!(find_best_match("Databases", candidates, 0.75), None);
    }

    #[test]
    fn best_match_empty_candidates_is_none() {
        assert_eq!(
            find_best_match("React", Vec::<(ConceptId, &str)>::new(), 0.75),
            None
        );
    }

    #[test]
    fn best_match_tie_first_wins() {
        // Two identical candidate labels: both score the same, the first
        // in iteration order is returned.
        let candidates = vec![(ConceptId(5), "state"), (ConceptId(9), "state")];
        assert_eq!(find_best_match("state", candidates, 0.75), Some(ConceptId(5)));
    }

    proptest! {
        #[test]
        fn prop_self_similarity_is_one(s in ".{0,40}") {
            prop_assert_eq!(similarity(&s, &s), 1.0);
        }

        #[test]
        fn prop_symmetric(a in ".{0,30}", b in ".{0,30}") {
            let ab = similarity(&a, &b);
            let ba = similarity(&b, &a);
            prop_assert!((ab - ba).abs() < 1e-12);
        }

        #[test]
        fn prop_score_in_unit_interval(a in ".{0,30}", b in ".{0,30}") {
            let score = similarity(&a, &b);
            prop_assert!((0.0..=1.0).contains(&score));
        }
    }
}
