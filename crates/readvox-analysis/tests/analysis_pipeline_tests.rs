//! End-to-end tests for the analysis pipeline, plus randomized properties
//! for the aligner and scorer.

use proptest::prelude::*;
use readvox_analysis::{align, analyze, fluency_score, normalize, OpKind, VisSpan};

// ─── Reading scenarios ──────────────────────────────────────────────

#[test]
fn identical_reading_is_perfect() {
    let report = analyze("the cat sat", "the cat sat");
    assert_eq!(report.score, 100);
    assert!(report.is_perfect());
    assert!(report.struggled.is_empty());
    assert_eq!(
        report.visualization,
        vec![VisSpan::Correct("the cat sat".to_string())]
    );
}

#[test]
fn single_substitution_reading() {
    let report = analyze("the cat sat", "the dog sat");
    // 2 of 3 spoken words correct, floored.
    assert_eq!(report.score, 66);
    assert_eq!(report.struggled, vec!["cat"]);
    assert_eq!(
        report.mispronunciations,
        vec!["Expected 'cat' but said 'dog'"]
    );
    assert!(report.stutters.is_empty());
    assert!(report.skips.is_empty());
}

#[test]
fn trailing_repetition_attributes_no_struggle_word() {
    let report = analyze("go now", "go now now");
    assert!(report.struggled.is_empty());
    assert_eq!(report.stutters, vec!["Inserted/Stuttered: 'now'"]);
    assert!(!report.is_perfect());
}

#[test]
fn silent_take_scores_zero_with_one_skip_entry() {
    let report = analyze("red blue green", "");
    assert_eq!(report.score, 0);
    assert!(report.struggled.is_empty());
    assert_eq!(report.skips, vec!["Skipped: 'red blue green'"]);
    assert_eq!(report.stutters.len() + report.mispronunciations.len(), 0);
}

#[test]
fn sentence_boundary_punctuation_separates_words() {
    assert_eq!(normalize("Town.A bird"), vec!["town", "a", "bird"]);
    // And the full pipeline treats the boundary correctly: reading the
    // passage as separated words is a perfect take.
    let report = analyze("Town.A bird", "town a bird");
    assert_eq!(report.score, 100);
    assert!(report.is_perfect());
}

#[test]
fn struggles_deduplicate_across_operations() {
    // "the" is blamed twice (two substitutions touch it) but reported once.
    let report = analyze("the sun and the moon", "thee sun and thee moon");
    assert_eq!(report.struggled, vec!["the"]);
    assert_eq!(report.mispronunciations.len(), 2);
}

#[test]
fn mixed_error_reading_produces_all_three_buckets() {
    // One repetition, one omission, one substitution, far enough apart
    // that no cheaper all-substitution alignment exists.
    let report = analyze(
        "a small bird hopped quickly across the path",
        "a a small bird hopped across the bath",
    );
    assert_eq!(report.stutters, vec!["Inserted/Stuttered: 'a'"]);
    assert_eq!(report.skips, vec!["Skipped: 'quickly'"]);
    assert_eq!(
        report.mispronunciations,
        vec!["Expected 'path' but said 'bath'"]
    );
    // The repetition aligns as an insertion after the word it echoes, so
    // the blamed upcoming word is "small".
    assert_eq!(report.struggled, vec!["small", "path"]);
    assert!(report.score < 100);
}

// ─── Alignment properties ───────────────────────────────────────────

/// Distance-only word-level Levenshtein, independent of the aligner's
/// backtrace: rolling two-row formulation.
fn levenshtein_words(reference: &[String], hypothesis: &[String]) -> usize {
    let n = hypothesis.len();
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];

    for i in 1..=reference.len() {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(reference[i - 1] != hypothesis[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}

fn word_seq() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(vec![
            "the", "sun", "rose", "slowly", "over", "quiet", "town", "a", "small", "bird",
        ])
        .prop_map(str::to_string),
        0..12,
    )
}

proptest! {
    #[test]
    fn alignment_covers_both_sequences_exactly(reference in word_seq(), hypothesis in word_seq()) {
        let ops = align(&reference, &hypothesis);

        let mut ref_pos = 0;
        let mut hyp_pos = 0;
        for op in &ops {
            prop_assert_eq!(op.ref_start, ref_pos);
            prop_assert_eq!(op.hyp_start, hyp_pos);
            prop_assert!(op.ref_end >= op.ref_start);
            prop_assert!(op.hyp_end >= op.hyp_start);
            ref_pos = op.ref_end;
            hyp_pos = op.hyp_end;
        }
        prop_assert_eq!(ref_pos, reference.len());
        prop_assert_eq!(hyp_pos, hypothesis.len());
    }

    #[test]
    fn alignment_is_minimum_cost(reference in word_seq(), hypothesis in word_seq()) {
        let ops = align(&reference, &hypothesis);
        let edits: usize = ops
            .iter()
            .map(|op| match op.kind {
                OpKind::Equal => 0,
                OpKind::Substitute | OpKind::Delete => op.ref_len(),
                OpKind::Insert => op.hyp_len(),
            })
            .sum();
        prop_assert_eq!(edits, levenshtein_words(&reference, &hypothesis));
    }

    #[test]
    fn same_kind_runs_are_always_merged(reference in word_seq(), hypothesis in word_seq()) {
        let ops = align(&reference, &hypothesis);
        for pair in ops.windows(2) {
            prop_assert_ne!(pair[0].kind, pair[1].kind);
        }
    }

    #[test]
    fn score_is_always_in_bounds(correct in 0usize..500, total in 0usize..500) {
        let score = fluency_score(correct.min(total), total);
        prop_assert!(score <= 100);
    }

    #[test]
    fn normalization_is_idempotent(text in "[A-Za-z .,!?']{0,60}") {
        let first = normalize(&text);
        let second = normalize(&first.join(" "));
        prop_assert_eq!(first, second);
    }
}
