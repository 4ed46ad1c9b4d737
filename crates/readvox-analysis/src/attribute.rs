//! Maps alignment spans back onto the reference words the speaker
//! struggled with, and sorts the evidence into debug buckets for the
//! detailed error report.

use std::collections::HashSet;

use crate::align::{AlignOp, OpKind};

/// Output of struggle attribution over a full alignment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attribution {
    /// Reference words marked as points of difficulty, deduplicated with
    /// first-occurrence order preserved.
    pub struggled: Vec<String>,
    /// Inserted/repeated material, one entry per Insert span.
    pub stutters: Vec<String>,
    /// Substituted material, one entry per Substitute span.
    pub mispronunciations: Vec<String>,
    /// Omitted material, one entry per Delete span.
    pub skips: Vec<String>,
    /// Total words covered by Equal spans; feeds the fluency score.
    pub correct_words: usize,
}

/// Walk the alignment once and attribute each span.
///
/// A substitution blames every reference word in its span. An insertion
/// blames the reference word the reading was about to reach — unless the
/// insertion falls after the last reference word, in which case there is
/// nothing left to blame. A deletion is an omission, not a struggle at a
/// point, so it only feeds the skip bucket.
pub fn attribute(reference: &[String], hypothesis: &[String], ops: &[AlignOp]) -> Attribution {
    let mut out = Attribution::default();
    let mut struggled_raw: Vec<String> = Vec::new();

    for op in ops {
        let ref_phrase = reference[op.ref_start..op.ref_end].join(" ");
        let hyp_phrase = hypothesis[op.hyp_start..op.hyp_end].join(" ");

        match op.kind {
            OpKind::Equal => {
                out.correct_words += op.hyp_len();
            }
            OpKind::Substitute => {
                out.mispronunciations
                    .push(format!("Expected '{}' but said '{}'", ref_phrase, hyp_phrase));
                for word in &reference[op.ref_start..op.ref_end] {
                    struggled_raw.push(word.clone());
                }
            }
            OpKind::Insert => {
                out.stutters
                    .push(format!("Inserted/Stuttered: '{}'", hyp_phrase));
                if op.ref_start < reference.len() {
                    struggled_raw.push(reference[op.ref_start].clone());
                }
            }
            OpKind::Delete => {
                out.skips.push(format!("Skipped: '{}'", ref_phrase));
            }
        }
    }

    out.struggled = dedup_first_occurrence(struggled_raw);
    out
}

/// Reduce to unique words, keeping the first occurrence of each in its
/// original position. Never sorts; the order is user-facing.
pub fn dedup_first_occurrence(words: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(words.len());
    words.into_iter().filter(|w| seen.insert(w.clone())).collect()
}
