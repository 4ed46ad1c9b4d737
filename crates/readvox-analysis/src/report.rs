//! Report assembly: turns the alignment, attribution, and score into the
//! structure the presentation layer renders. Nothing here recomputes
//! analysis results; it only reshapes them.

use crate::align::{align, AlignOp, OpKind};
use crate::attribute::{attribute, Attribution};
use crate::normalize::normalize;
use crate::score::fluency_score;

/// One span of the word-by-word visualization, in reading order. The
/// payload is the display phrase: what was said for `Correct`,
/// `Substituted`, and `Inserted` spans, and the omitted reference phrase
/// for `Skipped` spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisSpan {
    Correct(String),
    Substituted(String),
    Inserted(String),
    Skipped(String),
}

/// Everything the presentation layer needs for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FluencyReport {
    /// The raw reference passage, as shown to the reader.
    pub reference: String,
    /// The raw ASR transcript.
    pub transcript: String,
    pub visualization: Vec<VisSpan>,
    pub score: u8,
    pub struggled: Vec<String>,
    pub stutters: Vec<String>,
    pub mispronunciations: Vec<String>,
    pub skips: Vec<String>,
}

impl FluencyReport {
    /// True when all three error buckets are empty, in which case the
    /// renderer shows a single "perfect reading" line instead of empty
    /// section headers.
    pub fn is_perfect(&self) -> bool {
        self.stutters.is_empty() && self.mispronunciations.is_empty() && self.skips.is_empty()
    }
}

/// Assemble a report from already-computed analysis artifacts.
pub fn build_report(
    reference_raw: &str,
    transcript_raw: &str,
    reference: &[String],
    hypothesis: &[String],
    ops: &[AlignOp],
    attribution: Attribution,
    score: u8,
) -> FluencyReport {
    let visualization = ops
        .iter()
        .map(|op| {
            let hyp_phrase = || hypothesis[op.hyp_start..op.hyp_end].join(" ");
            match op.kind {
                OpKind::Equal => VisSpan::Correct(hyp_phrase()),
                OpKind::Substitute => VisSpan::Substituted(hyp_phrase()),
                OpKind::Insert => VisSpan::Inserted(hyp_phrase()),
                OpKind::Delete => {
                    VisSpan::Skipped(reference[op.ref_start..op.ref_end].join(" "))
                }
            }
        })
        .collect();

    FluencyReport {
        reference: reference_raw.to_string(),
        transcript: transcript_raw.to_string(),
        visualization,
        score,
        struggled: attribution.struggled,
        stutters: attribution.stutters,
        mispronunciations: attribution.mispronunciations,
        skips: attribution.skips,
    }
}

/// Full analysis pipeline for one session: normalize both texts once,
/// align, attribute, score, assemble.
pub fn analyze(reference_raw: &str, transcript_raw: &str) -> FluencyReport {
    let reference = normalize(reference_raw);
    let hypothesis = normalize(transcript_raw);

    let ops = align(&reference, &hypothesis);
    let attribution = attribute(&reference, &hypothesis, &ops);
    let score = fluency_score(attribution.correct_words, hypothesis.len());

    tracing::debug!(
        "Session analysis: {} ops, {} correct of {} spoken words, score {}",
        ops.len(),
        attribution.correct_words,
        hypothesis.len(),
        score
    );

    build_report(
        reference_raw,
        transcript_raw,
        &reference,
        &hypothesis,
        &ops,
        attribution,
        score,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visualization_follows_reading_order() {
        let report = analyze("the cat sat", "the dog sat");
        assert_eq!(
            report.visualization,
            vec![
                VisSpan::Correct("the".to_string()),
                VisSpan::Substituted("dog".to_string()),
                VisSpan::Correct("sat".to_string()),
            ]
        );
    }

    #[test]
    fn skipped_spans_show_the_reference_phrase() {
        let report = analyze("red blue green", "red green");
        assert_eq!(
            report.visualization,
            vec![
                VisSpan::Correct("red".to_string()),
                VisSpan::Skipped("blue".to_string()),
                VisSpan::Correct("green".to_string()),
            ]
        );
    }

    #[test]
    fn perfect_reading_has_empty_buckets() {
        let report = analyze("Go now.", "go now");
        assert!(report.is_perfect());
        assert_eq!(report.score, 100);
        assert!(report.struggled.is_empty());
    }

    #[test]
    fn report_keeps_raw_texts_verbatim() {
        let report = analyze("Town.A bird", "town a bird");
        assert_eq!(report.reference, "Town.A bird");
        assert_eq!(report.transcript, "town a bird");
    }
}
