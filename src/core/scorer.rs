//! Suspicion Scorer: fold the eight indicator rules into a verdict
//!
//! Pure and synchronous: given a validated Annotation the scorer runs to
//! completion with no I/O and no shared state, so identical annotations
//! always produce bit-identical results.

use crate::core::rules;
use crate::types::{AnalysisError, Annotation, Verdict, VerdictResult};
use crate::{MAX_RAW_SCORE, NORMALIZED_MAX, SHORT_STATEMENT_TOKENS};

/// Stateless scoring engine
#[derive(Debug, Default, Clone)]
pub struct SuspicionScorer;

impl SuspicionScorer {
    /// Create new scorer
    pub fn new() -> Self {
        Self
    }

    /// Evaluate an annotation into a verdict.
    ///
    /// Fails with the InvalidAnnotation family on an empty annotation or an
    /// out-of-range head reference; never mutates the input.
    pub fn evaluate(&self, doc: &Annotation) -> Result<VerdictResult, AnalysisError> {
        doc.validate()?;

        // Rule-evaluation order is fixed; it determines indicator listing
        // order only, never the score.
        let hits = [
            rules::hedging(doc),
            rules::contradictions(doc),
            rules::passive_voice(doc),
            rules::vague_references(doc),
            rules::sentence_complexity(doc),
            rules::negation(doc),
            rules::temporal_discontinuity(doc),
            rules::descriptive_density(doc),
        ];

        let mut indicators = Vec::new();
        let mut raw_score: u32 = 0;
        for hit in hits.into_iter().flatten() {
            raw_score += hit.points;
            indicators.push(hit);
        }

        let normalized_score = normalize(raw_score);
        let verdict = Verdict::from_score(normalized_score);
        let short_statement = doc.len() < SHORT_STATEMENT_TOKENS;

        Ok(VerdictResult {
            indicators,
            raw_score,
            normalized_score,
            verdict,
            short_statement,
        })
    }
}

/// Rescale the raw score onto 0..=50, flooring, clamped at the maximum
fn normalize(raw_score: u32) -> u32 {
    let scaled = (raw_score as f64 / MAX_RAW_SCORE as f64) * NORMALIZED_MAX as f64;
    (scaled as u32).min(NORMALIZED_MAX)
}

// =============================================================================
// TESTS
// =============================================================================
