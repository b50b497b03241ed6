//! Verdict output structure and terminal rendering
//!
//! VerdictResult is fully determined by the Annotation: no timestamps, no
//! randomness, so two evaluations of identical input compare bit-identical.

use serde::{Deserialize, Serialize};

use crate::types::{Indicator, Verdict};
use crate::NORMALIZED_MAX;

/// The scorer's complete judgment of one statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictResult {
    /// Fired indicators in rule-evaluation order (stable)
    pub indicators: Vec<Indicator>,
    /// Unnormalized sum of capped contributions
    pub raw_score: u32,
    /// Raw score rescaled to 0..=50
    pub normalized_score: u32,
    /// Categorical verdict derived from the normalized score
    pub verdict: Verdict,
    /// Set when the statement has fewer than 20 tokens
    pub short_statement: bool,
}

impl VerdictResult {
    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let color = self.verdict.color_code();
        let reset = Verdict::color_reset();

        format!(
            "{}{} | score={}/{} | indicators={}{}{}",
            color,
            self.verdict,
            self.normalized_score,
            NORMALIZED_MAX,
            self.indicators.len(),
            if self.short_statement {
                " | short statement"
            } else {
                ""
            },
            reset
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "verdict={} | score={}/{} | raw={} | indicators={} | short={}",
            self.verdict,
            self.normalized_score,
            NORMALIZED_MAX,
            self.raw_score,
            self.indicators.len(),
            self.short_statement
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IndicatorKind;

    #[test]
    fn test_parseable_string_fields() {
        let result = VerdictResult {
            indicators: vec![Indicator {
                kind: IndicatorKind::Hedging,
                description: "High uncertainty detected (3 hedging phrases/modal verbs)"
                    .to_string(),
                points: 15,
            }],
            raw_score: 15,
            normalized_score: 7,
            verdict: Verdict::NoSuspicion,
            short_statement: true,
        };
        let line = result.to_parseable_string();
        assert!(line.contains("verdict=NO SUSPICION DETECTED"));
        assert!(line.contains("score=7/50"));
        assert!(line.contains("raw=15"));
        assert!(line.contains("short=true"));
    }
}
