//! Suspicion indicators: one fired rule with its point contribution

use serde::{Deserialize, Serialize};

use crate::{
    COMPLEXITY_CAP, CONTRADICTION_CAP, DESCRIPTOR_CAP, HEDGING_CAP, NEGATION_CAP, PASSIVE_CAP,
    TEMPORAL_CAP, VAGUENESS_CAP,
};

/// The eight independent indicator rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    Hedging,
    Contradiction,
    PassiveVoice,
    VagueReferences,
    SentenceComplexity,
    Negation,
    TemporalDiscontinuity,
    DescriptiveDensity,
}

impl IndicatorKind {
    /// Maximum points this rule may contribute
    pub fn cap(&self) -> u32 {
        match self {
            Self::Hedging => HEDGING_CAP,
            Self::Contradiction => CONTRADICTION_CAP,
            Self::PassiveVoice => PASSIVE_CAP,
            Self::VagueReferences => VAGUENESS_CAP,
            Self::SentenceComplexity => COMPLEXITY_CAP,
            Self::Negation => NEGATION_CAP,
            Self::TemporalDiscontinuity => TEMPORAL_CAP,
            Self::DescriptiveDensity => DESCRIPTOR_CAP,
        }
    }

    /// Short label for display
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hedging => "hedging",
            Self::Contradiction => "contradiction",
            Self::PassiveVoice => "passive_voice",
            Self::VagueReferences => "vague_references",
            Self::SentenceComplexity => "sentence_complexity",
            Self::Negation => "negation",
            Self::TemporalDiscontinuity => "temporal_discontinuity",
            Self::DescriptiveDensity => "descriptive_density",
        }
    }
}

/// A fired suspicion rule. Rebuilt on every evaluation, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indicator {
    pub kind: IndicatorKind,
    /// Human-readable description with the observed counts
    pub description: String,
    /// Capped point contribution to the raw score
    pub points: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caps_sum_to_max_raw_score() {
        let kinds = [
            IndicatorKind::Hedging,
            IndicatorKind::Contradiction,
            IndicatorKind::PassiveVoice,
            IndicatorKind::VagueReferences,
            IndicatorKind::SentenceComplexity,
            IndicatorKind::Negation,
            IndicatorKind::TemporalDiscontinuity,
            IndicatorKind::DescriptiveDensity,
        ];
        let total: u32 = kinds.iter().map(|k| k.cap()).sum();
        assert_eq!(total, crate::MAX_RAW_SCORE);
    }
}
