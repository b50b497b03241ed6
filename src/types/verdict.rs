//! Verdict categories

use serde::{Deserialize, Serialize};

use crate::{VERDICT_HIGH, VERDICT_MODERATE, VERDICT_SLIGHT};

/// The four ordered suspicion categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// Normalized score below 11
    NoSuspicion,
    /// Normalized score 11..=19
    SlightlySuspicious,
    /// Normalized score 20..=29
    ModeratelySuspicious,
    /// Normalized score 30 and above
    HighlySuspicious,
}

impl Verdict {
    /// Map a normalized score (0..=50) onto a verdict, highest band first
    pub fn from_score(normalized_score: u32) -> Self {
        if normalized_score >= VERDICT_HIGH {
            Verdict::HighlySuspicious
        } else if normalized_score >= VERDICT_MODERATE {
            Verdict::ModeratelySuspicious
        } else if normalized_score >= VERDICT_SLIGHT {
            Verdict::SlightlySuspicious
        } else {
            Verdict::NoSuspicion
        }
    }

    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            Verdict::NoSuspicion => "\x1b[32m",          // Green
            Verdict::SlightlySuspicious => "\x1b[34m",   // Blue
            Verdict::ModeratelySuspicious => "\x1b[33m", // Orange/Yellow
            Verdict::HighlySuspicious => "\x1b[31m",     // Red
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Verdict::NoSuspicion => "NO SUSPICION DETECTED",
            Verdict::SlightlySuspicious => "SLIGHTLY SUSPICIOUS",
            Verdict::ModeratelySuspicious => "MODERATELY SUSPICIOUS",
            Verdict::HighlySuspicious => "HIGHLY SUSPICIOUS",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_band_boundaries() {
        assert_eq!(Verdict::from_score(0), Verdict::NoSuspicion);
        assert_eq!(Verdict::from_score(10), Verdict::NoSuspicion);
        assert_eq!(Verdict::from_score(11), Verdict::SlightlySuspicious);
        assert_eq!(Verdict::from_score(19), Verdict::SlightlySuspicious);
        assert_eq!(Verdict::from_score(20), Verdict::ModeratelySuspicious);
        assert_eq!(Verdict::from_score(29), Verdict::ModeratelySuspicious);
        assert_eq!(Verdict::from_score(30), Verdict::HighlySuspicious);
        assert_eq!(Verdict::from_score(50), Verdict::HighlySuspicious);
    }

    #[test]
    fn test_verdicts_are_ordered() {
        assert!(Verdict::NoSuspicion < Verdict::SlightlySuspicious);
        assert!(Verdict::SlightlySuspicious < Verdict::ModeratelySuspicious);
        assert!(Verdict::ModeratelySuspicious < Verdict::HighlySuspicious);
    }
}
