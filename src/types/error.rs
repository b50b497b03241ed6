//! Error taxonomy for the analysis pipeline

use serde::{Deserialize, Serialize};

/// Errors surfaced by the scorer and its collaborators.
///
/// Scorer-side inconsistencies are defects, not recoverable conditions; they
/// are never downgraded into a default verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisError {
    /// Annotation has no tokens; denominators would be ill-defined
    EmptyAnnotation,
    /// A token's head index does not resolve within the token sequence
    HeadOutOfRange { token: usize, head: usize },
    /// The annotator failed to process the input (collaborator-origin)
    Annotator(String),
    /// Analysis requested before the annotator finished loading; retry later
    NotReady,
}

impl AnalysisError {
    /// Stable code string for logging
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyAnnotation => "E001_EMPTY_ANNOTATION",
            Self::HeadOutOfRange { .. } => "E002_HEAD_OUT_OF_RANGE",
            Self::Annotator(_) => "E101_ANNOTATOR_FAILED",
            Self::NotReady => "E102_ANNOTATOR_NOT_READY",
        }
    }
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAnnotation => {
                write!(f, "{}: annotation contains no tokens", self.code())
            }
            Self::HeadOutOfRange { token, head } => write!(
                f,
                "{}: token {} references head {} outside the token sequence",
                self.code(),
                token,
                head
            ),
            Self::Annotator(msg) => write!(f, "{}: {}", self.code(), msg),
            Self::NotReady => write!(
                f,
                "{}: annotator is still loading, retry after initialization",
                self.code()
            ),
        }
    }
}

impl std::error::Error for AnalysisError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(AnalysisError::EmptyAnnotation.code(), "E001_EMPTY_ANNOTATION");
        assert_eq!(
            AnalysisError::HeadOutOfRange { token: 3, head: 9 }.code(),
            "E002_HEAD_OUT_OF_RANGE"
        );
        assert_eq!(AnalysisError::NotReady.code(), "E102_ANNOTATOR_NOT_READY");
    }

    #[test]
    fn test_display_carries_detail() {
        let err = AnalysisError::HeadOutOfRange { token: 3, head: 9 };
        let msg = err.to_string();
        assert!(msg.contains("token 3"));
        assert!(msg.contains("head 9"));
    }
}
