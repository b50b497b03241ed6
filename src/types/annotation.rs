//! Annotation: the typed output of the external Annotator
//!
//! Created once per analysis request, immutable, discarded after scoring.

use serde::{Deserialize, Serialize};

use crate::types::{AnalysisError, Token};

/// A named-entity span (text + annotator label, spelling preserved)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub text: String,
    pub label: String,
}

/// Sentence boundary as a token-index range (end exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub start: usize,
    pub end: usize,
}

/// Structured linguistic analysis of one statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Tokens in original word order
    pub tokens: Vec<Token>,
    /// Named-entity spans (non-overlapping by construction of the annotator)
    #[serde(default)]
    pub entities: Vec<EntitySpan>,
    /// Sentence boundaries
    #[serde(default)]
    pub sentences: Vec<Sentence>,
}

impl Annotation {
    /// Total token count, punctuation included
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Non-punctuation token count
    pub fn word_count(&self) -> usize {
        self.tokens.iter().filter(|t| !t.pos.is_punct()).count()
    }

    /// Number of sentences
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Structural validation: the scorer refuses inconsistent input rather
    /// than producing a misleading zero score.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.tokens.is_empty() {
            return Err(AnalysisError::EmptyAnnotation);
        }
        for (index, token) in self.tokens.iter().enumerate() {
            if token.head >= self.tokens.len() {
                return Err(AnalysisError::HeadOutOfRange {
                    token: index,
                    head: token.head,
                });
            }
        }
        Ok(())
    }

    /// Parse an annotation dump produced by an external annotator.
    pub fn from_json_str(json: &str) -> Result<Self, AnalysisError> {
        serde_json::from_str(json)
            .map_err(|e| AnalysisError::Annotator(format!("malformed annotation JSON: {}", e)))
    }

    /// Parse an annotation dump from a reader (file or stdin).
    pub fn from_json_reader(reader: impl std::io::Read) -> Result<Self, AnalysisError> {
        serde_json::from_reader(reader)
            .map_err(|e| AnalysisError::Annotator(format!("malformed annotation JSON: {}", e)))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnalysisError, DepLabel, FineTag, Pos};

    fn tok(text: &str, pos: Pos, head: usize) -> Token {
        Token {
            text: text.to_string(),
            pos,
            tag: FineTag::new("NN"),
            lemma: text.to_lowercase(),
            dep: DepLabel::Other("nsubj".to_string()),
            head,
            lefts: vec![],
            rights: vec![],
            ent_type: None,
        }
    }

    #[test]
    fn test_empty_annotation_rejected() {
        let doc = Annotation {
            tokens: vec![],
            entities: vec![],
            sentences: vec![],
        };
        assert_eq!(doc.validate(), Err(AnalysisError::EmptyAnnotation));
    }

    #[test]
    fn test_head_out_of_range_rejected() {
        let doc = Annotation {
            tokens: vec![tok("dog", Pos::Noun, 5)],
            entities: vec![],
            sentences: vec![],
        };
        assert_eq!(
            doc.validate(),
            Err(AnalysisError::HeadOutOfRange { token: 0, head: 5 })
        );
    }

    #[test]
    fn test_word_count_skips_punctuation() {
        let doc = Annotation {
            tokens: vec![
                tok("dog", Pos::Noun, 0),
                tok("runs", Pos::Verb, 0),
                tok(".", Pos::Punct, 1),
            ],
            entities: vec![],
            sentences: vec![Sentence { start: 0, end: 3 }],
        };
        assert!(doc.validate().is_ok());
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.word_count(), 2);
        assert_eq!(doc.sentence_count(), 1);
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "tokens": [
                {"text": "He", "pos": "PRON", "tag": "PRP", "lemma": "he",
                 "dep": "nsubj", "head": 1},
                {"text": "left", "pos": "VERB", "tag": "VBD", "lemma": "leave",
                 "dep": "ROOT", "head": 1}
            ],
            "entities": [],
            "sentences": [{"start": 0, "end": 2}]
        }"#;
        let doc = Annotation::from_json_str(json).unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.tokens[0].pos, Pos::Pron);
        assert_eq!(doc.tokens[1].dep, DepLabel::Root);
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_malformed_json_is_annotator_error() {
        let err = Annotation::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, AnalysisError::Annotator(_)));
    }
}
