//! Testimony: linguistic suspicion analysis for witness statements
//!
//! Pipeline: text → Annotator (external) → Annotation → SuspicionScorer → VerdictResult

pub mod core;
pub mod types;

// =============================================================================
// SCORING CONSTANTS [C]
// =============================================================================

/// Maximum possible raw score to normalize against
pub const MAX_RAW_SCORE: u32 = 100;

/// Normalized score scale (verdicts are thresholded on 0..=50)
pub const NORMALIZED_MAX: u32 = 50;

/// Statements below this token count get the short-statement caveat
pub const SHORT_STATEMENT_TOKENS: usize = 20;

// =============================================================================
// INDICATOR THRESHOLDS AND CAPS [C]
// =============================================================================

/// Hedging: minimum modal verbs + doubt adverbs to fire
pub const HEDGING_MIN_COUNT: usize = 2;
/// Hedging: points per hit
pub const HEDGING_POINTS: u32 = 5;
/// Hedging: contribution cap
pub const HEDGING_CAP: u32 = 15;

/// Contradiction: minimum contrasting conjunctions to fire
pub const CONTRADICTION_MIN_COUNT: usize = 2;
/// Contradiction: points per hit
pub const CONTRADICTION_POINTS: u32 = 5;
/// Contradiction: contribution cap
pub const CONTRADICTION_CAP: u32 = 15;

/// Passive voice: minimum passive-marked tokens to fire
pub const PASSIVE_MIN_COUNT: usize = 1;
/// Passive voice: points per hit
pub const PASSIVE_POINTS: u32 = 5;
/// Passive voice: contribution cap
pub const PASSIVE_CAP: u32 = 10;

/// Vague references: pronoun/non-pronoun ratio must exceed this to fire
pub const VAGUENESS_MIN_RATIO: f64 = 0.3;
/// Vague references: pronoun count must exceed this to fire
pub const VAGUENESS_MIN_PRONOUNS: usize = 3;
/// Vague references: ratio is scaled by this before flooring into points
pub const VAGUENESS_SCALE: f64 = 20.0;
/// Vague references: contribution cap
pub const VAGUENESS_CAP: u32 = 15;

/// Complexity: minimum complexity score (clause markers + long-sentence bonus)
pub const COMPLEXITY_MIN_SCORE: usize = 3;
/// Complexity: average words per sentence counted as a long sentence
pub const COMPLEXITY_LONG_SENTENCE: f64 = 25.0;
/// Complexity: points per complexity unit
pub const COMPLEXITY_POINTS: u32 = 3;
/// Complexity: contribution cap
pub const COMPLEXITY_CAP: u32 = 10;

/// Negation: minimum negation-marked tokens to fire
pub const NEGATION_MIN_COUNT: usize = 2;
/// Negation: points per hit
pub const NEGATION_POINTS: u32 = 3;
/// Negation: contribution cap
pub const NEGATION_CAP: u32 = 10;

/// Temporal: minimum tense shifts to fire
pub const TEMPORAL_MIN_SHIFTS: usize = 2;
/// Temporal: minimum time markers to fire
pub const TEMPORAL_MIN_MARKERS: usize = 4;
/// Temporal: points per shift or marker
pub const TEMPORAL_POINTS: u32 = 2;
/// Temporal: contribution cap
pub const TEMPORAL_CAP: u32 = 10;

/// Descriptive density: descriptor/word ratio must exceed this to fire
pub const DESCRIPTOR_MIN_RATIO: f64 = 0.25;
/// Descriptive density: ratio is scaled by this before flooring into points
pub const DESCRIPTOR_SCALE: f64 = 40.0;
/// Descriptive density: contribution cap
pub const DESCRIPTOR_CAP: u32 = 15;

// =============================================================================
// VERDICT THRESHOLDS [C] - on the normalized 0..=50 score, highest first
// =============================================================================

/// Normalized score for HIGHLY SUSPICIOUS
pub const VERDICT_HIGH: u32 = 30;

/// Normalized score for MODERATELY SUSPICIOUS
pub const VERDICT_MODERATE: u32 = 20;

/// Normalized score for SLIGHTLY SUSPICIOUS
pub const VERDICT_SLIGHT: u32 = 11;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
