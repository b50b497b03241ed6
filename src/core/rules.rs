//! The eight suspicion indicator rules
//!
//! Each rule is a self-contained pure function: it computes a local count or
//! ratio over the annotation, applies its firing threshold and returns the
//! fired indicator with a capped point contribution, or `None`. Rules never
//! feed each other; the scorer folds their outputs into the raw score.
//!
//! The scorer validates the annotation before invoking any rule, so head
//! indices are known to resolve.

use crate::types::{Annotation, DepLabel, Indicator, IndicatorKind, Pos};
use crate::{
    COMPLEXITY_CAP, COMPLEXITY_LONG_SENTENCE, COMPLEXITY_MIN_SCORE, COMPLEXITY_POINTS,
    CONTRADICTION_CAP, CONTRADICTION_MIN_COUNT, CONTRADICTION_POINTS, DESCRIPTOR_CAP,
    DESCRIPTOR_MIN_RATIO, DESCRIPTOR_SCALE, HEDGING_CAP, HEDGING_MIN_COUNT, HEDGING_POINTS,
    NEGATION_CAP, NEGATION_MIN_COUNT, NEGATION_POINTS, PASSIVE_CAP, PASSIVE_MIN_COUNT,
    PASSIVE_POINTS, TEMPORAL_CAP, TEMPORAL_MIN_MARKERS, TEMPORAL_MIN_SHIFTS, TEMPORAL_POINTS,
    VAGUENESS_CAP, VAGUENESS_MIN_PRONOUNS, VAGUENESS_MIN_RATIO, VAGUENESS_SCALE,
};

/// Adverb suffixes treated as doubt markers
const DOUBT_SUFFIXES: [&str; 3] = ["ly", "ably", "ibly"];

/// Vocabulary membership for a lemma. The annotator's vocabulary contains
/// every lemma it emits, so the filter never rejects; it is kept because the
/// hedging rule is specified against the annotator's vocabulary contract.
fn lemma_in_vocabulary(_lemma: &str) -> bool {
    true
}

/// Rule 1: hedging language and uncertainty markers.
/// Modal verbs plus adverbs of doubt (in-vocabulary lemma, -ly family suffix).
pub(crate) fn hedging(doc: &Annotation) -> Option<Indicator> {
    let modal_verbs = doc.tokens.iter().filter(|t| t.tag.is_modal()).count();
    let adverbs_of_doubt = doc
        .tokens
        .iter()
        .filter(|t| {
            t.pos == Pos::Adv
                && lemma_in_vocabulary(&t.lemma)
                && has_doubt_suffix(&t.text)
        })
        .count();

    let hedging_count = modal_verbs + adverbs_of_doubt;
    if hedging_count < HEDGING_MIN_COUNT {
        return None;
    }
    Some(Indicator {
        kind: IndicatorKind::Hedging,
        description: format!(
            "High uncertainty detected ({} hedging phrases/modal verbs)",
            hedging_count
        ),
        points: (hedging_count as u32 * HEDGING_POINTS).min(HEDGING_CAP),
    })
}

fn has_doubt_suffix(text: &str) -> bool {
    let lower = text.to_lowercase();
    DOUBT_SUFFIXES.iter().any(|s| lower.ends_with(s))
}

/// Rule 2: contradictory structures.
/// Coordinations (cc/conj) whose head is a verb or adjective.
pub(crate) fn contradictions(doc: &Annotation) -> Option<Indicator> {
    let conjunctions = doc
        .tokens
        .iter()
        .filter(|t| {
            t.dep.is_coordination()
                && matches!(doc.tokens[t.head].pos, Pos::Verb | Pos::Adj)
        })
        .count();

    if conjunctions < CONTRADICTION_MIN_COUNT {
        return None;
    }
    Some(Indicator {
        kind: IndicatorKind::Contradiction,
        description: format!(
            "Potential contradictory structures detected ({} contrasting conjunctions)",
            conjunctions
        ),
        points: (conjunctions as u32 * CONTRADICTION_POINTS).min(CONTRADICTION_CAP),
    })
}

/// Rule 3: passive voice via passive-marked dependency labels.
pub(crate) fn passive_voice(doc: &Annotation) -> Option<Indicator> {
    let passive_constructions = doc.tokens.iter().filter(|t| t.dep.is_passive()).count();

    if passive_constructions < PASSIVE_MIN_COUNT {
        return None;
    }
    Some(Indicator {
        kind: IndicatorKind::PassiveVoice,
        description: format!(
            "Use of passive voice detected ({} instances)",
            passive_constructions
        ),
        points: (passive_constructions as u32 * PASSIVE_POINTS).min(PASSIVE_CAP),
    })
}

/// Rule 4: vague references. Pronoun density against non-pronoun tokens.
pub(crate) fn vague_references(doc: &Annotation) -> Option<Indicator> {
    // Named-entity density is counted but does not take part in the firing
    // condition. TODO: offset the pronoun ratio by concrete entity mentions.
    let _concrete_entities = doc.entities.len();

    let pronouns = doc.tokens.iter().filter(|t| t.pos == Pos::Pron).count();
    let non_pronouns = doc.len() - pronouns;
    let vagueness_ratio = pronouns as f64 / non_pronouns.max(1) as f64;

    if vagueness_ratio <= VAGUENESS_MIN_RATIO || pronouns <= VAGUENESS_MIN_PRONOUNS {
        return None;
    }
    Some(Indicator {
        kind: IndicatorKind::VagueReferences,
        description: format!(
            "High use of vague references ({} pronouns, low named entities)",
            pronouns
        ),
        points: ((vagueness_ratio * VAGUENESS_SCALE) as u32).min(VAGUENESS_CAP),
    })
}

/// Rule 5: sentence complexity. Dependent-clause markers plus a bonus for
/// long average sentences.
pub(crate) fn sentence_complexity(doc: &Annotation) -> Option<Indicator> {
    let clause_markers = doc
        .tokens
        .iter()
        .filter(|t| t.dep.is_clause_marker())
        .count();

    let avg_words_per_sentence =
        doc.word_count() as f64 / doc.sentence_count().max(1) as f64;

    let complexity_score =
        clause_markers + usize::from(avg_words_per_sentence > COMPLEXITY_LONG_SENTENCE);

    if complexity_score < COMPLEXITY_MIN_SCORE {
        return None;
    }
    Some(Indicator {
        kind: IndicatorKind::SentenceComplexity,
        description: format!(
            "Overly complex sentence structure ({} dependent clauses)",
            clause_markers
        ),
        points: (complexity_score as u32 * COMPLEXITY_POINTS).min(COMPLEXITY_CAP),
    })
}

/// Rule 6: negations via negation-marked dependency labels.
pub(crate) fn negation(doc: &Annotation) -> Option<Indicator> {
    let negation_count = doc.tokens.iter().filter(|t| t.dep.is_negation()).count();

    if negation_count < NEGATION_MIN_COUNT {
        return None;
    }
    Some(Indicator {
        kind: IndicatorKind::Negation,
        description: format!("High use of negations ({} instances)", negation_count),
        points: (negation_count as u32 * NEGATION_POINTS).min(NEGATION_CAP),
    })
}

/// Rule 7: temporal discontinuities. Time markers (verb-attached adverbial
/// modifiers, DATE/TIME entities) and tense shifts between consecutive verbs.
pub(crate) fn temporal_discontinuity(doc: &Annotation) -> Option<Indicator> {
    let temporal_markers = doc
        .tokens
        .iter()
        .filter(|t| {
            (t.pos == Pos::Adv
                && t.dep == DepLabel::Advmod
                && doc.tokens[t.head].pos == Pos::Verb)
                || t.ent_type.map(|e| e.is_temporal()).unwrap_or(false)
        })
        .count();

    // Scan verbs in order, comparing each tense prefix to the previous verb's
    let mut temporal_shifts = 0;
    let mut prev_tense: Option<&str> = None;
    for token in &doc.tokens {
        if token.pos == Pos::Verb {
            let current_tense = token.tag.tense_prefix();
            if let Some(prev) = prev_tense {
                if current_tense != prev {
                    temporal_shifts += 1;
                }
            }
            prev_tense = Some(current_tense);
        }
    }

    if temporal_shifts < TEMPORAL_MIN_SHIFTS && temporal_markers < TEMPORAL_MIN_MARKERS {
        return None;
    }
    Some(Indicator {
        kind: IndicatorKind::TemporalDiscontinuity,
        description: format!(
            "Temporal discontinuities detected ({} tense shifts, {} time markers)",
            temporal_shifts, temporal_markers
        ),
        points: ((temporal_shifts + temporal_markers) as u32 * TEMPORAL_POINTS)
            .min(TEMPORAL_CAP),
    })
}

/// Rule 8: descriptive density. Share of adjectives and adverbs among words.
pub(crate) fn descriptive_density(doc: &Annotation) -> Option<Indicator> {
    let descriptors = doc.tokens.iter().filter(|t| t.pos.is_descriptor()).count();
    let descriptor_ratio = descriptors as f64 / doc.word_count().max(1) as f64;

    if descriptor_ratio <= DESCRIPTOR_MIN_RATIO {
        return None;
    }
    Some(Indicator {
        kind: IndicatorKind::DescriptiveDensity,
        description: format!(
            "Unusually high level of descriptive detail ({} descriptors, {:.1}% of text)",
            descriptors,
            descriptor_ratio * 100.0
        ),
        points: ((descriptor_ratio * DESCRIPTOR_SCALE) as u32).min(DESCRIPTOR_CAP),
    })
}

// =============================================================================
// TESTS
// =============================================================================
