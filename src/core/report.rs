//! Plain-text report rendering: the presentation layer's read-only view of
//! an Annotation and its VerdictResult.
//!
//! Saved reports carry two sections, ANALYSIS and VERDICT, matching the
//! export format the desktop application produced.

use std::fmt::Write as _;
use std::path::Path;

use chrono::Utc;

use crate::types::{Annotation, Pos, VerdictResult};
use crate::NORMALIZED_MAX;

const EXPLANATION: &str = "This verdict is based on linguistic analysis of deception markers \
including: uncertainty markers, contradictions, passive voice, vague references, sentence \
complexity, negations, temporal discontinuities, and level of detail.\n\nHigher scores indicate \
more linguistic patterns typically associated with deceptive statements. This is an automated \
analysis and should be considered as one factor in a complete evaluation.";

/// Render the informational analysis sections (tagging, parse, morphology,
/// entities) from the annotation's raw fields.
pub fn render_analysis(doc: &Annotation) -> String {
    let mut out = String::new();

    section(&mut out, "POS TAGGING", "Shows the part of speech for each word");
    for token in &doc.tokens {
        let _ = writeln!(out, "{}: {}", token.text, token.pos);
    }

    section(&mut out, "BIGRAMS", "Shows pairs of adjacent words");
    for pair in doc.tokens.windows(2) {
        let _ = writeln!(out, "({}, {})", pair[0].text, pair[1].text);
    }

    section(
        &mut out,
        "WORD SENSE ANALYSIS",
        "Shows key words with their context",
    );
    for token in &doc.tokens {
        if matches!(token.pos, Pos::Noun | Pos::Verb | Pos::Adj) && token.text.len() > 3 {
            let _ = writeln!(
                out,
                "{} ({}): {}",
                token.text,
                token.pos,
                dependent_context(doc, token)
            );
        }
    }

    section(
        &mut out,
        "SYNTACTIC PARSING",
        "Shows the grammatical structure of the sentence",
    );
    for token in &doc.tokens {
        let _ = writeln!(
            out,
            "{} -> {} -> {}",
            token.text,
            token.dep,
            doc.tokens[token.head].text
        );
    }

    section(
        &mut out,
        "MORPHOLOGICAL ANALYSIS",
        "Shows detailed grammatical properties of each word",
    );
    for token in &doc.tokens {
        let _ = writeln!(
            out,
            "{}: Lemma={}, POS={}, Tag={}, Dependency={}",
            token.text, token.lemma, token.pos, token.tag, token.dep
        );
    }

    section(
        &mut out,
        "NAMED ENTITIES",
        "Identifies people, places, organizations, etc.",
    );
    for ent in &doc.entities {
        let _ = writeln!(out, "{}: {}", ent.text, ent.label);
    }

    out
}

/// Render the user-facing verdict section.
pub fn render_verdict(result: &VerdictResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "   {}   ", result.verdict);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Suspicion Score: {}/{}",
        result.normalized_score, NORMALIZED_MAX
    );
    let _ = writeln!(out);

    if result.indicators.is_empty() {
        let _ = writeln!(out, "No significant linguistic markers of deception detected.");
    } else {
        let _ = writeln!(out, "Key Indicators:");
        for (i, indicator) in result.indicators.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", i + 1, indicator.description);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Analysis Explanation:");
    let _ = writeln!(out, "{}", EXPLANATION);

    if result.short_statement {
        let _ = writeln!(out);
        let _ = writeln!(out, "Note: Statement is quite short. Analysis may be limited.");
    }

    out
}

/// Write the two-section report to a file, returning the path written.
pub fn save_report(
    doc: &Annotation,
    result: &VerdictResult,
    path: impl AsRef<Path>,
) -> std::io::Result<String> {
    let path = path.as_ref();
    let mut contents = String::new();
    let _ = writeln!(
        contents,
        "Witness statement analysis - generated {}",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(contents);
    let _ = writeln!(contents, "=== ANALYSIS ===");
    let _ = writeln!(contents);
    contents.push_str(&render_analysis(doc));
    let _ = writeln!(contents);
    let _ = writeln!(contents, "=== VERDICT ===");
    let _ = writeln!(contents);
    contents.push_str(&render_verdict(result));

    std::fs::write(path, contents)?;
    Ok(path.display().to_string())
}

fn section(out: &mut String, title: &str, blurb: &str) {
    if !out.is_empty() {
        let _ = writeln!(out);
    }
    let _ = writeln!(out, "====== {} ======", title);
    let _ = writeln!(out, "{}", blurb);
    let _ = writeln!(out);
}

/// Left and right dependents around a token, in surface order
fn dependent_context(doc: &Annotation, token: &crate::types::Token) -> String {
    let mut parts: Vec<&str> = token
        .lefts
        .iter()
        .filter_map(|&i| doc.tokens.get(i).map(|t| t.text.as_str()))
        .collect();
    parts.push(&token.text);
    parts.extend(
        token
            .rights
            .iter()
            .filter_map(|&i| doc.tokens.get(i).map(|t| t.text.as_str())),
    );
    parts.join(" ")
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SuspicionScorer;
    use crate::types::{DepLabel, EntitySpan, FineTag, Sentence, Token};

    fn tok(text: &str, pos: Pos, dep: DepLabel, head: usize) -> Token {
        Token {
            text: text.to_string(),
            pos,
            tag: FineTag::new("NN"),
            lemma: text.to_lowercase(),
            dep,
            head,
            lefts: vec![],
            rights: vec![],
            ent_type: None,
        }
    }

    fn sample_doc() -> Annotation {
        let mut tokens = vec![
            tok("Maria", Pos::Propn, DepLabel::Other("nsubj".to_string()), 1),
            tok("left", Pos::Verb, DepLabel::Root, 1),
            tok("early", Pos::Adv, DepLabel::Advmod, 1),
            tok(".", Pos::Punct, DepLabel::Other("punct".to_string()), 1),
        ];
        tokens[1].lefts = vec![0];
        tokens[1].rights = vec![2, 3];
        Annotation {
            tokens,
            entities: vec![EntitySpan {
                text: "Maria".to_string(),
                label: "PERSON".to_string(),
            }],
            sentences: vec![Sentence { start: 0, end: 4 }],
        }
    }

    #[test]
    fn test_analysis_sections_present() {
        let text = render_analysis(&sample_doc());
        for title in [
            "POS TAGGING",
            "BIGRAMS",
            "WORD SENSE ANALYSIS",
            "SYNTACTIC PARSING",
            "MORPHOLOGICAL ANALYSIS",
            "NAMED ENTITIES",
        ] {
            assert!(text.contains(title), "missing section {}", title);
        }
        assert!(text.contains("Maria: PROPN"));
        assert!(text.contains("(Maria, left)"));
        assert!(text.contains("left (VERB): Maria left early ."));
        assert!(text.contains("Maria: PERSON"));
    }

    #[test]
    fn test_verdict_rendering_lists_indicators() {
        let doc = sample_doc();
        let result = SuspicionScorer::new().evaluate(&doc).unwrap();
        let text = render_verdict(&result);
        assert!(text.contains("Suspicion Score:"));
        // Four-token statement always carries the short-statement note
        assert!(text.contains("quite short"));
    }

    #[test]
    fn test_save_report_writes_both_sections() {
        let doc = sample_doc();
        let result = SuspicionScorer::new().evaluate(&doc).unwrap();
        let dir = std::env::temp_dir().join("testimony_report_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("report.txt");
        let written = save_report(&doc, &result, &path).unwrap();
        let contents = std::fs::read_to_string(&written).unwrap();
        assert!(contents.contains("=== ANALYSIS ==="));
        assert!(contents.contains("=== VERDICT ==="));
        std::fs::remove_file(&path).ok();
    }
}
