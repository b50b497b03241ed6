//! Token-level annotation types
//!
//! POS categories, dependency labels and entity types are closed enums with an
//! explicit mapping from the annotator's label strings. The indicator rules
//! only ever match enum variants, so a spelling change on the annotator side
//! surfaces as an `Other` value instead of silently disabling a rule.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Coarse part-of-speech category (universal POS tag set)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pos {
    Noun,
    Propn,
    Verb,
    Aux,
    Adj,
    Adv,
    Pron,
    Det,
    Adp,
    Part,
    Num,
    Cconj,
    Sconj,
    Intj,
    Punct,
    /// Unrecognized category ("X" in the universal tag set)
    Other,
}

impl Pos {
    /// Map an annotator POS string onto the closed set.
    pub fn from_label(label: &str) -> Self {
        match label {
            "NOUN" => Pos::Noun,
            "PROPN" => Pos::Propn,
            "VERB" => Pos::Verb,
            "AUX" => Pos::Aux,
            "ADJ" => Pos::Adj,
            "ADV" => Pos::Adv,
            "PRON" => Pos::Pron,
            "DET" => Pos::Det,
            "ADP" => Pos::Adp,
            "PART" => Pos::Part,
            "NUM" => Pos::Num,
            "CCONJ" => Pos::Cconj,
            "SCONJ" => Pos::Sconj,
            "INTJ" => Pos::Intj,
            "PUNCT" => Pos::Punct,
            _ => Pos::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Pos::Noun => "NOUN",
            Pos::Propn => "PROPN",
            Pos::Verb => "VERB",
            Pos::Aux => "AUX",
            Pos::Adj => "ADJ",
            Pos::Adv => "ADV",
            Pos::Pron => "PRON",
            Pos::Det => "DET",
            Pos::Adp => "ADP",
            Pos::Part => "PART",
            Pos::Num => "NUM",
            Pos::Cconj => "CCONJ",
            Pos::Sconj => "SCONJ",
            Pos::Intj => "INTJ",
            Pos::Punct => "PUNCT",
            Pos::Other => "X",
        }
    }

    /// Punctuation flag
    pub fn is_punct(&self) -> bool {
        *self == Pos::Punct
    }

    /// Descriptive word (adjective or adverb)
    pub fn is_descriptor(&self) -> bool {
        matches!(self, Pos::Adj | Pos::Adv)
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Pos {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Pos {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Pos::from_label(&label))
    }
}

/// Dependency label, mapped from the annotator's spelling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepLabel {
    /// Syntactic root (self-headed token)
    Root,
    /// Coordinating conjunction
    Cc,
    /// Conjunct
    Conj,
    /// Clausal complement
    Ccomp,
    /// Open clausal complement
    Xcomp,
    /// Adverbial clause modifier
    Advcl,
    /// Relative / adnominal clause modifier
    Acl,
    /// Adverbial modifier
    Advmod,
    /// Negation modifier
    Neg,
    /// Passive nominal subject
    NsubjPass,
    /// Passive auxiliary
    AuxPass,
    /// Passive clausal subject
    CsubjPass,
    /// Any label the rules do not inspect, annotator spelling preserved
    Other(String),
}

impl DepLabel {
    /// Map an annotator label string onto the closed set.
    ///
    /// `relcl` folds into `Acl`; labels carrying the annotator's morphology
    /// negation marker (`Neg`) fold into `Neg`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "ROOT" | "root" => DepLabel::Root,
            "cc" => DepLabel::Cc,
            "conj" => DepLabel::Conj,
            "ccomp" => DepLabel::Ccomp,
            "xcomp" => DepLabel::Xcomp,
            "advcl" => DepLabel::Advcl,
            "acl" | "relcl" | "acl:relcl" => DepLabel::Acl,
            "advmod" => DepLabel::Advmod,
            "neg" => DepLabel::Neg,
            "nsubjpass" => DepLabel::NsubjPass,
            "auxpass" => DepLabel::AuxPass,
            "csubjpass" => DepLabel::CsubjPass,
            other if other.contains("Neg") => DepLabel::Neg,
            other => DepLabel::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DepLabel::Root => "ROOT",
            DepLabel::Cc => "cc",
            DepLabel::Conj => "conj",
            DepLabel::Ccomp => "ccomp",
            DepLabel::Xcomp => "xcomp",
            DepLabel::Advcl => "advcl",
            DepLabel::Acl => "acl",
            DepLabel::Advmod => "advmod",
            DepLabel::Neg => "neg",
            DepLabel::NsubjPass => "nsubjpass",
            DepLabel::AuxPass => "auxpass",
            DepLabel::CsubjPass => "csubjpass",
            DepLabel::Other(s) => s,
        }
    }

    /// Coordination structure (cc or conj)
    pub fn is_coordination(&self) -> bool {
        matches!(self, DepLabel::Cc | DepLabel::Conj)
    }

    /// Passive-voice marker
    pub fn is_passive(&self) -> bool {
        matches!(
            self,
            DepLabel::NsubjPass | DepLabel::AuxPass | DepLabel::CsubjPass
        )
    }

    /// Dependent-clause marker (ccomp, xcomp, advcl, acl)
    pub fn is_clause_marker(&self) -> bool {
        matches!(
            self,
            DepLabel::Ccomp | DepLabel::Xcomp | DepLabel::Advcl | DepLabel::Acl
        )
    }

    /// Negation marker
    pub fn is_negation(&self) -> bool {
        *self == DepLabel::Neg
    }
}

impl Serialize for DepLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DepLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(DepLabel::from_label(&label))
    }
}

impl std::fmt::Display for DepLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fine-grained tag as produced by the annotator (e.g. Penn Treebank)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FineTag(pub String);

impl FineTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Modal verb marker
    pub fn is_modal(&self) -> bool {
        self.0 == "MD"
    }

    /// Verb-tense prefix: the first two characters of the tag.
    /// Tags shorter than two characters compare as themselves.
    pub fn tense_prefix(&self) -> &str {
        let end = self
            .0
            .char_indices()
            .nth(2)
            .map(|(i, _)| i)
            .unwrap_or(self.0.len());
        &self.0[..end]
    }
}

impl std::fmt::Display for FineTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Named-entity type for a single token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityLabel {
    Person,
    Org,
    Gpe,
    Loc,
    Date,
    Time,
    Money,
    Quantity,
    Cardinal,
    Other,
}

impl EntityLabel {
    /// Map an annotator entity label onto the closed set.
    pub fn from_label(label: &str) -> Self {
        match label {
            "PERSON" => EntityLabel::Person,
            "ORG" => EntityLabel::Org,
            "GPE" => EntityLabel::Gpe,
            "LOC" => EntityLabel::Loc,
            "DATE" => EntityLabel::Date,
            "TIME" => EntityLabel::Time,
            "MONEY" => EntityLabel::Money,
            "QUANTITY" => EntityLabel::Quantity,
            "CARDINAL" => EntityLabel::Cardinal,
            _ => EntityLabel::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Org => "ORG",
            EntityLabel::Gpe => "GPE",
            EntityLabel::Loc => "LOC",
            EntityLabel::Date => "DATE",
            EntityLabel::Time => "TIME",
            EntityLabel::Money => "MONEY",
            EntityLabel::Quantity => "QUANTITY",
            EntityLabel::Cardinal => "CARDINAL",
            EntityLabel::Other => "OTHER",
        }
    }

    /// Time marker (DATE or TIME)
    pub fn is_temporal(&self) -> bool {
        matches!(self, EntityLabel::Date | EntityLabel::Time)
    }
}

impl Serialize for EntityLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EntityLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(EntityLabel::from_label(&label))
    }
}

/// One annotated token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text
    pub text: String,
    /// Coarse POS category
    pub pos: Pos,
    /// Fine-grained tag
    pub tag: FineTag,
    /// Lemma
    pub lemma: String,
    /// Dependency label
    pub dep: DepLabel,
    /// Index of the head token; equals the token's own index only at the root
    pub head: usize,
    /// Dependents positioned before this token, in order
    #[serde(default)]
    pub lefts: Vec<usize>,
    /// Dependents positioned after this token, in order
    #[serde(default)]
    pub rights: Vec<usize>,
    /// Entity type, if this token lies inside a named-entity span
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ent_type: Option<EntityLabel>,
}

// =============================================================================
// TESTS
// =============================================================================
