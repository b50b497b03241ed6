//! Core types for Testimony

mod annotation;
mod error;
mod indicator;
mod output;
mod token;
mod verdict;

pub use annotation::{Annotation, EntitySpan, Sentence};
pub use error::AnalysisError;
pub use indicator::{Indicator, IndicatorKind};
pub use output::VerdictResult;
pub use token::{DepLabel, EntityLabel, FineTag, Pos, Token};
pub use verdict::Verdict;
