//! Core engines for Testimony

pub mod annotator;
pub mod api;
pub mod report;
pub mod rules;
pub mod scorer;

pub use annotator::{Annotator, AnnotatorHandle, AnnotatorStatus};
pub use api::{create_router, run_server};
pub use report::{render_analysis, render_verdict, save_report};
pub use scorer::SuspicionScorer;
