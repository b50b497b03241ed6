//! Annotator boundary: the external collaborator that turns raw text into
//! an Annotation, plus the explicit load lifecycle the host drives.
//!
//! The crate ships no linguistic backend; hosts implement [`Annotator`] over
//! whatever NLP model they run and install it on an [`AnnotatorHandle`].
//! Requests that arrive before the handle is Ready are rejected with
//! `NotReady`, never queued.

use crate::types::{AnalysisError, Annotation};

/// Collaborator contract consumed by the core.
///
/// `annotate` must be deterministic for identical input (modulo ties broken
/// inside the model) and fail with an annotator error when the text cannot
/// be processed.
pub trait Annotator: Send + Sync {
    fn annotate(&self, text: &str) -> Result<Annotation, AnalysisError>;
}

/// Annotator load lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotatorStatus {
    /// No backend registered yet
    Uninitialized,
    /// Backend registered, model still loading
    Loading,
    /// Backend ready to accept requests
    Ready,
    /// Backend failed to load; requests keep failing with the recorded error
    Failed,
}

impl std::fmt::Display for AnnotatorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AnnotatorStatus::Uninitialized => "uninitialized",
            AnnotatorStatus::Loading => "loading",
            AnnotatorStatus::Ready => "ready",
            AnnotatorStatus::Failed => "failed",
        };
        write!(f, "{}", name)
    }
}

/// Handle owning an annotator backend and its lifecycle state.
///
/// The lifecycle is explicit (uninitialized → loading → ready | failed) and
/// the handle is passed to whichever component needs annotation; there is no
/// module-level singleton.
pub struct AnnotatorHandle {
    backend: Option<Box<dyn Annotator>>,
    status: AnnotatorStatus,
    failure: Option<String>,
}

impl AnnotatorHandle {
    /// Handle with no backend
    pub fn uninitialized() -> Self {
        Self {
            backend: None,
            status: AnnotatorStatus::Uninitialized,
            failure: None,
        }
    }

    /// Handle around an already-loaded backend
    pub fn ready(backend: Box<dyn Annotator>) -> Self {
        Self {
            backend: Some(backend),
            status: AnnotatorStatus::Ready,
            failure: None,
        }
    }

    /// Mark the handle as loading. Idempotent; a Ready handle stays Ready.
    pub fn begin_loading(&mut self) {
        if self.status == AnnotatorStatus::Uninitialized {
            self.status = AnnotatorStatus::Loading;
        }
    }

    /// Complete initialization with a loaded backend or a load failure.
    /// Installing twice keeps the first backend.
    pub fn finish_loading(&mut self, result: Result<Box<dyn Annotator>, String>) {
        if self.status == AnnotatorStatus::Ready {
            return;
        }
        match result {
            Ok(backend) => {
                self.backend = Some(backend);
                self.status = AnnotatorStatus::Ready;
                self.failure = None;
            }
            Err(message) => {
                self.status = AnnotatorStatus::Failed;
                self.failure = Some(message);
            }
        }
    }

    pub fn status(&self) -> AnnotatorStatus {
        self.status
    }

    /// Annotate through the handle, rejecting requests until Ready.
    pub fn annotate(&self, text: &str) -> Result<Annotation, AnalysisError> {
        match self.status {
            AnnotatorStatus::Ready => {
                let backend = self
                    .backend
                    .as_ref()
                    .ok_or(AnalysisError::NotReady)?;
                backend.annotate(text)
            }
            AnnotatorStatus::Failed => Err(AnalysisError::Annotator(
                self.failure
                    .clone()
                    .unwrap_or_else(|| "annotator failed to load".to_string()),
            )),
            AnnotatorStatus::Uninitialized | AnnotatorStatus::Loading => {
                Err(AnalysisError::NotReady)
            }
        }
    }
}

impl std::fmt::Debug for AnnotatorHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnnotatorHandle")
            .field("status", &self.status)
            .field("failure", &self.failure)
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
