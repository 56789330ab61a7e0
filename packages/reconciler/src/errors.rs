//! Errors and display sentinels.
//!
//! Internal failures are typed and propagate with `?`. At the viewer
//! boundary every failure collapses into a `Notice`: showing a clear
//! "nothing to show" message beats breaking the page.

use thiserror::Error;

pub type ReconcileResult<T> = Result<T, ReconcileError>;

#[derive(Error, Debug)]
pub enum ReconcileError {
    #[error("{0}")]
    Model(#[from] situ_model::ModelError),
}

/// Informational sentinel shown in place of a diff. The display strings are
/// a wire contract with the demo UI and must not drift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// No log, empty log, or no record matched the element and focus.
    NoInspectorEdits,
    /// A baseline was needed for display but is missing or unusable.
    NoBaselineData,
    /// A matched record reconciled to zero changes and no baseline category
    /// was available to echo.
    NoEditsUsingDefaults,
    /// Malformed log JSON or an unexpected reconciliation failure.
    ParseFailure(String),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::NoInspectorEdits => "No inspector edits found".to_string(),
            Notice::NoBaselineData => "No baseline data found.".to_string(),
            Notice::NoEditsUsingDefaults => {
                "No edits found. Using default values from codebase.".to_string()
            }
            Notice::ParseFailure(message) => {
                format!("Error parsing inspector edits: {}", message)
            }
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}
