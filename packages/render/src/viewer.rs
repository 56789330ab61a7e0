//! The per-element edit viewer: one parametrized pipeline instead of a
//! copy per page. Pages differ only in the `CategoryFocus` they pass.

use crate::diff::{DiffRenderer, HtmlDiffRenderer};
use crate::highlight::{escape_html, JsonHighlighter};
use situ_reconciler::{CategoryFocus, DiffPair, EditReconciler, Reconciliation};
use tracing::debug;

/// Everything a page needs to show one element's edits. The two JSON
/// strings are the reproducible artifact; `html` is presentation.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ViewerOutput {
    pub html: String,
    pub original_json: String,
    pub updated_json: String,
    /// Sentinel message when there was nothing to diff.
    pub notice: Option<String>,
    /// Human-readable time of the displayed record.
    pub timestamp: Option<String>,
}

pub struct EditViewer<R = HtmlDiffRenderer>
where
    R: DiffRenderer,
{
    reconciler: EditReconciler,
    highlighter: JsonHighlighter,
    renderer: R,
}

impl EditViewer {
    pub fn new(focus: CategoryFocus) -> Self {
        Self::with_renderer(focus, HtmlDiffRenderer)
    }

    pub fn unified() -> Self {
        Self::new(CategoryFocus::unified())
    }
}

impl<R> EditViewer<R>
where
    R: DiffRenderer,
{
    pub fn with_renderer(focus: CategoryFocus, renderer: R) -> Self {
        Self {
            reconciler: EditReconciler::new(focus),
            highlighter: JsonHighlighter::new(),
            renderer,
        }
    }

    pub fn reconciler(&self) -> &EditReconciler {
        &self.reconciler
    }

    /// Raw storage strings in, displayable output out. Never fails: parse
    /// and data problems surface as the `notice` sentinel.
    pub fn view(
        &self,
        log_raw: Option<&str>,
        element_id: &str,
        baseline_raw: Option<&str>,
    ) -> ViewerOutput {
        match self.reconciler.reconcile(log_raw, element_id, baseline_raw) {
            Reconciliation::Diff { pair, timestamp } => {
                self.present(&pair, timestamp.and_then(format_timestamp))
            }
            Reconciliation::BaselineEcho { category, pair } => {
                debug!(%category, "showing baseline echo");
                self.present(&pair, None)
            }
            Reconciliation::Notice(notice) => {
                let message = notice.message();
                ViewerOutput {
                    html: format!(
                        r#"<div class="diff-notice">{}</div>"#,
                        escape_html(&message)
                    ),
                    original_json: String::new(),
                    updated_json: String::new(),
                    notice: Some(message),
                    timestamp: None,
                }
            }
        }
    }

    fn present(&self, pair: &DiffPair, timestamp: Option<String>) -> ViewerOutput {
        let original_json =
            serde_json::to_string_pretty(&pair.original).unwrap_or_default();
        let updated_json = serde_json::to_string_pretty(&pair.updated).unwrap_or_default();
        let original_html = self.highlighter.highlight_source(&original_json);
        let updated_html = self.highlighter.highlight_source(&updated_json);
        let html = self
            .renderer
            .render(&original_json, &updated_json, &original_html, &updated_html);

        ViewerOutput {
            html,
            original_json,
            updated_json,
            notice: None,
            timestamp,
        }
    }
}

/// Epoch milliseconds to a display string, UTC.
fn format_timestamp(millis: i64) -> Option<String> {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|moment| moment.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}
