//! Line-wise HTML diff of the two pretty-printed JSON sides.
//!
//! The diff itself runs on the plain JSON strings; the emitted lines come
//! from the pre-highlighted HTML, index-aligned line for line. Injected as
//! a trait so hosts can swap the presentation.

use similar::{ChangeTag, TextDiff};

pub trait DiffRenderer {
    /// Renders a combined before/after fragment. `original_html` and
    /// `updated_html` must be line-aligned with their JSON counterparts.
    fn render(
        &self,
        original_json: &str,
        updated_json: &str,
        original_html: &str,
        updated_html: &str,
    ) -> String;
}

/// Default renderer: one `div` per line, removed lines from the original
/// side first, added lines from the updated side, shared lines once.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlDiffRenderer;

impl DiffRenderer for HtmlDiffRenderer {
    fn render(
        &self,
        original_json: &str,
        updated_json: &str,
        original_html: &str,
        updated_html: &str,
    ) -> String {
        let original_lines: Vec<&str> = original_html.lines().collect();
        let updated_lines: Vec<&str> = updated_html.lines().collect();

        let diff = TextDiff::from_lines(original_json, updated_json);
        let mut html = String::from(r#"<div class="json-diff">"#);

        for change in diff.iter_all_changes() {
            let (class, marker, line) = match change.tag() {
                ChangeTag::Delete => (
                    "diff-line diff-removed",
                    '-',
                    change
                        .old_index()
                        .and_then(|i| original_lines.get(i).copied()),
                ),
                ChangeTag::Insert => (
                    "diff-line diff-added",
                    '+',
                    change.new_index().and_then(|i| updated_lines.get(i).copied()),
                ),
                ChangeTag::Equal => (
                    "diff-line",
                    ' ',
                    change
                        .new_index()
                        .and_then(|i| updated_lines.get(i).copied())
                        .or_else(|| {
                            change
                                .old_index()
                                .and_then(|i| original_lines.get(i).copied())
                        }),
                ),
            };

            html.push_str(&format!(
                r#"<div class="{}"><span class="diff-marker">{}</span>{}</div>"#,
                class,
                marker,
                line.unwrap_or_default()
            ));
        }

        html.push_str("</div>");
        html
    }
}
