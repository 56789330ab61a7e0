//! # Situ Render
//!
//! Presentation layer for reconciled edits: JSON syntax highlighting, a
//! line-wise HTML diff, and the `EditViewer` that drives the whole
//! pipeline for one element.
//!
//! ```text
//! reconciler ──▶ {original, updated} pair
//!                     │ pretty-print
//!                     ▼
//!               two JSON strings ──▶ JsonHighlighter ──▶ two HTML strings
//!                     │                                        │
//!                     └──────────── DiffRenderer ◀─────────────┘
//!                                       │
//!                                       ▼
//!                                 HTML fragment
//! ```
//!
//! The two pretty-printed JSON strings are the reproducible artifact; the
//! HTML wrapping is presentation only. Highlighting never inserts or
//! removes newlines, so JSON line N always aligns with highlighted line N
//! and the diff can be computed on the plain strings while displaying the
//! highlighted ones.

mod diff;
mod highlight;
mod viewer;

pub use diff::{DiffRenderer, HtmlDiffRenderer};
pub use highlight::{escape_html, JsonHighlighter};
pub use viewer::{EditViewer, ViewerOutput};
