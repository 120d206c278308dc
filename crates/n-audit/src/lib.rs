//! # n-audit — contrast report engine for editor color themes
//!
//! Turns a theme document's color roles into a legibility report: every
//! semantically meaningful foreground/background pairing gets a WCAG 2.1
//! contrast ratio, sorted worst-first so the problems surface on top.
//!
//! # Architecture
//!
//! ```text
//! theme file (JSON + // comments)
//!     │
//!     ▼
//! document.rs: strip comments, decode the "colors" object  → ColorMap
//!     │
//!     ▼
//! pairs.rs:    the fixed fg/bg role pairs worth auditing   (data, not code)
//!     │
//!     ▼
//! report.rs:   look up → fall back → parse → composite → ratio → sort
//!     │
//!     ▼
//! Vec<ReportEntry>, ascending by ratio (text or JSON rendering)
//! ```
//!
//! The engine consumes an already-loaded role→hex map and never touches the
//! filesystem itself; [`document`] is the one place I/O happens. Per-pair
//! problems (missing roles, unparseable values) silently omit the pair —
//! a theme is allowed to leave optional roles out. Only an unreadable or
//! structurally invalid document is an error.

pub mod document;
pub mod pairs;
pub mod report;

pub use document::{AuditError, ColorMap, load_theme, parse_theme};
pub use report::{ReportEntry, contrast_report, render_json, render_text};
