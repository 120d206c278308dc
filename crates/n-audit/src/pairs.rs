//! The audited color-role pairs — a declarative table, not engine logic.
//!
//! Each entry names a foreground role and the background it is read
//! against. The list covers the UI surfaces where illegible text hurts
//! most: the editor canvas, selections, line numbers, lists, the status
//! bar, the sidebar, and tabs. Extending the audit to a new surface means
//! adding a row here; the engine never changes.

/// The role every audited pair falls back to when its own background is
/// absent from the theme. Most foreground roles ultimately render over
/// the editor canvas.
pub const DEFAULT_BACKGROUND: &str = "editor.background";

/// Foreground/background role pairs evaluated by the report, in audit
/// order. Pair order is also the tie-break order when two pairs land on
/// the same ratio.
pub const ROLE_PAIRS: &[(&str, &str)] = &[
    ("editor.foreground", "editor.background"),
    ("editor.selectionForeground", "editor.selectionBackground"),
    ("editor.selectionForeground", "editor.inactiveSelectionBackground"),
    ("editorCursor.foreground", "editor.background"),
    ("editorLineNumber.foreground", "editor.background"),
    ("editorLineNumber.activeForeground", "editor.background"),
    ("list.activeSelectionForeground", "list.activeSelectionBackground"),
    ("list.inactiveSelectionForeground", "list.inactiveSelectionBackground"),
    ("statusBar.foreground", "statusBar.background"),
    ("sideBar.foreground", "sideBar.background"),
    ("tab.activeForeground", "tab.activeBackground"),
    ("tab.inactiveForeground", "tab.inactiveBackground"),
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
