//! The contrast report — pair evaluation, ordering, rendering.
//!
//! One pass over [`ROLE_PAIRS`](crate::pairs::ROLE_PAIRS): look both roles
//! up, fall back to the default background, parse, composite translucent
//! foregrounds, measure, collect. Pairs the theme cannot answer for are
//! omitted without ceremony — absence of optional roles is the normal
//! case, not a defect. The finished report sorts ascending by ratio so
//! the least legible pairing is the first line a theme author reads.

use std::fmt;

use log::debug;
use serde::Serialize;

use n_color::color::Rgba;
use n_color::contrast::{WcagLevel, contrast_ratio};

use crate::document::ColorMap;
use crate::pairs::{DEFAULT_BACKGROUND, ROLE_PAIRS};

// ---------------------------------------------------------------------------
// ReportEntry
// ---------------------------------------------------------------------------

/// One evaluated foreground/background pairing.
///
/// Holds the hex strings exactly as the theme wrote them — not the
/// composited values — so a reported line traces straight back to the
/// document.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    /// Foreground role key.
    pub fg_key: String,
    /// Background role key as listed in the pair table (not the fallback
    /// that may have supplied the color).
    pub bg_key: String,
    /// The theme's foreground value, verbatim.
    pub fg_hex: String,
    /// The background value actually measured against, verbatim.
    pub bg_hex: String,
    /// WCAG 2.1 contrast ratio, in [1, 21].
    pub ratio: f64,
    /// Conformance band the ratio lands in.
    pub wcag: WcagLevel,
}

impl fmt::Display for ReportEntry {
    /// One report line:
    /// `editor.foreground on editor.background: #ffffff / #000000 -> 21.00:1`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {}: {} / {} -> {:.2}:1",
            self.fg_key, self.bg_key, self.fg_hex, self.bg_hex, self.ratio
        )
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Evaluate every audited role pair against a theme's color map.
///
/// Returns entries sorted ascending by ratio; equal ratios keep their
/// pair-table order. Pairs with missing roles or unparseable colors are
/// omitted — this function never fails.
#[must_use]
pub fn contrast_report(colors: &ColorMap) -> Vec<ReportEntry> {
    let mut entries: Vec<ReportEntry> = ROLE_PAIRS
        .iter()
        .filter_map(|&(fg_key, bg_key)| evaluate_pair(colors, fg_key, bg_key))
        .collect();

    // total_cmp keeps the sort stable and panic-free; ratios can't be NaN
    // (both luminances are finite and the denominator is >= 0.05).
    entries.sort_by(|a, b| a.ratio.total_cmp(&b.ratio));
    entries
}

/// Evaluate one role pair, or `None` if the theme can't answer for it.
fn evaluate_pair(colors: &ColorMap, fg_key: &str, bg_key: &str) -> Option<ReportEntry> {
    let Some(fg_hex) = colors.get(fg_key) else {
        debug!("skipping {fg_key} on {bg_key}: no {fg_key} in theme");
        return None;
    };

    // A missing background falls back to the editor canvas; a missing
    // foreground has nothing sensible to fall back to.
    let Some(bg_hex) = colors.get(bg_key).or_else(|| colors.get(DEFAULT_BACKGROUND)) else {
        debug!("skipping {fg_key} on {bg_key}: no background available");
        return None;
    };

    let Some(fg) = Rgba::parse(fg_hex) else {
        debug!("skipping {fg_key} on {bg_key}: unparseable foreground {fg_hex:?}");
        return None;
    };
    let Some(bg) = Rgba::parse(bg_hex) else {
        debug!("skipping {fg_key} on {bg_key}: unparseable background {bg_hex:?}");
        return None;
    };

    // The background renders over an already-resolved canvas, so its own
    // alpha is ignored. An opaque foreground skips compositing outright.
    let bg_rgb = bg.rgb();
    let fg_rgb = if fg.is_opaque() {
        fg.rgb()
    } else {
        fg.blend_over(bg_rgb)
    };

    let ratio = contrast_ratio(fg_rgb, bg_rgb);
    Some(ReportEntry {
        fg_key: fg_key.to_owned(),
        bg_key: bg_key.to_owned(),
        fg_hex: fg_hex.clone(),
        bg_hex: bg_hex.clone(),
        ratio,
        wcag: WcagLevel::classify(ratio),
    })
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render the report in its plain-text form: a header line, then one line
/// per entry, ascending by ratio.
#[must_use]
pub fn render_text(entries: &[ReportEntry]) -> String {
    let mut out = String::from("Contrast ratios (lowest first):\n");
    for entry in entries {
        out.push_str(&entry.to_string());
        out.push('\n');
    }
    out
}

/// Render the report as a pretty-printed JSON array of entries.
///
/// # Errors
///
/// Returns the underlying `serde_json` error if serialization fails.
pub fn render_json(entries: &[ReportEntry]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(entries)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use n_color::color::Rgb;

    use super::*;

    fn theme(entries: &[(&str, &str)]) -> ColorMap {
        entries
            .iter()
            .map(|&(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }

    // ── Single-pair behavior ────────────────────────────────────────

    #[test]
    fn white_on_black_is_21() {
        let colors = theme(&[
            ("editor.foreground", "#ffffff"),
            ("editor.background", "#000000"),
        ]);
        let report = contrast_report(&colors);

        // Every other pair lacks its foreground role and is skipped.
        assert_eq!(report.len(), 1);
        let entry = &report[0];
        assert_eq!(entry.fg_key, "editor.foreground");
        assert_eq!(entry.bg_key, "editor.background");
        assert!((entry.ratio - 21.0).abs() < 1e-9);
        assert_eq!(entry.wcag, WcagLevel::Aaa);
        assert_eq!(
            entry.to_string(),
            "editor.foreground on editor.background: #ffffff / #000000 -> 21.00:1"
        );
    }

    #[test]
    fn empty_theme_yields_empty_report() {
        assert!(contrast_report(&ColorMap::new()).is_empty());
    }

    #[test]
    fn missing_foreground_skips_pair() {
        let colors = theme(&[("editor.background", "#000000")]);
        assert!(contrast_report(&colors).is_empty());
    }

    #[test]
    fn missing_background_falls_back_to_editor_background() {
        // statusBar.background is absent; the pair evaluates against the
        // editor canvas instead of being dropped.
        let colors = theme(&[
            ("statusBar.foreground", "#ffffff"),
            ("editor.background", "#000000"),
        ]);
        let report = contrast_report(&colors);
        assert_eq!(report.len(), 1);
        let entry = &report[0];
        assert_eq!(entry.fg_key, "statusBar.foreground");
        assert_eq!(entry.bg_key, "statusBar.background");
        assert_eq!(entry.bg_hex, "#000000");
        assert!((entry.ratio - 21.0).abs() < 1e-9);
    }

    #[test]
    fn unparseable_foreground_skips_pair() {
        let colors = theme(&[
            ("editor.foreground", "notacolor"),
            ("editor.background", "#000000"),
        ]);
        assert!(contrast_report(&colors).is_empty());
    }

    #[test]
    fn unparseable_background_skips_pair() {
        let colors = theme(&[
            ("editor.foreground", "#ffffff"),
            ("editor.background", "#12"),
        ]);
        assert!(contrast_report(&colors).is_empty());
    }

    // ── Compositing within the engine ───────────────────────────────

    #[test]
    fn translucent_foreground_composites_over_background() {
        let colors = theme(&[
            ("editor.foreground", "#ffffff80"),
            ("editor.background", "#000000"),
        ]);
        let report = contrast_report(&colors);
        assert_eq!(report.len(), 1);
        let entry = &report[0];

        // 50%-alpha white over black resolves to mid-gray before measuring.
        let expected = contrast_ratio(Rgb::new(128, 128, 128), Rgb::BLACK);
        assert!((entry.ratio - expected).abs() < 1e-12);

        // The report still shows what the theme wrote, not the blend.
        assert_eq!(entry.fg_hex, "#ffffff80");
        assert_eq!(entry.bg_hex, "#000000");
    }

    #[test]
    fn background_alpha_is_ignored() {
        let opaque = theme(&[
            ("editor.foreground", "#808080"),
            ("editor.background", "#000000"),
        ]);
        let translucent = theme(&[
            ("editor.foreground", "#808080"),
            ("editor.background", "#00000040"),
        ]);
        let a = contrast_report(&opaque);
        let b = contrast_report(&translucent);
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 1);
        assert!((a[0].ratio - b[0].ratio).abs() < 1e-12);
    }

    #[test]
    fn short_form_hex_is_reported_verbatim() {
        let colors = theme(&[
            ("editor.foreground", "#fff"),
            ("editor.background", "#000"),
        ]);
        let report = contrast_report(&colors);
        assert_eq!(report[0].fg_hex, "#fff");
        assert_eq!(report[0].bg_hex, "#000");
        assert!((report[0].ratio - 21.0).abs() < 1e-9);
    }

    // ── Ordering ────────────────────────────────────────────────────

    #[test]
    fn report_sorts_ascending_by_ratio() {
        let colors = theme(&[
            ("editor.foreground", "#ffffff"),
            ("editor.background", "#000000"),
            ("statusBar.foreground", "#777777"),
            ("statusBar.background", "#222222"),
            ("sideBar.foreground", "#aaaaaa"),
            ("sideBar.background", "#111111"),
        ]);
        let report = contrast_report(&colors);
        assert_eq!(report.len(), 3);
        for window in report.windows(2) {
            assert!(window[0].ratio <= window[1].ratio);
        }
        assert_eq!(report[0].fg_key, "statusBar.foreground");
        assert_eq!(report[2].fg_key, "editor.foreground");
    }

    #[test]
    fn equal_ratios_keep_pair_table_order() {
        // Identical colors on two different surfaces tie exactly; the
        // editor pair is listed before the status bar pair in the table.
        let colors = theme(&[
            ("editor.foreground", "#ffffff"),
            ("editor.background", "#000000"),
            ("statusBar.foreground", "#ffffff"),
            ("statusBar.background", "#000000"),
        ]);
        let report = contrast_report(&colors);
        assert_eq!(report.len(), 2);
        assert!((report[0].ratio - report[1].ratio).abs() < 1e-15);
        assert_eq!(report[0].fg_key, "editor.foreground");
        assert_eq!(report[1].fg_key, "statusBar.foreground");
    }

    // ── Rendering ───────────────────────────────────────────────────

    #[test]
    fn text_rendering_matches_contract() {
        let colors = theme(&[
            ("editor.foreground", "#ffffff"),
            ("editor.background", "#000000"),
        ]);
        let text = render_text(&contrast_report(&colors));
        assert_eq!(
            text,
            "Contrast ratios (lowest first):\n\
             editor.foreground on editor.background: #ffffff / #000000 -> 21.00:1\n"
        );
    }

    #[test]
    fn text_rendering_of_empty_report_is_just_the_header() {
        assert_eq!(render_text(&[]), "Contrast ratios (lowest first):\n");
    }

    #[test]
    fn json_rendering_carries_the_wcag_band() {
        let colors = theme(&[
            ("editor.foreground", "#ffffff"),
            ("editor.background", "#000000"),
        ]);
        let json = render_json(&contrast_report(&colors)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["fg_key"], "editor.foreground");
        assert_eq!(value[0]["wcag"], "aaa");
        assert!((value[0]["ratio"].as_f64().unwrap() - 21.0).abs() < 1e-9);
    }
}
