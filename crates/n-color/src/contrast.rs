// SPDX-License-Identifier: MIT
//
// WCAG 2.1 contrast measurement over resolved 8-bit colors.
//
// Luminance and contrast operate on `Rgb` only: translucent colors must
// be composited against their backdrop first, because WCAG defines the
// ratio between the colors a reader actually sees.

use crate::color::{Rgb, srgb_to_linear};

/// Compute the relative luminance of a color per WCAG 2.1.
///
/// Linearizes each channel and combines with the standard luminosity
/// weights:
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let r_lin = srgb_to_linear(rgb.r);
    let g_lin = srgb_to_linear(rgb.g);
    let b_lin = srgb_to_linear(rgb.b);
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// Compute the WCAG 2.1 contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0]. The formula is:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result is always >= 1.0 regardless of argument order.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

// ─── Conformance Bands ───────────────────────────────────────────────────────

/// WCAG 2.1 conformance band for a contrast ratio.
///
/// Bands nest: a ratio that earns `Aaa` also satisfies every lower band.
/// `AaLarge` is the 3:1 floor that AA grants large-scale text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum WcagLevel {
    /// Below every threshold (< 3:1).
    Fail,
    /// Large text only (>= 3:1).
    AaLarge,
    /// AA for normal text (>= 4.5:1).
    Aa,
    /// AAA for normal text (>= 7:1).
    Aaa,
}

impl WcagLevel {
    /// Classify a contrast ratio against the WCAG 2.1 thresholds.
    #[must_use]
    pub const fn classify(ratio: f64) -> Self {
        if ratio >= 7.0 {
            Self::Aaa
        } else if ratio >= 4.5 {
            Self::Aa
        } else if ratio >= 3.0 {
            Self::AaLarge
        } else {
            Self::Fail
        }
    }

    /// The band name as it appears in reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fail => "fail",
            Self::AaLarge => "aa-large",
            Self::Aa => "aa",
            Self::Aaa => "aaa",
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
