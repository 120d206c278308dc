// SPDX-License-Identifier: MIT
//
// n-color — exact 8-bit color math for WCAG contrast auditing.
//
// Theme documents store colors as hex strings, and WCAG defines its
// contrast formula over the 8-bit sRGB values those strings encode.
// This crate keeps colors integer from parse to composite, only going
// to floating point inside the luminance math, so a parsed theme value
// re-serializes to exactly the channels the author wrote.
//
// This crate intentionally avoids general color-management machinery
// (OKLCH, gamut mapping, palette generation): auditing needs one
// representation and one formula, and every conversion it performs is
// the one WCAG 2.1 specifies.

pub mod color;
pub mod contrast;

pub use color::{Rgb, Rgba};
pub use contrast::{WcagLevel, contrast_ratio, relative_luminance};
