// SPDX-License-Identifier: MIT
//
// n-contrast — WCAG contrast report for editor color themes.
//
// This is the main binary that wires together the crates:
//
//   n-color → exact 8-bit RGBA parsing, compositing, luminance, contrast
//   n-audit → theme document loading, role pairs, the report engine
//
// One run is one pass:
//
//   theme file → strip // comments → "colors" map → evaluate role pairs
//              → sort ascending by ratio → print (text or --json)
//
// Per-pair problems (missing roles, bad hex values) silently omit the
// pair; run with --verbose to see why a pairing didn't make the report.
// Only an unreadable or structurally invalid document is fatal.

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use n_audit::{contrast_report, load_theme, render_json, render_text};

/// Audit the contrast ratios of an editor color theme.
#[derive(Debug, Parser)]
#[command(name = "n-contrast", version, about)]
struct Args {
    /// Path to the theme document (JSON, `//` line comments allowed).
    theme: PathBuf,

    /// Emit the report as a JSON array instead of text.
    #[arg(long)]
    json: bool,

    /// Log skipped pairs and other diagnostics to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("n-contrast: {e:#}");
        process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let colors = load_theme(&args.theme)
        .with_context(|| format!("failed to load theme {}", args.theme.display()))?;

    let report = contrast_report(&colors);

    if args.json {
        println!("{}", render_json(&report).context("failed to serialize report")?);
    } else {
        print!("{}", render_text(&report));
    }

    Ok(())
}

/// Install the terminal logger. Diagnostics stay on stderr so the report
/// itself remains pipeable.
fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    // Best-effort: if a logger is already installed, keep it.
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}
