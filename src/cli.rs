//! Shared front-end for the `convert_to_*` binaries.
//!
//! Each binary is a one-line shim that calls [`main`] with its target. The
//! positional interface is exactly `<input_file> <output_file>`; everything
//! else is an optional flag with an environment fallback.

use crate::config::{MAX_RENDERED_PIXELS, MIN_RENDERED_PIXELS};
use crate::{
    run, ConversionConfig, ConversionOutcome, ConversionProgressCallback, ProgressCallback,
    Strategy, TargetFormat,
};
use anyhow::{Context, Result};
use clap::{CommandFactory, FromArgMatches, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── Progress spinner ─────────────────────────────────────────────────────────

/// Spinner on stderr that turns into a counter for multi-page conversions.
struct SpinnerProgress {
    bar: ProgressBar,
}

impl SpinnerProgress {
    fn new(target: TargetFormat) -> Arc<Self> {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]),
        );
        bar.set_prefix(format!("Converting to {}", target.label()));
        bar.enable_steady_tick(Duration::from_millis(80));
        Arc::new(Self { bar })
    }
}

impl ConversionProgressCallback for SpinnerProgress {
    fn on_conversion_start(&self, total_steps: usize, what: &str) {
        if total_steps > 1 {
            self.bar.set_style(
                ProgressStyle::with_template(
                    "{spinner:.cyan} {prefix:.bold}  [{bar:32.green/238}] {pos:>3}/{len} {msg}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▉▊▋▌▍▎▏  "),
            );
            self.bar.set_length(total_steps as u64);
            self.bar.set_message(format!("{what}s"));
        } else {
            self.bar.set_message(what.to_string());
        }
    }

    fn on_step_complete(&self, step: usize, _total: usize) {
        self.bar.set_position(step as u64);
    }

    fn on_conversion_complete(&self, _success: bool) {
        self.bar.finish_and_clear();
    }
}

// ── Arguments ────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(version, arg_required_else_help = true, color = clap::ColorChoice::Auto)]
struct Cli {
    /// Document or image to convert. The extension selects the conversion.
    input_file: PathBuf,

    /// Where to write the result. Created or replaced only on success.
    output_file: PathBuf,

    /// Office automation host (LibreOffice) executable.
    #[arg(long, env = "DOCSHIFT_OFFICE_BINARY")]
    office_binary: Option<PathBuf>,

    /// Tesseract executable used for OCR.
    #[arg(long, env = "DOCSHIFT_TESSERACT_BINARY")]
    tesseract_binary: Option<PathBuf>,

    /// Tesseract language code(s), e.g. `eng` or `eng+deu`.
    #[arg(long, env = "DOCSHIFT_OCR_LANG")]
    ocr_lang: Option<String>,

    /// libpdfium shared library, or the directory containing it.
    #[arg(long, env = "PDFIUM_LIB_PATH")]
    pdfium_lib: Option<PathBuf>,

    /// Longest edge, in pixels, of a PDF page rendered onto a slide.
    #[arg(long, env = "DOCSHIFT_MAX_PIXELS",
          value_parser = clap::value_parser!(u32)
              .range(MIN_RENDERED_PIXELS as i64..=MAX_RENDERED_PIXELS as i64))]
    max_pixels: Option<u32>,

    /// User password for encrypted PDFs.
    #[arg(long, env = "DOCSHIFT_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Print the outcome as JSON instead of a status line.
    #[arg(long, env = "DOCSHIFT_JSON")]
    json: bool,

    /// Hide the progress spinner.
    #[arg(long, env = "DOCSHIFT_NO_PROGRESS")]
    no_progress: bool,

    /// Debug logging on stderr.
    #[arg(short, long, env = "DOCSHIFT_VERBOSE")]
    verbose: bool,

    /// Errors only on stderr.
    #[arg(short, long, env = "DOCSHIFT_QUIET", conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn config(&self, progress: Option<ProgressCallback>) -> Result<ConversionConfig> {
        let mut builder = ConversionConfig::builder();
        if let Some(path) = &self.office_binary {
            builder = builder.office_binary(path);
        }
        if let Some(path) = &self.tesseract_binary {
            builder = builder.tesseract_binary(path);
        }
        if let Some(lang) = &self.ocr_lang {
            builder = builder.ocr_language(lang);
        }
        if let Some(path) = &self.pdfium_lib {
            builder = builder.pdfium_library(path);
        }
        if let Some(px) = self.max_pixels {
            builder = builder.max_rendered_pixels(px);
        }
        if let Some(pwd) = &self.password {
            builder = builder.password(pwd);
        }
        if let Some(cb) = progress {
            builder = builder.progress_callback(cb);
        }
        builder.build().context("Invalid configuration")
    }
}

fn bin_name(target: TargetFormat) -> &'static str {
    match target {
        TargetFormat::Docx => "convert_to_docx",
        TargetFormat::Pdf => "convert_to_pdf",
        TargetFormat::Pptx => "convert_to_pptx",
    }
}

fn after_help(target: TargetFormat) -> String {
    format!(
        "SUPPORTED INPUTS:\n  {}\n\n\
         ENVIRONMENT VARIABLES:\n  \
         RUST_LOG                  Override the log filter (e.g. docshift=debug)\n  \
         PDFIUM_LIB_PATH           libpdfium location (PDF inputs)\n  \
         DOCSHIFT_TESSERACT_BINARY tesseract executable (image → DOCX)\n  \
         DOCSHIFT_OFFICE_BINARY    soffice executable (DOCX/DOC/PPTX → PDF)\n\n\
         EXIT STATUS:\n  0 on success, 1 on conversion failure, 2 on usage error",
        Strategy::accepted_extensions(target)
            .iter()
            .map(|e| format!(".{e}"))
            .collect::<Vec<_>>()
            .join(" ")
    )
}

// ── Entry point ──────────────────────────────────────────────────────────────

/// Parse arguments, run one conversion and exit with its status.
pub fn main(target: TargetFormat) -> Result<()> {
    let matches = Cli::command()
        .name(bin_name(target))
        .bin_name(bin_name(target))
        .about(format!("Convert a document or image to {}", target.label()))
        .after_help(after_help(target))
        .get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    // Keep library logs below the spinner unless asked for.
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(io::stderr)
        .init();

    let show_progress = !cli.quiet && !cli.no_progress && !cli.json && !cli.verbose;
    let spinner = show_progress.then(|| SpinnerProgress::new(target));
    let config = cli.config(spinner.clone().map(|s| s as ProgressCallback))?;

    let outcome = run(&cli.input_file, &cli.output_file, target, &config);
    if let Some(s) = &spinner {
        s.bar.finish_and_clear();
    }

    report(&outcome, cli.json)?;
    let code = outcome.exit_code();
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn report(outcome: &ConversionOutcome, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(outcome).context("Failed to serialise outcome")?
        );
    } else {
        println!("{}", outcome.message());
    }
    Ok(())
}
