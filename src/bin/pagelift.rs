//! CLI binary for pagelift.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ExtractionConfig` and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use pagelift::{
    extract, extract_to_file, inspect, ExtractResponse, ExtractionConfig, PageFailurePolicy,
};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Whole document to stdout
  pagelift document.pdf

  # Pages 2 through 7, written to a file
  pagelift --pages 2-7 document.pdf -o excerpt.md

  # Page 5 onwards (end defaults to the last page)
  pagelift --pages 5- document.pdf

  # Probe the page count and metadata without extracting
  pagelift --inspect-only document.pdf

  # JSON envelope, as an HTTP front-end would return it
  pagelift --json --pages 1-3 document.pdf

  # Abort on the first undecodable page instead of substituting empty text
  pagelift --fail-fast document.pdf

PAGE SELECTION:
  Pages are 1-indexed and ranges are inclusive. An end page beyond the
  document is clamped to the last page, so "1-9999" safely means "from the
  start to the end". A start page beyond the document is an error.

EXIT STATUS:
  0 on success, 1 on any error. With --json the error is also reported in
  the JSON envelope ({"success": false, "error": ...}).
"#;

/// Extract PDF page text to Markdown with per-page headings.
#[derive(Parser, Debug)]
#[command(
    name = "pagelift",
    version,
    about = "Extract PDF page text to Markdown with per-page headings",
    long_about = "Extract the text of selected PDF pages and assemble it into a single \
Markdown document: one `## Page N` section per page, separated by horizontal rules. \
Pure-Rust parsing, no OCR, no native libraries.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Local PDF file path.
    input: PathBuf,

    /// Write Markdown to this file instead of stdout.
    #[arg(short, long, env = "PAGELIFT_OUTPUT")]
    output: Option<PathBuf>,

    /// Page selection: all, 5, 2-7, or 5- (open-ended).
    #[arg(long, env = "PAGELIFT_PAGES", default_value = "all", allow_hyphen_values = true)]
    pages: String,

    /// Abort on the first page that cannot be decoded instead of
    /// substituting empty text.
    #[arg(long, env = "PAGELIFT_FAIL_FAST")]
    fail_fast: bool,

    /// Prepend YAML front-matter with document metadata.
    #[arg(long, env = "PAGELIFT_METADATA")]
    metadata: bool,

    /// Output the JSON response envelope instead of raw Markdown.
    #[arg(long, env = "PAGELIFT_JSON")]
    json: bool,

    /// Print page count and metadata only, no extraction.
    #[arg(long)]
    inspect_only: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "PAGELIFT_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "PAGELIFT_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || cli.json {
        "error"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Inspect-only mode ────────────────────────────────────────────────
    if cli.inspect_only {
        let meta = inspect(&cli.input).context("Failed to inspect PDF")?;

        if cli.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&meta).context("Failed to serialise metadata")?
            );
        } else {
            println!("File:         {}", cli.input.display());
            if let Some(ref t) = meta.title {
                println!("Title:        {}", t);
            }
            if let Some(ref a) = meta.author {
                println!("Author:       {}", a);
            }
            if let Some(ref s) = meta.subject {
                println!("Subject:      {}", s);
            }
            println!("Pages:        {}", meta.page_count);
            println!("PDF Version:  {}", meta.pdf_version);
            if let Some(ref p) = meta.producer {
                println!("Producer:     {}", p);
            }
            if let Some(ref c) = meta.creator {
                println!("Creator:      {}", c);
            }
        }
        return Ok(());
    }

    // ── Build config ─────────────────────────────────────────────────────
    let config = build_config(&cli)?;

    // ── Run extraction ───────────────────────────────────────────────────
    if let Some(ref output_path) = cli.output {
        let stats = extract_to_file(&cli.input, output_path, &config)
            .context("Extraction failed")?;
        if !cli.quiet {
            eprintln!(
                "extracted {} pages of {} in {}ms  →  {}",
                stats.extracted_pages,
                stats.total_pages,
                stats.total_duration_ms,
                output_path.display(),
            );
            if stats.failed_pages > 0 {
                eprintln!("  {} pages could not be decoded", stats.failed_pages);
            }
        }
        return Ok(());
    }

    let result = extract(&cli.input, &config);

    if cli.json {
        let envelope = ExtractResponse::from_result(&result);
        println!(
            "{}",
            serde_json::to_string_pretty(&envelope).context("Failed to serialise response")?
        );
        if result.is_err() {
            std::process::exit(1);
        }
        return Ok(());
    }

    let output = result.context("Extraction failed")?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(output.markdown.as_bytes())
        .context("Failed to write to stdout")?;
    // Ensure a trailing newline on stdout.
    if !output.markdown.ends_with('\n') {
        handle.write_all(b"\n").ok();
    }

    if !cli.quiet {
        eprintln!(
            "extracted pages {} of {} total in {}ms",
            output.pages_extracted, output.stats.total_pages, output.stats.total_duration_ms
        );
        if output.stats.failed_pages > 0 {
            eprintln!("  {} pages could not be decoded", output.stats.failed_pages);
        }
    }

    Ok(())
}

/// Map CLI args to `ExtractionConfig`.
fn build_config(cli: &Cli) -> Result<ExtractionConfig> {
    let (start, end) = parse_pages(&cli.pages)?;

    let mut builder = ExtractionConfig::builder()
        .page_failure(if cli.fail_fast {
            PageFailurePolicy::FailFast
        } else {
            PageFailurePolicy::BestEffort
        })
        .include_metadata(cli.metadata);

    if let Some(start) = start {
        builder = builder.start_page(start);
    }
    if let Some(end) = end {
        builder = builder.end_page(end);
    }

    builder.build().context("Invalid configuration")
}

/// Parse `--pages` into raw (start, end) bounds.
///
/// Accepts `all`, a single page `5`, a closed range `2-7`, and open-ended
/// forms `5-` / `-7`. Missing bounds stay `None` and default inside the
/// pipeline (start → 1, end → last page).
fn parse_pages(s: &str) -> Result<(Option<usize>, Option<usize>)> {
    let s = s.trim().to_lowercase();

    if s.is_empty() || s == "all" {
        return Ok((None, None));
    }

    if let Some((start, end)) = s.split_once('-') {
        let start = match start.trim() {
            "" => None,
            v => Some(v.parse::<usize>().context("Invalid start page in range")?),
        };
        let end = match end.trim() {
            "" => None,
            v => Some(v.parse::<usize>().context("Invalid end page in range")?),
        };
        if let (Some(s), Some(e)) = (start, end) {
            if s > e {
                anyhow::bail!("Invalid page range '{s}-{e}': start must be <= end");
            }
        }
        return Ok((start, end));
    }

    let page: usize = s.parse().context("Invalid page number")?;
    Ok((Some(page), Some(page)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pages_all() {
        assert_eq!(parse_pages("all").unwrap(), (None, None));
        assert_eq!(parse_pages("ALL").unwrap(), (None, None));
    }

    #[test]
    fn parse_pages_single() {
        assert_eq!(parse_pages("5").unwrap(), (Some(5), Some(5)));
    }

    #[test]
    fn parse_pages_range() {
        assert_eq!(parse_pages("2-7").unwrap(), (Some(2), Some(7)));
    }

    #[test]
    fn parse_pages_open_ended() {
        assert_eq!(parse_pages("5-").unwrap(), (Some(5), None));
        assert_eq!(parse_pages("-7").unwrap(), (None, Some(7)));
    }

    #[test]
    fn parse_pages_rejects_garbage_and_inverted() {
        assert!(parse_pages("x").is_err());
        assert!(parse_pages("3-x").is_err());
        assert!(parse_pages("7-2").is_err());
    }
}
