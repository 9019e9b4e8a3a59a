//! Command-line arguments

use crate::engine::{AnnotationConfig, ConfigError, ReaderConfig};
use crate::export::Format;
use clap::Parser;
use std::path::PathBuf;

/// Bold the natural fixation prefix of every word for faster reading
#[derive(Debug, Parser)]
#[command(name = "bionic", version)]
pub struct Cli {
    /// Document to open (.txt, .pdf, .epub); `-` or omitted reads stdin in batch mode
    #[arg(value_name = "FILE")]
    pub file: Option<String>,

    /// Fraction of each word to bold (0.2 - 0.8)
    #[arg(short, long, default_value_t = 0.5)]
    pub ratio: f64,

    /// Leave short words (Latin ≤ 3, Chinese 1 character) unmarked
    #[arg(short, long)]
    pub ignore_short: bool,

    /// Annotate Latin words only and leave Chinese text untouched
    #[arg(long)]
    pub latin_only: bool,

    /// Write annotated output instead of opening the reader
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// Output file for batch mode (default: stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Copy the annotated text to the clipboard as rich text
    #[arg(short, long)]
    pub copy: bool,

    /// Blank rows between lines in the reader (0 - 2)
    #[arg(long, default_value_t = 0)]
    pub line_spacing: u16,

    /// Wrap column in the reader (40 - 160)
    #[arg(long, default_value_t = 80)]
    pub width: u16,

    /// Write logs here while the reader owns the terminal
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Batch mode skips the interactive reader.
    pub fn is_batch(&self) -> bool {
        self.format.is_some() || self.output.is_some() || self.copy
    }

    pub fn annotation_config(&self) -> Result<AnnotationConfig, ConfigError> {
        AnnotationConfig::new(self.ratio, self.ignore_short)
            .map(|config| config.with_latin_only(self.latin_only))
    }

    pub fn reader_config(&self) -> Result<ReaderConfig, ConfigError> {
        ReaderConfig::new(self.line_spacing, self.width)
    }

    /// Explicit `--format`, else the output extension, else ANSI.
    pub fn output_format(&self) -> Format {
        self.format
            .or_else(|| self.output.as_deref().and_then(Format::from_path))
            .unwrap_or(Format::Ansi)
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
