//! Settings for the annotation engine and the terminal reader.
//!
//! The ratio moves like a slider: 0.2 to 0.8 in steps of 0.1.

use super::error::ConfigError;
use std::ops::RangeInclusive;

pub const RATIO_RANGE: RangeInclusive<f64> = 0.2..=0.8;
pub const RATIO_STEP: f64 = 0.1;

/// Latin/digit tokens at or below this many characters are exempt when
/// `ignore_short` is set.
pub const LATIN_SHORT_THRESHOLD: usize = 3;

/// Segmented Chinese words at or below this many characters are exempt when
/// `ignore_short` is set.
pub const CJK_SHORT_THRESHOLD: usize = 1;

/// Per-call annotation settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnotationConfig {
    /// Fraction of each token marked as focus before heuristic adjustment (default 0.5)
    pub ratio: f64,

    /// Leave short tokens unmarked (default false)
    pub ignore_short: bool,

    /// Annotate Latin/digit runs only; Chinese passes through (default false)
    pub latin_only: bool,
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            ratio: 0.5,
            ignore_short: false,
            latin_only: false,
        }
    }
}

impl AnnotationConfig {
    pub fn new(ratio: f64, ignore_short: bool) -> Result<Self, ConfigError> {
        if !RATIO_RANGE.contains(&ratio) {
            return Err(ConfigError::RatioOutOfRange(ratio));
        }
        Ok(Self {
            ratio,
            ignore_short,
            latin_only: false,
        })
    }

    pub fn with_latin_only(mut self, latin_only: bool) -> Self {
        self.latin_only = latin_only;
        self
    }

    /// Moves the ratio by `steps` slider increments, clamped to `RATIO_RANGE`.
    pub fn adjust_ratio(&mut self, steps: i32) {
        let tenths = (self.ratio / RATIO_STEP).round() as i32 + steps;
        let min = (RATIO_RANGE.start() / RATIO_STEP).round() as i32;
        let max = (RATIO_RANGE.end() / RATIO_STEP).round() as i32;
        self.ratio = tenths.clamp(min, max) as f64 / 10.0;
    }

    pub fn toggle_ignore_short(&mut self) {
        self.ignore_short = !self.ignore_short;
    }
}

pub const LINE_SPACING_RANGE: RangeInclusive<u16> = 0..=2;
pub const TEXT_WIDTH_RANGE: RangeInclusive<u16> = 40..=160;
pub const TEXT_WIDTH_STEP: u16 = 10;

/// Terminal reader layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Blank rows between visual lines (default 0)
    pub line_spacing: u16,

    /// Wrap column in terminal cells (default 80)
    pub text_width: u16,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            line_spacing: 0,
            text_width: 80,
        }
    }
}

impl ReaderConfig {
    pub fn new(line_spacing: u16, text_width: u16) -> Result<Self, ConfigError> {
        if !LINE_SPACING_RANGE.contains(&line_spacing) {
            return Err(ConfigError::LineSpacingOutOfRange(line_spacing));
        }
        if !TEXT_WIDTH_RANGE.contains(&text_width) {
            return Err(ConfigError::WidthOutOfRange(text_width));
        }
        Ok(Self {
            line_spacing,
            text_width,
        })
    }

    pub fn cycle_line_spacing(&mut self) {
        self.line_spacing = if self.line_spacing >= *LINE_SPACING_RANGE.end() {
            *LINE_SPACING_RANGE.start()
        } else {
            self.line_spacing + 1
        };
    }

    pub fn adjust_width(&mut self, steps: i32) {
        let width = self.text_width as i32 + steps * TEXT_WIDTH_STEP as i32;
        self.text_width = width.clamp(
            *TEXT_WIDTH_RANGE.start() as i32,
            *TEXT_WIDTH_RANGE.end() as i32,
        ) as u16;
    }
}
