//! Bionic reading annotation for mixed Latin and Chinese text.
//!
//! The [`engine`] marks a "focus" prefix on every word: a syllable-like break
//! for Latin words and a ratio cut per segmented word for Chinese. The other
//! modules load documents, export the result and host the terminal reader.

pub mod app;
pub mod cli;
pub mod engine;
pub mod export;
pub mod input;
pub mod ui;

pub use engine::{annotate, AnnotatedSpan, AnnotationConfig, Fragment, TextAnnotator};
