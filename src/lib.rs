//! # Argot - Social Text Normalization
//!
//! Argot turns noisy, informal text (tweets, chat logs, forum posts) into a
//! clean token stream for downstream NLP.
//!
//! ## Overview
//!
//! Text flows through a fixed chain of stages:
//!
//! 1. Unicode normalization folds every word to ASCII and marks lost content
//!    with an unknown marker (`<UKN>` by default).
//! 2. Contractions are expanded (`I'll` becomes `I will`).
//! 3. A rule-based tokenizer scans the text with one ordered regex alternation
//!    that recognizes URLs, handles, hashtags, emoticons, dates, money and more.
//!    Tokens can be split at camel-case boundaries, lowercased, and replaced
//!    with placeholders such as `<url>`.
//! 4. An external annotator supplies lemmas and part-of-speech tags, and the
//!    selector reassembles the text from lemmas or surface forms.
//!
//! ## Quick Start
//!
//! ```rust
//! use argot::{Config, TextProcessor, WhitespaceAnnotator};
//!
//! let processor = TextProcessor::new(Config::default(), WhitespaceAnnotator)?;
//! assert_eq!(processor.forward("café time")?, "caf <UKN> time");
//! # Ok::<(), argot::ArgotError>(())
//! ```
//!
//! The tokenizer can also be used on its own:
//!
//! ```rust
//! use argot::{SocialTokenizer, TokenizerConfig};
//!
//! let tokenizer = SocialTokenizer::new(TokenizerConfig::default())?;
//! let tokens = tokenizer.tokenize_to_strings("call 123-456-7890 :-)");
//! assert_eq!(tokens, vec!["call", " <phone> ", ":-)"]);
//! # Ok::<(), argot::ArgotError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`expressions`] - Registry of named entity patterns
//! - [`text`] - Pipeline builder, tokenizer, normalizer and contractions
//! - [`annotate`] - Annotator interface and token selection
//! - [`processor`] - End-to-end composition
//! - [`config`] - Serializable configuration

#![warn(clippy::all)]

pub mod annotate;
pub mod config;
pub mod error;
pub mod expressions;
pub mod processor;
pub mod text;

// Re-export commonly used types
pub use annotate::{Annotation, Annotator, PartOfSpeech, TokenSelector, WhitespaceAnnotator};
pub use config::{
    CamelCaseScope, Config, EntityToggles, NormalizationForm, NormalizerConfig, PipelineSpec,
    SelectionConfig, SelectionMode, TokenizerConfig,
};
pub use error::{ArgotError, Result};
pub use expressions::{Expression, ExpressionRegistry};
pub use processor::TextProcessor;
pub use text::{
    ContractionExpander, EnglishContractions, NoContractions, Pipeline, SocialTokenizer, Token,
    TokenInspector, UnicodeNormalizer, UnknownMarker, WordConversion,
};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default text inserted where characters could not be converted.
pub const DEFAULT_UNKNOWN_MARKER: &str = "<UKN>";
