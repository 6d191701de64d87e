//! End-to-end text cleaning.

use crate::annotate::{Annotator, TokenSelector};
use crate::config::Config;
use crate::error::Result;
use crate::text::{ContractionExpander, EnglishContractions, SocialTokenizer, UnicodeNormalizer};
use log::trace;
use std::fmt;

/// Normalizes, expands, tokenizes, annotates and reassembles text.
///
/// # Example
///
/// ```
/// use argot::{Config, TextProcessor, WhitespaceAnnotator};
///
/// let processor = TextProcessor::new(Config::default(), WhitespaceAnnotator).unwrap();
/// let cleaned = processor.forward("I'll visit www.example.com tomorrow!").unwrap();
/// assert_eq!(cleaned, "I will visit <url> tomorrow !");
/// ```
pub struct TextProcessor {
    normalizer: UnicodeNormalizer,
    expander: Box<dyn ContractionExpander>,
    tokenizer: SocialTokenizer,
    annotator: Box<dyn Annotator>,
    selector: TokenSelector,
}

impl fmt::Debug for TextProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextProcessor")
            .field("normalizer", &self.normalizer)
            .field("tokenizer", &self.tokenizer)
            .field("selector", &self.selector)
            .finish_non_exhaustive()
    }
}

impl TextProcessor {
    /// Builds every stage from `config`. The tokenizer pipeline is compiled here.
    pub fn new<A: Annotator + 'static>(config: Config, annotator: A) -> Result<Self> {
        let Config {
            tokenizer,
            normalizer,
            selection,
        } = config;

        let tokenizer = SocialTokenizer::new(tokenizer)?
            .with_protected_tokens([normalizer.unknown_marker.as_str()]);

        Ok(Self {
            normalizer: UnicodeNormalizer::new(normalizer),
            expander: Box::new(EnglishContractions),
            tokenizer,
            annotator: Box::new(annotator),
            selector: TokenSelector::new(&selection),
        })
    }

    /// Replaces the contraction expander.
    pub fn with_expander<E: ContractionExpander + 'static>(mut self, expander: E) -> Self {
        self.expander = Box::new(expander);
        self
    }

    /// Replaces the tokenizer, e.g. one carrying an inspector.
    ///
    /// The unknown marker is added to its protected tokens.
    pub fn with_tokenizer(mut self, tokenizer: SocialTokenizer) -> Self {
        let marker = self.normalizer.config().unknown_marker.clone();
        self.tokenizer = tokenizer.with_protected_tokens([marker]);
        self
    }

    pub fn tokenizer(&self) -> &SocialTokenizer {
        &self.tokenizer
    }

    pub fn normalizer(&self) -> &UnicodeNormalizer {
        &self.normalizer
    }

    pub fn selector(&self) -> &TokenSelector {
        &self.selector
    }

    /// Runs the full chain on `text`.
    ///
    /// Whitespace runs in the result are collapsed to single spaces and the
    /// ends are trimmed. Annotator errors are returned as is.
    pub fn forward(&self, text: &str) -> Result<String> {
        let normalized = self.normalizer.normalize(text);
        let expanded = self.expander.expand(&normalized);
        let tokens = self.tokenizer.tokenize_to_strings(&expanded);
        trace!("{} tokens before annotation", tokens.len());

        let annotations = self.annotator.annotate(&tokens.join(" "))?;
        let selected = self.selector.select(&annotations);

        Ok(collapse_whitespace(&selected))
    }

    /// Decodes `bytes` as UTF-8 and runs [`forward`](Self::forward).
    pub fn forward_bytes(&self, bytes: &[u8]) -> Result<String> {
        let text = std::str::from_utf8(bytes)?;
        self.forward(text)
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::{Annotation, PartOfSpeech, WhitespaceAnnotator};
    use crate::config::{SelectionMode, TokenizerConfig};
    use crate::error::ArgotError;
    use crate::text::NoContractions;

    fn processor() -> TextProcessor {
        TextProcessor::new(Config::default(), WhitespaceAnnotator).unwrap()
    }

    #[test]
    fn test_forward_default() {
        let out = processor().forward("I'll visit www.example.com tomorrow!").unwrap();
        assert_eq!(out, "I will visit <url> tomorrow !");
    }

    #[test]
    fn test_forward_without_placeholders() {
        let config = Config {
            tokenizer: TokenizerConfig {
                replace: false,
                ..Default::default()
            },
            ..Default::default()
        };
        let processor = TextProcessor::new(config, WhitespaceAnnotator).unwrap();
        let out = processor.forward("I'll visit www.example.com tomorrow!").unwrap();

        assert_eq!(out, "I will visit www.example.com tomorrow !");
    }

    #[test]
    fn test_forward_marks_lost_characters() {
        let out = processor().forward("café  time").unwrap();
        assert_eq!(out, "caf <UKN> time");
    }

    #[test]
    fn test_lowercase_keeps_unknown_marker() {
        let config = Config {
            tokenizer: TokenizerConfig {
                lowercase: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let processor = TextProcessor::new(config, WhitespaceAnnotator).unwrap();

        assert_eq!(processor.forward("Café 日本").unwrap(), "caf <UKN> <UKN>");
    }

    #[test]
    fn test_replacement_tokenizer_keeps_unknown_marker() {
        let tokenizer = SocialTokenizer::new(TokenizerConfig {
            lowercase: true,
            ..Default::default()
        })
        .unwrap();
        let processor = processor().with_tokenizer(tokenizer);

        assert_eq!(processor.forward("日本 Hi").unwrap(), "<UKN> hi");
    }

    #[test]
    fn test_custom_expander() {
        let processor = processor().with_expander(NoContractions);
        let out = processor.forward("can't").unwrap();
        assert_eq!(out, "can't");
    }

    #[test]
    fn test_lemma_selection() {
        let annotator = |text: &str| -> Result<Vec<Annotation>> {
            Ok(text
                .split_whitespace()
                .map(|w| match w {
                    "dogs" => Annotation::new(w, "dog", PartOfSpeech::Noun),
                    "barked" => Annotation::new(w, "bark", PartOfSpeech::Verb),
                    _ => Annotation::new(w, w, PartOfSpeech::Det),
                })
                .collect())
        };
        let processor = TextProcessor::new(Config::default(), annotator).unwrap();

        assert_eq!(processor.forward("the dogs barked").unwrap(), "the dog bark");
    }

    #[test]
    fn test_gated_selection_config() {
        let mut config = Config::default();
        config.selection.mode = SelectionMode::WhitespaceGated;
        let processor = TextProcessor::new(config, WhitespaceAnnotator).unwrap();

        assert_eq!(processor.selector().mode(), SelectionMode::WhitespaceGated);
    }

    #[test]
    fn test_annotator_error_propagates() {
        let failing =
            |_: &str| -> Result<Vec<Annotation>> { Err(ArgotError::Annotation("offline".into())) };
        let processor = TextProcessor::new(Config::default(), failing).unwrap();

        assert!(matches!(processor.forward("hi"), Err(ArgotError::Annotation(_))));
    }

    #[test]
    fn test_forward_bytes() {
        let processor = processor();
        assert_eq!(processor.forward_bytes(b"  hello   world ").unwrap(), "hello world");
        assert!(matches!(
            processor.forward_bytes(b"\xc3\x28"),
            Err(ArgotError::Normalization(_))
        ));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(processor().forward("").unwrap(), "");
    }
}
