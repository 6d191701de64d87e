//! Word-level ASCII folding with explicit markers for lost content.

use crate::config::{NormalizationForm, NormalizerConfig};
use crate::error::Result;
use log::debug;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Where a word lost content during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownMarker {
    /// The word converted without loss.
    None,
    /// Content was lost at the start; the marker precedes the residue.
    Prefix,
    /// Content was lost at the end or inside the word; the marker follows
    /// the residue.
    Suffix,
    /// Nothing survived; the marker replaces the word.
    Full,
}

/// Outcome of converting one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordConversion {
    /// ASCII residue of the word.
    pub normalized: String,
    /// Where content was lost.
    pub marker: UnknownMarker,
    /// Text emitted in place of the word, marker included.
    pub output: String,
}

/// Unicode normalizer that folds words to ASCII.
#[derive(Debug, Clone)]
pub struct UnicodeNormalizer {
    config: NormalizerConfig,
}

impl UnicodeNormalizer {
    /// Creates a new normalizer with the given configuration.
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Creates a normalizer with default configuration.
    pub fn default_config() -> Self {
        Self::new(NormalizerConfig::default())
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    fn apply_form(&self, word: &str) -> String {
        match self.config.form {
            NormalizationForm::Nfc => word.nfc().collect(),
            NormalizationForm::Nfd => word.nfd().collect(),
            NormalizationForm::Nfkc => word.nfkc().collect(),
            NormalizationForm::Nfkd => word.nfkd().collect(),
        }
    }

    /// Converts a single word.
    ///
    /// The word is normalized, then combining marks and any whitespace the
    /// normalization produced are removed. Dropping the remaining non-ASCII
    /// code points gives the residue, whose position in the normalized word
    /// tells where content was lost. Loss anywhere but the start puts the
    /// marker after the residue.
    pub fn convert_word(&self, word: &str) -> WordConversion {
        let view: String = self
            .apply_form(word)
            .chars()
            .filter(|&c| !c.is_whitespace() && !is_combining_mark(c))
            .collect();
        let normalized: String = view.chars().filter(char::is_ascii).collect();
        let unknown = self.config.unknown_marker.as_str();

        let (marker, output) = if normalized.is_empty() {
            (UnknownMarker::Full, unknown.to_string())
        } else if normalized.len() == view.len() {
            (UnknownMarker::None, normalized.clone())
        } else if !view.starts_with(&normalized) && view.ends_with(&normalized) {
            (UnknownMarker::Prefix, format!("{unknown} {normalized}"))
        } else {
            (UnknownMarker::Suffix, format!("{normalized} {unknown}"))
        };

        if marker != UnknownMarker::None {
            debug!("{word:?} is not fully convertible ({marker:?})");
        }

        WordConversion {
            normalized,
            marker,
            output,
        }
    }

    /// Normalizes every word of `text`.
    ///
    /// Words are runs between spaces, tabs and newlines; the separators are
    /// copied through verbatim.
    pub fn normalize(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut word_start = None;

        for (i, c) in text.char_indices() {
            if is_separator(c) {
                if let Some(start) = word_start.take() {
                    out.push_str(&self.convert_word(&text[start..i]).output);
                }
                out.push(c);
            } else if word_start.is_none() {
                word_start = Some(i);
            }
        }

        if let Some(start) = word_start {
            out.push_str(&self.convert_word(&text[start..]).output);
        }

        out
    }

    /// Decodes `bytes` as UTF-8 and normalizes the result.
    ///
    /// Invalid input fails as a whole; no partial output is produced.
    pub fn normalize_bytes(&self, bytes: &[u8]) -> Result<String> {
        let text = std::str::from_utf8(bytes)?;
        Ok(self.normalize(text))
    }
}

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArgotError;

    #[test]
    fn test_clean_word() {
        let normalizer = UnicodeNormalizer::default_config();
        let conversion = normalizer.convert_word("hello");

        assert_eq!(conversion.output, "hello");
        assert_eq!(conversion.marker, UnknownMarker::None);
    }

    #[test]
    fn test_trailing_loss() {
        let normalizer = UnicodeNormalizer::default_config();
        let conversion = normalizer.convert_word("café");

        assert_eq!(conversion.normalized, "caf");
        assert_eq!(conversion.marker, UnknownMarker::Suffix);
        assert_eq!(conversion.output, "caf <UKN>");
    }

    #[test]
    fn test_decomposed_input_matches_precomposed() {
        let normalizer = UnicodeNormalizer::default_config();
        assert_eq!(normalizer.convert_word("cafe\u{301}").output, "caf <UKN>");
    }

    #[test]
    fn test_leading_loss() {
        let normalizer = UnicodeNormalizer::default_config();
        let conversion = normalizer.convert_word("日本abc");

        assert_eq!(conversion.marker, UnknownMarker::Prefix);
        assert_eq!(conversion.output, "<UKN> abc");
    }

    #[test]
    fn test_inner_loss_is_marked() {
        let normalizer = UnicodeNormalizer::default_config();
        let conversion = normalizer.convert_word("señor");

        assert_eq!(conversion.normalized, "seor");
        assert_eq!(conversion.marker, UnknownMarker::Suffix);
        assert_eq!(conversion.output, "seor <UKN>");
        assert_eq!(normalizer.normalize("naïve señor"), "nave <UKN> seor <UKN>");
    }

    #[test]
    fn test_full_loss() {
        let normalizer = UnicodeNormalizer::default_config();
        let conversion = normalizer.convert_word("日本語");

        assert_eq!(conversion.marker, UnknownMarker::Full);
        assert_eq!(conversion.output, "<UKN>");
        assert!(conversion.normalized.is_empty());
    }

    #[test]
    fn test_compatibility_folding() {
        let normalizer = UnicodeNormalizer::default_config();
        let conversion = normalizer.convert_word("ｈｅｌｌｏ");

        assert_eq!(conversion.output, "hello");
        assert_eq!(conversion.marker, UnknownMarker::None);
    }

    #[test]
    fn test_nfkd_folds_accents() {
        let normalizer = UnicodeNormalizer::new(NormalizerConfig {
            form: NormalizationForm::Nfkd,
            ..Default::default()
        });
        assert_eq!(normalizer.convert_word("naïve").output, "naive");
        assert_eq!(normalizer.convert_word("café").output, "cafe");
    }

    #[test]
    fn test_custom_marker() {
        let normalizer = UnicodeNormalizer::new(NormalizerConfig {
            unknown_marker: "[UKN]".to_string(),
            ..Default::default()
        });
        assert_eq!(normalizer.convert_word("😀").output, "[UKN]");
    }

    #[test]
    fn test_normalize_preserves_whitespace() {
        let normalizer = UnicodeNormalizer::default_config();
        let text = "hello  café\tworld\n日本";

        assert_eq!(normalizer.normalize(text), "hello  caf <UKN>\tworld\n<UKN>");
    }

    #[test]
    fn test_normalize_edges() {
        let normalizer = UnicodeNormalizer::default_config();
        assert_eq!(normalizer.normalize(""), "");
        assert_eq!(normalizer.normalize("  \n"), "  \n");
        assert_eq!(normalizer.normalize("last"), "last");
    }

    #[test]
    fn test_normalize_bytes_rejects_invalid_utf8() {
        let normalizer = UnicodeNormalizer::default_config();
        let err = normalizer.normalize_bytes(b"ok \xff\xfe").unwrap_err();

        assert!(matches!(err, ArgotError::Normalization(_)));
        assert_eq!(normalizer.normalize_bytes("café".as_bytes()).unwrap(), "caf <UKN>");
    }
}
