//! Contraction expansion applied before tokenization.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

/// Expands contracted forms such as `I'll` into `I will`.
pub trait ContractionExpander: Send + Sync {
    /// Returns `text` with contractions expanded.
    fn expand(&self, text: &str) -> String;
}

/// Leaves text untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoContractions;

impl ContractionExpander for NoContractions {
    fn expand(&self, text: &str) -> String {
        text.to_string()
    }
}

// Words with an inner straight or curly apostrophe.
static CONTRACTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z]+['’][A-Za-z]+\b").unwrap());

/// Forms whose expansion is not stem + suffix.
static IRREGULAR: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("won't", "will not"),
        ("can't", "cannot"),
        ("shan't", "shall not"),
        ("ain't", "are not"),
        ("let's", "let us"),
        ("y'all", "you all"),
        ("ma'am", "madam"),
        ("o'clock", "of the clock"),
    ]
    .into_iter()
    .collect()
});

/// Stems where `'s` means `is` rather than a possessive.
const IS_STEMS: &[&str] = &[
    "it", "he", "she", "that", "there", "here", "what", "who", "where", "when", "how", "why",
];

/// Built-in expander for common English contractions.
///
/// Accepts straight and curly apostrophes. The first letter keeps its case and
/// all-caps words stay all caps. Possessives are left alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishContractions;

impl EnglishContractions {
    /// Expands a single contracted word, or returns `None` if it is not one.
    pub fn expand_word(word: &str) -> Option<String> {
        let straight = word.replace('’', "'");
        let lower = straight.to_lowercase();

        let expanded = match IRREGULAR.get(lower.as_str()) {
            Some(full) => (*full).to_string(),
            None => {
                let split = straight.find('\'')?;
                // Offsets index `straight`; lowercasing may change byte lengths.
                let stem = &straight[..split];
                let suffix = straight[split + 1..].to_lowercase();
                let lower_stem = stem.to_lowercase();

                match suffix.as_str() {
                    "t" if stem.len() > 1 && stem.ends_with(['n', 'N']) => {
                        format!("{} not", &stem[..stem.len() - 1])
                    }
                    "re" => format!("{stem} are"),
                    "ve" => format!("{stem} have"),
                    "m" => format!("{stem} am"),
                    "ll" => format!("{stem} will"),
                    "d" => format!("{stem} would"),
                    "s" if IS_STEMS.contains(&lower_stem.as_str()) => format!("{stem} is"),
                    _ => return None,
                }
            }
        };

        Some(match_case(word, expanded))
    }
}

impl ContractionExpander for EnglishContractions {
    fn expand(&self, text: &str) -> String {
        CONTRACTION
            .replace_all(text, |caps: &Captures| {
                let word = &caps[0];
                Self::expand_word(word).unwrap_or_else(|| word.to_string())
            })
            .into_owned()
    }
}

fn match_case(original: &str, expanded: String) -> String {
    let letters: Vec<char> = original.chars().filter(|c| c.is_alphabetic()).collect();

    if letters.len() > 1 && letters.iter().all(|c| c.is_uppercase()) {
        return expanded.to_uppercase();
    }

    let mut chars = expanded.chars();
    match (original.chars().next(), chars.next()) {
        (Some(first), Some(head)) if first.is_uppercase() => {
            head.to_uppercase().chain(chars).collect()
        }
        _ => expanded,
    }
}
