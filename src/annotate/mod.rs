//! Interface to an external linguistic annotator.
//!
//! The annotator is a pluggable collaborator (a POS tagger and lemmatizer).
//! This crate only consumes its output: one [`Annotation`] per token.

mod selection;

pub use selection::TokenSelector;

use crate::error::{ArgotError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse part-of-speech tags (Universal Dependencies) plus `SPACE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PartOfSpeech {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
    /// Whitespace the annotator kept as a token.
    Space,
}

impl PartOfSpeech {
    /// Tags whose tokens contribute their lemma instead of their surface form.
    pub const PRIVILEGED: [PartOfSpeech; 4] = [
        PartOfSpeech::Verb,
        PartOfSpeech::Propn,
        PartOfSpeech::Aux,
        PartOfSpeech::Noun,
    ];

    pub fn is_privileged(self) -> bool {
        Self::PRIVILEGED.contains(&self)
    }

    /// The tag as written by annotators, e.g. `PROPN`.
    pub fn as_str(self) -> &'static str {
        match self {
            PartOfSpeech::Adj => "ADJ",
            PartOfSpeech::Adp => "ADP",
            PartOfSpeech::Adv => "ADV",
            PartOfSpeech::Aux => "AUX",
            PartOfSpeech::Cconj => "CCONJ",
            PartOfSpeech::Det => "DET",
            PartOfSpeech::Intj => "INTJ",
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::Num => "NUM",
            PartOfSpeech::Part => "PART",
            PartOfSpeech::Pron => "PRON",
            PartOfSpeech::Propn => "PROPN",
            PartOfSpeech::Punct => "PUNCT",
            PartOfSpeech::Sconj => "SCONJ",
            PartOfSpeech::Sym => "SYM",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::X => "X",
            PartOfSpeech::Space => "SPACE",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartOfSpeech {
    type Err = ArgotError;

    fn from_str(tag: &str) -> Result<Self> {
        let pos = match tag.to_ascii_uppercase().as_str() {
            "ADJ" => PartOfSpeech::Adj,
            "ADP" => PartOfSpeech::Adp,
            "ADV" => PartOfSpeech::Adv,
            "AUX" => PartOfSpeech::Aux,
            "CCONJ" | "CONJ" => PartOfSpeech::Cconj,
            "DET" => PartOfSpeech::Det,
            "INTJ" => PartOfSpeech::Intj,
            "NOUN" => PartOfSpeech::Noun,
            "NUM" => PartOfSpeech::Num,
            "PART" => PartOfSpeech::Part,
            "PRON" => PartOfSpeech::Pron,
            "PROPN" => PartOfSpeech::Propn,
            "PUNCT" => PartOfSpeech::Punct,
            "SCONJ" => PartOfSpeech::Sconj,
            "SYM" => PartOfSpeech::Sym,
            "VERB" => PartOfSpeech::Verb,
            "X" => PartOfSpeech::X,
            "SPACE" => PartOfSpeech::Space,
            _ => return Err(ArgotError::Annotation(format!("unknown POS tag: {tag}"))),
        };
        Ok(pos)
    }
}

/// One annotated token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Text as it appeared in the input.
    pub surface: String,
    /// Dictionary form.
    pub lemma: String,
    pub pos: PartOfSpeech,
}

impl Annotation {
    pub fn new(surface: impl Into<String>, lemma: impl Into<String>, pos: PartOfSpeech) -> Self {
        Self {
            surface: surface.into(),
            lemma: lemma.into(),
            pos,
        }
    }

    /// The form the selection policy keeps for this token.
    pub fn selected_form(&self) -> &str {
        if self.pos.is_privileged() {
            &self.lemma
        } else {
            &self.surface
        }
    }
}

/// A linguistic model that splits text into annotated tokens.
pub trait Annotator: Send + Sync {
    /// Annotates `text`, returning tokens in input order.
    fn annotate(&self, text: &str) -> Result<Vec<Annotation>>;
}

impl<F> Annotator for F
where
    F: Fn(&str) -> Result<Vec<Annotation>> + Send + Sync,
{
    fn annotate(&self, text: &str) -> Result<Vec<Annotation>> {
        self(text)
    }
}

/// Annotator that splits on whitespace and tags every token `X`.
///
/// Lemmas equal surface forms, so selection passes text through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceAnnotator;

impl Annotator for WhitespaceAnnotator {
    fn annotate(&self, text: &str) -> Result<Vec<Annotation>> {
        Ok(text
            .split_whitespace()
            .map(|word| Annotation::new(word, word, PartOfSpeech::X))
            .collect())
    }
}
