//! Configuration for the argot normalization pipeline.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration for the text processor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tokenizer configuration.
    pub tokenizer: TokenizerConfig,

    /// Unicode normalizer configuration.
    pub normalizer: NormalizerConfig,

    /// Token selection configuration.
    pub selection: SelectionConfig,
}

impl Config {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Which entity classes the tokenizer recognizes, and in what order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineSpec {
    /// Explicit ordered list of registry names. Earlier names take precedence.
    Classes(Vec<String>),

    /// Named switches expanded in a fixed precedence order.
    Toggles(EntityToggles),
}

impl Default for PipelineSpec {
    fn default() -> Self {
        PipelineSpec::Toggles(EntityToggles::default())
    }
}

/// Tokenizer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Entity classes to recognize.
    /// Default: all toggles on except file paths.
    pub pipeline: PipelineSpec,

    /// Lowercase every token.
    /// Default: false.
    pub lowercase: bool,

    /// Replace recognized entities with `<class>` placeholders.
    /// Default: true.
    pub replace: bool,

    /// Split tokens at camel-case and digit boundaries.
    /// Default: true.
    pub split_camel_case: bool,

    /// Which tokens camel-case splitting applies to.
    /// Default: words.
    pub camel_case_scope: CamelCaseScope,

    /// Log every tokenized text at debug level.
    /// Default: false.
    pub verbose: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            pipeline: PipelineSpec::default(),
            lowercase: false,
            replace: true,
            split_camel_case: true,
            camel_case_scope: CamelCaseScope::default(),
            verbose: false,
        }
    }
}

/// Tokens eligible for camel-case splitting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CamelCaseScope {
    /// `WORD` tokens and unclassified characters. Entities such as
    /// `#NoFilter` or `123-456-7890` stay whole.
    #[default]
    Words,

    /// Every token, whatever class matched it.
    All,
}

/// Boolean switches for each group of entity classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityToggles {
    pub emojis: bool,
    pub urls: bool,
    /// Default: false.
    pub filepaths: bool,
    /// Markup tags such as `<br>`.
    pub tags: bool,
    pub emails: bool,
    /// User handles such as `@someone`.
    pub users: bool,
    pub hashtags: bool,
    pub cashtags: bool,
    pub phones: bool,
    pub percents: bool,
    pub money: bool,
    pub dates: bool,
    pub times: bool,
    pub acronyms: bool,
    /// Western, eastern and compact emoticons.
    pub emoticons: bool,
    /// Masked words such as `f**k`.
    pub censored: bool,
    /// Starred words such as `*very*`.
    pub emphasis: bool,
    /// Code-like calls such as `exp()`.
    pub functions: bool,
    pub numbers: bool,
}

impl Default for EntityToggles {
    fn default() -> Self {
        Self {
            emojis: true,
            urls: true,
            filepaths: false,
            tags: true,
            emails: true,
            users: true,
            hashtags: true,
            cashtags: true,
            phones: true,
            percents: true,
            money: true,
            dates: true,
            times: true,
            acronyms: true,
            emoticons: true,
            censored: true,
            emphasis: true,
            functions: true,
            numbers: true,
        }
    }
}

impl EntityToggles {
    /// Expands the switches into registry names, in precedence order.
    ///
    /// `WORD` is always present.
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::new();
        let mut push = |enabled: bool, names: &[&'static str]| {
            if enabled {
                classes.extend_from_slice(names);
            }
        };

        push(self.emojis, &["EMOJI"]);
        push(self.urls, &["URL"]);
        push(self.filepaths, &["FILEPATH"]);
        push(self.tags, &["TAG"]);
        push(self.emails, &["EMAIL"]);
        push(self.users, &["USER"]);
        push(self.hashtags, &["HASHTAG"]);
        push(self.cashtags, &["CASHTAG"]);
        push(self.phones, &["PHONE"]);
        push(self.percents, &["PERCENT"]);
        push(self.money, &["MONEY"]);
        push(self.dates, &["DATE"]);
        push(self.times, &["TIME"]);
        push(self.acronyms, &["ACRONYM"]);
        push(self.emoticons, &["LTR_FACE", "RTL_FACE"]);
        push(self.censored, &["CENSORED"]);
        push(self.emphasis, &["EMPHASIS"]);
        push(self.functions, &["FUNCTION"]);
        push(self.emoticons, &["REST_EMOTICONS"]);
        push(self.numbers, &["NUMBER"]);
        push(true, &["WORD"]);
        push(self.emoticons, &["EASTERN_EMOTICONS"]);

        classes
    }

    /// All switches off: only `WORD` and the catch-all remain.
    pub fn none() -> Self {
        Self {
            emojis: false,
            urls: false,
            filepaths: false,
            tags: false,
            emails: false,
            users: false,
            hashtags: false,
            cashtags: false,
            phones: false,
            percents: false,
            money: false,
            dates: false,
            times: false,
            acronyms: false,
            emoticons: false,
            censored: false,
            emphasis: false,
            functions: false,
            numbers: false,
        }
    }
}

/// Unicode normalization form applied before ASCII folding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizationForm {
    Nfc,
    Nfd,
    /// Composes accents so accented letters count as lost content.
    #[default]
    Nfkc,
    /// Decomposes accents so `é` folds to `e`.
    Nfkd,
}

/// Unicode normalizer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Normalization form.
    /// Default: NFKC.
    pub form: NormalizationForm,

    /// Token inserted where content could not be represented.
    /// Default: `<UKN>`.
    pub unknown_marker: String,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            form: NormalizationForm::default(),
            unknown_marker: crate::DEFAULT_UNKNOWN_MARKER.to_string(),
        }
    }
}

/// How annotated tokens are turned back into text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Lemmas for privileged tags, surface forms for the rest.
    #[default]
    Lemma,

    /// Like `Lemma`, but text between two whitespace tokens keeps its surface form.
    WhitespaceGated,
}

/// Token selection configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Selection mode.
    /// Default: lemma.
    pub mode: SelectionMode,
}
