//! Assembly of entity classes into one ordered-alternation matcher.
//!
//! The regex engine resolves alternation leftmost-first: at a given start
//! position the earliest listed class that matches wins. Reordering classes
//! therefore changes tokenization.

use crate::config::PipelineSpec;
use crate::error::{ArgotError, Result};
use crate::expressions::ExpressionRegistry;
use log::trace;
use regex::{Regex, RegexBuilder};
use std::collections::HashSet;

/// Catch-all term matching any single non-whitespace character.
pub const CATCH_ALL: &str = r"(?:\S)";

/// The default explicit class list for social-media text.
pub const SOCIAL_PIPELINE: &[&str] = &[
    "EMOJI",
    "URL",
    "TAG",
    "EMAIL",
    "USER",
    "HASHTAG",
    "CASHTAG",
    "PHONE",
    "PERCENT",
    "MONEY",
    "DATE",
    "TIME",
    "ACRONYM",
    "LTR_FACE",
    "RTL_FACE",
    "CENSORED",
    "EMPHASIS",
    "REST_EMOTICONS",
    "NUMBER",
    "WORD",
    "EASTERN_EMOTICONS",
];

/// Compiled size budget; Unicode word classes repeated across many fragments
/// exceed the engine default.
const SIZE_LIMIT: usize = 64 * (1 << 20);

/// A matched span of the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'t> {
    /// Matched text.
    pub text: &'t str,
    /// Start position in the scanned text (byte offset).
    pub start: usize,
    /// End position in the scanned text (byte offset).
    pub end: usize,
    /// Class that produced the span, `None` for the catch-all.
    pub entity: Option<&'static str>,
}

/// A compiled tokenization pipeline.
#[derive(Debug, Clone)]
pub struct Pipeline {
    regex: Regex,
    classes: Vec<&'static str>,
}

impl Pipeline {
    /// Builds a pipeline from a configuration.
    pub fn build(spec: &PipelineSpec) -> Result<Self> {
        match spec {
            PipelineSpec::Classes(names) => Self::from_classes(names.as_slice()),
            PipelineSpec::Toggles(toggles) => Self::from_classes(toggles.classes().as_slice()),
        }
    }

    /// Builds the default social-media pipeline.
    pub fn social() -> Result<Self> {
        Self::from_classes(SOCIAL_PIPELINE)
    }

    /// Builds a pipeline from registry names, in precedence order.
    ///
    /// Every name must resolve in the registry and appear at most once.
    pub fn from_classes<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let registry = ExpressionRegistry::global();
        let mut seen = HashSet::with_capacity(names.len());
        let mut classes = Vec::with_capacity(names.len());
        let mut terms = Vec::with_capacity(names.len() + 1);

        for name in names {
            let expression = registry.expression(name.as_ref())?;
            if !seen.insert(expression.name()) {
                return Err(ArgotError::Config(format!(
                    "entity class {} listed twice",
                    expression.name()
                )));
            }
            // Each class gets its own group so a match can be attributed.
            terms.push(format!("(?P<{}>{})", expression.name(), expression.pattern()));
            classes.push(expression.name());
        }
        terms.push(CATCH_ALL.to_string());

        let pattern = format!("({})", terms.join("|"));
        trace!("Compiling pipeline {:?} ({} bytes)", classes, pattern.len());

        let regex = RegexBuilder::new(&pattern).size_limit(SIZE_LIMIT).build()?;

        Ok(Self { regex, classes })
    }

    /// Classes in precedence order.
    pub fn classes(&self) -> &[&'static str] {
        &self.classes
    }

    /// The assembled pattern source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Scans `text` left to right, yielding non-overlapping spans.
    ///
    /// Every non-whitespace character of `text` lies inside exactly one span.
    pub fn spans<'p, 't>(&'p self, text: &'t str) -> impl Iterator<Item = Span<'t>> + 'p
    where
        't: 'p,
    {
        self.regex.captures_iter(text).filter_map(move |caps| {
            let whole = caps.get(1)?;
            // Group 0 is the whole match, group 1 the outer wrapper.
            let entity = caps
                .iter()
                .skip(2)
                .position(|group| group.is_some())
                .map(|index| self.classes[index]);

            Some(Span {
                text: whole.as_str(),
                start: whole.start(),
                end: whole.end(),
                entity,
            })
        })
    }
}
