//! Rule-based tokenization of social-media text.

use crate::config::{CamelCaseScope, TokenizerConfig};
use crate::error::Result;
use crate::expressions::ExpressionRegistry;
use crate::text::pipeline::{Pipeline, Span};
use log::debug;
use regex::{NoExpand, Regex};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Placeholder classes in the order they are tried.
pub const PLACEHOLDER_ORDER: [&str; 8] = [
    "url", "email", "percent", "money", "phone", "user", "date", "number",
];

/// Classes split under [`CamelCaseScope::Words`].
/// Catch-all tokens (no class) are always eligible.
const WORD_CLASSES: &[&str] = &["WORD"];

/// A token with its position in the HTML-decoded text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token text after lowercasing and placeholder substitution.
    pub text: String,
    /// Whether `text` is a placeholder.
    pub replaced: bool,
    /// Entity class that matched the span, or the placeholder class once replaced.
    pub entity: Option<&'static str>,
    /// Start position in the decoded text (byte offset).
    pub start: usize,
    /// End position in the decoded text (byte offset).
    pub end: usize,
}

impl Token {
    /// Creates a new, unreplaced token.
    pub fn new(text: String, entity: Option<&'static str>, start: usize, end: usize) -> Self {
        Self {
            text,
            replaced: false,
            entity,
            start,
            end,
        }
    }

    fn from_span(span: Span<'_>) -> Self {
        Self::new(span.text.to_string(), span.entity, span.start, span.end)
    }
}

/// Debug hook invoked with each input and its tokens.
///
/// Implementations may block, e.g. to wait for a key press while a developer
/// inspects the output.
pub trait TokenInspector: Send + Sync {
    /// Called once per [`SocialTokenizer::tokenize`] call, after all steps.
    fn inspect(&self, text: &str, tokens: &[Token]);
}

impl<F> TokenInspector for F
where
    F: Fn(&str, &[Token]) + Send + Sync,
{
    fn inspect(&self, text: &str, tokens: &[Token]) {
        self(text, tokens)
    }
}

struct Placeholder {
    replacement: String,
    entity: &'static str,
    matcher: &'static Regex,
}

/// Tokenizer that recognizes URLs, handles, emoticons and other entities.
///
/// The pipeline is compiled once at construction; the tokenizer is immutable
/// afterwards and can be shared across threads.
#[derive(Clone)]
pub struct SocialTokenizer {
    pipeline: Pipeline,
    config: TokenizerConfig,
    placeholders: Arc<[Placeholder]>,
    protected: Arc<[String]>,
    inspector: Option<Arc<dyn TokenInspector>>,
}

impl fmt::Debug for SocialTokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SocialTokenizer")
            .field("classes", &self.pipeline.classes())
            .field("config", &self.config)
            .field("protected", &self.protected)
            .field("inspector", &self.inspector.is_some())
            .finish()
    }
}

impl SocialTokenizer {
    /// Creates a tokenizer with the given configuration.
    ///
    /// Fails if the pipeline names a class the registry does not define.
    pub fn new(config: TokenizerConfig) -> Result<Self> {
        let pipeline = Pipeline::build(&config.pipeline)?;
        let registry = ExpressionRegistry::global();

        let placeholders = PLACEHOLDER_ORDER
            .iter()
            .map(|&label| -> Result<Placeholder> {
                let expression = registry.expression(label)?;
                Ok(Placeholder {
                    replacement: format!(" <{label}> "),
                    entity: expression.name(),
                    matcher: expression.compiled(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            pipeline,
            config,
            placeholders: placeholders.into(),
            protected: Arc::from(Vec::<String>::new()),
            inspector: None,
        })
    }

    /// Creates a tokenizer with default configuration.
    pub fn default_config() -> Result<Self> {
        Self::new(TokenizerConfig::default())
    }

    /// Installs a debug hook called after every tokenization.
    pub fn with_inspector<I: TokenInspector + 'static>(mut self, inspector: I) -> Self {
        self.inspector = Some(Arc::new(inspector));
        self
    }

    /// Adds tokens that pass through verbatim: never split, lowercased or
    /// replaced. Used for the normalizer's unknown marker.
    pub fn with_protected_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.protected = self
            .protected
            .iter()
            .cloned()
            .chain(tokens.into_iter().map(Into::into))
            .collect();
        self
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Tokenizes text into a sequence of tokens.
    ///
    /// HTML entities are decoded first; token offsets refer to the decoded text.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let decoded = html_escape::decode_html_entities(text);
        let mut tokens: Vec<Token> = self.pipeline.spans(&decoded).map(Token::from_span).collect();

        if self.config.split_camel_case {
            tokens = tokens
                .into_iter()
                .flat_map(|token| self.split_token(token))
                .collect();
        }

        if self.config.lowercase {
            for token in tokens.iter_mut().filter(|t| !self.is_protected(t)) {
                token.text = token.text.to_lowercase();
            }
        }

        if self.config.replace {
            for token in &mut tokens {
                if !self.is_protected(token) {
                    self.substitute(token);
                }
            }
        }

        if self.config.verbose {
            let rendered: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
            debug!("{}", rendered.join(" | "));
        }

        if let Some(inspector) = &self.inspector {
            inspector.inspect(text, &tokens);
        }

        tokens
    }

    /// Tokenizes text and returns only the token strings.
    pub fn tokenize_to_strings(&self, text: &str) -> Vec<String> {
        self.tokenize(text).into_iter().map(|t| t.text).collect()
    }

    fn is_protected(&self, token: &Token) -> bool {
        self.protected.iter().any(|p| *p == token.text)
    }

    /// Rewrites every match of the first placeholder class that occurs in the
    /// token. Later classes are not tried once one has changed the text.
    fn substitute(&self, token: &mut Token) {
        for placeholder in self.placeholders.iter() {
            let text = match placeholder
                .matcher
                .replace_all(&token.text, NoExpand(placeholder.replacement.as_str()))
            {
                Cow::Borrowed(_) => continue,
                Cow::Owned(text) => text,
            };
            if text == token.text {
                continue;
            }

            token.text = text;
            token.replaced = true;
            token.entity = Some(placeholder.entity);
            return;
        }
    }

    fn split_token(&self, token: Token) -> Vec<Token> {
        let eligible = match self.config.camel_case_scope {
            CamelCaseScope::All => true,
            CamelCaseScope::Words => token.entity.map_or(true, |e| WORD_CLASSES.contains(&e)),
        };
        if !eligible || self.is_protected(&token) {
            return vec![token];
        }

        let mut offset = token.start;
        split_camel_case(&token.text)
            .into_iter()
            .map(|part| {
                let start = offset;
                offset += part.len();
                Token::new(part.to_string(), token.entity, start, offset)
            })
            .collect()
    }
}

/// Splits a string at camel-case and digit boundaries.
///
/// The parts concatenate back to the input.
///
/// ```
/// use argot::text::split_camel_case;
///
/// assert_eq!(split_camel_case("HTMLParser2go"), vec!["HTML", "Parser", "2", "go"]);
/// ```
pub fn split_camel_case(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut parts = Vec::new();
    let mut start = 0;

    for (i, &(offset, c)) in chars.iter().enumerate() {
        let prev = if i == 0 { ' ' } else { chars[i - 1].1 };
        let next = chars.get(i + 1).map_or(' ', |&(_, n)| n);

        if offset > start && is_camel_case_boundary(prev, c, next) {
            parts.push(&text[start..offset]);
            start = offset;
        }
    }

    if start < text.len() {
        parts.push(&text[start..]);
    }

    parts
}

fn is_camel_case_boundary(prev: char, c: char, next: char) -> bool {
    if prev.is_numeric() {
        return !c.is_numeric();
    }
    if c.is_uppercase() {
        return next.is_lowercase() || (prev.is_alphabetic() && !prev.is_uppercase());
    }
    c.is_numeric()
}
