//! Registry of named regular-expression fragments for social-media entities.
//!
//! The registry is built once, on first use, and is read-only afterwards. Each
//! entry keeps its raw pattern (for assembling pipelines), an unanchored
//! matcher, and a matcher anchored to the whole input.

pub mod patterns;

use crate::error::{ArgotError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static REGISTRY: Lazy<ExpressionRegistry> = Lazy::new(ExpressionRegistry::builtin);

/// A named entity-class pattern.
#[derive(Debug, Clone)]
pub struct Expression {
    name: &'static str,
    pattern: &'static str,
    compiled: Regex,
    exact: Regex,
}

impl Expression {
    fn compile(name: &'static str, pattern: &'static str) -> Result<Self> {
        let compiled = Regex::new(pattern)
            .map_err(|e| ArgotError::Config(format!("expression {name}: {e}")))?;
        let exact = Regex::new(&format!(r"\A(?:{pattern})\z"))
            .map_err(|e| ArgotError::Config(format!("expression {name}: {e}")))?;

        Ok(Self {
            name,
            pattern,
            compiled,
            exact,
        })
    }

    /// Registry name, e.g. `URL`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Raw pattern source.
    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// Matcher that finds the pattern anywhere in a haystack.
    pub fn compiled(&self) -> &Regex {
        &self.compiled
    }

    /// Matcher that only accepts inputs the pattern spans completely.
    pub fn exact(&self) -> &Regex {
        &self.exact
    }
}

/// Lookup table from entity-class name to [`Expression`].
///
/// Names are case-insensitive: `url` and `URL` resolve to the same entry.
#[derive(Debug)]
pub struct ExpressionRegistry {
    entries: HashMap<&'static str, Expression>,
    order: Vec<&'static str>,
}

impl ExpressionRegistry {
    /// Returns the process-wide registry of built-in classes.
    pub fn global() -> &'static ExpressionRegistry {
        &REGISTRY
    }

    fn builtin() -> Self {
        Self::from_patterns(patterns::BUILTIN).expect("built-in expressions must compile")
    }

    fn from_patterns(defs: &[(&'static str, &'static str)]) -> Result<Self> {
        let mut entries = HashMap::with_capacity(defs.len());
        let mut order = Vec::with_capacity(defs.len());

        for &(name, pattern) in defs {
            if entries.insert(name, Expression::compile(name, pattern)?).is_some() {
                return Err(ArgotError::Config(format!("duplicate expression name: {name}")));
            }
            order.push(name);
        }

        Ok(Self { entries, order })
    }

    /// Looks up an entry by name.
    pub fn expression(&self, name: &str) -> Result<&Expression> {
        self.entries
            .get(name.to_ascii_uppercase().as_str())
            .ok_or_else(|| ArgotError::UnknownEntity(name.to_string()))
    }

    /// Returns the raw pattern for `name`.
    pub fn get(&self, name: &str) -> Result<&'static str> {
        self.expression(name).map(Expression::pattern)
    }

    /// Returns the compiled, unanchored matcher for `name`.
    pub fn get_compiled(&self, name: &str) -> Result<&Regex> {
        self.expression(name).map(Expression::compiled)
    }

    /// Returns the whole-input matcher for `name`.
    pub fn get_exact(&self, name: &str) -> Result<&Regex> {
        self.expression(name).map(Expression::exact)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name.to_ascii_uppercase().as_str())
    }

    /// Names of all classes, in definition order.
    pub fn names(&self) -> &[&'static str] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> &'static ExpressionRegistry {
        ExpressionRegistry::global()
    }

    fn full_match(name: &str, text: &str) -> bool {
        registry().get_exact(name).unwrap().is_match(text)
    }

    #[test]
    fn test_builtin_classes_present() {
        for name in [
            "URL", "TAG", "EMAIL", "USER", "HASHTAG", "CASHTAG", "PHONE", "PERCENT", "MONEY",
            "DATE", "TIME", "ACRONYM", "LTR_FACE", "RTL_FACE", "REST_EMOTICONS",
            "EASTERN_EMOTICONS", "CENSORED", "EMPHASIS", "NUMBER", "WORD", "EMOJI", "FUNCTION",
            "FILEPATH",
        ] {
            assert!(registry().contains(name), "missing {name}");
        }
        assert_eq!(registry().len(), patterns::BUILTIN.len());
    }

    #[test]
    fn test_case_insensitive_lookup() {
        assert_eq!(registry().get("url").unwrap(), registry().get("URL").unwrap());
        assert!(registry().get_compiled("Hashtag").is_ok());
    }

    #[test]
    fn test_unknown_entity() {
        let err = registry().get("NOT_A_CLASS").unwrap_err();
        assert!(matches!(err, ArgotError::UnknownEntity(ref name) if name == "NOT_A_CLASS"));
    }

    #[test]
    fn test_fragments_have_no_capture_groups() {
        for name in registry().names() {
            let compiled = registry().get_compiled(name).unwrap();
            assert_eq!(compiled.captures_len(), 1, "{name} declares a capturing group");
        }
    }

    #[test]
    fn test_url() {
        assert!(full_match("URL", "www.example.com"));
        assert!(full_match("URL", "https://t.co/AbC123"));
        assert!(full_match("URL", "baidu.com"));
        assert!(!full_match("URL", "decimal.js"));
        let found = registry().get_compiled("URL").unwrap().find("see http://x.org/a.").unwrap();
        assert_eq!(found.as_str(), "http://x.org/a");
    }

    #[test]
    fn test_social_handles() {
        assert!(full_match("USER", "@cbaziotis"));
        assert!(full_match("HASHTAG", "#NoFilter"));
        assert!(full_match("CASHTAG", "$AAPL"));
        assert!(full_match("EMAIL", "someone@mail.example.org"));
        assert!(full_match("TAG", "<br/>"));
    }

    #[test]
    fn test_numeric_entities() {
        assert!(full_match("PHONE", "123-456-7890"));
        assert!(full_match("PHONE", "+1-555-123-4567"));
        assert!(full_match("PERCENT", "12.5%"));
        assert!(full_match("MONEY", "$100"));
        assert!(full_match("MONEY", "€3,50"));
        assert!(full_match("DATE", "2020-01-31"));
        assert!(full_match("DATE", "Jan 5th, 2021"));
        assert!(full_match("TIME", "10:30pm"));
        assert!(full_match("TIME", "33:38.008"));
        assert!(full_match("NUMBER", "1,000.50"));
        assert!(!full_match("NUMBER", "123-456-7890"));
    }

    #[test]
    fn test_emoticons() {
        for face in [":)", ":-D", ";p", ":'(", ">:(", "xD"] {
            assert!(full_match("LTR_FACE", face), "{face}");
        }
        assert!(full_match("RTL_FACE", "(-:"));
        for face in ["<3", "</3", "^_^", "-_-", "o_O", "\\o/"] {
            assert!(full_match("REST_EMOTICONS", face), "{face}");
        }
        for face in ["(^_^)", "(>_<)", "(^_^;)", "＼(^o^)／"] {
            assert!(full_match("EASTERN_EMOTICONS", face), "{face}");
        }
        assert!(!full_match("LTR_FACE", ":Data"));
    }

    #[test]
    fn test_word_like_entities() {
        assert!(full_match("CENSORED", "f**k"));
        assert!(full_match("EMPHASIS", "*very*"));
        assert!(full_match("ACRONYM", "U.S.A."));
        assert!(full_match("WORD", "eco-friendly"));
        assert!(full_match("WORD", "john's"));
        assert!(full_match("FUNCTION", "exp()"));
        assert!(full_match("FILEPATH", "/usr/local/bin"));
        assert!(full_match("EMOJI", "😂"));
        assert!(full_match("EMOJI", "👍🏽"));
    }
}
