//! Turning annotated tokens back into text.

use crate::annotate::{Annotation, PartOfSpeech};
use crate::config::{SelectionConfig, SelectionMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateState {
    Passthrough,
    Collecting,
}

/// Chooses lemma or surface form per token and joins the result.
#[derive(Debug, Clone, Default)]
pub struct TokenSelector {
    mode: SelectionMode,
}

impl TokenSelector {
    pub fn new(config: &SelectionConfig) -> Self {
        Self { mode: config.mode }
    }

    pub fn with_mode(mode: SelectionMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Selects one form per token and joins them with single spaces.
    pub fn select(&self, annotations: &[Annotation]) -> String {
        self.forms(annotations).join(" ")
    }

    /// Selected forms, in order.
    pub fn forms<'a>(&self, annotations: &'a [Annotation]) -> Vec<&'a str> {
        match self.mode {
            SelectionMode::Lemma => annotations.iter().map(Annotation::selected_form).collect(),
            SelectionMode::WhitespaceGated => gated_forms(annotations),
        }
    }
}

/// A whitespace token opens a run, the next one closes it. Tokens inside a run
/// keep their surface form; outside, the lemma policy applies. Whitespace
/// tokens themselves are dropped.
fn gated_forms(annotations: &[Annotation]) -> Vec<&str> {
    let mut forms = Vec::with_capacity(annotations.len());
    let mut run = Vec::new();
    let mut state = GateState::Passthrough;

    for annotation in annotations {
        let boundary = annotation.pos == PartOfSpeech::Space;

        state = match (state, boundary) {
            (GateState::Passthrough, true) => GateState::Collecting,
            (GateState::Passthrough, false) => {
                forms.push(annotation.selected_form());
                GateState::Passthrough
            }
            (GateState::Collecting, true) => {
                forms.append(&mut run);
                GateState::Passthrough
            }
            (GateState::Collecting, false) => {
                run.push(annotation.surface.as_str());
                GateState::Collecting
            }
        };
    }

    // An unterminated run is flushed as is.
    forms.append(&mut run);
    forms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::PartOfSpeech::*;

    fn annotations() -> Vec<Annotation> {
        vec![
            Annotation::new("Dogs", "dog", Noun),
            Annotation::new("were", "be", Aux),
            Annotation::new("\n", "\n", Space),
            Annotation::new("running", "run", Verb),
            Annotation::new("quickly", "quickly", Adv),
            Annotation::new("\n", "\n", Space),
            Annotation::new("cats", "cat", Noun),
            Annotation::new("!", "!", Punct),
        ]
    }

    #[test]
    fn test_lemma_mode() {
        let selector = TokenSelector::default();
        let text = selector.select(&annotations()[..2]);
        assert_eq!(text, "dog be");
    }

    #[test]
    fn test_lemma_mode_keeps_non_privileged_surface() {
        let selector = TokenSelector::with_mode(SelectionMode::Lemma);
        let anns = annotations();
        let forms = selector.forms(&anns);
        assert_eq!(forms, vec!["dog", "be", "\n", "run", "quickly", "\n", "cat", "!"]);
    }

    #[test]
    fn test_gated_mode_pauses_lemmas_inside_run() {
        let selector = TokenSelector::with_mode(SelectionMode::WhitespaceGated);
        let anns = annotations();
        let forms = selector.forms(&anns);
        assert_eq!(forms, vec!["dog", "be", "running", "quickly", "cat", "!"]);
    }

    #[test]
    fn test_gated_mode_flushes_open_run() {
        let selector = TokenSelector::with_mode(SelectionMode::WhitespaceGated);
        let input = vec![
            Annotation::new("went", "go", Verb),
            Annotation::new(" ", " ", Space),
            Annotation::new("went", "go", Verb),
        ];
        assert_eq!(selector.select(&input), "go went");
    }

    #[test]
    fn test_empty() {
        assert_eq!(TokenSelector::default().select(&[]), "");
    }
}
