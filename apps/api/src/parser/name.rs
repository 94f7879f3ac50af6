//! Candidate name extraction.
//!
//! Two token patterns run over the model's token stream:
//! - `TwoWordName`: two consecutive proper nouns ("Jane Doe")
//! - `InitialName`: title word, single capital with optional period, title word ("Jane Q. Doe")
//!
//! The first match that is not a document label wins. When the tagger finds
//! nothing usable a raw-text regex takes one last look.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::nlp::{LanguageModel, PartOfSpeech, Token};

const EXCLUSION_TERMS: &[&str] = &["curriculum vitae", "resume", "cv"];

static INITIAL_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]\.?$").expect("valid initial regex"));

// Same-line only: a heading followed by a name on the next line must not pair up.
static NAME_FALLBACK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z][a-z]+[ \t](?:[A-Z]\.?[ \t])?[A-Z][a-z]+\b").expect("valid name regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamePattern {
    TwoWordName,
    InitialName,
}

impl NamePattern {
    const ALL: [NamePattern; 2] = [NamePattern::TwoWordName, NamePattern::InitialName];

    fn len(self) -> usize {
        match self {
            NamePattern::TwoWordName => 2,
            NamePattern::InitialName => 3,
        }
    }

    fn matches(self, window: &[Token<'_>]) -> bool {
        match (self, window) {
            (NamePattern::TwoWordName, [first, second]) => {
                first.pos == PartOfSpeech::ProperNoun && second.pos == PartOfSpeech::ProperNoun
            }
            (NamePattern::InitialName, [first, initial, last]) => {
                is_title_word(first) && INITIAL_TOKEN.is_match(initial.text) && is_title_word(last)
            }
            _ => false,
        }
    }
}

fn is_title_word(token: &Token<'_>) -> bool {
    token.is_alpha() && token.is_title()
}

/// A pattern hit over the half-open token range `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternMatch {
    pub pattern: NamePattern,
    pub start: usize,
    pub end: usize,
}

/// All pattern hits anywhere in `tokens`, in completion order: by end token,
/// then by start token.
pub fn match_name_patterns(tokens: &[Token<'_>]) -> Vec<PatternMatch> {
    let mut matches: Vec<PatternMatch> = NamePattern::ALL
        .iter()
        .flat_map(|&pattern| {
            tokens
                .windows(pattern.len())
                .enumerate()
                .filter(move |(_, window)| pattern.matches(window))
                .map(move |(start, _)| PatternMatch {
                    pattern,
                    start,
                    end: start + pattern.len(),
                })
        })
        .collect();
    matches.sort_by_key(|m| (m.end, m.start));
    matches
}

fn is_excluded(candidate: &str) -> bool {
    EXCLUSION_TERMS.contains(&candidate.to_lowercase().as_str())
}

/// The candidate's name, or `None` when neither the token patterns nor the
/// regex fallback produce an acceptable candidate.
pub fn extract_name(text: &str, model: &dyn LanguageModel) -> Option<String> {
    let tokens = model.tokenize(text);
    for m in match_name_patterns(&tokens) {
        // span text keeps the original spacing between tokens
        let candidate = &text[tokens[m.start].start..tokens[m.end - 1].end];
        if !is_excluded(candidate) {
            debug!(pattern = ?m.pattern, "name resolved from token patterns");
            return Some(candidate.to_string());
        }
    }

    let candidate = NAME_FALLBACK.find(text)?.as_str();
    if is_excluded(candidate) {
        return None;
    }
    debug!("name resolved from regex fallback");
    Some(candidate.to_string())
}
