//! Language model capability: tokens with part-of-speech tags and named entities.
//!
//! The extractors never talk to a concrete model. They receive a
//! `&dyn LanguageModel`, so the cascade logic can be exercised with canned
//! tokens and entities in tests and the default `RuleBasedModel` can be
//! swapped for a statistical backend at startup.
//!
//! `AppState` shares one model as `Arc<dyn LanguageModel>` across requests.

pub mod rule_based;

pub use rule_based::RuleBasedModel;

/// Coarse part-of-speech classes. Only the distinctions the name matcher
/// relies on are modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfSpeech {
    ProperNoun,
    Number,
    Punctuation,
    /// Whitespace that is not a single separating space (newlines, runs).
    Space,
    Other,
}

/// A token borrowed from the source text. `start`/`end` are byte offsets, so
/// `&text[start..end] == token.text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
    pub pos: PartOfSpeech,
}

impl Token<'_> {
    pub fn is_alpha(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(char::is_alphabetic)
    }

    /// Title case: the first cased character is uppercase and every other
    /// cased character is lowercase ("John", "J").
    pub fn is_title(&self) -> bool {
        let mut cased = self.text.chars().filter(|c| c.is_uppercase() || c.is_lowercase());
        match cased.next() {
            Some(first) if first.is_uppercase() => cased.all(char::is_lowercase),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityLabel {
    Date,
    Person,
}

/// A labelled span of text, in the order the model reported it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub label: EntityLabel,
    pub text: String,
}

impl Entity {
    pub fn date(text: impl Into<String>) -> Self {
        Self {
            label: EntityLabel::Date,
            text: text.into(),
        }
    }

    pub fn person(text: impl Into<String>) -> Self {
        Self {
            label: EntityLabel::Person,
            text: text.into(),
        }
    }
}

/// The pluggable annotator. Implementations must be read-only after
/// construction; one instance serves every request concurrently.
pub trait LanguageModel: Send + Sync {
    /// Splits `text` into tokens covering it in order.
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>>;

    /// Named entities found in `text`, in textual order.
    fn entities(&self, text: &str) -> Vec<Entity>;
}
