//! RuleBasedModel: deterministic, dependency-free `LanguageModel`.
//!
//! Tokenization mirrors the span conventions of statistical NLP pipelines:
//! a single space after a token is absorbed, any other whitespace run is
//! emitted as a `Space` token so that words on different lines are never
//! adjacent. Proper nouns are approximated as title-case or all-caps words
//! that are not closed-class function words. DATE entities come from a
//! small family of date-shaped patterns; PERSON entities are runs of two or
//! more adjacent proper nouns.

use std::sync::LazyLock;

use regex::Regex;

use crate::nlp::{Entity, LanguageModel, PartOfSpeech, Token};

static RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+|\S+").expect("valid run regex"));

static INITIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]\.$").expect("valid initial regex"));

const MONTH: &str = r"(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?";

// Alternation order matters: full dates are tried before their partial forms.
static DATE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = [
        format!(r"\b\d{{1,2}}(?:st|nd|rd|th)?[ \t,/:-]*{MONTH}[ \t,/:-]*\d{{4}}\b"),
        format!(r"\b{MONTH}[ \t]+\d{{1,2}}(?:st|nd|rd|th)?,?[ \t]+\d{{4}}\b"),
        r"\b\d{1,2}[/-]\d{1,2}[/-]\d{4}\b".to_string(),
        r"\b\d{4}-\d{1,2}-\d{1,2}\b".to_string(),
        format!(r"\b{MONTH}[ \t,]+\d{{4}}\b"),
        r"\b(?:19|20)\d{2}\b".to_string(),
    ]
    .join("|");
    Regex::new(&format!("(?i){pattern}")).expect("valid date entity regex")
});

const FUNCTION_WORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "am", "an", "and", "any", "are", "as", "at", "be",
    "been", "before", "but", "by", "can", "could", "dear", "did", "do", "does", "during", "each",
    "for", "from", "had", "has", "have", "he", "her", "here", "his", "how", "if", "in", "into",
    "is", "it", "its", "may", "me", "might", "must", "my", "no", "not", "of", "on", "or", "our",
    "over", "she", "should", "since", "so", "such", "than", "that", "the", "their", "then",
    "there", "these", "they", "this", "those", "to", "under", "was", "we", "were", "what", "when",
    "where", "which", "while", "who", "why", "will", "with", "would", "yes", "you", "your",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedModel;

impl RuleBasedModel {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageModel for RuleBasedModel {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        for run in RUN.find_iter(text) {
            let chunk = run.as_str();
            if chunk.chars().all(char::is_whitespace) {
                if chunk != " " {
                    tokens.push(Token {
                        text: chunk,
                        start: run.start(),
                        end: run.end(),
                        pos: PartOfSpeech::Space,
                    });
                }
                continue;
            }
            push_chunk(&mut tokens, chunk, run.start());
        }
        tokens
    }

    fn entities(&self, text: &str) -> Vec<Entity> {
        let mut found: Vec<(usize, Entity)> = DATE
            .find_iter(text)
            .map(|m| (m.start(), Entity::date(m.as_str())))
            .collect();

        let tokens = self.tokenize(text);
        let people = tokens
            .chunk_by(|a, b| {
                a.pos == PartOfSpeech::ProperNoun && b.pos == PartOfSpeech::ProperNoun
            })
            .filter(|run| run.len() > 1)
            .map(|run| {
                let (first, last) = (&run[0], &run[run.len() - 1]);
                (first.start, Entity::person(&text[first.start..last.end]))
            });
        found.extend(people);

        found.sort_by_key(|(start, _)| *start);
        found.into_iter().map(|(_, entity)| entity).collect()
    }
}

/// Splits a whitespace-free chunk into leading punctuation, a core word and
/// trailing punctuation. Initials such as "K." stay whole.
fn push_chunk<'a>(tokens: &mut Vec<Token<'a>>, chunk: &'a str, offset: usize) {
    if INITIAL.is_match(chunk) {
        tokens.push(make_token(chunk, offset));
        return;
    }

    let core_start = chunk
        .find(|c: char| c.is_alphanumeric())
        .unwrap_or(chunk.len());
    let core_end = chunk
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_alphanumeric())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(core_start);

    for (i, c) in chunk[..core_start].char_indices() {
        tokens.push(make_token(&chunk[i..i + c.len_utf8()], offset + i));
    }
    if core_end > core_start {
        tokens.push(make_token(&chunk[core_start..core_end], offset + core_start));
    }
    for (i, c) in chunk[core_end..].char_indices() {
        let at = core_end + i;
        tokens.push(make_token(&chunk[at..at + c.len_utf8()], offset + at));
    }
}

fn make_token(text: &str, start: usize) -> Token<'_> {
    Token {
        text,
        start,
        end: start + text.len(),
        pos: tag(text),
    }
}

fn tag(text: &str) -> PartOfSpeech {
    if text.chars().all(|c| !c.is_alphanumeric()) {
        return PartOfSpeech::Punctuation;
    }
    if text.chars().any(|c| c.is_ascii_digit()) && !text.chars().any(char::is_alphabetic) {
        return PartOfSpeech::Number;
    }

    let mut chars = text.chars();
    let title_word =
        chars.next().is_some_and(char::is_uppercase) && chars.all(char::is_lowercase);
    let caps_word = text.chars().all(char::is_uppercase);
    if text.chars().count() > 1
        && (title_word || caps_word)
        && !FUNCTION_WORDS.contains(&text.to_lowercase().as_str())
    {
        PartOfSpeech::ProperNoun
    } else {
        PartOfSpeech::Other
    }
}
