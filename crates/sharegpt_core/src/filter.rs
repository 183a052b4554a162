//! Keep-or-skip policy for whole conversations.

use std::fmt;

use crate::convert::{ConversionFailure, Converter};
use crate::normalize::Normalizer;
use crate::record::{Record, StructuralError};

pub const DEFAULT_DENYLIST: &[&str] = &["openai", "chatgpt"];

/// Case-insensitive substrings that disqualify a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denylist {
    terms: Vec<String>,
}

impl Denylist {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            terms: terms
                .into_iter()
                .map(|term| term.as_ref().to_lowercase())
                .filter(|term| !term.is_empty())
                .collect(),
        }
    }

    /// First term contained in `text`, ignoring case.
    pub fn find(&self, text: &str) -> Option<&str> {
        let lowered = text.to_lowercase();
        self.terms
            .iter()
            .find(|term| lowered.contains(term.as_str()))
            .map(String::as_str)
    }
}

impl Default for Denylist {
    fn default() -> Self {
        Self::new(DEFAULT_DENYLIST)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Structural(StructuralError),
    TooShort { messages: usize },
    Denylisted { term: String, turn: usize },
    Conversion { failure: ConversionFailure, turn: usize },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Structural(err) => write!(f, "structural: {err}"),
            SkipReason::TooShort { messages } => write!(f, "too short ({messages} messages)"),
            SkipReason::Denylisted { term, turn } => {
                write!(f, "denylisted term {term:?} in turn {turn}")
            }
            SkipReason::Conversion { failure, turn } => {
                write!(f, "conversion failed in turn {turn}: {failure}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The record with every message value normalized.
    Keep(Record),
    Skip(SkipReason),
}

impl Decision {
    pub fn is_keep(&self) -> bool {
        matches!(self, Decision::Keep(_))
    }
}

pub struct RecordFilter<C> {
    normalizer: Normalizer<C>,
    denylist: Denylist,
}

impl<C: Converter> RecordFilter<C> {
    pub fn new(normalizer: Normalizer<C>, denylist: Denylist) -> Self {
        Self {
            normalizer,
            denylist,
        }
    }

    pub fn decide(&self, extracted: Result<Record, StructuralError>) -> Decision {
        self.decide_with(extracted, |_, _| {})
    }

    /// Like [`decide`](Self::decide), calling `on_normalized(raw, normalized)`
    /// after each message that normalizes successfully.
    ///
    /// Messages are handled in turn order and the first failure ends the scan.
    /// The record is consumed, so a skip drops any values already rewritten.
    pub fn decide_with<F>(
        &self,
        extracted: Result<Record, StructuralError>,
        mut on_normalized: F,
    ) -> Decision
    where
        F: FnMut(&str, &str),
    {
        let mut record = match extracted {
            Ok(record) => record,
            Err(err) => return Decision::Skip(SkipReason::Structural(err)),
        };
        if record.conversations.len() <= 1 {
            return Decision::Skip(SkipReason::TooShort {
                messages: record.conversations.len(),
            });
        }

        for (turn, message) in record.conversations.iter_mut().enumerate() {
            if let Some(term) = message.text().and_then(|raw| self.denylist.find(raw)) {
                return Decision::Skip(SkipReason::Denylisted {
                    term: term.to_string(),
                    turn,
                });
            }
            let normalized = match self.normalizer.normalize_message(message) {
                Ok(text) => text,
                Err(failure) => return Decision::Skip(SkipReason::Conversion { failure, turn }),
            };
            if let Some(raw) = message.text() {
                on_normalized(raw, &normalized);
            }
            message.set_value(normalized);
        }

        Decision::Keep(record)
    }
}
