//! Rule-driven repair of scrape artifacts left in converted Markdown.
//!
//! The rules run in table order. The fence rule must come first: the later
//! rules expect canonical fences, and the newline collapse would otherwise
//! destroy the multi-line shape the fence rule matches on.

use regex::Regex;
use thiserror::Error;

/// A rule pattern that failed to compile.
#[derive(Debug, Error)]
#[error("invalid pattern for rule `{name}`: {source}")]
pub struct PatternError {
    pub name: &'static str,
    pub source: regex::Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchoring {
    /// Rewrite every non-overlapping match.
    Global,
    /// Rewrite only a match that begins at offset 0.
    Start,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepairAction {
    /// Replace with a `regex` replacement template (`${1}` refers to groups).
    Replace(&'static str),
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepairRule {
    pub name: &'static str,
    pub pattern: &'static str,
    pub action: RepairAction,
    pub anchoring: Anchoring,
}

pub const REPAIR_RULES: &[RepairRule] = &[
    // ```<lang>Copy code<body>``` as scraped from the copy button toolbar. The
    // label is one line; a language line the converter already wrote after
    // the fence (from a `language-*` class) is dropped in favour of it.
    RepairRule {
        name: "code-fence-language",
        pattern: r"(?s)```\s*(?:[^\n`]*\n)??\s*([^\n`]*?)\s*(?:Copy code)+(.+?)\s*?```",
        action: RepairAction::Replace("```${1}\n${2}\n```"),
        anchoring: Anchoring::Global,
    },
    // Regeneration pager such as "2 / 2".
    RepairRule {
        name: "leading-pagination",
        pattern: r"\d+ / \d+",
        action: RepairAction::Delete,
        anchoring: Anchoring::Start,
    },
    RepairRule {
        name: "copy-footer",
        pattern: r"Copy\d+ chars / \d+ words",
        action: RepairAction::Delete,
        anchoring: Anchoring::Global,
    },
    // A fence whose only content is the copy button label.
    RepairRule {
        name: "empty-code-block",
        pattern: r"```(.*?)Copy code\s*```",
        action: RepairAction::Delete,
        anchoring: Anchoring::Global,
    },
    RepairRule {
        name: "collapse-newlines",
        pattern: r"\n{3}",
        action: RepairAction::Replace("\n"),
        anchoring: Anchoring::Global,
    },
];

#[derive(Debug, Clone)]
struct CompiledRule {
    rule: RepairRule,
    regex: Regex,
}

impl CompiledRule {
    fn apply(&self, text: &str) -> String {
        let template = match self.rule.action {
            RepairAction::Replace(template) => template,
            RepairAction::Delete => "",
        };
        match self.rule.anchoring {
            Anchoring::Global => self.regex.replace_all(text, template).into_owned(),
            Anchoring::Start => match self.regex.find(text) {
                Some(m) if m.start() == 0 => self.regex.replacen(text, 1, template).into_owned(),
                _ => text.to_string(),
            },
        }
    }
}

/// Compiled rule table. Built once per pipeline and shared by reference.
#[derive(Debug, Clone)]
pub struct ArtifactRepairer {
    rules: Vec<CompiledRule>,
}

impl ArtifactRepairer {
    pub fn new() -> Result<Self, PatternError> {
        Self::with_rules(REPAIR_RULES)
    }

    pub fn with_rules(rules: &[RepairRule]) -> Result<Self, PatternError> {
        let rules = rules
            .iter()
            .map(|rule| {
                Regex::new(rule.pattern)
                    .map(|regex| CompiledRule { rule: *rule, regex })
                    .map_err(|source| PatternError {
                        name: rule.name,
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    pub fn rules(&self) -> impl Iterator<Item = &RepairRule> {
        self.rules.iter().map(|compiled| &compiled.rule)
    }

    /// Run every rule in order, then trim the result.
    pub fn repair(&self, text: &str) -> String {
        let repaired = self
            .rules
            .iter()
            .fold(text.to_string(), |acc, compiled| compiled.apply(&acc));
        repaired.trim().to_string()
    }

    /// Run the single rule called `name`, without the final trim.
    pub fn apply_rule(&self, name: &str, text: &str) -> Option<String> {
        self.rules
            .iter()
            .find(|compiled| compiled.rule.name == name)
            .map(|compiled| compiled.apply(text))
    }
}
