use regex::Regex;

use crate::repair::PatternError;

/// Opening or closing `div`/`span` tags with any attributes.
///
/// Left in place they hide code block boundaries from the converter and make
/// it escape underscores inside code spans.
const WRAPPER_TAG_PATTERN: &str = r"</?(?:div|span)\b[^>]*>";

/// Removes block and inline wrapper tags, keeping their inner content.
#[derive(Debug, Clone)]
pub struct MarkupStripper {
    wrapper: Regex,
}

impl MarkupStripper {
    pub fn new() -> Result<Self, PatternError> {
        let wrapper = Regex::new(WRAPPER_TAG_PATTERN).map_err(|source| PatternError {
            name: "wrapper-tags",
            source,
        })?;
        Ok(Self { wrapper })
    }

    pub fn strip(&self, html: &str) -> String {
        self.wrapper.replace_all(html, "").into_owned()
    }
}
