use thiserror::Error;

/// The ways a message can fail to become Markdown.
///
/// Each one disqualifies the containing record; none of them stops a run.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ConversionFailure {
    /// The converter refused the markup outright.
    #[error("markup rejected by converter")]
    RejectedMarkup,
    /// The converter broke one of its own invariants.
    #[error("converter internal assertion failed")]
    InternalAssertion,
    /// The message value is not text.
    #[error("message value is not a string")]
    TypeMismatch,
}

/// HTML to Markdown conversion.
///
/// Implementations return untrimmed output; the normalizer trims it.
pub trait Converter: Send + Sync {
    fn to_markdown(&self, html: &str) -> Result<String, ConversionFailure>;
}
