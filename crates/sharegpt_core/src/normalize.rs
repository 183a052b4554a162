use serde_json::Value;

use crate::convert::{ConversionFailure, Converter};
use crate::record::Message;
use crate::repair::{ArtifactRepairer, PatternError};
use crate::strip::MarkupStripper;

/// strip -> convert -> trim -> repair, applied to one message value.
#[derive(Debug, Clone)]
pub struct Normalizer<C> {
    stripper: MarkupStripper,
    repairer: ArtifactRepairer,
    converter: C,
}

impl<C: Converter> Normalizer<C> {
    pub fn new(converter: C) -> Result<Self, PatternError> {
        Ok(Self {
            stripper: MarkupStripper::new()?,
            repairer: ArtifactRepairer::new()?,
            converter,
        })
    }

    pub fn normalize(&self, html: &str) -> Result<String, ConversionFailure> {
        let stripped = self.stripper.strip(html);
        let markdown = self.converter.to_markdown(&stripped)?;
        Ok(self.repairer.repair(markdown.trim()))
    }

    /// Normalize a message's `value`; anything but a string is a type mismatch.
    pub fn normalize_message(&self, message: &Message) -> Result<String, ConversionFailure> {
        match message.value() {
            Some(Value::String(text)) => self.normalize(text),
            _ => Err(ConversionFailure::TypeMismatch),
        }
    }

    pub fn stripper(&self) -> &MarkupStripper {
        &self.stripper
    }
}
