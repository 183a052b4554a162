//! ShareGPT cleaner core: record model, text normalization and the filtering policy.
//!
//! Everything here is pure. File access, the concrete HTML converter and the
//! run loop live in `sharegpt_engine`.
mod convert;
mod counters;
mod filter;
mod normalize;
mod record;
mod repair;
mod strip;

pub use convert::{ConversionFailure, Converter};
pub use counters::Counters;
pub use filter::{Decision, Denylist, RecordFilter, SkipReason, DEFAULT_DENYLIST};
pub use normalize::Normalizer;
pub use record::{extract_record, parse_record, Message, Record, StructuralError};
pub use repair::{
    Anchoring, ArtifactRepairer, PatternError, RepairAction, RepairRule, REPAIR_RULES,
};
pub use strip::MarkupStripper;
