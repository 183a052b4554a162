//! The run loop: one record at a time, in source order.

use engine_logging::{engine_debug, engine_info};
use sharegpt_core::{
    Converter, Counters, Decision, Denylist, Normalizer, PatternError, Record, RecordFilter,
};
use thiserror::Error;

use crate::persist::PersistError;
use crate::source::{SourceEntry, SourceError};

const BARRIER: &str = "====================";

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Before/after logging for normalized messages that contain a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectOptions {
    pub check_tag: Option<String>,
    /// Maximum number of matches logged per run.
    pub check_num: usize,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self {
            check_tag: None,
            check_num: 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanOptions {
    pub inspect: InspectOptions,
    pub denylist: Denylist,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    Started { expected: Option<usize> },
    RecordDone { name: String, kept: bool },
    Finished(Counters),
}

pub trait ProgressSink {
    fn emit(&self, event: PipelineEvent);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ProgressSink for NoopProgress {
    fn emit(&self, _event: PipelineEvent) {}
}

/// Accepted records in traversal order plus the run's tallies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanReport {
    pub records: Vec<Record>,
    pub counters: Counters,
    /// Messages logged by tag inspection.
    pub tag_matches: usize,
}

pub struct Pipeline<C> {
    filter: RecordFilter<C>,
    inspect: InspectOptions,
}

impl<C: Converter> Pipeline<C> {
    pub fn new(converter: C, options: CleanOptions) -> Result<Self, PatternError> {
        let normalizer = Normalizer::new(converter)?;
        Ok(Self {
            filter: RecordFilter::new(normalizer, options.denylist),
            inspect: options.inspect,
        })
    }

    pub fn run<I>(&self, source: I, progress: &dyn ProgressSink) -> CleanReport
    where
        I: IntoIterator<Item = SourceEntry>,
    {
        let source = source.into_iter();
        progress.emit(PipelineEvent::Started {
            expected: source.size_hint().1,
        });

        let mut counters = Counters::new();
        let mut records = Vec::new();
        let mut tag_hits = 0usize;

        for entry in source {
            let decision = self.filter.decide_with(entry.record, |raw, normalized| {
                self.log_tag_match(raw, normalized, &mut tag_hits);
            });
            let kept = match decision {
                Decision::Keep(record) => {
                    counters.record_kept();
                    records.push(record);
                    true
                }
                Decision::Skip(reason) => {
                    counters.record_skipped();
                    engine_debug!("skip {}: {}", entry.name, reason);
                    false
                }
            };
            progress.emit(PipelineEvent::RecordDone {
                name: entry.name,
                kept,
            });
        }

        engine_info!("{}", counters);
        progress.emit(PipelineEvent::Finished(counters));
        CleanReport {
            records,
            counters,
            tag_matches: tag_hits,
        }
    }

    /// Diagnostic mode: the first message the normal run would normalize.
    ///
    /// Records are still filtered as usual, so too-short or denylisted records
    /// contribute nothing. Returns `None` when no message normalizes.
    pub fn inspect_first<I>(&self, source: I) -> Option<String>
    where
        I: IntoIterator<Item = SourceEntry>,
    {
        for entry in source {
            let mut first = None;
            self.filter.decide_with(entry.record, |_, normalized| {
                first.get_or_insert_with(|| normalized.to_string());
            });
            if first.is_some() {
                return first;
            }
        }
        None
    }

    fn log_tag_match(&self, raw: &str, normalized: &str, hits: &mut usize) {
        let Some(tag) = self.inspect.check_tag.as_deref() else {
            return;
        };
        if *hits >= self.inspect.check_num || !normalized.contains(tag) {
            return;
        }
        *hits += 1;
        engine_debug!("\n{BARRIER}\n{raw}\n\n{BARRIER}\n{normalized}\n\n{BARRIER}\n");
    }
}
