//! ShareGPT cleaner engine: directory input, HTML conversion, the run loop and output.
mod convert;
mod persist;
mod pipeline;
mod source;

use std::path::Path;

pub use convert::Html2MdConverter;
pub use persist::{ensure_output_dir, DatasetWriter, PersistError};
pub use pipeline::{
    CleanOptions, CleanReport, InspectOptions, NoopProgress, Pipeline, PipelineError,
    PipelineEvent, ProgressSink,
};
pub use source::{DirectorySource, SourceEntry, SourceError};

/// Clean every page dump in `in_dir` and write the surviving records to `out_file`.
///
/// The output location is validated before any record is read.
pub fn clean_directory(
    in_dir: &Path,
    out_file: &Path,
    options: CleanOptions,
    progress: &dyn ProgressSink,
) -> Result<CleanReport, PipelineError> {
    let writer = DatasetWriter::new(out_file);
    writer.prepare()?;
    let source = DirectorySource::open(in_dir)?;
    let pipeline = Pipeline::new(Html2MdConverter, options)?;
    let report = pipeline.run(source, progress);
    writer.write(&report.records)?;
    Ok(report)
}
