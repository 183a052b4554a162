use indicatif::{ProgressBar, ProgressStyle};
use sharegpt_engine::{PipelineEvent, ProgressSink};

/// Terminal progress bar over input files.
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        let style = ProgressStyle::default_bar()
            .template("{bar:40.cyan/blue} {pos}/{len} files [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        Self { bar }
    }
}

impl ProgressSink for BarProgress {
    fn emit(&self, event: PipelineEvent) {
        match event {
            PipelineEvent::Started { expected } => {
                if let Some(len) = expected {
                    self.bar.set_length(len as u64);
                }
            }
            PipelineEvent::RecordDone { name, .. } => {
                self.bar.set_message(name);
                self.bar.inc(1);
            }
            PipelineEvent::Finished(_) => self.bar.finish_and_clear(),
        }
    }
}
