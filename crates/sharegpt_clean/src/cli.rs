use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use engine_logging::{LevelFilter, LogSettings};
use sharegpt_core::Denylist;
use sharegpt_engine::{CleanOptions, InspectOptions};

/// Convert scraped ShareGPT HTML dumps into a cleaned Markdown dataset.
#[derive(Debug, Parser)]
#[command(name = "sharegpt_clean", version)]
pub struct Cli {
    /// Directory holding one `*.json` page dump per conversation
    #[arg(long)]
    pub in_dir: PathBuf,

    /// Where to write the cleaned dataset
    #[arg(long, default_value = "sharegpt_clean.json")]
    pub out_file: PathBuf,

    /// Print the first normalized message and exit without writing output
    #[arg(long)]
    pub debug: bool,

    /// Log raw and normalized text of messages containing this string
    #[arg(long)]
    pub check_tag: Option<String>,

    /// How many tag matches to log
    #[arg(long, default_value_t = 1)]
    pub check_num: usize,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Also write the log to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Cli {
    pub fn log_settings(&self) -> LogSettings {
        LogSettings {
            level: self.log_level.into(),
            terminal: true,
            file: self.log_file.clone(),
        }
    }

    pub fn clean_options(&self) -> CleanOptions {
        CleanOptions {
            inspect: InspectOptions {
                check_tag: self.check_tag.clone(),
                check_num: self.check_num,
            },
            denylist: Denylist::default(),
        }
    }
}
