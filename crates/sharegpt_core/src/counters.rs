use std::fmt;

/// Per-run record tallies. `total` always equals `skipped + kept`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    total: u64,
    skipped: u64,
    kept: u64,
}

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_kept(&mut self) {
        self.total += 1;
        self.kept += 1;
    }

    pub fn record_skipped(&mut self) {
        self.total += 1;
        self.skipped += 1;
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    pub fn kept(&self) -> u64 {
        self.kept
    }
}

impl fmt::Display for Counters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total: {}, skip: {}, new: {}",
            self.total, self.skipped, self.kept
        )
    }
}
