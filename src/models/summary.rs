use std::path::PathBuf;

use crate::error::ErrorKind;
use crate::models::conversion::RunMode;

/// 一次執行的統計，僅由批次處理器更新
#[derive(Debug)]
pub struct RunSummary {
    pub mode: RunMode,
    pub attempted: usize,
    pub written: Vec<PathBuf>,
    pub failures: Vec<(PathBuf, ErrorKind)>,
}

impl RunSummary {
    pub fn new(mode: RunMode) -> Self {
        RunSummary {
            mode,
            attempted: 0,
            written: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn record_success(&mut self, destination: PathBuf) {
        self.attempted += 1;
        self.written.push(destination);
    }

    pub fn record_failure(&mut self, source: PathBuf, kind: ErrorKind) {
        self.attempted += 1;
        self.failures.push((source, kind));
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}
