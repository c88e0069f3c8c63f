mod config;

use crate::logging::RunLog;
use log::{Log, Metadata, Record};
use std::sync::{Arc, Mutex};

/// Keeps every line logged through a [`RunLog`] as `<LEVEL> <message>`.
#[derive(Clone, Default)]
pub(crate) struct CapturedLog {
    lines: Arc<Mutex<Vec<String>>>,
}

impl CapturedLog {
    pub(crate) fn run_log(&self) -> RunLog {
        RunLog::new(self.clone())
    }

    pub(crate) fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl Log for CapturedLog {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.lines
            .lock()
            .unwrap()
            .push(format!("{} {}", record.level(), record.args()));
    }

    fn flush(&self) {}
}
