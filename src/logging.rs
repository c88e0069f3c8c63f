//! Per-run log file.
//!
//! Each run writes to a fresh `log_<start time>.log` under the log directory.
//! The logger is handed around as a [`RunLog`] rather than installed globally,
//! so callers decide where lines go.

use crate::error::SetupError;
use chrono::{DateTime, Local, SecondsFormat};
use env_logger::{Builder, Target, WriteStyle};
use log::{Level, LevelFilter, Log, Record};
use std::{
    fmt,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

pub struct RunLog {
    inner: Box<dyn Log>,
}

impl RunLog {
    pub fn new(inner: impl Log + 'static) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.emit(Level::Info, message);
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.emit(Level::Error, message);
    }

    pub fn flush(&self) {
        self.inner.flush();
    }

    fn emit(&self, level: Level, message: impl fmt::Display) {
        self.inner.log(
            &Record::builder()
                .level(level)
                .target(module_path!())
                .args(format_args!("{message}"))
                .build(),
        );
    }
}

/// Creates the log directory and a new log file, and returns a logger writing to it.
pub fn init(log_dir: &Path) -> Result<RunLog, SetupError> {
    let file = open_log_file(log_dir, Local::now())?;

    let logger = Builder::new()
        .filter_level(LevelFilter::Info)
        .write_style(WriteStyle::Never)
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {} {}",
                Local::now().format(TIMESTAMP_FORMAT),
                record.level(),
                record.args()
            )
        })
        .build();

    Ok(RunLog::new(logger))
}

pub(crate) fn open_log_file(
    log_dir: &Path,
    started: DateTime<Local>,
) -> Result<File, SetupError> {
    fs::create_dir_all(log_dir).map_err(|source| SetupError::CreateDir {
        path: log_dir.to_path_buf(),
        source,
    })?;

    let path = log_file_path(log_dir, started);
    File::create(&path).map_err(|source| SetupError::CreateFile { path, source })
}

pub(crate) fn log_file_path(log_dir: &Path, started: DateTime<Local>) -> PathBuf {
    let started = started.to_rfc3339_opts(SecondsFormat::Secs, true);
    log_dir.join(format!("log_{started}.log"))
}
