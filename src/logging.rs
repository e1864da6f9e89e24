//! Log level handling and the two `log` backends.
//!
//! In TUI mode log records become dashboard activity events; writing to the
//! terminal would tear the screen. Headless commands log to stderr.

use crate::events::Event;
use log::{LevelFilter, Log, Metadata, Record};
use std::env;
use tokio::sync::mpsc;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => LogLevel::Trace,
            log::Level::Debug => LogLevel::Debug,
            log::Level::Info => LogLevel::Info,
            log::Level::Warn => LogLevel::Warn,
            log::Level::Error => LogLevel::Error,
        }
    }
}

pub fn get_rust_log_level() -> LogLevel {
    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    parse_rust_log_level(&rust_log)
}

pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    // Only the first directive counts; `crate=level` keeps the level part.
    let level_str = rust_log
        .split(',')
        .next()
        .unwrap_or(rust_log)
        .split('=')
        .next_back()
        .unwrap_or(rust_log)
        .to_lowercase();

    match level_str.as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info,
    }
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

/// Forwards records to the dashboard as activity events.
#[derive(Debug)]
pub struct ChannelLogger {
    sender: mpsc::Sender<Event>,
    threshold: LogLevel,
}

impl ChannelLogger {
    pub fn new(sender: mpsc::Sender<Event>, threshold: LogLevel) -> Self {
        Self { sender, threshold }
    }
}

impl Log for ChannelLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        should_log(metadata.level().into(), self.threshold)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // A full queue drops the event rather than blocking the UI thread.
        let _ = self.sender.try_send(Event::from_record(record));
    }

    fn flush(&self) {}
}

/// Writes records to stderr for headless commands.
#[derive(Debug)]
pub struct StderrLogger {
    threshold: LogLevel,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        should_log(metadata.level().into(), self.threshold)
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", Event::from_record(record));
        }
    }

    fn flush(&self) {}
}

/// Route `log` output into the dashboard's activity log.
pub fn init_tui(sender: mpsc::Sender<Event>) -> Result<(), log::SetLoggerError> {
    let threshold = get_rust_log_level();
    log::set_boxed_logger(Box::new(ChannelLogger::new(sender, threshold)))
        .map(|()| log::set_max_level(threshold.into()))
}

/// Route `log` output to stderr.
pub fn init_headless() -> Result<(), log::SetLoggerError> {
    let threshold = get_rust_log_level();
    log::set_boxed_logger(Box::new(StderrLogger { threshold }))
        .map(|()| log::set_max_level(threshold.into()))
}
