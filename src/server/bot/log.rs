//! In-memory log of the bot's lifecycle and event errors.
//!
//! Lines are mirrored to `tracing` and kept in two bounded buffers, `stdout` for
//! informational lines and `stderr` for errors, which the dashboard reads through
//! `GET /api/bot/logs`.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard},
};

use chrono::Utc;
use dioxus_logger::tracing;

use crate::model::bot::BotLogsDto;

/// Lines kept per buffer before the oldest are dropped.
const MAX_LINES: usize = 1000;

/// Which buffers a log query returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogType {
    All,
    Stdout,
    Stderr,
}

impl LogType {
    /// Parses the `log_type` query value, unknown values select both buffers.
    pub fn parse(value: &str) -> Self {
        match value {
            "stdout" => Self::Stdout,
            "stderr" => Self::Stderr,
            _ => Self::All,
        }
    }
}

#[derive(Default)]
struct Buffers {
    stdout: VecDeque<String>,
    stderr: VecDeque<String>,
}

#[derive(Clone, Default)]
pub struct BotLog {
    buffers: Arc<Mutex<Buffers>>,
}

impl BotLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&self, message: impl AsRef<str>) {
        let message = message.as_ref();
        tracing::info!("{}", message);
        push(&mut self.lock().stdout, message);
    }

    pub fn error(&self, message: impl AsRef<str>) {
        let message = message.as_ref();
        tracing::error!("{}", message);
        push(&mut self.lock().stderr, message);
    }

    /// Returns the last `lines` entries of the selected buffers joined by newlines.
    pub fn tail(&self, lines: usize, log_type: LogType) -> BotLogsDto {
        let buffers = self.lock();

        let logs = match log_type {
            LogType::All | LogType::Stdout => join_last(&buffers.stdout, lines),
            LogType::Stderr => String::new(),
        };
        let errors = match log_type {
            LogType::All | LogType::Stderr => join_last(&buffers.stderr, lines),
            LogType::Stdout => String::new(),
        };

        BotLogsDto { logs, errors }
    }

    /// A panic while holding the lock leaves the buffers intact, so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, Buffers> {
        self.buffers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn push(buffer: &mut VecDeque<String>, message: &str) {
    if buffer.len() >= MAX_LINES {
        buffer.pop_front();
    }
    buffer.push_back(format!(
        "{} {}",
        Utc::now().format("%Y-%m-%d %H:%M:%S"),
        message
    ));
}

fn join_last(buffer: &VecDeque<String>, lines: usize) -> String {
    let skip = buffer.len().saturating_sub(lines);
    buffer
        .iter()
        .skip(skip)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tails_last_lines_per_buffer() {
        let log = BotLog::new();
        log.info("first");
        log.info("second");
        log.info("third");
        log.error("broken");

        let tail = log.tail(2, LogType::All);
        let lines: Vec<_> = tail.logs.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("second"));
        assert!(lines[1].ends_with("third"));
        assert!(tail.errors.ends_with("broken"));
    }

    #[test]
    fn filters_by_log_type() {
        let log = BotLog::new();
        log.info("started");
        log.error("failed");

        let stdout = log.tail(50, LogType::parse("stdout"));
        assert!(stdout.logs.ends_with("started"));
        assert!(stdout.errors.is_empty());

        let stderr = log.tail(50, LogType::parse("stderr"));
        assert!(stderr.logs.is_empty());
        assert!(stderr.errors.ends_with("failed"));
    }

    #[test]
    fn drops_oldest_lines_beyond_capacity() {
        let log = BotLog::new();
        for i in 0..(MAX_LINES + 5) {
            log.info(format!("line {}", i));
        }

        let tail = log.tail(MAX_LINES * 2, LogType::Stdout);

        assert_eq!(tail.logs.lines().count(), MAX_LINES);
        assert!(tail.logs.lines().next().unwrap().ends_with("line 5"));
    }
}
