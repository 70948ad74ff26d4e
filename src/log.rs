//! File logging for debugging batcalc.
//!
//! The TUI owns the terminal, so nothing may be printed to stdout while it
//! runs. Everything goes to `~/.batcalc/batcalc.log` instead, truncated on
//! every start.
//!
//! Log levels:
//! - ERROR: Terminal or config failures
//! - WARN: Recovered conditions (divide by zero, unreadable config)
//! - INFO: Startup, shutdown
//! - DEBUG: Engine operations and presentation commands
//! - TRACE: Per-keystroke state dumps
//!
//! Debug mode can be enabled with `--debug` or `BATCALC_DEBUG=1`.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::OnceLock;

static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();
static LOG_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }

    fn from_u8(v: u8) -> Self {
        match v {
            0 => LogLevel::Error,
            1 => LogLevel::Warn,
            2 => LogLevel::Info,
            3 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

/// Whether `BATCALC_DEBUG` asks for debug output.
fn env_debug() -> bool {
    std::env::var("BATCALC_DEBUG")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Initialize logging into the app directory.
pub fn init_with_debug(debug: bool) {
    match crate::config::Config::app_dir() {
        Ok(dir) => {
            let _ = std::fs::create_dir_all(&dir);
            init_at(&dir.join("batcalc.log"), debug);
        }
        Err(_) => set_level(level_for(debug || env_debug())),
    }
}

/// Initialize logging into an explicit file.
///
/// The path can only be set once per process; later calls only adjust the level.
pub fn init_at(path: &Path, debug: bool) {
    set_level(level_for(debug || env_debug()));
    if LOG_PATH.get().is_none() {
        let _ = std::fs::write(path, "");
        LOG_PATH.set(path.to_path_buf()).ok();
    }
}

fn level_for(debug: bool) -> LogLevel {
    if debug {
        LogLevel::Debug
    } else {
        LogLevel::Info
    }
}

pub fn is_debug() -> bool {
    get_level() >= LogLevel::Debug
}

pub fn set_level(level: LogLevel) {
    LOG_LEVEL.store(level as u8, Ordering::SeqCst);
}

pub fn get_level() -> LogLevel {
    LogLevel::from_u8(LOG_LEVEL.load(Ordering::Relaxed))
}

/// Append a line at `level` if it passes the current filter.
pub fn log_at(level: LogLevel, msg: &str) {
    if level > get_level() {
        return;
    }

    let Some(path) = LOG_PATH.get() else { return };
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
        let _ = writeln!(file, "[{}] [{}] {}", timestamp, level.as_str(), msg);
    }
}

pub fn info(msg: &str) {
    log_at(LogLevel::Info, msg);
}

pub fn error(msg: &str) {
    log_at(LogLevel::Error, msg);
}

pub fn warn(msg: &str) {
    log_at(LogLevel::Warn, msg);
}

pub fn debug(msg: &str) {
    log_at(LogLevel::Debug, msg);
}

pub fn trace(msg: &str) {
    log_at(LogLevel::Trace, msg);
}

/// Log at INFO level.
#[macro_export]
macro_rules! clog {
    ($($arg:tt)*) => {
        $crate::log::info(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! clog_error {
    ($($arg:tt)*) => {
        $crate::log::error(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! clog_warn {
    ($($arg:tt)*) => {
        $crate::log::warn(&format!($($arg)*))
    };
}

/// Log at DEBUG level (only written in debug mode).
#[macro_export]
macro_rules! clog_debug {
    ($($arg:tt)*) => {
        if $crate::log::get_level() >= $crate::log::LogLevel::Debug {
            $crate::log::debug(&format!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! clog_trace {
    ($($arg:tt)*) => {
        if $crate::log::get_level() >= $crate::log::LogLevel::Trace {
            $crate::log::trace(&format!($($arg)*))
        }
    };
}
