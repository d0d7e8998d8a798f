//! Logging for the esdsl query builder.
//!
//! The builder is a library, so by default every record is forwarded to the
//! [`log`] facade and the embedding application decides where it ends up.
//! Setting `ESDSL_LOG_SINK=stderr` switches to a self-contained writer that
//! prints compact lines or JSON lines without any logger installed.
//!
//! # Usage
//!
//! ```rust
//! use esdsl_log::{debug, trace};
//!
//! trace!("dropped absent clause from bool.filter");
//! debug!(target: "esdsl::search", "encoded body of {} bytes", 128);
//! ```
//!
//! # Environment Variables
//!
//! - `ESDSL_DEBUG=1` - Enable debug logging
//! - `ESDSL_LOG_LEVEL=trace|debug|info|warn|error|off` - Set log level
//! - `ESDSL_LOG_FORMAT=compact|json` - Line format for the stderr sink
//! - `ESDSL_LOG_SINK=facade|stderr` - Where records go

use once_cell::sync::Lazy;
use std::env;
use std::io::Write;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

// ============================================================================
// Log Levels
// ============================================================================

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    /// Trace level (most verbose)
    Trace = 0,
    /// Debug level
    Debug = 1,
    /// Info level
    Info = 2,
    /// Warning level
    Warn = 3,
    /// Error level
    Error = 4,
    /// Off (no logging)
    Off = 5,
}

impl Level {
    /// Parse a level name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(Level::Trace),
            "debug" => Some(Level::Debug),
            "info" => Some(Level::Info),
            "warn" | "warning" => Some(Level::Warn),
            "error" => Some(Level::Error),
            "off" | "none" => Some(Level::Off),
            _ => None,
        }
    }

    /// Get level name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Off => "OFF",
        }
    }

    /// The matching `log` crate level. `Off` has none.
    pub fn to_log_level(self) -> Option<log::Level> {
        match self {
            Level::Trace => Some(log::Level::Trace),
            Level::Debug => Some(log::Level::Debug),
            Level::Info => Some(log::Level::Info),
            Level::Warn => Some(log::Level::Warn),
            Level::Error => Some(log::Level::Error),
            Level::Off => None,
        }
    }

    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Level::Trace,
            1 => Level::Debug,
            2 => Level::Info,
            3 => Level::Warn,
            4 => Level::Error,
            _ => Level::Off,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Format and Sink
// ============================================================================

/// Line format used by the stderr sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `HH:MM:SS.mmm L target: message`
    Compact,
    /// One JSON object per line
    Json,
}

impl Format {
    /// Parse a format name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Some(Format::Compact),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

/// Destination for log records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Sink {
    /// Forward to the `log` facade.
    Facade = 0,
    /// Write directly to stderr.
    Stderr = 1,
}

impl Sink {
    /// Parse a sink name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "facade" | "log" => Some(Sink::Facade),
            "stderr" => Some(Sink::Stderr),
            _ => None,
        }
    }
}

// ============================================================================
// Global Configuration
// ============================================================================

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

static LOG_LEVEL: AtomicU8 = AtomicU8::new(Level::Info as u8);

static SINK: AtomicU8 = AtomicU8::new(Sink::Facade as u8);

static CONFIG: Lazy<LogConfig> = Lazy::new(|| {
    let config = LogConfig::from_env();
    DEBUG_ENABLED.store(config.debug, Ordering::SeqCst);
    LOG_LEVEL.store(config.level as u8, Ordering::SeqCst);
    SINK.store(config.sink as u8, Ordering::SeqCst);
    config
});

/// Logging configuration read from the environment.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Whether debug mode is enabled
    pub debug: bool,
    /// Minimum log level
    pub level: Level,
    /// Line format for the stderr sink
    pub format: Format,
    /// Initial sink
    pub sink: Sink,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            debug: false,
            level: Level::Info,
            format: Format::Compact,
            sink: Sink::Facade,
        }
    }
}

impl LogConfig {
    /// Create config from environment variables.
    ///
    /// Unknown values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let debug = env::var("ESDSL_DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let level = env::var("ESDSL_LOG_LEVEL")
            .ok()
            .and_then(|s| Level::parse(&s))
            .unwrap_or(if debug { Level::Debug } else { defaults.level });

        let format = env::var("ESDSL_LOG_FORMAT")
            .ok()
            .and_then(|s| Format::parse(&s))
            .unwrap_or(defaults.format);

        let sink = env::var("ESDSL_LOG_SINK")
            .ok()
            .and_then(|s| Sink::parse(&s))
            .unwrap_or(defaults.sink);

        Self {
            debug,
            level,
            format,
            sink,
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Initialize the logging system eagerly.
///
/// Called implicitly by the first level check.
pub fn init() {
    Lazy::force(&CONFIG);
}

/// Get the configuration read at startup.
pub fn config() -> &'static LogConfig {
    &CONFIG
}

/// Check if debug logging is enabled.
#[inline]
pub fn is_debug_enabled() -> bool {
    init();
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// Check if a log level is enabled.
#[inline]
pub fn is_level_enabled(level: Level) -> bool {
    init();
    level != Level::Off && level as u8 >= LOG_LEVEL.load(Ordering::Relaxed)
}

/// Get current log level.
pub fn current_level() -> Level {
    init();
    Level::from_u8(LOG_LEVEL.load(Ordering::Relaxed))
}

/// Set log level at runtime.
pub fn set_level(level: Level) {
    init();
    LOG_LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Enable or disable debug mode at runtime.
pub fn set_debug(enabled: bool) {
    init();
    DEBUG_ENABLED.store(enabled, Ordering::SeqCst);
    if enabled && current_level() > Level::Debug {
        set_level(Level::Debug);
    }
}

/// Get the active sink.
pub fn current_sink() -> Sink {
    init();
    match SINK.load(Ordering::Relaxed) {
        1 => Sink::Stderr,
        _ => Sink::Facade,
    }
}

/// Switch the sink at runtime.
pub fn set_sink(sink: Sink) {
    init();
    SINK.store(sink as u8, Ordering::SeqCst);
}

// ============================================================================
// Log Output
// ============================================================================

/// Emit a record. Used by the macros.
#[doc(hidden)]
pub fn log(level: Level, target: &str, message: &str) {
    let Some(log_level) = level.to_log_level() else {
        return;
    };
    if !is_level_enabled(level) && !(level == Level::Debug && is_debug_enabled()) {
        return;
    }

    match current_sink() {
        Sink::Facade => log::log!(target: target, log_level, "{}", message),
        Sink::Stderr => {
            let line = match config().format {
                Format::Compact => compact_line(level, target, message),
                Format::Json => json_line(level, target, message),
            };
            let _ = writeln!(std::io::stderr().lock(), "{}", line);
        }
    }
}

/// Render a record in the compact stderr format.
pub fn compact_line(level: Level, target: &str, message: &str) -> String {
    let now = chrono::Local::now();
    let initial = level.as_str().chars().next().unwrap_or('?');
    if target.is_empty() {
        format!("{} {} {}", now.format("%H:%M:%S%.3f"), initial, message)
    } else {
        format!(
            "{} {} {}: {}",
            now.format("%H:%M:%S%.3f"),
            initial,
            target,
            message
        )
    }
}

/// Render a record as a single JSON line.
#[cfg(feature = "json")]
pub fn json_line(level: Level, target: &str, message: &str) -> String {
    use serde::Serialize;

    #[derive(Serialize)]
    struct Entry<'a> {
        timestamp: String,
        level: &'a str,
        target: &'a str,
        message: &'a str,
    }

    let entry = Entry {
        timestamp: chrono::Utc::now().to_rfc3339(),
        level: level.as_str(),
        target,
        message,
    };

    serde_json::to_string(&entry).unwrap_or_else(|_| compact_line(level, target, message))
}

/// Without the `json` feature the JSON format degrades to compact lines.
#[cfg(not(feature = "json"))]
pub fn json_line(level: Level, target: &str, message: &str) -> String {
    compact_line(level, target, message)
}

// ============================================================================
// Macros
// ============================================================================

/// Log a trace message.
#[macro_export]
macro_rules! trace {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Trace) {
            $crate::log($crate::Level::Trace, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Trace) {
            $crate::log($crate::Level::Trace, module_path!(), &format!($($arg)+));
        }
    };
}

/// Log a debug message.
///
/// Enabled by `ESDSL_DEBUG=1` or `ESDSL_LOG_LEVEL=debug`.
///
/// # Example
///
/// ```rust
/// use esdsl_log::debug;
///
/// let bytes = 64;
/// debug!("encoded {} bytes", bytes);
/// debug!(target: "esdsl::search", "encoded {} bytes", bytes);
/// ```
#[macro_export]
macro_rules! debug {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_debug_enabled() || $crate::is_level_enabled($crate::Level::Debug) {
            $crate::log($crate::Level::Debug, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_debug_enabled() || $crate::is_level_enabled($crate::Level::Debug) {
            $crate::log($crate::Level::Debug, module_path!(), &format!($($arg)+));
        }
    };
}

/// Log an info message.
#[macro_export]
macro_rules! info {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Info) {
            $crate::log($crate::Level::Info, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Info) {
            $crate::log($crate::Level::Info, module_path!(), &format!($($arg)+));
        }
    };
}

/// Log a warning message.
#[macro_export]
macro_rules! warn {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Warn) {
            $crate::log($crate::Level::Warn, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Warn) {
            $crate::log($crate::Level::Warn, module_path!(), &format!($($arg)+));
        }
    };
}

/// Log an error message.
#[macro_export]
macro_rules! error {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Error) {
            $crate::log($crate::Level::Error, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Error) {
            $crate::log($crate::Level::Error, module_path!(), &format!($($arg)+));
        }
    };
}

// ============================================================================
// Tests
// ============================================================================
