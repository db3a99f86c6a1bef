/// Structured logging for the flood risk service.
///
/// Provides context-rich logging with upstream-source tags, place
/// identifiers, timestamps, and severity levels. Supports both console
/// output and file-based logging.

use chrono::Utc;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Mutex;

// ---------------------------------------------------------------------------
// Log Levels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

// ---------------------------------------------------------------------------
// Data Source Types
// ---------------------------------------------------------------------------

/// Which upstream system a log entry concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    WeatherApi,
    OpenMeteo,
    Nominatim,
    NewsData,
    System,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::WeatherApi => write!(f, "WAPI"),
            DataSource::OpenMeteo => write!(f, "OMETEO"),
            DataSource::Nominatim => write!(f, "GEO"),
            DataSource::NewsData => write!(f, "NEWS"),
            DataSource::System => write!(f, "SYS"),
        }
    }
}

// ---------------------------------------------------------------------------
// Failure Classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureType {
    /// Expected failure - e.g. a place the geocoder simply has no entry for
    Expected,
    /// Unexpected failure - indicates service degradation or an API change
    Unexpected,
    /// Unknown - cannot determine if this is expected or not
    Unknown,
}

impl fmt::Display for FailureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureType::Expected => write!(f, "EXPECTED"),
            FailureType::Unexpected => write!(f, "UNEXPECTED"),
            FailureType::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Classify an ingest failure from its error message.
///
/// Works off the `Display` text of `WeatherError` so it can classify any
/// boxed error uniformly.
pub fn classify_ingest_failure(error_message: &str) -> FailureType {
    // A place the geocoder has no entry for is a user-input condition,
    // not service degradation.
    if error_message.contains("Location not found") {
        FailureType::Expected
    }
    // Parse errors suggest API changes or bugs on our side.
    else if error_message.contains("Parse error") {
        FailureType::Unexpected
    }
    // HTTP-level failures mean the upstream is misbehaving.
    else if error_message.contains("HTTP error") || error_message.contains("Request failed") {
        FailureType::Unexpected
    }
    // Empty responses may be transient upstream gaps.
    else if error_message.contains("No data available") {
        FailureType::Unknown
    } else {
        FailureType::Unknown
    }
}

// ---------------------------------------------------------------------------
// Logger Configuration
// ---------------------------------------------------------------------------

/// Global logger instance
static LOGGER: Mutex<Option<Logger>> = Mutex::new(None);

pub struct Logger {
    /// Minimum log level to display
    min_level: LogLevel,
    /// Optional file path for logging
    log_file: Option<String>,
    /// Whether to include timestamps in console output
    console_timestamps: bool,
}

impl Logger {
    /// Initialize the global logger
    pub fn init(min_level: LogLevel, log_file: Option<String>, console_timestamps: bool) {
        let logger = Logger {
            min_level,
            log_file,
            console_timestamps,
        };

        *LOGGER.lock().unwrap() = Some(logger);
    }

    fn log(&self, level: LogLevel, source: DataSource, place: Option<&str>, message: &str) {
        if level < self.min_level {
            return;
        }

        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");

        let place_part = place.map(|p| format!(" [{}]", p)).unwrap_or_default();
        let log_entry = format!(
            "{} {} {}{}: {}",
            timestamp, level, source, place_part, message
        );

        // Console output
        if self.console_timestamps {
            match level {
                LogLevel::Error | LogLevel::Warning => eprintln!("{}", log_entry),
                LogLevel::Info => println!("{}", log_entry),
                LogLevel::Debug => println!("{}", log_entry),
            }
        } else {
            match level {
                LogLevel::Error => eprintln!("✗ {}{}: {}", source, place_part, message),
                LogLevel::Warning => eprintln!("⚠ {}{}: {}", source, place_part, message),
                LogLevel::Info => println!("{}", message),
                LogLevel::Debug => {} // Skip debug in non-timestamp mode
            }
        }

        // File output
        if let Some(ref path) = self.log_file {
            if let Err(e) = Self::append_to_file(path, &log_entry) {
                eprintln!("Failed to write to log file {}: {}", path, e);
            }
        }
    }

    fn append_to_file(path: &str, entry: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", entry)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Public Logging Functions
// ---------------------------------------------------------------------------

/// Initialize the global logger
pub fn init_logger(min_level: LogLevel, log_file: Option<&str>, console_timestamps: bool) {
    Logger::init(min_level, log_file.map(String::from), console_timestamps);
}

/// Log a general informational message
pub fn info(source: DataSource, place: Option<&str>, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Info, source, place, message);
    }
}

/// Log a warning message
pub fn warn(source: DataSource, place: Option<&str>, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Warning, source, place, message);
    }
}

/// Log an error message
pub fn error(source: DataSource, place: Option<&str>, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Error, source, place, message);
    }
}

/// Log a debug message
pub fn debug(source: DataSource, place: Option<&str>, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Debug, source, place, message);
    }
}

// ---------------------------------------------------------------------------
// Structured Failure Logging
// ---------------------------------------------------------------------------

/// Log an ingest failure with automatic classification.
///
/// `place` is whatever identifies the request: a district, a coordinate
/// pair, or a search term.
pub fn log_ingest_failure(
    source: DataSource,
    place: &str,
    operation: &str,
    err: &dyn std::error::Error,
) {
    let error_msg = err.to_string();
    let failure_type = classify_ingest_failure(&error_msg);

    let message = format!("{} failed [{}]: {}", operation, failure_type, error_msg);

    match failure_type {
        FailureType::Expected => debug(source, Some(place), &message),
        FailureType::Unexpected => error(source, Some(place), &message),
        FailureType::Unknown => warn(source, Some(place), &message),
    }
}
