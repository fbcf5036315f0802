//! The logging collaborator.
//!
//! The harness logs through `tracing` and mirrors every record to the
//! console, so a run is readable both live and from the log file. A
//! [`LogSession`] owns the file-writing subscriber for the duration of one
//! run; dropping it stops log writing. Verbosity is an explicit enumeration
//! with a [`Verbosity::Disabled`] variant rather than a sentinel value, and
//! `Disabled` guarantees that zero log records are written.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{Datelike, Local};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use tracing::level_filters::LevelFilter;
use tracing::Level;

use crate::errors::LogError;

// ============================================================================
// VERBOSITY
// ============================================================================

/// Logging verbosity, from fully disabled to everything.
///
/// The variants mirror the historical integer flag values so existing
/// invocations keep their meaning; see [`Verbosity::from_flag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// No log output at all: no file is opened, no records are written.
    Disabled,
    Config,
    /// A log file is opened but every record is filtered out.
    Off,
    Severe,
    Warning,
    Info,
    Fine,
    Finer,
    #[default]
    Finest,
    All,
}

impl Verbosity {
    /// Maps the command-line integer to a verbosity.
    ///
    /// The mapping is fixed: -2 disabled, -1 config, 0 off, 1 severe,
    /// 2 warning, 3 info, 4 fine, 5 finer, 6 finest, 7 all. Any other value
    /// yields `None` and callers keep their default.
    pub fn from_flag(level: i8) -> Option<Self> {
        match level {
            -2 => Some(Self::Disabled),
            -1 => Some(Self::Config),
            0 => Some(Self::Off),
            1 => Some(Self::Severe),
            2 => Some(Self::Warning),
            3 => Some(Self::Info),
            4 => Some(Self::Fine),
            5 => Some(Self::Finer),
            6 => Some(Self::Finest),
            7 => Some(Self::All),
            _ => None,
        }
    }

    /// The `tracing` filter this verbosity installs.
    pub fn filter(self) -> LevelFilter {
        match self {
            Self::Disabled | Self::Off => LevelFilter::OFF,
            Self::Severe => LevelFilter::ERROR,
            Self::Warning => LevelFilter::WARN,
            Self::Info => LevelFilter::INFO,
            Self::Config | Self::Fine => LevelFilter::DEBUG,
            Self::Finer | Self::Finest | Self::All => LevelFilter::TRACE,
        }
    }
}

// ============================================================================
// LOG SESSION - the start/stop-writing pair
// ============================================================================

/// An active log-writing session; dropping it stops log writing.
pub struct LogSession {
    _guard: Option<tracing::subscriber::DefaultGuard>,
}

impl LogSession {
    /// Opens a timestamped log file under `folder` and installs a scoped
    /// `tracing` subscriber writing to it.
    ///
    /// With [`Verbosity::Disabled`] nothing is opened or installed and the
    /// folder is left untouched.
    pub fn start(folder: &Path, verbosity: Verbosity) -> Result<Self, LogError> {
        if verbosity == Verbosity::Disabled {
            return Ok(Self { _guard: None });
        }

        std::fs::create_dir_all(folder).map_err(|e| LogError::new(folder, e))?;
        let file_name = format!("{}.log", Local::now().format("%Y-%m-%d_%H-%M-%S"));
        let file = File::create(folder.join(file_name)).map_err(|e| LogError::new(folder, e))?;

        let subscriber = tracing_subscriber::fmt()
            .with_max_level(verbosity.filter())
            .with_ansi(false)
            .with_writer(Arc::new(file))
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        Ok(Self {
            _guard: Some(guard),
        })
    }
}

/// The default date-stamped log folder under the working directory.
pub fn default_log_folder() -> PathBuf {
    let today = Local::now();
    PathBuf::from("test_runner_logs").join(format!(
        "{}_{}_{}",
        today.year(),
        today.month(),
        today.day()
    ))
}

// ============================================================================
// LOG-AND-PRINT
// ============================================================================

/// Emits a log record and prints the message to the console, colorized by
/// severity.
pub fn log_and_print(level: Level, message: &str) {
    print_line(level, message);
    emit(level, message);
}

/// [`log_and_print`] with an error cause appended to the record.
pub fn log_and_print_with_cause(
    level: Level,
    message: &str,
    cause: &(dyn std::error::Error + 'static),
) {
    let line = format!("{message} ({})", render_chain(cause));
    print_line(level, &line);
    emit(level, &line);
}

/// Renders an error and its source chain on one line.
fn render_chain(error: &(dyn std::error::Error + 'static)) -> String {
    let mut rendered = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}

fn emit(level: Level, message: &str) {
    match level {
        Level::ERROR => tracing::error!("{message}"),
        Level::WARN => tracing::warn!("{message}"),
        Level::INFO => tracing::info!("{message}"),
        Level::DEBUG => tracing::debug!("{message}"),
        Level::TRACE => tracing::trace!("{message}"),
    }
}

fn print_line(level: Level, message: &str) {
    let color = match level {
        Level::ERROR => Some(Color::Red),
        Level::WARN => Some(Color::Yellow),
        _ => None,
    };
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    if let Some(color) = color {
        let _ = stdout.set_color(ColorSpec::new().set_fg(Some(color)));
    }
    let _ = writeln!(stdout, "{message}");
    let _ = stdout.reset();
}
