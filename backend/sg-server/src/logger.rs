//! Process-wide `log` backend built on fern.
//!
//! Lines look like `2025-01-15T10:00:00.123Z INFO  sg_server::api: message`.
//! Colors are applied to the level only and never reach a log file.

use crate::error::{Result as ServerErrorResult, ServerError};

use sg_config::LogLevel;

use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, info};

/// Where formatted lines end up.
enum Sink {
    File(PathBuf, File),
    Stdout { colored: bool },
}

impl Sink {
    fn open(log_file: Option<PathBuf>, colored: bool) -> ServerErrorResult<Self> {
        let Some(path) = log_file else {
            return Ok(Self::Stdout { colored });
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| ServerError::LogFile {
                path: path.display().to_string(),
                source,
            })?;
        Ok(Self::File(path, file))
    }

    fn describe(&self) -> String {
        match self {
            Self::File(path, _) => format!("file {}", path.display()),
            Self::Stdout { colored: true } => "stdout (colored)".to_string(),
            Self::Stdout { colored: false } => "stdout".to_string(),
        }
    }

    fn into_dispatch(self) -> Dispatch {
        match self {
            Self::File(_, file) => plain().chain(file),
            Self::Stdout { colored: false } => plain().chain(std::io::stdout()),
            Self::Stdout { colored: true } => {
                let colors = ColoredLevelConfig::new()
                    .trace(Color::Magenta)
                    .debug(Color::Blue)
                    .info(Color::Green)
                    .warn(Color::Yellow)
                    .error(Color::Red);

                Dispatch::new()
                    .format(move |out, message, record| {
                        out.finish(format_args!(
                            "{} {:<5} {}: {}",
                            timestamp(),
                            colors.color(record.level()),
                            record.target(),
                            message
                        ))
                    })
                    .chain(std::io::stdout())
            }
        }
    }
}

fn plain() -> Dispatch {
    Dispatch::new().format(|out, message, record| {
        out.finish(format_args!(
            "{} {:<5} {}: {}",
            timestamp(),
            record.level(),
            record.target(),
            message
        ))
    })
}

fn timestamp() -> impl Display {
    humantime::format_rfc3339_millis(SystemTime::now())
}

/// Install the global logger. `log_file` of `None` logs to stdout; `colored`
/// only affects stdout.
pub fn initialize(
    level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let sink = Sink::open(log_file, colored)?;
    let destination = sink.describe();

    Dispatch::new()
        .level(*level)
        // sqlx logs every statement at info
        .level_for("sqlx", LevelFilter::Warn)
        .chain(sink.into_dispatch())
        .apply()
        .map_err(|e| ServerError::Logger {
            message: e.to_string(),
        })?;

    info!("Logger initialized: level={}, {}", *level, destination);
    Ok(())
}
