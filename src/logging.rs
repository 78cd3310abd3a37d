use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Handle;
use thiserror::Error;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} - {m}{n}";

/// Sets up logging to file and optionally to the console.
/// Console output goes to stderr since stdout is reserved for the rain report.
///
/// # Arguments
///
/// * 'log_path' - path to the log file
/// * 'log_level' - the level to log on
/// * 'log_to_stdout' - whether log records also should go to the console
pub fn setup_logger(log_path: &str, log_level: LevelFilter, log_to_stdout: bool) -> Result<Handle, LoggerError> {
    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(log_path)?;

    let mut builder = Config::builder()
        .appender(Appender::builder().build("file", Box::new(file)));
    let mut root = Root::builder().appender("file");

    if log_to_stdout {
        let console = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .target(Target::Stderr)
            .build();
        builder = builder.appender(Appender::builder().build("console", Box::new(console)));
        root = root.appender("console");
    }

    let config = builder.build(root.build(log_level))
        .map_err(|e| LoggerError::Config(e.to_string()))?;

    Ok(log4rs::init_config(config)?)
}

/// Error depicting errors that occur while setting up the logger
///
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("FileAppenderError: {0}")]
    FileAppender(#[from] std::io::Error),
    #[error("ConfigError: {0}")]
    Config(String),
    #[error("SetLoggerError: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}
