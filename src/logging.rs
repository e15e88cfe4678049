use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        file::FileAppender,
    },
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

const FILE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";
const STDERR_PATTERN: &str = "{l}: {m}{n}";

/// Where log records go. The interactive UI owns the terminal, so it only
/// logs when a file is given.
#[derive(Debug, Clone, Copy)]
pub enum LogSink<'a> {
    File(&'a Path),
    Stderr,
    Disabled,
}

pub fn init_logging(sink: LogSink<'_>, level: LevelFilter) -> Result<()> {
    let appender: Box<dyn log4rs::append::Append> = match sink {
        LogSink::Disabled => return Ok(()),
        LogSink::File(path) => Box::new(
            FileAppender::builder()
                .encoder(Box::new(PatternEncoder::new(FILE_PATTERN)))
                .build(path)
                .with_context(|| format!("opening log file {} failed", path.display()))?,
        ),
        LogSink::Stderr => Box::new(
            ConsoleAppender::builder()
                .target(Target::Stderr)
                .encoder(Box::new(PatternEncoder::new(STDERR_PATTERN)))
                .build(),
        ),
    };

    let config = Config::builder()
        .appender(Appender::builder().build("main", appender))
        .build(Root::builder().appender("main").build(level))
        .context("building log configuration failed")?;
    log4rs::init_config(config).context("installing logger failed")?;
    Ok(())
}
