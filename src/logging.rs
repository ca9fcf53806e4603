use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::config::LogSettings;

/// Routes log output to a file; the alternate screen owns stdout and stderr
/// for the lifetime of the session.
pub fn init(settings: &LogSettings) -> Result<()> {
    let level = settings
        .level
        .parse::<LevelFilter>()
        .with_context(|| format!("unknown log level: {}", settings.level))?;
    if level == LevelFilter::Off {
        return Ok(());
    }

    let appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}",
        )))
        .build(&settings.file)
        .with_context(|| format!("failed to open log file: {}", settings.file.display()))?;

    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(appender)))
        .build(Root::builder().appender("file").build(level))
        .context("invalid logging configuration")?;
    log4rs::init_config(config).context("logging already initialised")?;
    Ok(())
}
