// PixelWidget
// copyright zipxing@hotmail.com 2022～2025

//! Log module, file logging through log4rs, reference
//! https://docs.rs/log4rs
//!
//! A terminal host owns stdout, so log records go to a file.

use crate::ui::{UIError, UIResult};
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

pub const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}";

/// Parses a level name such as `"info"`; unknown names fall back to `Info`.
pub fn level_from_str(level: &str) -> LevelFilter {
    level.parse().unwrap_or(LevelFilter::Info)
}

/// init logs system
pub fn init_log(level: LevelFilter, file_path: &str) -> UIResult<()> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(file_path)?;
    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))
        .map_err(|e| UIError::Config(format!("log config: {}", e)))?;
    log4rs::init_config(config).map_err(|e| UIError::Config(format!("log init: {}", e)))?;
    Ok(())
}
