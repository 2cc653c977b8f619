use std::{fmt::Display, str::FromStr};

use backtrace::Backtrace;
use tracing::{debug, error, info, level_filters::LevelFilter, warn};

pub fn init(display_level: &bool, level_filter: &str) {
    let level_filter = match LevelFilter::from_str(level_filter) {
        Ok(level_filter) => level_filter,
        Err(err) => panic!("{err}"),
    };

    tracing_subscriber::fmt()
        .with_level(*display_level)
        .with_max_level(level_filter)
        .init();
}

pub fn debug<T: Display>(prefix: Option<&str>, msg: T) {
    debug!("{} {msg}", prefix.unwrap_or("🐞"));
}

pub fn info<T: Display>(prefix: Option<&str>, msg: T) {
    info!("{} {msg}", prefix.unwrap_or("📢"));
}

pub fn warn<T: Display>(prefix: Option<&str>, msg: T) {
    warn!("{} {msg}", prefix.unwrap_or("⚠️"));
}

pub fn error<T: Display>(prefix: Option<&str>, msg: T) {
    let prefix = prefix.unwrap_or("🚨");
    let show_backtrace = std::env::var("RUST_BACKTRACE").is_ok_and(|var| var == "1");
    match show_backtrace {
        true => error!("{prefix} {msg}\n{:?}", Backtrace::new()),
        false => error!("{prefix} {msg}"),
    };
}

pub fn panic<T: Display>(prefix: Option<&str>, msg: T) {
    match prefix {
        Some(prefix) => panic!("{prefix} {msg}"),
        None => panic!("☠️ {msg}"),
    };
}
