use std::fs::File;

use serde::Deserialize;

use crate::{db::DbConfig, log::LogConfig};

pub mod db;
pub mod log;

#[derive(Deserialize)]
pub struct Config {
    log: LogConfig,
    db: DbConfig,
}

impl Config {
    pub fn log(&self) -> &LogConfig {
        &self.log
    }

    pub fn db(&self) -> &DbConfig {
        &self.db
    }
}

pub fn from_path(path: &str) -> Config {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => panic!("{err}"),
    };
    match serde_yaml::from_reader::<_, Config>(file) {
        Ok(config) => config,
        Err(err) => panic!("{err}"),
    }
}
