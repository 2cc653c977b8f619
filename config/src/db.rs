use serde::Deserialize;

use self::sqlite::DbSqliteConfig;

pub mod sqlite;

#[derive(Deserialize)]
pub struct DbConfig {
    sqlite: Option<DbSqliteConfig>,
}

impl DbConfig {
    pub fn sqlite(&self) -> &Option<DbSqliteConfig> {
        &self.sqlite
    }
}
