use fb_db_sqlite::db::SqliteDb;

pub mod driver;

pub enum Db {
    SqliteDb(SqliteDb),
}
