use anyhow::Result;
use sqlx::{Executor, Pool, Sqlite};

use crate::{db::SqliteDb, model::driver::DriverModel};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS \"drivers\" (\"id\" integer PRIMARY KEY AUTOINCREMENT, \"name\" text NOT NULL, \"licence_number\" text NOT NULL, \"is_deleted\" boolean NOT NULL DEFAULT FALSE)";
const INSERT: &str = "INSERT INTO \"drivers\" (\"name\", \"licence_number\") VALUES (?, ?)";
const SELECT: &str = "SELECT \"id\", \"name\", \"licence_number\" FROM \"drivers\" WHERE \"id\" = ? AND \"is_deleted\" IS FALSE";
const SELECT_MANY: &str = "SELECT \"id\", \"name\", \"licence_number\" FROM \"drivers\" WHERE \"is_deleted\" IS FALSE";
const UPDATE: &str = "UPDATE \"drivers\" SET \"name\" = ?, \"licence_number\" = ? WHERE \"id\" = ? AND \"is_deleted\" IS FALSE";
const DELETE: &str = "UPDATE \"drivers\" SET \"is_deleted\" = TRUE WHERE \"id\" = ? AND \"is_deleted\" IS FALSE";

pub async fn init(pool: &Pool<Sqlite>) {
    fb_log::info(Some("🔧"), "[SQLite] Setting up drivers table");

    pool.execute(CREATE_TABLE).await.unwrap();

    tokio::try_join!(
        pool.prepare(INSERT),
        pool.prepare(SELECT),
        pool.prepare(SELECT_MANY),
        pool.prepare(UPDATE),
        pool.prepare(DELETE),
    )
    .unwrap();
}

impl SqliteDb {
    pub async fn insert_driver(&self, value: &DriverModel) -> Result<Option<i64>> {
        let result = self
            .execute(
                sqlx::query(INSERT)
                    .bind(value.name())
                    .bind(value.licence_number()),
            )
            .await?;
        match result.rows_affected() {
            0 => Ok(None),
            _ => Ok(Some(result.last_insert_rowid())),
        }
    }

    pub async fn select_driver(&self, id: &i64) -> Result<Option<DriverModel>> {
        Ok(self.fetch_optional(sqlx::query_as(SELECT).bind(id)).await?)
    }

    pub async fn select_many_drivers(&self) -> Result<Vec<DriverModel>> {
        Ok(self.fetch_all(sqlx::query_as(SELECT_MANY)).await?)
    }

    pub async fn update_driver(&self, value: &DriverModel) -> Result<()> {
        self.execute(
            sqlx::query(UPDATE)
                .bind(value.name())
                .bind(value.licence_number())
                .bind(value.id()),
        )
        .await?;
        Ok(())
    }

    pub async fn delete_driver(&self, id: &i64) -> Result<u64> {
        let result = self.execute(sqlx::query(DELETE).bind(id)).await?;
        Ok(result.rows_affected())
    }
}
