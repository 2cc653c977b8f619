use fb_dao::{driver::DriverDao, Db};
use fb_db_sqlite::db::SqliteDb;
use fb_error::DataProcessingError;

mod config_path;

#[tokio::main]
async fn main() {
    let config_path = config_path::get();
    let config = fb_config::from_path(&config_path);

    fb_log::init(config.log().display_level(), config.log().level_filter());

    fb_log::info(Some("🚕"), "[Fleetbase] Starting");

    let db = if let Some(sqlite) = config.db().sqlite() {
        Db::SqliteDb(SqliteDb::new(sqlite.path(), sqlite.max_connections()).await)
    } else {
        fb_log::panic(None, "[Fleetbase] No database configuration is specified");
        return;
    };

    if let Err(err) = run_roster(&db).await {
        fb_log::error(None, format!("[Fleetbase] {err}"));
        return;
    }

    fb_log::info(Some("🏁"), "[Fleetbase] Done");
}

async fn run_roster(db: &Db) -> Result<(), DataProcessingError> {
    let mut bob = DriverDao::new("Bob", "AB123456");
    bob.db_insert(db).await?;
    let mut alice = DriverDao::new("Alice", "CD654321");
    alice.db_insert(db).await?;

    for driver in DriverDao::db_select_many(db).await? {
        fb_log::info(
            Some("🪪"),
            format!(
                "[Fleetbase] Driver {} ({})",
                driver.name(),
                driver.licence_number()
            ),
        );
    }

    bob.set_licence_number("AB999999");
    bob.db_update(db).await?;

    if let Some(id) = alice.id() {
        let deleted = DriverDao::db_delete(db, id).await?;
        fb_log::info(
            Some("🗑️"),
            format!("[Fleetbase] Driver {} removed: {deleted}", alice.name()),
        );
    }

    for driver in DriverDao::db_select_many(db).await? {
        fb_log::info(
            Some("🪪"),
            format!(
                "[Fleetbase] Driver {} ({})",
                driver.name(),
                driver.licence_number()
            ),
        );
    }

    Ok(())
}
