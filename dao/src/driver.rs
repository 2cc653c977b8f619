use fb_db_sqlite::model::driver::DriverModel as DriverSqliteModel;
use fb_error::DataProcessingError;

use crate::Db;

#[derive(Debug, Clone, PartialEq)]
pub struct DriverDao {
    id: Option<i64>,
    name: String,
    licence_number: String,
}

impl DriverDao {
    pub fn new(name: &str, licence_number: &str) -> Self {
        Self {
            id: None,
            name: name.to_owned(),
            licence_number: licence_number.to_owned(),
        }
    }

    pub fn id(&self) -> &Option<i64> {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn licence_number(&self) -> &str {
        &self.licence_number
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_owned();
    }

    pub fn set_licence_number(&mut self, licence_number: &str) {
        self.licence_number = licence_number.to_owned();
    }

    pub async fn db_insert(&mut self, db: &Db) -> Result<(), DataProcessingError> {
        match db {
            Db::SqliteDb(db) => {
                let id = db
                    .insert_driver(&self.to_sqlitedb_model())
                    .await
                    .map_err(|err| {
                        DataProcessingError::with_source(
                            format!("Failed to create new driver with name '{}'", self.name),
                            err,
                        )
                    })?;
                match id {
                    Some(id) => {
                        self.id = Some(id);
                        Ok(())
                    }
                    None => Err(DataProcessingError::new(format!(
                        "Failed to obtain a generated id for new driver with name '{}'",
                        self.name
                    ))),
                }
            }
        }
    }

    pub async fn db_select(db: &Db, id: &i64) -> Result<Option<Self>, DataProcessingError> {
        match db {
            Db::SqliteDb(db) => Ok(db
                .select_driver(id)
                .await
                .map_err(|err| {
                    DataProcessingError::with_source(
                        format!("Failed to obtain driver with id {id}"),
                        err,
                    )
                })?
                .map(|model| Self::from_sqlitedb_model(&model))),
        }
    }

    pub async fn db_select_many(db: &Db) -> Result<Vec<Self>, DataProcessingError> {
        match db {
            Db::SqliteDb(db) => Ok(db
                .select_many_drivers()
                .await
                .map_err(|err| {
                    DataProcessingError::with_source("Failed to read all drivers", err)
                })?
                .iter()
                .map(Self::from_sqlitedb_model)
                .collect()),
        }
    }

    /// Always yields the entity back wrapped in `Some`, whether or not a
    /// non-deleted row matched its id. Asymmetric with [`Self::db_delete`],
    /// which reports the affected-row count.
    pub async fn db_update(&self, db: &Db) -> Result<Option<Self>, DataProcessingError> {
        match db {
            Db::SqliteDb(db) => {
                db.update_driver(&self.to_sqlitedb_model())
                    .await
                    .map_err(|err| {
                        DataProcessingError::with_source(
                            match self.id {
                                Some(id) => format!("Failed to update driver with id {id}"),
                                None => "Failed to update driver without an assigned id".to_owned(),
                            },
                            err,
                        )
                    })?;
                Ok(Some(self.clone()))
            }
        }
    }

    pub async fn db_delete(db: &Db, id: &i64) -> Result<bool, DataProcessingError> {
        match db {
            Db::SqliteDb(db) => {
                let affected = db.delete_driver(id).await.map_err(|err| {
                    DataProcessingError::with_source(
                        format!("Failed to delete driver with id {id}"),
                        err,
                    )
                })?;
                Ok(affected == 1)
            }
        }
    }

    fn from_sqlitedb_model(model: &DriverSqliteModel) -> Self {
        Self {
            id: *model.id(),
            name: model.name().to_owned(),
            licence_number: model.licence_number().to_owned(),
        }
    }

    fn to_sqlitedb_model(&self) -> DriverSqliteModel {
        DriverSqliteModel::new(&self.id, &self.name, &self.licence_number)
    }
}
