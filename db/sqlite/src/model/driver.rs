use sqlx::prelude::FromRow;

#[derive(FromRow)]
pub struct DriverModel {
    id: Option<i64>,
    name: String,
    licence_number: String,
}

impl DriverModel {
    pub fn new(id: &Option<i64>, name: &str, licence_number: &str) -> Self {
        Self {
            id: *id,
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
}
