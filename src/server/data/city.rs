//! Repository for cities.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

/// Database access for the `city` table
pub struct CityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CityRepository<'a> {
    /// Creates a new instance of [`CityRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new city
    ///
    /// No existence check is performed, inserting an existing name creates a second row.
    pub async fn create(
        &self,
        name: String,
        lat: f64,
        lon: f64,
    ) -> Result<entity::city::Model, DbErr> {
        let city = entity::city::ActiveModel {
            name: ActiveValue::Set(name),
            lat: ActiveValue::Set(lat),
            lon: ActiveValue::Set(lon),
            ..Default::default()
        };

        city.insert(self.db).await
    }

    /// Get a city using its exact, case-sensitive name
    ///
    /// Should duplicate rows exist for the name, the one created first is returned.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<entity::city::Model>, DbErr> {
        entity::prelude::City::find()
            .filter(entity::city::Column::Name.eq(name))
            .order_by_asc(entity::city::Column::Id)
            .one(self.db)
            .await
    }
}
