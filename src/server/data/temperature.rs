//! Repository for daily temperature entries.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::temperature::TemperatureRecord;

/// Database access for the `temperature` table
pub struct TemperatureRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TemperatureRepository<'a> {
    /// Creates a new instance of [`TemperatureRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a single temperature entry
    pub async fn create(
        &self,
        record: TemperatureRecord,
    ) -> Result<entity::temperature::Model, DbErr> {
        let temperature = into_active_model(record);

        temperature.insert(self.db).await
    }

    /// Inserts all records in a single batched statement
    ///
    /// Records are not validated and duplicate dates for a city are not detected.
    /// An empty batch is a no-op.
    pub async fn insert_many(
        &self,
        records: Vec<TemperatureRecord>,
    ) -> Result<Vec<entity::temperature::Model>, DbErr> {
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let temperatures = records.into_iter().map(into_active_model);

        entity::prelude::Temperature::insert_many(temperatures)
            .exec_with_returning(self.db)
            .await
    }

    /// Gets all temperature entries of a city ordered by date
    pub async fn get_many_by_city_id(
        &self,
        city_id: i32,
    ) -> Result<Vec<entity::temperature::Model>, DbErr> {
        entity::prelude::Temperature::find()
            .filter(entity::temperature::Column::CityId.eq(city_id))
            .order_by_asc(entity::temperature::Column::Date)
            .order_by_asc(entity::temperature::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets every temperature entry alongside its city, ordered by city then date
    pub async fn get_all_with_city(
        &self,
    ) -> Result<Vec<(entity::temperature::Model, Option<entity::city::Model>)>, DbErr> {
        entity::prelude::Temperature::find()
            .find_also_related(entity::prelude::City)
            .order_by_asc(entity::temperature::Column::CityId)
            .order_by_asc(entity::temperature::Column::Date)
            .order_by_asc(entity::temperature::Column::Id)
            .all(self.db)
            .await
    }
}

fn into_active_model(record: TemperatureRecord) -> entity::temperature::ActiveModel {
    entity::temperature::ActiveModel {
        city_id: ActiveValue::Set(record.city_id),
        date: ActiveValue::Set(record.date),
        max: ActiveValue::Set(record.max),
        min: ActiveValue::Set(record.min),
        ..Default::default()
    }
}
