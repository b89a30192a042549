use super::*;

/// Expect every record to be stored and returned in insertion order
#[tokio::test]
async fn inserts_all_records() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_city_tables().build().await?;
    let city = test.city().insert_mock_city("Springfield", 39.8, -89.6).await?;

    let batch = records(city.id, date(2020, 12, 1), 62);

    let repo = TemperatureRepository::new(&test.db);
    let inserted = repo.insert_many(batch.clone()).await?;

    assert_eq!(inserted.len(), 62);
    for (temperature, record) in inserted.iter().zip(batch.iter()) {
        assert_eq!(temperature.city_id, record.city_id);
        assert_eq!(temperature.date, record.date);
        assert_eq!(temperature.min, record.min);
        assert_eq!(temperature.max, record.max);
    }

    let count = entity::prelude::Temperature::find().count(&test.db).await?;
    assert_eq!(count, 62);

    Ok(())
}

/// Expect an empty batch to be a no-op
#[tokio::test]
async fn empty_batch_is_noop() -> Result<(), TestError> {
    let test = TestBuilder::new().with_city_tables().build().await?;

    let repo = TemperatureRepository::new(&test.db);
    let inserted = repo.insert_many(Vec::new()).await?;

    assert!(inserted.is_empty());

    let count = entity::prelude::Temperature::find().count(&test.db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Expect duplicate (city, date) rows to be stored without complaint
#[tokio::test]
async fn allows_duplicate_dates() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_city_tables().build().await?;
    let city = test.city().insert_mock_city("Springfield", 39.8, -89.6).await?;
    test.city()
        .insert_mock_temperatures(city.id, date(2020, 12, 1), 3)
        .await?;

    let repo = TemperatureRepository::new(&test.db);
    let inserted = repo
        .insert_many(records(city.id, date(2020, 12, 1), 3))
        .await?;

    assert_eq!(inserted.len(), 3);

    let stored = repo.get_many_by_city_id(city.id).await?;
    assert_eq!(stored.len(), 6);

    Ok(())
}
