use super::*;

/// Expect only the requested city's temperatures ordered by date
#[tokio::test]
async fn returns_city_temperatures_in_date_order() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_city_tables().build().await?;
    let oslo = test.city().insert_mock_city("Oslo", 59.91, 10.75).await?;
    let rome = test.city().insert_mock_city("Rome", 41.9, 12.5).await?;

    // Insert later days first so storage order differs from date order
    test.city()
        .insert_mock_temperatures(oslo.id, date(2021, 1, 10), 2)
        .await?;
    test.city()
        .insert_mock_temperatures(oslo.id, date(2021, 1, 1), 2)
        .await?;
    test.city()
        .insert_mock_temperatures(rome.id, date(2021, 1, 1), 5)
        .await?;

    let repo = TemperatureRepository::new(&test.db);
    let temperatures = repo.get_many_by_city_id(oslo.id).await?;

    let dates: Vec<NaiveDate> = temperatures.iter().map(|t| t.date).collect();
    assert_eq!(
        dates,
        vec![
            date(2021, 1, 1),
            date(2021, 1, 2),
            date(2021, 1, 10),
            date(2021, 1, 11)
        ]
    );
    assert!(temperatures.iter().all(|t| t.city_id == oslo.id));

    Ok(())
}

/// Expect an empty result for a city without temperatures
#[tokio::test]
async fn returns_empty_for_city_without_temperatures() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_city_tables().build().await?;
    let city = test.city().insert_mock_city("Oslo", 59.91, 10.75).await?;

    let repo = TemperatureRepository::new(&test.db);
    let temperatures = repo.get_many_by_city_id(city.id).await?;

    assert!(temperatures.is_empty());

    Ok(())
}
