use super::*;

/// Expect a single stored temperature matching the record
#[tokio::test]
async fn creates_temperature() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_city_tables().build().await?;
    let city = test.city().insert_mock_city("Oslo", 59.91, 10.75).await?;

    let repo = TemperatureRepository::new(&test.db);
    let temperature = repo
        .create(TemperatureRecord {
            city_id: city.id,
            date: date(2021, 1, 15),
            min: -7.5,
            max: -1.0,
        })
        .await?;

    assert_eq!(temperature.city_id, city.id);
    assert_eq!(temperature.date, date(2021, 1, 15));
    assert_eq!(temperature.min, -7.5);
    assert_eq!(temperature.max, -1.0);

    Ok(())
}
