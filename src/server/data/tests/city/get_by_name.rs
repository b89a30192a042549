use super::*;

/// Expect Some when a city with the exact name exists
#[tokio::test]
async fn finds_existing_city() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_city_tables().build().await?;
    let city = test.city().insert_mock_city("Berlin", 52.52, 13.405).await?;

    let repo = CityRepository::new(&test.db);
    let result = repo.get_by_name("Berlin").await?;

    assert_eq!(result, Some(city));

    Ok(())
}

/// Expect None when no city with the name exists
#[tokio::test]
async fn returns_none_for_unknown_city() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_city_tables()
        .with_mock_city("Berlin", 52.52, 13.405)
        .build()
        .await?;

    let repo = CityRepository::new(&test.db);
    let result = repo.get_by_name("Paris").await?;

    assert!(result.is_none());

    Ok(())
}

/// Expect None when the name only matches ignoring case
#[tokio::test]
async fn matches_name_case_sensitively() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_city_tables()
        .with_mock_city("Berlin", 52.52, 13.405)
        .build()
        .await?;

    let repo = CityRepository::new(&test.db);

    assert!(repo.get_by_name("berlin").await?.is_none());
    assert!(repo.get_by_name("BERLIN").await?.is_none());

    Ok(())
}

/// Expect the earliest created row when duplicate names exist
#[tokio::test]
async fn returns_first_created_duplicate() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_city_tables().build().await?;
    let first = test.city().insert_mock_city("Springfield", 39.8, -89.6).await?;
    let _second = test.city().insert_mock_city("Springfield", 42.1, -72.6).await?;

    let repo = CityRepository::new(&test.db);
    let result = repo.get_by_name("Springfield").await?;

    assert_eq!(result, Some(first));

    Ok(())
}
