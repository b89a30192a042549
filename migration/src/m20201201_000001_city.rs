use sea_orm_migration::{prelude::*, schema::*};

static IDX_CITY_NAME: &str = "idx-city-name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Names are looked up on every ingestion but are not unique; duplicate rows
        // from concurrent ingestion of the same new city must still insert.
        manager
            .create_table(
                Table::create()
                    .table(City::Table)
                    .if_not_exists()
                    .col(pk_auto(City::Id))
                    .col(string(City::Name))
                    .col(double(City::Lat))
                    .col(double(City::Lon))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CITY_NAME)
                    .table(City::Table)
                    .col(City::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CITY_NAME)
                    .table(City::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(City::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum City {
    Table,
    Id,
    Name,
    Lat,
    Lon,
}
