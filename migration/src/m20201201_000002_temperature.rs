use sea_orm_migration::{prelude::*, schema::*};

use crate::m20201201_000001_city::City;

static IDX_TEMPERATURE_CITY_ID: &str = "idx-temperature-city_id";
static FK_TEMPERATURE_CITY_ID: &str = "fk-temperature-city_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No unique (city_id, date) constraint, re-ingesting a city may duplicate days.
        manager
            .create_table(
                Table::create()
                    .table(Temperature::Table)
                    .if_not_exists()
                    .col(pk_auto(Temperature::Id))
                    .col(integer(Temperature::CityId))
                    .col(date(Temperature::Date))
                    .col(double(Temperature::Max))
                    .col(double(Temperature::Min))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TEMPERATURE_CITY_ID)
                            .from(Temperature::Table, Temperature::CityId)
                            .to(City::Table, City::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEMPERATURE_CITY_ID)
                    .table(Temperature::Table)
                    .col(Temperature::CityId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TEMPERATURE_CITY_ID)
                    .table(Temperature::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Temperature::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Temperature {
    Table,
    Id,
    CityId,
    Date,
    Max,
    Min,
}
