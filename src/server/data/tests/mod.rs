use chrono::NaiveDate;
use sea_orm::{EntityTrait, PaginatorTrait};
use tempest_test_utils::prelude::*;

use crate::server::{
    data::{city::CityRepository, temperature::TemperatureRepository},
    model::temperature::TemperatureRecord,
};

mod city;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
