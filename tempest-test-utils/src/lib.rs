pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{
            TEST_GEOCODE_API_KEY, TEST_GEOCODE_PATH, TEST_WEATHER_API_KEY, TEST_WEATHER_PATH,
        },
        fixtures::provider::factory,
        TestBuilder, TestContext, TestError,
    };
}
