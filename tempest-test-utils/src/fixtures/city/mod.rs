use crate::TestContext;

pub mod data;

impl TestContext {
    pub fn city<'a>(&'a mut self) -> CityFixtures<'a> {
        CityFixtures { setup: self }
    }
}

pub struct CityFixtures<'a> {
    pub setup: &'a mut TestContext,
}
