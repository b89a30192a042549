use crate::TestContext;

pub mod factory;
pub mod mockito;

impl TestContext {
    pub fn provider<'a>(&'a mut self) -> ProviderFixtures<'a> {
        ProviderFixtures { setup: self }
    }
}

pub struct ProviderFixtures<'a> {
    pub setup: &'a mut TestContext,
}
