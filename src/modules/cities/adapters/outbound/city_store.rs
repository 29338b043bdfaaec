use crate::modules::cities::core::city::City;
use crate::modules::cities::core::fixtures::city_fixtures;
use crate::shared::infrastructure::entity_store::in_memory::InMemoryEntityStore;

pub type CityStore = InMemoryEntityStore<City>;

pub fn seeded_city_store() -> CityStore {
    CityStore::with_fixtures(city_fixtures())
}
