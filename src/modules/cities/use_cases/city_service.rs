// Read access to the city directory used by candidate and vacancy forms.

use crate::modules::cities::core::city::City;
use crate::shared::core::entity::EntityId;
use crate::shared::infrastructure::entity_store::EntityRepository;
use std::sync::Arc;

pub struct CityService<TCities>
where
    TCities: EntityRepository<City> + 'static,
{
    cities: Arc<TCities>,
}

impl<TCities> CityService<TCities>
where
    TCities: EntityRepository<City> + 'static,
{
    pub fn new(cities: Arc<TCities>) -> Self {
        Self { cities }
    }

    pub async fn find_all(&self) -> Vec<City> {
        self.cities.find_all().await
    }

    pub async fn find_by_id(&self, id: EntityId) -> Option<City> {
        self.cities.find_by_id(id).await
    }
}
