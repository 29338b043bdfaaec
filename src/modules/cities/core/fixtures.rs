use crate::modules::cities::core::city::City;

const NAMES: [&str; 3] = ["Москва", "Санкт-Петербург", "Екатеринбург"];

pub fn city_fixtures() -> Vec<City> {
    NAMES.into_iter().map(City::new).collect()
}
