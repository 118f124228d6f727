//! Value objects for the city catalog

mod city_id;
mod coordinates;
mod country_code;

pub use city_id::CityId;
pub use coordinates::Coordinates;
pub use country_code::CountryCode;
