//! City store port
//!
//! Defines the interface to the seeded city catalog.

use async_trait::async_trait;
use domain::City;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for querying and seeding the city catalog
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CityStore: Send + Sync {
    /// Find cities whose name starts with `prefix`, case-insensitively
    ///
    /// An optional country code constrains results further. Results come
    /// back in the store's natural order, capped at `limit`.
    async fn find_by_prefix<'a>(
        &self,
        prefix: &str,
        country: Option<&'a str>,
        limit: usize,
    ) -> Result<Vec<City>, ApplicationError>;

    /// Number of cities currently in the catalog
    async fn count(&self) -> Result<u64, ApplicationError>;

    /// Bulk-insert cities; returns the number inserted
    async fn insert_many(&self, cities: Vec<City>) -> Result<usize, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn CityStore) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn CityStore>();
    }
}
