use crate::domain::{AddressId, AddressRecord};
use crate::error::Result;
use async_trait::async_trait;

pub mod in_memory;
pub mod sqlite;

pub use in_memory::InMemoryStorage;
pub use sqlite::SqliteStorage;

/// Record-level persistence for addresses.
///
/// Implementations assign ids on insert and report a missing row on `replace` and
/// `remove_by_id` by returning `false`. Any other failure is an error.
#[async_trait]
pub trait AddressStorage: Send + Sync {
    async fn insert(&self, name: &str, latitude: f64, longitude: f64) -> Result<AddressId>;

    /// Every stored record in ascending id order.
    async fn scan_all(&self) -> Result<Vec<AddressRecord>>;

    async fn get_by_id(&self, id: AddressId) -> Result<Option<AddressRecord>>;

    async fn replace(
        &self,
        id: AddressId,
        name: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<bool>;

    async fn remove_by_id(&self, id: AddressId) -> Result<bool>;
}
