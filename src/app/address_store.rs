use crate::domain::{Address, AddressId};
use crate::error::{Result, ValidationError};
use crate::geo::distance_km;
use crate::storage::AddressStorage;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Mediates every read and write of persisted addresses.
///
/// Nothing is cached: each call goes through the storage collaborator, so a read
/// observes every write that completed before it started.
#[derive(Clone)]
pub struct AddressStore {
    storage: Arc<dyn AddressStorage>,
}

impl AddressStore {
    pub fn new(storage: Arc<dyn AddressStorage>) -> Self {
        Self { storage }
    }

    /// Validates and persists `address`, returning it with the assigned id.
    #[instrument(skip(self, address), fields(name = %address.name()))]
    pub async fn create(&self, address: Address) -> Result<Address> {
        address.validate()?;
        let id = self
            .storage
            .insert(address.name(), address.latitude(), address.longitude())
            .await?;
        info!(id, "Created address");
        Ok(address.with_id(id))
    }

    pub async fn list_all(&self) -> Result<Vec<Address>> {
        let records = self.storage.scan_all().await?;
        Ok(records.into_iter().map(Address::from).collect())
    }

    pub async fn get(&self, id: AddressId) -> Result<Option<Address>> {
        Ok(self.storage.get_by_id(id).await?.map(Address::from))
    }

    /// All addresses within `radius_km` of the reference point, boundary inclusive.
    ///
    /// Linear scan over every stored record.
    // TODO: swap the scan for a grid or R-tree lookup if the table grows past a few thousand rows.
    #[instrument(skip(self))]
    pub async fn find_nearby(
        &self,
        latitude: f64,
        longitude: f64,
        radius_km: f64,
    ) -> Result<Vec<Address>> {
        let records = self.storage.scan_all().await?;
        let scanned = records.len();
        let nearby: Vec<Address> = records
            .into_iter()
            .filter(|r| distance_km(latitude, longitude, r.latitude, r.longitude) <= radius_km)
            .map(Address::from)
            .collect();
        debug!(scanned, matched = nearby.len(), "Proximity scan finished");
        Ok(nearby)
    }

    /// Replaces name and coordinates of an existing address. `Ok(false)` when `id` is unknown.
    #[instrument(skip(self, address))]
    pub async fn update(&self, id: AddressId, address: &Address) -> Result<bool> {
        address.validate()?;
        if self.storage.get_by_id(id).await?.is_none() {
            return Ok(false);
        }
        let replaced = self
            .storage
            .replace(id, address.name(), address.latitude(), address.longitude())
            .await?;
        if replaced {
            info!("Updated address");
        }
        Ok(replaced)
    }

    /// Removes an address. `Ok(false)` when `id` is unknown.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: AddressId) -> Result<bool> {
        if self.storage.get_by_id(id).await?.is_none() {
            return Ok(false);
        }
        let removed = self.storage.remove_by_id(id).await?;
        if removed {
            info!("Deleted address");
        }
        Ok(removed)
    }
}

/// Rejects a negative or NaN search radius.
pub fn validate_radius(radius_km: f64) -> std::result::Result<(), ValidationError> {
    if radius_km >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidDistance(radius_km))
    }
}
