use super::AddressStorage;
use crate::domain::{AddressId, AddressRecord};
use crate::error::{AddressError, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

#[derive(Default)]
struct Table {
    rows: BTreeMap<AddressId, AddressRecord>,
    last_id: AddressId,
}

/// In-memory storage implementation for development/testing.
///
/// Ids start at 1 and are never reused, matching SQLite AUTOINCREMENT.
#[derive(Default)]
pub struct InMemoryStorage {
    table: Mutex<Table>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self) -> Result<MutexGuard<'_, Table>> {
        self.table
            .lock()
            .map_err(|_| AddressError::storage("in-memory address table lock poisoned"))
    }
}

#[async_trait]
impl AddressStorage for InMemoryStorage {
    async fn insert(&self, name: &str, latitude: f64, longitude: f64) -> Result<AddressId> {
        let mut table = self.table()?;
        table.last_id += 1;
        let id = table.last_id;
        table.rows.insert(
            id,
            AddressRecord {
                id,
                name: name.to_string(),
                latitude,
                longitude,
            },
        );

        debug!("Created address: {} with id {}", name, id);
        Ok(id)
    }

    async fn scan_all(&self) -> Result<Vec<AddressRecord>> {
        Ok(self.table()?.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: AddressId) -> Result<Option<AddressRecord>> {
        Ok(self.table()?.rows.get(&id).cloned())
    }

    async fn replace(
        &self,
        id: AddressId,
        name: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<bool> {
        let mut table = self.table()?;
        match table.rows.get_mut(&id) {
            Some(row) => {
                row.name = name.to_string();
                row.latitude = latitude;
                row.longitude = longitude;
                debug!("Updated address {}", id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove_by_id(&self, id: AddressId) -> Result<bool> {
        let removed = self.table()?.rows.remove(&id).is_some();
        if removed {
            debug!("Deleted address {}", id);
        }
        Ok(removed)
    }
}
