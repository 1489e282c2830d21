use super::AddressStorage;
use crate::domain::{AddressId, AddressRecord};
use crate::error::Result;
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS addresses (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        name       TEXT NOT NULL,
        latitude   REAL NOT NULL,
        longitude  REAL NOT NULL
    );
"#;

/// SQLite-backed address storage.
///
/// Holds only the database path. Each operation opens its own connection on the
/// blocking pool and drops it before returning, so concurrent requests never share
/// a handle and SQLite's file locking serializes writers.
#[derive(Debug, Clone)]
pub struct SqliteStorage {
    path: PathBuf,
}

impl SqliteStorage {
    /// Opens (creating if needed) the database file and ensures the schema exists.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let storage = Self {
            path: path.as_ref().to_path_buf(),
        };
        if let Some(parent) = storage.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        storage
            .with_connection(|conn| conn.execute_batch(SCHEMA))
            .await?;
        info!("Opened address database at {}", storage.path.display());
        Ok(storage)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(path: &Path) -> rusqlite::Result<Connection> {
        let conn = Connection::open(path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }

    async fn with_connection<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
    {
        let path = self.path.clone();
        let result = tokio::task::spawn_blocking(move || {
            let conn = Self::connect(&path)?;
            op(&conn)
        })
        .await??;
        Ok(result)
    }
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<AddressRecord> {
    Ok(AddressRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        latitude: row.get(2)?,
        longitude: row.get(3)?,
    })
}

#[async_trait]
impl AddressStorage for SqliteStorage {
    async fn insert(&self, name: &str, latitude: f64, longitude: f64) -> Result<AddressId> {
        let name = name.to_string();
        let id = self
            .with_connection(move |conn| {
                conn.execute(
                    "INSERT INTO addresses (name, latitude, longitude) VALUES (?1, ?2, ?3)",
                    params![name, latitude, longitude],
                )?;
                Ok(conn.last_insert_rowid())
            })
            .await?;

        debug!("Inserted address row {}", id);
        Ok(id)
    }

    async fn scan_all(&self) -> Result<Vec<AddressRecord>> {
        self.with_connection(|conn| {
            let mut stmt =
                conn.prepare("SELECT id, name, latitude, longitude FROM addresses ORDER BY id")?;
            let records = stmt
                .query_map([], record_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(records)
        })
        .await
    }

    async fn get_by_id(&self, id: AddressId) -> Result<Option<AddressRecord>> {
        self.with_connection(move |conn| {
            conn.query_row(
                "SELECT id, name, latitude, longitude FROM addresses WHERE id = ?1",
                params![id],
                record_from_row,
            )
            .optional()
        })
        .await
    }

    async fn replace(
        &self,
        id: AddressId,
        name: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<bool> {
        let name = name.to_string();
        let changed = self
            .with_connection(move |conn| {
                conn.execute(
                    "UPDATE addresses SET name = ?1, latitude = ?2, longitude = ?3 WHERE id = ?4",
                    params![name, latitude, longitude, id],
                )
            })
            .await?;
        Ok(changed > 0)
    }

    async fn remove_by_id(&self, id: AddressId) -> Result<bool> {
        let changed = self
            .with_connection(move |conn| {
                conn.execute("DELETE FROM addresses WHERE id = ?1", params![id])
            })
            .await?;
        Ok(changed > 0)
    }
}
