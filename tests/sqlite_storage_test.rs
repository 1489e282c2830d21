use address_book::storage::{AddressStorage, SqliteStorage};
use address_book::{Address, AddressStore};
use std::sync::Arc;
use tempfile::tempdir;

#[tokio::test]
async fn test_insert_assigns_increasing_ids() {
    let dir = tempdir().unwrap();
    let storage = SqliteStorage::open(dir.path().join("addresses.db")).await.unwrap();

    let first = storage.insert("Address 1", 37.7749, -122.4194).await.unwrap();
    let second = storage.insert("Address 2", 51.5072, -0.1275).await.unwrap();
    assert!(first > 0);
    assert!(second > first);

    let rows = storage.scan_all().await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, first);
    assert_eq!(rows[0].name, "Address 1");
    assert_eq!((rows[1].latitude, rows[1].longitude), (51.5072, -0.1275));
}

#[tokio::test]
async fn test_missing_rows_are_reported() {
    let dir = tempdir().unwrap();
    let storage = SqliteStorage::open(dir.path().join("addresses.db")).await.unwrap();

    assert!(storage.get_by_id(7).await.unwrap().is_none());
    assert!(!storage.replace(7, "x", 0.0, 0.0).await.unwrap());
    assert!(!storage.remove_by_id(7).await.unwrap());
}

#[tokio::test]
async fn test_replace_and_remove() {
    let dir = tempdir().unwrap();
    let storage = SqliteStorage::open(dir.path().join("addresses.db")).await.unwrap();
    let id = storage.insert("Old", 1.0, 2.0).await.unwrap();

    assert!(storage.replace(id, "New", -3.0, -4.0).await.unwrap());
    let row = storage.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(row.name, "New");
    assert_eq!((row.latitude, row.longitude), (-3.0, -4.0));

    assert!(storage.remove_by_id(id).await.unwrap());
    assert!(storage.scan_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_data_survives_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("addresses.db");

    let id = {
        let storage = SqliteStorage::open(&path).await.unwrap();
        storage.insert("Sydney", -33.8588, 151.2153).await.unwrap()
    };

    let reopened = SqliteStorage::open(&path).await.unwrap();
    let row = reopened.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(row.name, "Sydney");
}

#[tokio::test]
async fn test_store_over_sqlite() {
    let dir = tempdir().unwrap();
    let storage = SqliteStorage::open(dir.path().join("addresses.db")).await.unwrap();
    let store = AddressStore::new(Arc::new(storage));

    let a = store
        .create(Address::new("A", 37.7749, -122.4194).unwrap())
        .await
        .unwrap();
    store
        .create(Address::new("B", 51.5072, -0.1275).unwrap())
        .await
        .unwrap();

    let near = store.find_nearby(37.7749, -122.4194, 1.0).await.unwrap();
    assert_eq!(near.len(), 1);
    assert_eq!(near[0], a);

    let replacement = Address::new("A moved", 35.6895, 139.6917).unwrap();
    assert!(store.update(a.id().unwrap(), &replacement).await.unwrap());
    assert!(!store.update(999, &replacement).await.unwrap());

    let fetched = store.get(a.id().unwrap()).await.unwrap().unwrap();
    assert_eq!(fetched.name(), "A moved");
    assert!(store.delete(a.id().unwrap()).await.unwrap());
    assert!(!store.delete(a.id().unwrap()).await.unwrap());
    assert_eq!(store.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_concurrent_inserts_get_distinct_ids() {
    let dir = tempdir().unwrap();
    let storage = Arc::new(SqliteStorage::open(dir.path().join("addresses.db")).await.unwrap());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let storage = storage.clone();
            tokio::spawn(async move {
                storage
                    .insert(&format!("Address {i}"), i as f64, i as f64)
                    .await
                    .unwrap()
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 8);
}
