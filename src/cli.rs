use crate::app::AddressStore;
use crate::domain::Address;
use crate::error::Result;
use std::fmt::Write;
use tracing::info;

/// Sample rows loaded by `seed`.
pub const SAMPLE_ADDRESSES: [(&str, f64, f64); 5] = [
    ("Address 1", 37.7749, -122.4194),
    ("Address 2", 51.5072, -0.1275),
    ("Address 3", -33.8588, 151.2153),
    ("Address 4", 35.6895, 139.6917),
    ("Address 5", 41.9028, 12.4964),
];

/// Inserts the sample addresses in order and returns them as stored.
pub async fn seed_samples(store: &AddressStore) -> Result<Vec<Address>> {
    let mut created = Vec::with_capacity(SAMPLE_ADDRESSES.len());
    for (name, latitude, longitude) in SAMPLE_ADDRESSES {
        created.push(store.create(Address::new(name, latitude, longitude)?).await?);
    }
    info!("Seeded {} sample addresses", created.len());
    Ok(created)
}

/// Renders addresses as a fixed-width table: header, 50-char rule, one row each.
pub fn format_table(addresses: &[Address]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<5} {:<20} {:<10} {:<10}",
        "ID", "Name", "Latitude", "Longitude"
    );
    let _ = writeln!(out, "{}", "-".repeat(50));
    for address in addresses {
        let id = address.id().map(|id| id.to_string()).unwrap_or_default();
        let _ = writeln!(
            out,
            "{:<5} {:<20} {:<10} {:<10}",
            id,
            address.name(),
            address.latitude(),
            address.longitude()
        );
    }
    out
}
