pub mod address_store;

pub use address_store::{validate_radius, AddressStore};
