pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod geo;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod server;
pub mod storage;

pub use app::AddressStore;
pub use domain::{Address, AddressId, AddressPayload, AddressRecord};
pub use error::{AddressError, Result, ValidationError};
pub use geo::distance_km;
