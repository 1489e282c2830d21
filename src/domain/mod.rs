use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

pub type AddressId = i64;

const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;
const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// Checks a coordinate pair against the WGS84 degree ranges. NaN is out of range.
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), ValidationError> {
    if !LATITUDE_RANGE.contains(&latitude) {
        return Err(ValidationError::InvalidLatitude(latitude));
    }
    if !LONGITUDE_RANGE.contains(&longitude) {
        return Err(ValidationError::InvalidLongitude(longitude));
    }
    Ok(())
}

/// A named point on the globe.
///
/// Fields are private so every value in circulation went through [`Address::new`]
/// or came back from storage, where only validated values are written.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<AddressId>,
    name: String,
    latitude: f64,
    longitude: f64,
}

impl Address {
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, ValidationError> {
        validate_coordinates(latitude, longitude)?;
        Ok(Self {
            id: None,
            name: name.into(),
            latitude,
            longitude,
        })
    }

    /// Re-runs the range checks. Called before anything is persisted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_coordinates(self.latitude, self.longitude)
    }

    pub fn id(&self) -> Option<AddressId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub(crate) fn with_id(mut self, id: AddressId) -> Self {
        self.id = Some(id);
        self
    }
}

/// Row shape exchanged with storage backends.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressRecord {
    pub id: AddressId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<AddressRecord> for Address {
    fn from(record: AddressRecord) -> Self {
        Address {
            id: Some(record.id),
            name: record.name,
            latitude: record.latitude,
            longitude: record.longitude,
        }
    }
}

/// Request body for creating or replacing an address.
#[derive(Debug, Clone, Deserialize)]
pub struct AddressPayload {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl TryFrom<AddressPayload> for Address {
    type Error = ValidationError;

    fn try_from(payload: AddressPayload) -> Result<Self, Self::Error> {
        Address::new(payload.name, payload.latitude, payload.longitude)
    }
}
