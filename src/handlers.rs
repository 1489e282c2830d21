use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::app::{validate_radius, AddressStore};
use crate::domain::{validate_coordinates, Address, AddressId, AddressPayload};
use crate::error::{AddressError, ValidationError};
use crate::models::{ErrorResponse, MessageResponse, NearbyQuery};

/// Failure outcomes of a handler, each mapped to its own status class.
#[derive(Debug)]
pub enum ApiError {
    Validation(ValidationError),
    NotFound(AddressId),
    Internal(AddressError),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}

impl From<AddressError> for ApiError {
    fn from(err: AddressError) -> Self {
        match err {
            AddressError::Validation(v) => ApiError::Validation(v),
            other => ApiError::Internal(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse {
                    detail: err.to_string(),
                    field: Some(err.field().to_string()),
                },
            ),
            ApiError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    detail: format!("Address not found for id {id}"),
                    field: None,
                },
            ),
            ApiError::Internal(err) => {
                error!("Request failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        detail: "Internal Server Error".to_string(),
                        field: None,
                    },
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

type ApiResult<T> = std::result::Result<T, ApiError>;

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to the Address Book API"))
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "address-book",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn create_address(
    State(store): State<AddressStore>,
    Json(payload): Json<AddressPayload>,
) -> ApiResult<(StatusCode, Json<Address>)> {
    let address = Address::try_from(payload)?;
    let created = store.create(address).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_addresses(State(store): State<AddressStore>) -> ApiResult<Json<Vec<Address>>> {
    Ok(Json(store.list_all().await?))
}

pub async fn nearby_addresses(
    State(store): State<AddressStore>,
    Query(query): Query<NearbyQuery>,
) -> ApiResult<Json<Vec<Address>>> {
    validate_coordinates(query.latitude, query.longitude)?;
    validate_radius(query.distance)?;
    let addresses = store
        .find_nearby(query.latitude, query.longitude, query.distance)
        .await?;
    Ok(Json(addresses))
}

pub async fn get_address(
    State(store): State<AddressStore>,
    Path(id): Path<AddressId>,
) -> ApiResult<Json<Address>> {
    store
        .get(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

pub async fn update_address(
    State(store): State<AddressStore>,
    Path(id): Path<AddressId>,
    Json(payload): Json<AddressPayload>,
) -> ApiResult<Json<Address>> {
    let address = Address::try_from(payload)?;
    if !store.update(id, &address).await? {
        return Err(ApiError::NotFound(id));
    }
    Ok(Json(address.with_id(id)))
}

pub async fn delete_address(
    State(store): State<AddressStore>,
    Path(id): Path<AddressId>,
) -> ApiResult<Json<MessageResponse>> {
    if !store.delete(id).await? {
        return Err(ApiError::NotFound(id));
    }
    Ok(Json(MessageResponse::new("Address deleted successfully")))
}
