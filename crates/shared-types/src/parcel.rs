use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Request/Response DTOs
// ---------------------------------------------------------------------------

/// Name and contact details for one side of a shipment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Request body for creating a parcel with the parcel service.
///
/// JSON has no literal for NaN, so a NaN `weight` is written as `null` and a
/// `null` weight reads back as NaN.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateParcelRequest {
    pub sender: ContactDetails,
    pub recipient: ContactDetails,
    #[serde(deserialize_with = "weight_or_nan")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<f64>))]
    pub weight: f64,
    pub description: String,
}

/// Response from the parcel service after a parcel is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateParcelResponse {
    pub message: String,
    pub tracking_number: String,
}

/// Body returned by the parcel service when it rejects a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ParcelServiceError {
    pub error: String,
}

fn weight_or_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}
