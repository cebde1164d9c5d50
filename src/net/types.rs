//! Wire DTOs for the cage and area REST endpoints.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON so serde round-trips stay
//! lossless. Numeric fields tolerate numeric strings because the backend has
//! historically echoed form input back verbatim.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A persisted animal cage as listed by `/animalCage/getAllAnimalCage`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cage {
    /// Backend identifier.
    #[serde(rename = "animalCageId", alias = "id", deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    /// Display name.
    #[serde(rename = "animalCageName", alias = "name")]
    pub name: String,
    /// Free-form description; `null` on the wire becomes empty.
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub description: String,
    /// Maximum number of animals the cage may hold.
    #[serde(rename = "maxQuantity", deserialize_with = "deserialize_i64_from_number")]
    pub max_quantity: i64,
    /// Area the cage belongs to, if assigned.
    #[serde(rename = "areaId", default)]
    pub area_id: Option<i64>,
    /// Denormalized area display name for table rendering.
    #[serde(rename = "areaName", default)]
    pub area_name: Option<String>,
}

/// A named location a cage can be assigned to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    #[serde(rename = "areaId", deserialize_with = "deserialize_i64_from_number")]
    pub area_id: i64,
    #[serde(rename = "areaName")]
    pub area_name: String,
}

/// Validated request body for create and update calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CagePayload {
    /// Present only for updates.
    #[serde(rename = "animalCageId", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "animalCageName")]
    pub name: String,
    pub description: String,
    #[serde(rename = "maxQuantity")]
    pub max_quantity: i64,
    #[serde(rename = "areaId")]
    pub area_id: Option<i64>,
}

impl CagePayload {
    /// Materialize the cage this payload describes once the server accepted it.
    /// `area_name` comes from the caller's area lookup.
    pub fn to_cage(&self, id: i64, area_name: Option<String>) -> Cage {
        Cage {
            id,
            name: self.name.clone(),
            description: self.description.clone(),
            max_quantity: self.max_quantity,
            area_id: self.area_id,
            area_name,
        }
    }
}

/// Envelope for the cage list endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CatalogueResponse {
    #[serde(rename = "catalogueDTO", default, deserialize_with = "deserialize_null_as_empty")]
    pub catalogue_dto: Vec<Cage>,
}

/// Envelope for the area list endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AreaListResponse {
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub area: Vec<Area>,
}

/// Envelope for create/update/delete responses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

fn deserialize_null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        serde_json::Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("expected integer string, got '{text}'"))),
        _ => Err(D::Error::custom("expected number")),
    }
}
