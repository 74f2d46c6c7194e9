//! JSON records exchanged with the voyage API.
//!
//! DESIGN
//! ======
//! Field names follow the API's camelCase wire format. `VoyageDraft` is the
//! typed creation payload; it carries form input verbatim so validation can
//! hand back exactly what the user entered.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A scheduled sailing as returned by `voyage/getAll`.
///
/// Timestamps are kept as the API sent them; a malformed value renders as
/// "Invalid Date" in its cell instead of failing the whole list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voyage {
    pub id: String,
    pub scheduled_departure: String,
    pub scheduled_arrival: String,
    pub port_of_loading: String,
    pub port_of_discharge: String,
    pub vessel: Vessel,
    #[serde(default)]
    pub unit_types: Vec<UnitType>,
}

/// Vessel embedded in a voyage record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vessel {
    pub id: String,
    pub name: String,
}

/// Cargo unit category offered when creating a voyage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitType {
    pub id: String,
    pub name: String,
    pub default_length: f64,
}

/// Creation payload posted to `/api/voyage/create`.
///
/// Timestamps stay as entered (`datetime-local` strings); the API owns
/// conversion. `unit_types` is `None` for the form variant without a unit-type
/// selector and is then omitted from the body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoyageDraft {
    pub scheduled_departure: String,
    pub scheduled_arrival: String,
    pub port_of_loading: String,
    pub port_of_discharge: String,
    pub vessel: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_types: Option<Vec<String>>,
}

/// Error body the API may attach to a non-2xx response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
