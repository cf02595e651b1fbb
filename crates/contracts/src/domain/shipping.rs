use serde::{Deserialize, Serialize};

/// Package dimensions entered before a rate lookup. Length/breadth/height
/// in cm, weight in kg.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PackageDimensions {
    pub length: f64,
    pub breadth: f64,
    pub height: f64,
    pub weight: f64,
}

impl PackageDimensions {
    pub fn is_complete(&self) -> bool {
        self.length > 0.0 && self.breadth > 0.0 && self.height > 0.0 && self.weight > 0.0
    }
}

/// One courier offer inside a rate quote. Field names follow the shipping
/// aggregator's serviceability payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourierOption {
    pub courier_company_id: i64,
    pub courier_name: String,
    pub rate: f64,
    pub etd: String,
    pub rating: f64,
}

/// Ephemeral result of a rate-calculation call. Lives only inside the
/// active dispatch modal; a dimension edit discards it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RateQuote {
    pub order_id: String,
    pub dimensions: PackageDimensions,
    pub couriers: Vec<CourierOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateRequest {
    pub order_id: String,
    pub length: f64,
    pub breadth: f64,
    pub height: f64,
    pub weight: f64,
}

impl RateRequest {
    pub fn new(order_id: &str, dims: &PackageDimensions) -> Self {
        Self {
            order_id: order_id.to_string(),
            length: dims.length,
            breadth: dims.breadth,
            height: dims.height,
            weight: dims.weight,
        }
    }
}

/// Dispatch payload. Carries the selected courier and the exact dimensions
/// the quote was computed for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentRequest {
    pub order_id: String,
    pub length: f64,
    pub breadth: f64,
    pub height: f64,
    pub weight: f64,
    pub courier_company_id: i64,
    pub courier_name: String,
}

/// What the backend reports after creating a shipment. Tolerant: the
/// aggregator does not always fill every field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipmentCreated {
    pub shipment_id: Option<i64>,
    pub awb_code: Option<String>,
    pub courier_name: Option<String>,
}
