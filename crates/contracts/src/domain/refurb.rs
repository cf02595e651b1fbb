use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Refurbishment pipeline. Every transition is a manual administrative
/// action; the sequence is strictly forward and there is no rollback once
/// a status has been advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RefurbStatus {
    Pending,
    Approved,
    InTransitToWarehouse,
    InRefurb,
    InTransitToCustomer,
    Completed,
}

impl RefurbStatus {
    pub const ALL: &'static [RefurbStatus] = &[
        RefurbStatus::Pending,
        RefurbStatus::Approved,
        RefurbStatus::InTransitToWarehouse,
        RefurbStatus::InRefurb,
        RefurbStatus::InTransitToCustomer,
        RefurbStatus::Completed,
    ];

    /// The only move: one step forward, None at the end of the pipeline.
    pub fn next(self) -> Option<RefurbStatus> {
        match self {
            RefurbStatus::Pending => Some(RefurbStatus::Approved),
            RefurbStatus::Approved => Some(RefurbStatus::InTransitToWarehouse),
            RefurbStatus::InTransitToWarehouse => Some(RefurbStatus::InRefurb),
            RefurbStatus::InRefurb => Some(RefurbStatus::InTransitToCustomer),
            RefurbStatus::InTransitToCustomer => Some(RefurbStatus::Completed),
            RefurbStatus::Completed => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RefurbStatus::Pending => "PENDING",
            RefurbStatus::Approved => "APPROVED",
            RefurbStatus::InTransitToWarehouse => "IN_TRANSIT_TO_WAREHOUSE",
            RefurbStatus::InRefurb => "IN_REFURB",
            RefurbStatus::InTransitToCustomer => "IN_TRANSIT_TO_CUSTOMER",
            RefurbStatus::Completed => "COMPLETED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RefurbStatus::Pending => "Pending",
            RefurbStatus::Approved => "Approved",
            RefurbStatus::InTransitToWarehouse => "In transit to warehouse",
            RefurbStatus::InRefurb => "In refurbishment",
            RefurbStatus::InTransitToCustomer => "In transit to customer",
            RefurbStatus::Completed => "Completed",
        }
    }
}

impl Default for RefurbStatus {
    fn default() -> Self {
        RefurbStatus::Pending
    }
}

/// One shipment leg of a request (to warehouse or back to the customer),
/// recorded once dispatched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShipmentLeg {
    pub courier_name: String,
    pub awb_code: String,
    pub shipped_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RefurbRequest {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub user_id: String,
    pub order_id: String,
    pub product_id: Option<String>,
    pub issue: String,
    pub images: Vec<String>,
    pub accessories: Vec<String>,
    pub status: RefurbStatus,
    pub warehouse_shipment: Option<ShipmentLeg>,
    pub return_shipment: Option<ShipmentLeg>,
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progression_is_strictly_forward() {
        let mut status = RefurbStatus::Pending;
        let mut seen = vec![status];
        while let Some(next) = status.next() {
            status = next;
            seen.push(status);
        }
        assert_eq!(seen, RefurbStatus::ALL);
        assert_eq!(status, RefurbStatus::Completed);
        assert!(status.next().is_none());
    }

    #[test]
    fn wire_tags() {
        assert_eq!(
            serde_json::to_string(&RefurbStatus::InTransitToWarehouse).unwrap(),
            "\"IN_TRANSIT_TO_WAREHOUSE\""
        );
        let s: RefurbStatus = serde_json::from_str("\"IN_REFURB\"").unwrap();
        assert_eq!(s, RefurbStatus::InRefurb);
    }
}
