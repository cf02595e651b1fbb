use contracts::domain::order::TrackingData;
use contracts::domain::refurb::{RefurbRequest, RefurbStatus};
use contracts::envelope;
use serde_json::json;

use crate::shared::api::client;
use crate::shared::api::error::{ApiError, ApiResult};

/// Which shipment leg of a refurb request a dispatch belongs to.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Leg {
    ToWarehouse,
    ToCustomer,
}

impl Leg {
    fn as_str(self) -> &'static str {
        match self {
            Leg::ToWarehouse => "warehouse",
            Leg::ToCustomer => "return",
        }
    }
}

pub async fn fetch_refurb_requests() -> ApiResult<Vec<RefurbRequest>> {
    let body = client::get_json("/refurb-requests").await?;
    Ok(envelope::extract_list_as(&body, "requests"))
}

pub async fn update_refurb_status(id: &str, status: RefurbStatus) -> ApiResult<RefurbRequest> {
    let body = client::put_json(
        &format!("/refurb-requests/{}/status", id),
        &json!({ "status": status }),
    )
    .await?;
    envelope::extract_object_as(&body, "request")
        .ok_or_else(|| ApiError::server("Malformed refurb request in response".to_string(), body))
}

/// Attach courier details to one leg of the request. The backend advances
/// the status to the matching in-transit phase as part of this call.
pub async fn record_shipment(id: &str, leg: Leg, tracking: &TrackingData) -> ApiResult<RefurbRequest> {
    let body = client::put_json(
        &format!("/refurb-requests/{}/shipment", id),
        &json!({
            "leg": leg.as_str(),
            "courierName": tracking.courier_name,
            "awbCode": tracking.awb_code,
        }),
    )
    .await?;
    envelope::extract_object_as(&body, "request")
        .ok_or_else(|| ApiError::server("Malformed refurb request in response".to_string(), body))
}
