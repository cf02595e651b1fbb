//! Courier serviceability and shipment creation.

use contracts::domain::shipping::{
    CourierOption, PackageDimensions, RateRequest, ShipmentCreated, ShipmentRequest,
};
use contracts::envelope;

use crate::shared::api::client;
use crate::shared::api::error::ApiResult;

/// Fetch courier offers for an order with the given package dimensions.
/// The aggregator nests the list under `available_courier_companies`.
pub async fn calculate_rates(
    order_id: &str,
    dims: &PackageDimensions,
) -> ApiResult<Vec<CourierOption>> {
    let body = client::post_json("/shipping/calculate-rates", &RateRequest::new(order_id, dims)).await?;
    let mut couriers = envelope::extract_list_as::<CourierOption>(&body, "available_courier_companies");
    if couriers.is_empty() {
        couriers = envelope::extract_list_as::<CourierOption>(&body, "couriers");
    }
    Ok(couriers)
}

pub async fn create_shipment(request: &ShipmentRequest) -> ApiResult<ShipmentCreated> {
    let body = client::post_json("/shipping/create-shipment", request).await?;
    Ok(envelope::extract_object_as(&body, "shipment").unwrap_or_default())
}
