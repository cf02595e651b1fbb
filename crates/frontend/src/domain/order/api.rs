use contracts::domain::invoice::InvoicePayload;
use contracts::domain::order::{Order, OrderStatus, OrderType};
use contracts::envelope;
use serde_json::json;

use crate::shared::api::client;
use crate::shared::api::error::{ApiError, ApiResult};

pub async fn fetch_orders(
    status: Option<OrderStatus>,
    order_type: Option<OrderType>,
) -> ApiResult<Vec<Order>> {
    let mut query: Vec<(&str, &str)> = Vec::new();
    if let Some(status) = status {
        query.push(("status", status.as_str()));
    }
    if let Some(order_type) = order_type {
        query.push(("orderType", order_type.as_str()));
    }
    let body = if query.is_empty() {
        client::get_json("/orders/all").await?
    } else {
        client::get_json_with_query("/orders/all", &query).await?
    };
    Ok(envelope::extract_list_as(&body, "orders"))
}

/// Request a status transition. The backend owns the lifecycle; the
/// response carries the order as it now stands.
pub async fn update_order_status(id: &str, status: OrderStatus) -> ApiResult<Order> {
    let body = client::put_json(
        &format!("/orders/{}/status", id),
        &json!({ "status": status.as_str() }),
    )
    .await?;
    envelope::extract_object_as(&body, "order")
        .ok_or_else(|| ApiError::server("Malformed order in response".to_string(), body))
}

pub async fn fetch_invoice(order_id: &str) -> ApiResult<InvoicePayload> {
    let body = client::get_json(&format!("/orders/{}/invoice", order_id)).await?;
    envelope::extract_object_as(&body, "invoice")
        .ok_or_else(|| ApiError::server("Malformed invoice in response".to_string(), body))
}
