use contracts::domain::customer::Customer;
use contracts::domain::order::Order;
use contracts::envelope;

use crate::shared::api::client;
use crate::shared::api::error::ApiResult;

pub async fn fetch_customers() -> ApiResult<Vec<Customer>> {
    let body = client::get_json("/customers").await?;
    Ok(envelope::extract_list_as(&body, "customers"))
}

/// Order history for the customer detail panel.
pub async fn fetch_customer_orders(customer_id: &str) -> ApiResult<Vec<Order>> {
    let body = client::get_json(&format!("/customers/{}/orders", customer_id)).await?;
    Ok(envelope::extract_list_as(&body, "orders"))
}
