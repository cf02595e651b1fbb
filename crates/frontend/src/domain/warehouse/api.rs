use contracts::domain::warehouse::{Warehouse, WarehouseInput};
use contracts::envelope;

use crate::shared::api::client;
use crate::shared::api::error::{ApiError, ApiResult};

pub async fn fetch_warehouses() -> ApiResult<Vec<Warehouse>> {
    let body = client::get_json("/warehouses").await?;
    Ok(envelope::extract_list_as(&body, "warehouses"))
}

pub async fn create_warehouse(input: &WarehouseInput) -> ApiResult<Warehouse> {
    let body = client::post_json("/warehouses", input).await?;
    envelope::extract_object_as(&body, "warehouse")
        .ok_or_else(|| ApiError::server("Malformed warehouse in response".to_string(), body))
}
