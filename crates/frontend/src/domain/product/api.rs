use contracts::domain::product::{Product, ProductInput};
use contracts::envelope;
use serde_json::Value;

use crate::shared::api::{client, ApiResult};

pub async fn fetch_products() -> ApiResult<Vec<Product>> {
    let body = client::get_json("/products").await?;
    Ok(envelope::extract_list_as(&body, "products"))
}

pub async fn search_products(term: &str) -> ApiResult<Vec<Product>> {
    let body = client::get_json_with_query("/products/search", &[("q", term)]).await?;
    Ok(envelope::extract_list_as(&body, "products"))
}

pub async fn fetch_product(id: &str) -> ApiResult<Option<Product>> {
    let body = client::get_json(&format!("/products/{}", id)).await?;
    Ok(envelope::extract_object_as(&body, "product"))
}

pub async fn fetch_categories() -> ApiResult<Vec<String>> {
    let body = client::get_json("/products/categories/list").await?;
    Ok(envelope::extract_list_as(&body, "categories"))
}

pub async fn fetch_brands() -> ApiResult<Vec<String>> {
    let body = client::get_json("/products/brands").await?;
    Ok(envelope::extract_list_as(&body, "brands"))
}

pub async fn create_product(input: &ProductInput) -> ApiResult<Value> {
    client::post_json("/products", input).await
}

pub async fn update_product(id: &str, input: &ProductInput) -> ApiResult<Value> {
    client::put_json(&format!("/products/{}", id), input).await
}

pub async fn delete_product(id: &str) -> ApiResult<Value> {
    client::delete_json(&format!("/products/{}", id)).await
}
