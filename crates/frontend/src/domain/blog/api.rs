use contracts::domain::blog::{BlogInput, BlogPost};
use contracts::envelope;

use crate::shared::api::client;
use crate::shared::api::error::{ApiError, ApiResult};

pub async fn fetch_posts() -> ApiResult<Vec<BlogPost>> {
    let body = client::get_json("/blogs").await?;
    Ok(envelope::extract_list_as(&body, "blogs"))
}

pub async fn create_post(input: &BlogInput) -> ApiResult<BlogPost> {
    let body = client::post_json("/blogs", input).await?;
    envelope::extract_object_as(&body, "blog")
        .ok_or_else(|| ApiError::server("Malformed blog post in response".to_string(), body))
}

pub async fn update_post(id: &str, input: &BlogInput) -> ApiResult<BlogPost> {
    let body = client::put_json(&format!("/blogs/{}", id), input).await?;
    envelope::extract_object_as(&body, "blog")
        .ok_or_else(|| ApiError::server("Malformed blog post in response".to_string(), body))
}

pub async fn delete_post(id: &str) -> ApiResult<()> {
    client::delete_json(&format!("/blogs/{}", id)).await?;
    Ok(())
}
