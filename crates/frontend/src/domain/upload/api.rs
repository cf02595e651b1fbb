//! Image uploads for product listings and blog covers.

use serde_json::Value;
use web_sys::{FileList, FormData};

use crate::shared::api::client;
use crate::shared::api::error::{ApiError, ApiResult};

fn url_list(body: &Value) -> Vec<String> {
    // Upload endpoints answer either `{ imageUrls: [...] }` or `{ urls: [...] }`.
    let urls = contracts::envelope::extract_list_as::<String>(body, "imageUrls");
    if !urls.is_empty() {
        return urls;
    }
    contracts::envelope::extract_list_as::<String>(body, "urls")
}

/// Upload a batch of product images, returning their hosted URLs.
pub async fn upload_images(files: &FileList) -> ApiResult<Vec<String>> {
    let form = FormData::new().map_err(|_| ApiError::transport("Failed to build form data"))?;
    for i in 0..files.length() {
        if let Some(file) = files.item(i) {
            form.append_with_blob("images", &file)
                .map_err(|_| ApiError::transport("Failed to attach file"))?;
        }
    }
    let body = client::post_multipart("/upload/multiple", form).await?;
    let urls = url_list(&body);
    if urls.is_empty() {
        return Err(ApiError::server("Upload returned no image URLs".to_string(), body));
    }
    Ok(urls)
}

/// Upload a single image (blog cover), returning its hosted URL.
pub async fn upload_single_image(file: &web_sys::File) -> ApiResult<String> {
    let form = FormData::new().map_err(|_| ApiError::transport("Failed to build form data"))?;
    form.append_with_blob("image", file)
        .map_err(|_| ApiError::transport("Failed to attach file"))?;
    let body = client::post_multipart("/upload/single", form).await?;
    url_list(&body)
        .into_iter()
        .next()
        .or_else(|| {
            body.get("imageUrl")
                .or_else(|| body.get("url"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .ok_or_else(|| ApiError::server("Upload returned no image URL".to_string(), body))
}
