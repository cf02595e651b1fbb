use contracts::domain::testimonial::{Testimonial, TestimonialInput};
use contracts::envelope;

use crate::shared::api::client;
use crate::shared::api::error::{ApiError, ApiResult};

pub async fn fetch_testimonials() -> ApiResult<Vec<Testimonial>> {
    let body = client::get_json("/testimonials").await?;
    Ok(envelope::extract_list_as(&body, "testimonials"))
}

pub async fn create_testimonial(input: &TestimonialInput) -> ApiResult<Testimonial> {
    let body = client::post_json("/testimonials", input).await?;
    envelope::extract_object_as(&body, "testimonial")
        .ok_or_else(|| ApiError::server("Malformed testimonial in response".to_string(), body))
}

pub async fn delete_testimonial(id: &str) -> ApiResult<()> {
    client::delete_json(&format!("/testimonials/{}", id)).await?;
    Ok(())
}
