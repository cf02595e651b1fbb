use contracts::domain::complaint::{Complaint, ComplaintStatus};
use contracts::envelope;
use serde_json::json;

use crate::shared::api::client;
use crate::shared::api::error::ApiResult;

pub async fn fetch_complaints() -> ApiResult<Vec<Complaint>> {
    let body = client::get_json("/complaints").await?;
    Ok(envelope::extract_list_as(&body, "complaints"))
}

pub async fn update_complaint_status(id: &str, status: ComplaintStatus) -> ApiResult<()> {
    client::put_json(
        &format!("/complaints/{}/status", id),
        &json!({ "status": status.as_str() }),
    )
    .await?;
    Ok(())
}
