use contracts::system::auth::{LoginRequest, RegisterRequest, SessionData, UserProfile};
use serde_json::Value;

use crate::shared::api::{client, ApiError, ApiResult};

/// Pull `{ token, user }` out of a login/register response. The backend
/// nests it under `data`; older deployments returned it at the top level.
pub fn parse_session(body: &Value) -> Option<SessionData> {
    let data = body.get("data").unwrap_or(body);
    serde_json::from_value(data.clone()).ok()
}

/// Login with email and password.
pub async fn login(email: String, password: String) -> ApiResult<SessionData> {
    let body = client::post_json("/auth/login", &LoginRequest { email, password }).await?;
    parse_session(&body).ok_or_else(|| ApiError::transport("Malformed login response"))
}

/// Register a new administrator account.
pub async fn register(request: &RegisterRequest) -> ApiResult<SessionData> {
    let body = client::post_json("/auth/register", request).await?;
    parse_session(&body).ok_or_else(|| ApiError::transport("Malformed register response"))
}

/// Fetch the profile for the persisted token. Used to validate a restored
/// session on bootstrap.
pub async fn fetch_profile() -> ApiResult<UserProfile> {
    let body = client::get_json("/auth/profile").await?;
    contracts::envelope::extract_object_as(&body, "user")
        .ok_or_else(|| ApiError::transport("Malformed profile response"))
}

/// Best-effort server-side logout; local state is cleared regardless.
pub async fn logout() {
    let _ = client::post_json("/auth/logout", &Value::Null).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn session_parses_from_nested_data() {
        let body = json!({
            "success": true,
            "data": {
                "token": "jwt-token",
                "user": { "_id": "u1", "name": "Admin", "email": "a@b.c", "role": "admin" }
            }
        });
        let session = parse_session(&body).unwrap();
        assert_eq!(session.token, "jwt-token");
        assert_eq!(session.user.name, "Admin");
    }

    #[test]
    fn session_parses_from_flat_body() {
        let body = json!({ "token": "t", "user": { "_id": "u1" } });
        assert!(parse_session(&body).is_some());
    }

    #[test]
    fn malformed_body_yields_none() {
        assert!(parse_session(&json!({ "success": false })).is_none());
        assert!(parse_session(&json!(null)).is_none());
    }
}
