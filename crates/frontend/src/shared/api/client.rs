use futures::future::{self, Either};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use serde_json::Value;
use web_sys::FormData;

use contracts::envelope;

use super::config::{api_url, REQUEST_TIMEOUT_MS};
use super::error::{ApiError, ApiResult};
use crate::system::auth::{session_guard, storage};

fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Race the fetch against the uniform timeout. An in-flight request is not
/// aborted on timeout; the caller just stops waiting for it.
async fn send_with_timeout(request: Request) -> ApiResult<Response> {
    let send = request.send();
    futures::pin_mut!(send);
    let timeout = TimeoutFuture::new(REQUEST_TIMEOUT_MS);
    futures::pin_mut!(timeout);

    match future::select(send, timeout).await {
        Either::Left((result, _)) => result.map_err(|e| {
            log::error!("Network error: {}", e);
            ApiError::transport(format!("Network error: {}", e))
        }),
        Either::Right(((), _)) => Err(ApiError::transport("Request timed out")),
    }
}

/// Unwrap a response into its JSON body, funneling 401 into the global
/// session-expiry path and non-2xx into a normalized [`ApiError`].
async fn into_body(response: Response) -> ApiResult<Value> {
    let status = response.status();
    if status == 401 {
        session_guard::expire();
        return Err(ApiError::transport("Session expired"));
    }
    let body: Value = response.json().await.unwrap_or(Value::Null);
    if !response.ok() {
        let message = envelope::error_message(&body, &format!("Request failed with status {}", status));
        return Err(ApiError::server(message, body));
    }
    Ok(body)
}

fn build_error(e: gloo_net::Error) -> ApiError {
    ApiError::transport(format!("Failed to build request: {}", e))
}

pub async fn get_json(path: &str) -> ApiResult<Value> {
    let request = authorize(Request::get(&api_url(path)))
        .build()
        .map_err(build_error)?;
    into_body(send_with_timeout(request).await?).await
}

pub async fn get_json_with_query(path: &str, query: &[(&str, &str)]) -> ApiResult<Value> {
    let mut url = api_url(path);
    for (i, (key, value)) in query.iter().enumerate() {
        let sep = if i == 0 { '?' } else { '&' };
        let encoded: String = js_sys::encode_uri_component(value).into();
        url.push_str(&format!("{}{}={}", sep, key, encoded));
    }
    let request = authorize(Request::get(&url)).build().map_err(build_error)?;
    into_body(send_with_timeout(request).await?).await
}

pub async fn post_json<B: Serialize>(path: &str, body: &B) -> ApiResult<Value> {
    let request = authorize(Request::post(&api_url(path)))
        .json(body)
        .map_err(build_error)?;
    into_body(send_with_timeout(request).await?).await
}

pub async fn put_json<B: Serialize>(path: &str, body: &B) -> ApiResult<Value> {
    let request = authorize(Request::put(&api_url(path)))
        .json(body)
        .map_err(build_error)?;
    into_body(send_with_timeout(request).await?).await
}

pub async fn delete_json(path: &str) -> ApiResult<Value> {
    let request = authorize(Request::delete(&api_url(path)))
        .build()
        .map_err(build_error)?;
    into_body(send_with_timeout(request).await?).await
}

/// Multipart upload. The content-type header is left to the browser so the
/// form boundary is set correctly; only the bearer token is attached.
pub async fn post_multipart(path: &str, form: FormData) -> ApiResult<Value> {
    let request = authorize(Request::post(&api_url(path)))
        .body(form)
        .map_err(build_error)?;
    into_body(send_with_timeout(request).await?).await
}
