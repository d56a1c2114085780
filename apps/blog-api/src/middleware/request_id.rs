//! Request ID propagation - echoes the tracing request ID back to the client.

use actix_web::{
    Error, HttpMessage,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    http::header::{HeaderName, HeaderValue},
    middleware::Next,
};
use tracing_actix_web::RequestId;

/// Header name for request ID.
pub static REQUEST_ID_HEADER: &str = "x-request-id";

/// Copy the ID that `TracingLogger` assigned to this request into the
/// response headers. Must be wrapped inside `TracingLogger`.
pub async fn propagate_request_id(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let request_id = req.extensions().get::<RequestId>().cloned();

    let mut res = next.call(req).await?;

    if let Some(id) = request_id {
        if let Ok(value) = HeaderValue::from_str(&id.to_string()) {
            res.headers_mut()
                .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
        }
    }

    Ok(res)
}
