use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use tracing::Instrument;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

const SESSION_PATH_PREFIX: &str = "/api/v1/sessions/";

#[derive(Clone, Debug)]
pub struct RequestId(pub String);

/// Tags every request with an id (taken from `x-request-id` when the browser
/// sends one) and runs the handler inside a span carrying it and, for session
/// routes, the session id.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    let path = request.uri().path().to_string();
    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        uri = %path,
        session_id = session_id_from_path(&path).unwrap_or("-")
    );

    let mut response = next.run(request).instrument(span).await;

    if let Ok(header_value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(REQUEST_ID_HEADER, header_value);
    }

    response
}

fn session_id_from_path(path: &str) -> Option<&str> {
    path.strip_prefix(SESSION_PATH_PREFIX)?
        .split('/')
        .next()
        .filter(|segment| !segment.is_empty())
}
