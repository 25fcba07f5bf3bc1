//! Request routing.

use bytes::Bytes;
use http::header::{HeaderValue, ALLOW};
use http::{Method, Response, StatusCode};
use http_body_util::Full;

use super::response::{json, ErrorDetail, HealthStatus, ServiceStatus};

const ROOT_MESSAGE: &str = "Backend is running";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Endpoint {
    Root,
    Health,
}

impl Endpoint {
    fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Self::Root),
            "/health" | "/api/health" => Some(Self::Health),
            _ => None,
        }
    }
}

/// Route one request to its response. Pure: no I/O and no shared state.
///
/// Unknown paths get 404. Known paths hit with anything other than `GET`
/// (or `HEAD`, which hyper answers without a body) get 405.
pub fn route(method: &Method, path: &str) -> Response<Full<Bytes>> {
    let Some(endpoint) = Endpoint::from_path(path) else {
        return json(
            StatusCode::NOT_FOUND,
            &ErrorDetail::for_status(StatusCode::NOT_FOUND),
        );
    };

    if method != Method::GET && method != Method::HEAD {
        let mut res = json(
            StatusCode::METHOD_NOT_ALLOWED,
            &ErrorDetail::for_status(StatusCode::METHOD_NOT_ALLOWED),
        );
        res.headers_mut().insert(ALLOW, HeaderValue::from_static("GET"));
        return res;
    }

    match endpoint {
        Endpoint::Root => json(
            StatusCode::OK,
            &ServiceStatus {
                status: ROOT_MESSAGE.to_owned(),
            },
        ),
        Endpoint::Health => json(StatusCode::OK, &HealthStatus { ok: true }),
    }
}
