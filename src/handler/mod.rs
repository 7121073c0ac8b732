//! Request handling module
//!
//! Entry point for HTTP request processing: method validation, static file
//! dispatch, and access logging.

pub mod static_files;

use crate::config::Config;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    cfg: Arc<Config>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let is_head = method == Method::HEAD;

    if !method_supported(&method) {
        let resp = http::build_501_response();
        if cfg.logging.access_log {
            logger::log_access(method.as_str(), &path, resp.status().as_u16(), 0);
        }
        return Ok(resp);
    }

    let (resp, body_bytes) = match static_files::load(&cfg.files, &path).await {
        Ok((content, content_type)) => {
            let len = content.len();
            (http::build_file_response(content, content_type, is_head), len)
        }
        // Missing files, blocked traversals, and failed reads all answer
        // 404 so probes cannot tell confined paths from absent ones
        Err(_) => (http::build_404_response(), 0),
    };

    if cfg.logging.access_log {
        logger::log_access(method.as_str(), &path, resp.status().as_u16(), body_bytes);
    }
    Ok(resp)
}

/// GET and HEAD are the only implemented methods
fn method_supported(method: &Method) -> bool {
    matches!(*method, Method::GET | Method::HEAD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_get_and_head_are_supported() {
        assert!(method_supported(&Method::GET));
        assert!(method_supported(&Method::HEAD));
        assert!(!method_supported(&Method::POST));
        assert!(!method_supported(&Method::PUT));
        assert!(!method_supported(&Method::DELETE));
        assert!(!method_supported(&Method::OPTIONS));
    }
}
