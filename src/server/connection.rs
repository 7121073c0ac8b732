// Connection handling module
// Serves a single accepted TCP connection

use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;

use crate::config::Config;
use crate::handler;
use crate::logger;

/// Serve an accepted connection in a spawned task.
///
/// The connection runs HTTP/1.1 with keep-alive, so several requests may
/// arrive on one stream before the peer closes it. Malformed input is
/// answered with `400 Bad Request` by hyper's parser and surfaces here as
/// a connection error, which is logged without touching other connections.
pub fn serve_connection(stream: tokio::net::TcpStream, cfg: Arc<Config>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let mut builder = http1::Builder::new();
        builder.keep_alive(true);

        let conn = builder.serve_connection(
            io,
            service_fn(move |req| {
                let cfg = Arc::clone(&cfg);
                async move { handler::handle_request(req, cfg).await }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
