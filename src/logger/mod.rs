//! Logger module
//!
//! Stdout/stderr logging for the server: startup banner, access-log lines,
//! warnings and errors.

use crate::config::Config;
use chrono::Local;
use std::net::SocketAddr;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Static file server started");
    println!("Serving directory: {}", config.files.root);
    println!("Listening on: http://{addr} (port {})", addr.port());
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

/// One line per handled request, with a local timestamp
pub fn log_access(method: &str, path: &str, status: u16, body_bytes: usize) {
    println!(
        "[{}] \"{method} {path}\" {status} {body_bytes}",
        Local::now().format("%d/%b/%Y:%H:%M:%S %z")
    );
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}
