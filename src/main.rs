use std::sync::Arc;

mod config;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    // Size the Tokio worker pool from config, default to CPU cores
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;

    // Binding is the only fatal failure: a port held exclusively by
    // another process surfaces here and stops startup
    let listener = server::bind_reusable(addr)?;

    let cfg = Arc::new(cfg);
    logger::log_server_start(&addr, &cfg);

    // Serve until the process is killed; per-request failures never
    // propagate past their own connection task
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                if cfg.logging.access_log {
                    logger::log_connection_accepted(&peer_addr);
                }
                server::serve_connection(stream, Arc::clone(&cfg));
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}
