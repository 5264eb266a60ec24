//! Example to run the twenty48 server standalone
//!
//! Run with: cargo run -p twenty48-server --example run_server

use twenty48_server::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = ServerConfig {
        seed: Some(2048),
        ..Default::default()
    };

    println!("Starting twenty48 server on port {}", config.port);
    println!("Fallback ports: {:?}", config.fallback_ports);

    run_server(config).await
}
