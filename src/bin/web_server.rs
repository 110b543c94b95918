use lazy_sssp::web::{start_server, ServerConfig};
use log::info;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let port = match args.get(1) {
        Some(arg) => arg.parse()?,
        None => 3005,
    };

    let config = ServerConfig {
        port,
        ..Default::default()
    };

    info!("Configuration:");
    info!("  Port: {}", config.port);
    info!("  CORS enabled: {}", config.enable_cors);
    info!("  Max sessions: {}", config.max_sessions);
    info!("  Session timeout: {} minutes", config.session_timeout_minutes);

    start_server(config).await?;

    Ok(())
}
