//! Server command - start the HTTP game server
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: configure_server(), start_server()
//! - Level 3: (delegated to twenty48-server crate)
//! - Level 4: configuration validation

use anyhow::Result;
use clap::Args;

use twenty48_core::DirectionPolicy;
use twenty48_server::{run_server, ServerConfig};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct ServerArgs {
    /// Port number to listen on
    #[arg(long, default_value = "8100")]
    pub port: u16,

    /// Ports tried in order when the primary port is taken
    #[arg(long = "fallback-port", default_values_t = [5000u16, 8000])]
    pub fallback_ports: Vec<u16>,

    /// Disable port fallback
    #[arg(long)]
    pub no_fallback: bool,

    /// Interface to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: std::net::Ipv4Addr,

    /// Reject unknown move directions instead of treating them as left
    #[arg(long)]
    pub strict_directions: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run server command
///
/// This function reads like a table of contents:
/// 1. Configure server
/// 2. Start server (blocking)
pub fn run(args: ServerArgs, seed: Option<u64>) -> Result<()> {
    let config = configure_server(&args, seed)?;

    tracing::info!(
        "Starting twenty48 server on port {} (fallbacks {:?})",
        config.port,
        config.fallback_ports
    );

    start_server(config)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Configure server from command arguments
fn configure_server(args: &ServerArgs, seed: Option<u64>) -> Result<ServerConfig> {
    validate_port(args.port)?;

    let fallback_ports = if args.no_fallback {
        Vec::new()
    } else {
        args.fallback_ports.clone()
    };

    Ok(ServerConfig {
        host: args.host.octets(),
        port: args.port,
        fallback_ports,
        direction_policy: if args.strict_directions {
            DirectionPolicy::Strict
        } else {
            DirectionPolicy::Lenient
        },
        seed,
    })
}

/// Start the server (blocking)
fn start_server(config: ServerConfig) -> Result<()> {
    // Create tokio runtime for async server
    let runtime = tokio::runtime::Runtime::new()?;

    runtime.block_on(async { run_server(config).await })
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Port 0 would bind an arbitrary port nobody can find
fn validate_port(port: u16) -> Result<()> {
    if port == 0 {
        anyhow::bail!("Port must be non-zero");
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
