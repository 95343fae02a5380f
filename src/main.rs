//! Calculator API entry point
//!
//! Loads `config/{env}.yaml`, initializes logging, then serves the HTTP
//! gateway until interrupted.
//!
//! ```text
//! calc-api [--env <name>] [--host <addr>] [--port <port>]
//! ```

use calc_api::config::AppConfig;
use calc_api::{gateway, logging};

// ============================================================
// CLI ARGUMENTS
// ============================================================

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

/// Get host override from command line (--host argument)
fn get_host_override() -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--host" && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

// ============================================================
// MAIN
// ============================================================

fn main() -> anyhow::Result<()> {
    let env = get_env();
    let app_config = AppConfig::load_or_default(&env);
    let _log_guard = logging::init_logging(&app_config);

    let host = get_host_override().unwrap_or_else(|| app_config.gateway.host.clone());
    let port = get_port_override().unwrap_or(app_config.gateway.port);

    tracing::info!(
        "Starting Calculator API v{} ({}) in {} mode",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env
    );

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(gateway::run_server(&host, port))
}
