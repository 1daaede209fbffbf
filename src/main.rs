mod config;

use config::AppConfiguration;
use std::env;
use std::process;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_CONFIG_PATH: &str = "configs/appshell.yaml";

fn parse_config_path() -> String {
    for arg in env::args().skip(1) {
        if let Some(path) = arg.strip_prefix("--config=") {
            return path.to_string();
        }
    }
    DEFAULT_CONFIG_PATH.to_string()
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

fn main() {
    init_tracing();

    let config_path = parse_config_path();
    let check_only = env::args().any(|arg| arg == "--check");
    let emit_yaml = env::args().any(|arg| arg == "--emit=yaml");

    let config = match AppConfiguration::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!(config = %config_path, error = %e, "Failed to load app shell configuration");
            process::exit(1);
        }
    };

    info!(
        config = %config_path,
        app_id = %config.app_id,
        app_name = %config.app_name,
        "Configuration valid"
    );

    if check_only {
        return;
    }

    // Hand the descriptor to the host build tooling on stdout.
    let output = if emit_yaml {
        config.to_yaml()
    } else {
        config.to_json_pretty()
    };

    match output {
        Ok(text) => println!("{}", text),
        Err(e) => {
            error!(error = %e, "Failed to serialize configuration");
            process::exit(1);
        }
    }
}
