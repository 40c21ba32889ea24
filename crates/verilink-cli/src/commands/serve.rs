//! Start the Verilink server.

use std::process::ExitCode;

use clap::Args;

use verilink_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, config_path: &str) -> Result<ExitCode, AppError> {
    let mut config = super::load_config(config_path)?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }

    println!("Starting Verilink server...");
    println!("  Host: {}", config.server.host);
    println!("  Port: {}", config.server.port);

    verilink_api::run_server(config).await?;
    Ok(ExitCode::SUCCESS)
}
