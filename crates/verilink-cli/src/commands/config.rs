//! Configuration management CLI commands.

use std::process::ExitCode;

use clap::{Args, Subcommand};

use verilink_core::config::{mask_secret, mask_url_password};
use verilink_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Load and validate configuration, then print it with secrets masked
    Check,
}

/// Execute config commands
pub async fn execute(
    args: &ConfigArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<ExitCode, AppError> {
    match &args.command {
        ConfigCommand::Check => {
            let config = match super::load_config(config_path) {
                Ok(config) => config,
                Err(e) => {
                    output::print_error(&format!("Configuration invalid: {}", e));
                    return Ok(ExitCode::FAILURE);
                }
            };

            if config.verify.is_weak_secret() {
                output::print_warning("VERIFY_HMAC_SECRET is shorter than 32 bytes");
            }

            match format {
                OutputFormat::Json => output::print_json(&config.redacted()),
                OutputFormat::Table => {
                    output::print_success(&format!("Configuration '{}' is valid", config_path));
                    output::print_kv("Server", &config.server.bind_address());
                    output::print_kv("Base URL", &config.verify.base_url);
                    output::print_kv("HMAC secret", &mask_secret(&config.verify.hmac_secret));
                    output::print_kv(
                        "Issuer API",
                        if config.server.issuer_key().is_some() {
                            "enabled"
                        } else {
                            "disabled"
                        },
                    );
                    output::print_kv("Short links", &config.shortlink.enabled.to_string());
                    if config.shortlink.enabled {
                        output::print_kv("Backend", &config.shortlink.backend);
                        output::print_kv("Public prefix", &config.shortlink.public_prefix);
                        if config.shortlink.backend == "redis" {
                            output::print_kv(
                                "Redis",
                                &mask_url_password(&config.shortlink.redis.url),
                            );
                        }
                    }
                    output::print_kv("Log level", &config.logging.level);
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
