//! CLI command definitions and dispatch.

pub mod config;
pub mod issue;
pub mod resolve;
pub mod serve;
pub mod verify;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use verilink_core::config::AppConfig;
use verilink_core::error::AppError;

use crate::output::{FieldRow, OutputFormat};

/// Verilink: tamper-evident verification links for signed documents
#[derive(Debug, Parser)]
#[command(name = "verilink", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the Verilink server
    Serve(serve::ServeArgs),
    /// Issue a signed verification link
    Issue(issue::IssueArgs),
    /// Verify a token or verification URL
    Verify(verify::VerifyArgs),
    /// Look up a short code and verify its token
    Resolve(resolve::ResolveArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<ExitCode, AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Issue(args) => issue::execute(args, &self.config, self.format).await,
            Commands::Verify(args) => verify::execute(args, &self.config, self.format).await,
            Commands::Resolve(args) => resolve::execute(args, &self.config, self.format).await,
            Commands::Config(args) => config::execute(args, &self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file and environment
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}

/// Helper: table rows for a verified payload
pub fn payload_rows(payload: &verilink_auth::VerifyPayload) -> Vec<FieldRow> {
    vec![
        FieldRow::new("document_id", payload.document_id()),
        FieldRow::new("signature_id", payload.signature_id()),
        FieldRow::new("user_id", payload.user_id()),
        FieldRow::new("version", payload.version().to_string()),
    ]
}
