//! Verify a token or verification URL.

use std::process::ExitCode;

use clap::Args;

use verilink_auth::TokenCodec;
use verilink_auth::url::token_from_link;
use verilink_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for the verify command
#[derive(Debug, Args)]
pub struct VerifyArgs {
    /// A bare token or a full `/verify?t=` URL
    pub input: String,
}

/// Execute the verify command. Exits with failure when the token is invalid.
pub async fn execute(
    args: &VerifyArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<ExitCode, AppError> {
    let config = super::load_config(config_path)?;
    let codec = TokenCodec::new(&config.verify)?;

    let token = token_from_link(&args.input);
    let outcome = codec.verify_token(&token);

    match (format, outcome.payload()) {
        (OutputFormat::Json, _) => output::print_json(&outcome),
        (OutputFormat::Table, Some(payload)) => {
            output::print_success("Token is valid");
            output::print_record(&outcome, &super::payload_rows(payload), format);
        }
        (OutputFormat::Table, None) => output::print_error("Token is not valid"),
    }

    Ok(if outcome.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
