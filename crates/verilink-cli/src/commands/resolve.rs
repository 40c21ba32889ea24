//! Resolve a short code against the configured store.

use std::process::ExitCode;

use clap::Args;

use verilink_core::error::AppError;
use verilink_service::LinkService;

use crate::output::{self, FieldRow, OutputFormat};

/// Arguments for the resolve command
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Short code, as it appears after the public prefix
    pub code: String,
}

/// Execute the resolve command
pub async fn execute(
    args: &ResolveArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<ExitCode, AppError> {
    let config = super::load_config(config_path)?;
    if !config.shortlink.enabled {
        return Err(AppError::feature_disabled(
            "Short links are disabled (SHORTLINK_ENABLED)",
        ));
    }

    let links = LinkService::from_config(&config).await?;
    let token = links
        .resolve_code(&args.code)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Short link '{}' not found", args.code)))?;
    let outcome = links.verify_token(&token);

    let mut rows = vec![
        FieldRow::new("code", &args.code),
        FieldRow::new("token", &token),
        FieldRow::new("valid", outcome.is_valid().to_string()),
    ];
    if let Some(payload) = outcome.payload() {
        rows.extend(super::payload_rows(payload));
    }

    let record = serde_json::json!({
        "code": args.code,
        "token": token,
        "verification": outcome,
    });
    output::print_record(&record, &rows, format);

    Ok(if outcome.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
