//! Issue a verification link from the command line.

use std::process::ExitCode;

use clap::Args;

use verilink_auth::VerifyFields;
use verilink_core::error::AppError;
use verilink_service::LinkService;

use crate::output::{self, FieldRow, OutputFormat};

/// Arguments for the issue command
#[derive(Debug, Args)]
pub struct IssueArgs {
    /// Document identifier
    #[arg(long)]
    pub document: String,

    /// Signature identifier
    #[arg(long)]
    pub signature: String,

    /// Identifier of the signing user
    #[arg(long)]
    pub user: String,

    /// Also register a short link
    #[arg(long)]
    pub short: bool,
}

/// Execute the issue command
pub async fn execute(
    args: &IssueArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<ExitCode, AppError> {
    let config = super::load_config(config_path)?;

    if args.short && config.shortlink.enabled && config.shortlink.backend == "memory" {
        output::print_warning(
            "The memory backend lives in this process; the short link will not resolve elsewhere",
        );
    }

    let links = LinkService::from_config(&config).await?;
    let fields = VerifyFields::new(&args.document, &args.signature, &args.user);
    let issued = links.issue(&fields, args.short).await?;

    let mut rows = vec![
        FieldRow::new("token", &issued.token),
        FieldRow::new("verify_url", &issued.verify_url),
    ];
    if let Some(short_url) = &issued.short_url {
        rows.push(FieldRow::new("short_url", short_url));
    } else if args.short {
        output::print_warning("Short links are disabled; use the long URL");
    }

    output::print_record(&issued, &rows, format);
    Ok(ExitCode::SUCCESS)
}
