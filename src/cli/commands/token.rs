use anyhow::Context;
use serde_json::json;

use crate::auth::{Claims, TokenAuthority};
use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::config;

pub fn handle(user: &str, hours: Option<u64>, no_expiry: bool, output_format: OutputFormat) -> anyhow::Result<()> {
    if user.trim().is_empty() {
        anyhow::bail!("user id must not be empty");
    }

    let security = &config::config().security;
    let authority = TokenAuthority::new(&security.jwt_secret).context("JWT_SECRET must be set")?;

    let expiry = if no_expiry {
        None
    } else {
        Some(hours.unwrap_or(security.jwt_expiry_hours))
    };
    let token = authority.issue(&Claims::new(user, expiry)?)?;

    match output_format {
        OutputFormat::Text => {
            println!("{}", token);
            Ok(())
        }
        OutputFormat::Json => output_success(
            &output_format,
            &format!("Issued token for user '{}'", user),
            Some(json!({ "authtoken": token })),
        ),
    }
}
