//! OAuth access token discovery for the BigQuery API.
//!
//! Checked in order:
//! 1. an explicitly configured token (`--access-token` / config file)
//! 2. the `GOOGLE_OAUTH_ACCESS_TOKEN` environment variable
//! 3. `gcloud auth print-access-token`

use std::process::Command;

use super::WarehouseError;

pub const TOKEN_ENV: &str = "GOOGLE_OAUTH_ACCESS_TOKEN";

pub fn resolve_access_token(explicit: Option<&str>) -> Result<String, WarehouseError> {
    if let Some(token) = non_empty(explicit) {
        tracing::debug!("Using configured access token");
        return Ok(token);
    }

    if let Some(token) = non_empty(std::env::var(TOKEN_ENV).ok().as_deref()) {
        tracing::debug!(env = TOKEN_ENV, "Using access token from environment");
        return Ok(token);
    }

    gcloud_access_token()
}

fn gcloud_access_token() -> Result<String, WarehouseError> {
    tracing::debug!("Requesting access token from gcloud");
    let output = Command::new("gcloud")
        .args(["auth", "print-access-token"])
        .output()
        .map_err(|e| {
            WarehouseError::Auth(format!(
                "no access token configured and gcloud could not be run: {e}"
            ))
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(WarehouseError::Auth(format!(
            "gcloud auth print-access-token failed: {}",
            stderr.trim()
        )));
    }

    non_empty(Some(&String::from_utf8_lossy(&output.stdout)))
        .ok_or_else(|| WarehouseError::Auth("gcloud returned an empty access token".to_string()))
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_explicit_token_wins() {
        let token = resolve_access_token(Some("  ya29.explicit\n")).unwrap();
        assert_eq!(token, "ya29.explicit");
    }

    #[test]
    #[serial]
    fn test_env_token_used_when_not_configured() {
        std::env::set_var(TOKEN_ENV, "ya29.from-env");
        let token = resolve_access_token(None);
        std::env::remove_var(TOKEN_ENV);
        assert_eq!(token.unwrap(), "ya29.from-env");
    }

    #[test]
    #[serial]
    fn test_blank_explicit_token_falls_through_to_env() {
        std::env::set_var(TOKEN_ENV, "ya29.from-env");
        let token = resolve_access_token(Some("   "));
        std::env::remove_var(TOKEN_ENV);
        assert_eq!(token.unwrap(), "ya29.from-env");
    }
}
