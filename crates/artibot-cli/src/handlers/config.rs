//! Config command handler.
//!
//! Prints the resolved Artifactory settings with secrets hidden, and
//! whether they would pass validation.

use artibot_core::{ArtifactorySettings, validate_settings};

fn show(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("(not set)")
}

fn secret(value: &str) -> &'static str {
    if value.is_empty() { "(not set)" } else { "********" }
}

/// Render `settings` for the terminal.
pub fn render(settings: &ArtifactorySettings) -> String {
    let mut lines = vec![
        "Artifactory settings:".to_string(),
        format!("  endpoint:       {}", show(Some(settings.endpoint.as_str()))),
        format!("  username:       {}", show(Some(settings.username.as_str()))),
        format!("  password:       {}", secret(&settings.password)),
        format!("  base_path:      {}", settings.base_path),
        format!("  ssl_pem_file:   {}", show(settings.ssl_pem_file.as_deref())),
        format!(
            "  ssl_verify:     {}",
            settings
                .ssl_verify
                .map_or_else(|| "(default)".to_string(), |v| v.to_string())
        ),
    ];

    if settings.has_proxy() {
        lines.push(format!("  proxy_address:  {}", show(settings.proxy_address.as_deref())));
        lines.push(format!(
            "  proxy_port:     {}",
            settings
                .proxy_port
                .map_or_else(|| "(not set)".to_string(), |p| p.to_string())
        ));
        lines.push(format!("  proxy_username: {}", show(settings.proxy_username.as_deref())));
        lines.push(format!(
            "  proxy_password: {}",
            secret(settings.proxy_password.as_deref().unwrap_or_default())
        ));
    }

    lines.push(String::new());
    match validate_settings(settings) {
        Ok(()) => lines.push("Settings are valid.".to_string()),
        Err(e) => lines.push(format!("Settings are invalid: {e}")),
    }

    lines.join("\n")
}

/// Print the resolved settings.
pub fn execute(settings: &ArtifactorySettings) {
    println!("{}", render(settings));
}
