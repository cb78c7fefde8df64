use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub sendgrid_api_key: String,
    pub sendgrid_base_url: String,
    pub static_dir: String,
    /// Re-check email/phone/option formats on the server. Off by default: the
    /// landing page is the only place formats are enforced.
    pub strict_validation: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            sendgrid_api_key: std::env::var("SENDGRID_API_KEY")
                .map_err(|_| anyhow::anyhow!("SENDGRID_API_KEY environment variable required"))
                .and_then(|key| {
                    if key.trim().is_empty() {
                        anyhow::bail!("SENDGRID_API_KEY cannot be empty");
                    }
                    Ok(key)
                })?,
            sendgrid_base_url: validate_http_url(
                "SENDGRID_BASE_URL",
                std::env::var("SENDGRID_BASE_URL")
                    .unwrap_or_else(|_| "https://api.sendgrid.com".to_string()),
            )?,
            static_dir: std::env::var("STATIC_DIR")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "public".to_string()),
            strict_validation: parse_flag(
                "CONTACT_STRICT_VALIDATION",
                std::env::var("CONTACT_STRICT_VALIDATION").ok(),
            )?,
        };

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("SendGrid Base URL: {}", config.sendgrid_base_url);
        tracing::debug!("Static dir: {}", config.static_dir);
        tracing::debug!("Server Port: {}", config.port);
        if config.strict_validation {
            tracing::info!("Strict server-side format validation enabled");
        }

        Ok(config)
    }
}

fn validate_http_url(name: &str, url: String) -> anyhow::Result<String> {
    if url.trim().is_empty() {
        anyhow::bail!("{} cannot be empty", name);
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        anyhow::bail!("{} must start with http:// or https://", name);
    }
    Ok(url)
}

fn parse_flag(name: &str, value: Option<String>) -> anyhow::Result<bool> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(false),
        Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => Ok(true),
        Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => Ok(false),
        Some(v) => anyhow::bail!("{} must be true or false, got '{}'", name, v),
    }
}
