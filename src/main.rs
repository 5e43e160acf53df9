//! lounge-embed - provision IRC credentials and print the embedded client URL.

use lounge_embed::HttpProvisioner;
use lounge_embed::ProvisioningSession;
use lounge_embed::SessionStatus;
use lounge_embed::config::{Config, validate};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Environment variable consulted when the config carries no auth token.
const AUTH_TOKEN_ENV: &str = "LOUNGE_EMBED_AUTH_TOKEN";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the URL
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    let mut config = Config::load(&config_path).map_err(|e| {
        error!(path = %config_path, error = %e, "Failed to load config");
        e
    })?;

    if let Err(errors) = validate(&config) {
        for e in &errors {
            error!(error = %e, "Invalid configuration");
        }
        return Err(anyhow::anyhow!(
            "{} configuration error(s) in {}",
            errors.len(),
            config_path
        ));
    }

    if config.provisioning.auth_token.is_none() {
        config.provisioning.auth_token = std::env::var(AUTH_TOKEN_ENV).ok();
    }

    info!(
        chat = %config.chat.base_url,
        channel = %config.chat.channel,
        api = %config.provisioning.api_base_url,
        "Starting lounge-embed"
    );

    let session = ProvisioningSession::new();
    session.start(HttpProvisioner::new(&config.provisioning));

    match session.settled().await {
        SessionStatus::Ready { credentials } => {
            let target = config.chat.target();
            info!(url = %target.redacted_url(&credentials), "Chat ready");
            println!("{}", target.url(&credentials));
            Ok(())
        }
        SessionStatus::Error { message } => {
            error!(error = %message, "Provisioning failed");
            Err(anyhow::anyhow!(message))
        }
        SessionStatus::Loading => Err(anyhow::anyhow!("provisioning did not settle")),
    }
}
