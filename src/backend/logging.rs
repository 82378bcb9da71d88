//! Logging setup
//!
//! Installs the `tracing` subscriber and provides the masking applied to
//! personal data before it reaches a log line.

use tracing_subscriber::EnvFilter;

use crate::shared::config::EnvState;

/// Install the global fmt subscriber
///
/// `RUST_LOG` wins when set; otherwise development and testing log at
/// `debug` and production at `info`.
pub fn init_tracing(env_state: EnvState) {
    let default_level = if env_state.is_verbose() { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{default_level},sqlx=warn,tower_http=info")));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .try_init()
        .is_err()
    {
        tracing::debug!("Tracing subscriber already installed");
    }
}

/// Mask an email address for logging
///
/// Keeps the first two characters of the local part and the domain:
/// `alice@example.com` becomes `al***@example.com`. Input without an `@`
/// is masked entirely.
pub fn obfuscate_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let visible: String = local.chars().take(2).collect();
            format!("{visible}***@{domain}")
        }
        None => "***".to_string(),
    }
}
