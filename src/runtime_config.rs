//! # Runtime Configuration Module
//!
//! Environment variable configuration for validation behaviour.
//!
//! ## Environment Variables
//!
//! ### `BRRTR_SCHEMES_STRICT_URLS`
//!
//! When `true`, `openIdConnectUrl` must use `http` or `https` and name a
//! host. By default any absolute URL is accepted.
//!
//! Default: `false`
//!
//! ## Usage
//!
//! ```rust
//! use brrtrouter_schemes::runtime_config::RuntimeConfig;
//!
//! let config = RuntimeConfig::from_env();
//! println!("Strict URLs: {}", config.strict_urls);
//! ```

use std::env;

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Require http(s) URLs with a host for OpenID Connect discovery
    pub strict_urls: bool,
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let strict_urls = env::var("BRRTR_SCHEMES_STRICT_URLS")
            .ok()
            .map(|v| parse_bool(&v))
            .unwrap_or(false);
        RuntimeConfig { strict_urls }
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
