//! Server configuration loaded from a TOML file merged with environment
//! variables (`figment`).
//!
//! ```toml
//! host = "0.0.0.0"
//! port = 8080
//!
//! [api_keys]
//! "reporting-dashboard" = "read"
//! "fleet-importer" = "read-write"
//! ```
//!
//! Any field can be overridden with a `WAYFINDER_`-prefixed environment
//! variable, e.g. `WAYFINDER_PORT=9000`.

use std::collections::HashMap;
use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

/// Capability tier associated with an API token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    /// May fetch the map and query routes and distances.
    Read,
    /// May additionally replace the map. Implies `Read`.
    ReadWrite,
}

impl Capability {
    /// Returns true if this tier satisfies `required`.
    #[must_use]
    pub fn allows(self, required: Capability) -> bool {
        match required {
            Capability::Read => true,
            Capability::ReadWrite => self == Capability::ReadWrite,
        }
    }
}

/// Top-level server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Token → capability mapping. Empty disables authentication.
    pub api_keys: HashMap<String, Capability>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            api_keys: HashMap::new(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from `path` (skipped if absent) merged with
    /// `WAYFINDER_`-prefixed environment variables on top of the defaults.
    pub fn load(path: &Path) -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(ServerConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("WAYFINDER_"))
            .extract()
    }
}
