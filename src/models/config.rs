//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    /// Cookie domain of the session and flash cookies.
    pub domain: String,
    pub address: String,
    pub port: u16,
    /// Glob passed to tera, e.g. `templates/**/*`.
    pub templates_dir: String,
    /// Signing key of the session and flash cookies; at least 64 bytes.
    pub secret: String,
    /// Root of the REST backend, e.g. `http://localhost:8000/api/`.
    pub api_url: String,
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
}

fn default_assets_dir() -> String {
    "./assets".to_string()
}
