use std::net::SocketAddr;
use std::path::PathBuf;

/// Runtime configuration for the menu service. The admin credential pair
/// and cookie signing secret live here rather than in handler code so
/// deployments can override them without a rebuild.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub data_path: PathBuf,
    pub admin_username: String,
    pub admin_password: String,
    /// Secret used to derive the session cookie signing key. Must be at
    /// least 32 bytes or the override is ignored.
    pub secret_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".parse().unwrap(),
            data_path: PathBuf::from("data/menu.json"),
            admin_username: "shirlyn".to_string(),
            admin_password: "2806".to_string(),
            secret_key: "change-this-secret-key-before-deploying-anywhere-real".to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults with environment overrides applied.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(addr) = std::env::var("FOODGALAXY_BIND") {
            match addr.parse() {
                Ok(addr) => cfg.bind_addr = addr,
                Err(_) => tracing::warn!(
                    "FOODGALAXY_BIND={:?} is not a socket address, keeping {}",
                    addr,
                    cfg.bind_addr
                ),
            }
        }
        if let Ok(path) = std::env::var("FOODGALAXY_DATA") {
            cfg.data_path = PathBuf::from(path);
        }
        if let Ok(user) = std::env::var("FOODGALAXY_ADMIN_USER") {
            cfg.admin_username = user;
        }
        if let Ok(pass) = std::env::var("FOODGALAXY_ADMIN_PASS") {
            cfg.admin_password = pass;
        }
        if let Ok(secret) = std::env::var("FOODGALAXY_SECRET") {
            // Key derivation requires 32+ bytes of input.
            if secret.len() >= 32 {
                cfg.secret_key = secret;
            } else {
                tracing::warn!("FOODGALAXY_SECRET is shorter than 32 bytes, keeping the built-in default");
            }
        }
        cfg
    }
}
