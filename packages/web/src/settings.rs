//! Startup configuration: `posts.toml` plus the `BACKEND_URL` override.

use store::BackendConfig;

/// Read the backend configuration once at startup.
///
/// A missing file means defaults. An invalid file is logged and replaced by
/// the defaults. An invalid override is logged and ignored, keeping the host
/// from the file.
pub fn load() -> BackendConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenvy::dotenv().ok();
        let file = std::fs::read_to_string(BackendConfig::filename()).ok();
        resolve(file.as_deref(), std::env::var(store::config::BACKEND_URL_VAR).ok())
    }
    #[cfg(target_arch = "wasm32")]
    {
        resolve(None, option_env!("BACKEND_URL").map(str::to_string))
    }
}

/// Combine the config file contents with the environment override.
pub fn resolve(file: Option<&str>, host_override: Option<String>) -> BackendConfig {
    let base = match file.map(BackendConfig::from_toml) {
        Some(Ok(config)) => config,
        Some(Err(error)) => {
            tracing::error!(%error, file = BackendConfig::filename(), "ignoring config file");
            BackendConfig::default()
        }
        None => BackendConfig::default(),
    };

    match base.clone().with_host_override(host_override) {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "ignoring BACKEND_URL");
            base
        }
    }
}
