use serde::Deserialize;

const ENV_PREFIX: &str = "DASHBOARD_RUNTIME";

#[derive(Debug, Deserialize, Clone)]
pub struct RuntimeConfig {
    pub backend: BackendSettings,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub stream: StreamSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendSettings {
    pub base_url: String,
    #[serde(default)]
    pub token: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct StreamSettings {
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Default for StreamSettings {
    fn default() -> Self {
        Self {
            channel_capacity: default_channel_capacity(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_channel_capacity() -> usize {
    crate::application::streaming_service::DEFAULT_CHANNEL_CAPACITY
}

/// Load `config/runtime.*` (optional), overridden by
/// `DASHBOARD_RUNTIME__SECTION__KEY` environment variables.
pub fn load_runtime_config() -> anyhow::Result<RuntimeConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/runtime").required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
