use serde::Deserialize;
use std::path::PathBuf;

/// Service configuration: a `config/default.toml` file if present, with
/// `QUIRE__`-prefixed environment variables layered on top
/// (e.g. `QUIRE__SERVER__PORT=9000`).
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub assets: AssetConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Paths to the immutable startup assets.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetConfig {
    pub shell: PathBuf,
    pub components: PathBuf,
    pub schema: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("assets.shell", "assets/shell/shell.docx")?
            .set_default("assets.components", "assets/components")?
            .set_default("assets.schema", "assets/schemas/plan.schema.json")?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::Environment::with_prefix("QUIRE").separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_config_file() {
        let config = Config::load().unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(
            config.assets.components,
            PathBuf::from("assets/components")
        );
    }
}
