use config::{Config, ConfigError, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeneralSettings {
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub api: ApiSettings,
    pub general: GeneralSettings,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            // Start with `./config/default.toml`
            .add_source(File::with_name("config/default").required(true))
            // Add in `./config/local.toml` to override defaults
            .add_source(File::with_name("config/local").required(false));

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use std::io::Write;

    // Helper to create a temporary config file for testing
    fn create_temp_config_file(dir: &str, name: &str, content: &str) -> Result<()> {
        fs::create_dir_all(dir)?;
        let path = format!("{}/{}.toml", dir, name);
        let mut file = fs::File::create(path)?;
        writeln!(file, "{}", content)?;
        Ok(())
    }

    #[test]
    fn test_load_config_defaults_only() -> Result<()> {
        let config_dir = "./test_config_load_defaults";
        create_temp_config_file(
            config_dir,
            "default",
            r#"
[api]
base_url = "https://assessments.reliscore.com/api/cric-scores/"

[general]
request_timeout_seconds = 10
        "#,
        )?;

        let s = Config::builder()
            .add_source(File::with_name(&format!("{}/default", config_dir)).required(true))
            .build()?;
        let settings: Settings = s.try_deserialize()?;

        assert_eq!(
            settings.api.base_url,
            "https://assessments.reliscore.com/api/cric-scores/"
        );
        assert_eq!(settings.general.request_timeout_seconds, 10);

        fs::remove_dir_all(config_dir)?;
        Ok(())
    }

    #[test]
    fn test_load_config_with_local_override() -> Result<()> {
        let config_dir = "./test_config_load_local";
        create_temp_config_file(
            config_dir,
            "default",
            r#"
[api]
base_url = "https://assessments.reliscore.com/api/cric-scores/"

[general]
request_timeout_seconds = 10
        "#,
        )?;

        // Local override pointing at a mock endpoint with a short timeout
        create_temp_config_file(
            config_dir,
            "local",
            r#"
[api]
base_url = "http://localhost:8080/cric-scores"

[general]
request_timeout_seconds = 2
        "#,
        )?;

        let s = Config::builder()
            .add_source(File::with_name(&format!("{}/default", config_dir)).required(true))
            .add_source(File::with_name(&format!("{}/local", config_dir)).required(false))
            .build()?;
        let settings: Settings = s.try_deserialize()?;

        assert_eq!(settings.api.base_url, "http://localhost:8080/cric-scores");
        assert_eq!(settings.general.request_timeout_seconds, 2);

        fs::remove_dir_all(config_dir)?;
        Ok(())
    }
}
