pub const DEFAULT_MODEL: &str = "local-model";
pub const DEFAULT_API_URL: &str = "http://localhost:1234/v1";
pub const DEFAULT_API_KEY: &str = "not-needed";
pub const DEFAULT_TEMPERATURE: f64 = 0.1;

pub const ENV_MODEL_NAME: &str = "MODEL_NAME";
pub const ENV_API_URL: &str = "API_URL";
pub const ENV_API_KEY: &str = "API_KEY";
pub const ENV_TIMEOUT_SECS: &str = "BOGO_TIMEOUT_SECS";

pub struct DefaultConfig;

impl DefaultConfig {
    pub fn create_default_config_file() -> String {
        format!(
            r#"[model]
name = "{DEFAULT_MODEL}"
api_url = "{DEFAULT_API_URL}"
api_key = "{DEFAULT_API_KEY}"
temperature = {DEFAULT_TEMPERATURE}
# timeout_secs = 60

[output]
use_colors = true

[demo]
min_count = 10
max_count = 30
min_value = -100.0
max_value = 100.0
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn default_file_parses_to_default_settings() {
        let parsed: Settings = toml::from_str(&DefaultConfig::create_default_config_file())
            .expect("default config file should parse");
        assert_eq!(parsed, Settings::default());
    }
}
