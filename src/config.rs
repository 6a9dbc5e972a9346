use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    #[serde(default = "default_source_url")]
    pub source_url: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_output_file")]
    pub output_file: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_source_url() -> String {
    "https://najaf.org/english/prayer/oxford".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_output_file() -> String {
    "prayer_times_oxford.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            source_url: default_source_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            output_file: default_output_file(),
            log_level: default_log_level(),
        }
    }
}

impl ScraperConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ScraperConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let config: ScraperConfig = toml::from_str("timeout_secs = 5").unwrap();
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.source_url, "https://najaf.org/english/prayer/oxford");
        assert_eq!(config.output_file, "prayer_times_oxford.json");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_empty_file_is_all_defaults() {
        let config: ScraperConfig = toml::from_str("").unwrap();
        let defaults = ScraperConfig::default();
        assert_eq!(config.source_url, defaults.source_url);
        assert_eq!(config.timeout_secs, defaults.timeout_secs);
    }
}
