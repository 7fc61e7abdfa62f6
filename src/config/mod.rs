use crate::core::fetcher::DEFAULT_UPSTREAM_URL;
use crate::domain::ports::ServiceSettings;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "activity-proxy")]
#[command(about = "Serves activity suggestions filtered by the last saved user profile")]
pub struct CliConfig {
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(
        long = "time-out",
        env = "TIME_OUT",
        default_value_t = 10_000,
        help = "Matching deadline in milliseconds"
    )]
    pub time_out_ms: u64,

    #[arg(long, default_value = DEFAULT_UPSTREAM_URL, hide = true)]
    pub upstream_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl ServiceSettings for CliConfig {
    fn upstream_url(&self) -> &str {
        &self.upstream_url
    }

    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn match_timeout(&self) -> Duration {
        Duration::from_millis(self.time_out_ms)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("upstream_url", &self.upstream_url)?;
        validate_non_empty_string("host", &self.host)?;
        validate_positive_number("time_out", self.time_out_ms, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn default_of(id: &str) -> Option<String> {
        CliConfig::command()
            .get_arguments()
            .find(|arg| arg.get_id() == id)
            .and_then(|arg| arg.get_default_values().first())
            .and_then(|value| value.to_str())
            .map(str::to_string)
    }

    #[test]
    fn test_defaults() {
        assert_eq!(default_of("port").as_deref(), Some("3000"));
        assert_eq!(default_of("time_out_ms").as_deref(), Some("10000"));
        assert_eq!(default_of("host").as_deref(), Some("0.0.0.0"));
        assert_eq!(default_of("upstream_url").as_deref(), Some(DEFAULT_UPSTREAM_URL));
    }

    #[test]
    fn test_default_config_is_valid() {
        let config =
            CliConfig::try_parse_from(["activity-proxy", "--port", "3000", "--time-out", "10000"])
                .unwrap();

        assert_eq!(config.port(), 3000);
        assert_eq!(config.match_timeout(), Duration::from_millis(10_000));
        assert_eq!(config.upstream_url(), DEFAULT_UPSTREAM_URL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags_override() {
        let config = CliConfig::try_parse_from([
            "activity-proxy",
            "--port",
            "8080",
            "--time-out",
            "250",
            "--upstream-url",
            "http://localhost:9000/api/activity/",
        ])
        .unwrap();

        assert_eq!(config.port(), 8080);
        assert_eq!(config.match_timeout(), Duration::from_millis(250));
        assert_eq!(config.upstream_url(), "http://localhost:9000/api/activity/");
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = CliConfig::try_parse_from(["activity-proxy"]).unwrap();
        config.time_out_ms = 0;
        assert!(config.validate().is_err());

        let mut config = CliConfig::try_parse_from(["activity-proxy"]).unwrap();
        config.upstream_url = "ftp://example.com/activity".to_string();
        assert!(config.validate().is_err());
    }
}
