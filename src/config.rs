//! Runtime settings and the provider credential lookup.

use std::net::SocketAddr;
use std::time::Duration;

use clap::Args;

use crate::error::{Result, ValidatorError};

pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, Args)]
pub struct Settings {
    /// Address the HTTP server binds to
    #[arg(long, global = true, env = "VALIDATOR_BIND", default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,

    /// Kickoff URL of the crew runner
    #[arg(long, global = true, env = "CREW_URL", default_value = "http://127.0.0.1:8001/kickoff")]
    pub crew_url: String,

    /// Upper bound on a single crew run
    #[arg(long, global = true, env = "CREW_TIMEOUT_SECS", default_value_t = 600)]
    pub crew_timeout_secs: u64,

    /// Origins allowed by CORS, comma separated
    #[arg(long, global = true, env = "CORS_ORIGINS", value_delimiter = ',', default_value = "http://localhost:5173")]
    pub cors_origins: Vec<String>,

    /// Environment variable holding the model provider API key
    #[arg(long, global = true, env = "API_KEY_ENV", default_value = DEFAULT_API_KEY_ENV)]
    pub api_key_env: String,
}

impl Settings {
    pub fn crew_timeout(&self) -> Duration {
        Duration::from_secs(self.crew_timeout_secs)
    }
}

/// Reads the provider API key on every request, never caching it.
#[derive(Clone)]
pub struct Credential {
    var: String,
    lookup: fn(&str) -> Option<String>,
}

fn from_process_env(var: &str) -> Option<String> {
    std::env::var(var).ok()
}

impl Credential {
    pub fn from_env(var: impl Into<String>) -> Self {
        Self { var: var.into(), lookup: from_process_env }
    }

    /// Same as [`Credential::from_env`] with a custom source for the value.
    pub fn with_lookup(var: impl Into<String>, lookup: fn(&str) -> Option<String>) -> Self {
        Self { var: var.into(), lookup }
    }

    pub fn var(&self) -> &str {
        &self.var
    }

    pub fn require(&self) -> Result<String> {
        match (self.lookup)(&self.var) {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(ValidatorError::Configuration(format!(
                "{} is not set in the environment",
                self.var
            ))),
        }
    }
}

impl Default for Credential {
    fn default() -> Self {
        Self::from_env(DEFAULT_API_KEY_ENV)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        settings: Settings,
    }

    #[test]
    fn defaults_match_local_dev_setup() {
        let cli = Cli::try_parse_from(["test"]).unwrap();
        let s = cli.settings;
        assert_eq!(s.bind.port(), 8000);
        assert_eq!(s.cors_origins, vec!["http://localhost:5173".to_string()]);
        assert_eq!(s.api_key_env, "OPENAI_API_KEY");
        assert_eq!(s.crew_timeout(), Duration::from_secs(600));
    }

    #[test]
    fn cors_origins_split_on_commas() {
        let cli = Cli::try_parse_from([
            "test",
            "--cors-origins",
            "http://a.test,http://b.test",
            "--crew-timeout-secs",
            "30",
        ])
        .unwrap();
        assert_eq!(cli.settings.cors_origins.len(), 2);
        assert_eq!(cli.settings.crew_timeout_secs, 30);
    }

    #[test]
    fn missing_key_is_configuration_error() {
        let cred = Credential::with_lookup("OPENAI_API_KEY", |_| None);
        let err = cred.require().unwrap_err();
        assert!(matches!(err, ValidatorError::Configuration(_)));
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn blank_key_is_configuration_error() {
        let cred = Credential::with_lookup("OPENAI_API_KEY", |_| Some("   ".into()));
        assert!(cred.require().is_err());
    }

    #[test]
    fn present_key_is_returned() {
        let cred = Credential::with_lookup("OPENAI_API_KEY", |_| Some("sk-test".into()));
        assert_eq!(cred.var(), "OPENAI_API_KEY");
        assert_eq!(cred.require().unwrap(), "sk-test");
    }
}
