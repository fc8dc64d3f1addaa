use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use super::Crew;
use crate::types::{CrewInputs, CrewOutput};

#[derive(Error, Debug)]
pub enum CrewError {
    #[error("crew request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("crew runner returned {status}: {body}")]
    Runner { status: u16, body: String },
}

#[derive(Serialize)]
struct KickoffReq<'a> {
    inputs: &'a CrewInputs,
}

/// Crew hosted by a runner service that exposes a single kickoff URL.
#[derive(Clone)]
pub struct RemoteCrew {
    http: Client,
    kickoff_url: String,
}

impl RemoteCrew {
    pub fn new(kickoff_url: String, timeout: Duration) -> Result<Self, CrewError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, kickoff_url: kickoff_url.trim_end_matches('/').to_string() })
    }

    pub fn kickoff_url(&self) -> &str {
        &self.kickoff_url
    }

    async fn post_kickoff(&self, inputs: &CrewInputs, api_key: &str) -> Result<Value, CrewError> {
        info!(url = %self.kickoff_url, "kicking off crew");
        let resp = self
            .http
            .post(&self.kickoff_url)
            .bearer_auth(api_key)
            .json(&KickoffReq { inputs })
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = match resp.text().await {
                Ok(body) => body,
                Err(e) => format!("<body unreadable: {e}>"),
            };
            return Err(CrewError::Runner { status: status.as_u16(), body });
        }
        Ok(resp.json::<Value>().await?)
    }
}

#[async_trait::async_trait]
impl Crew for RemoteCrew {
    async fn kickoff(&self, inputs: &CrewInputs, api_key: &str) -> anyhow::Result<CrewOutput> {
        let body = self.post_kickoff(inputs, api_key).await?;
        let out = CrewOutput::from_value(&body);
        info!(tasks = out.tasks().map_or(0, <[_]>::len), "crew finished");
        Ok(out)
    }
}
