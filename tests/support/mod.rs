use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use startup_validator::{Credential, Crew, CrewInputs, CrewOutput, TaskOutput, Validator};

/// Crew that replays canned stage outputs, or fails with `error`.
pub struct FakeCrew {
    pub stages: Vec<TaskOutput>,
    pub error: Option<&'static str>,
    pub calls: AtomicUsize,
}

impl FakeCrew {
    pub fn with_stages(raws: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            stages: raws.iter().map(|r| TaskOutput::from_raw(*r)).collect(),
            error: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(msg: &'static str) -> Arc<Self> {
        Arc::new(Self { stages: vec![], error: Some(msg), calls: AtomicUsize::new(0) })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Crew for FakeCrew {
    async fn kickoff(&self, _inputs: &CrewInputs, _api_key: &str) -> Result<CrewOutput> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.error {
            Some(msg) => Err(anyhow::anyhow!(msg)),
            None => Ok(CrewOutput::new(self.stages.clone())),
        }
    }
}

pub fn key_present() -> Credential {
    Credential::with_lookup("OPENAI_API_KEY", |_| Some("sk-test".into()))
}

pub fn key_absent() -> Credential {
    Credential::with_lookup("OPENAI_API_KEY", |_| None)
}

pub fn validator(crew: Arc<FakeCrew>, credential: Credential) -> Validator {
    Validator::new(crew, credential)
}
