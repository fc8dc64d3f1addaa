use std::sync::Arc;

use tracing::{debug, error, info};

use crate::config::Credential;
use crate::crew::Crew;
use crate::error::{Result, ValidatorError};
use crate::extraction::extract_report;
use crate::segments::preview;
use crate::types::{CrewInputs, ValidationReport, ValidationRequest};

const LOG_PREVIEW: usize = 50;

/// Runs one crew kickoff per request and pulls the report out of its stages.
#[derive(Clone)]
pub struct Validator {
    crew: Arc<dyn Crew>,
    credential: Credential,
}

impl Validator {
    pub fn new(crew: Arc<dyn Crew>, credential: Credential) -> Self {
        Self { crew, credential }
    }

    pub async fn validate(&self, idea: &str, background: &str) -> Result<ValidationReport> {
        let req = ValidationRequest {
            startup_idea: idea.to_owned(),
            entrepreneur_background: background.to_owned(),
        };
        self.validate_request(&req).await
    }

    pub async fn validate_request(&self, req: &ValidationRequest) -> Result<ValidationReport> {
        info!(idea = %preview(&req.startup_idea, LOG_PREVIEW), "validation requested");
        info!(background = %preview(&req.entrepreneur_background, LOG_PREVIEW), "entrepreneur background");

        let outcome = self.run(req).await;
        match &outcome {
            Ok(report) => info!(overall_score = ?report.overall_score(), "startup report generated"),
            Err(e) => error!(error = %e, "startup report failed"),
        }
        outcome
    }

    async fn run(&self, req: &ValidationRequest) -> Result<ValidationReport> {
        // checked before kickoff so a missing key never costs a crew run
        let api_key = self.credential.require()?;
        debug!(key_var = self.credential.var(), "provider credential present");
        let inputs = CrewInputs::from(req);
        let output = self
            .crew
            .kickoff(&inputs, &api_key)
            .await
            .map_err(ValidatorError::Pipeline)?;
        extract_report(output.tasks())
    }
}
