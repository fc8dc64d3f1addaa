//! Seam to the agent crew that runs the analysis stages.
//!
//! The crew (business analyst, market researcher, financial forecaster and
//! the final validator) is configured and executed elsewhere. This crate only
//! hands it the two named inputs and reads back the stage outputs.

use anyhow::Result;

use crate::types::{CrewInputs, CrewOutput};

pub mod remote;

pub use remote::{CrewError, RemoteCrew};

#[async_trait::async_trait]
pub trait Crew: Send + Sync {
    /// Run every configured stage against `inputs` and return their outputs
    /// in execution order. `api_key` is the model provider credential.
    async fn kickoff(&self, inputs: &CrewInputs, api_key: &str) -> Result<CrewOutput>;
}
