//! Startup viability reports from an agent crew.
//!
//! A request carries a business idea and the founder's background. The crew
//! runs its analysis stages and the final stage embeds the report in its text
//! as a fenced json block, which [`extraction`] finds and parses.

pub mod config;
pub mod crew;
pub mod error;
pub mod extraction;
pub mod segments;
pub mod server;
pub mod types;
pub mod validator;

pub use config::{Credential, Settings};
pub use crew::{Crew, RemoteCrew};
pub use error::ValidatorError;
pub use extraction::{extract_report, find_fenced_json};
pub use types::{CrewInputs, CrewOutput, TaskOutput, ValidationReport, ValidationRequest};
pub use validator::Validator;
