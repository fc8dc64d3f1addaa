use serde_json::Value;
use tracing::debug;

use crate::error::{Result, ValidatorError};
use crate::types::{TaskOutput, ValidationReport};

const OPEN_FENCE: &str = "```json\n";
const CLOSE_FENCE: &str = "```";

/// Body of the first ```` ```json ```` block in `text`, trimmed.
///
/// The closing fence is searched only after the opening one, so a stray fence
/// earlier in the text never produces an inverted span.
pub fn find_fenced_json(text: &str) -> Option<&str> {
    let start = text.find(OPEN_FENCE)? + OPEN_FENCE.len();
    let end = text[start..].find(CLOSE_FENCE)? + start;
    Some(text[start..end].trim())
}

/// Scan the stage outputs in order and return the first report whose fenced
/// JSON block parses. Later records are never looked at once one matches.
pub fn extract_report(tasks: Option<&[TaskOutput]>) -> Result<ValidationReport> {
    let tasks = match tasks {
        Some(t) if !t.is_empty() => t,
        _ => return Err(ValidatorError::InvalidPipelineOutput),
    };

    for (idx, task) in tasks.iter().enumerate() {
        let agent = task.agent.as_deref().unwrap_or("-");
        let Some(raw) = task.raw.as_deref() else {
            debug!(idx, agent, "task output has no raw text");
            continue;
        };
        let Some(block) = find_fenced_json(raw) else {
            debug!(idx, agent, "no json block in task output");
            continue;
        };
        match serde_json::from_str::<Value>(block) {
            Ok(v) => {
                debug!(idx, agent, "validation report found");
                return Ok(ValidationReport(v));
            }
            Err(e) => debug!(idx, agent, error = %e, "json block did not parse"),
        }
    }

    Err(ValidatorError::MissingValidationReport)
}
