use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /validate-startup`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationRequest {
    pub startup_idea: String,
    pub entrepreneur_background: String,
}

/// Named inputs interpolated into the crew's task templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewInputs {
    pub business_idea: String,
    pub entrepreneur_background: String,
}

impl From<&ValidationRequest> for CrewInputs {
    fn from(req: &ValidationRequest) -> Self {
        Self {
            business_idea: req.startup_idea.clone(),
            entrepreneur_background: req.entrepreneur_background.clone(),
        }
    }
}

/// One stage result as reported by the crew. Only `raw` matters to extraction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskOutput {
    #[serde(default)]
    pub raw: Option<String>,
    #[serde(default)]
    pub agent: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl TaskOutput {
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self { raw: Some(raw.into()), ..Self::default() }
    }

    /// Lenient decode: anything that is not an object, or has a non-string
    /// field, yields a record without that field.
    pub fn from_value(v: &Value) -> Self {
        let text = |key: &str| v.get(key).and_then(Value::as_str).map(str::to_owned);
        Self {
            raw: text("raw"),
            agent: text("agent"),
            name: text("name"),
            description: text("description"),
        }
    }
}

/// What a crew kickoff returns: the stage outputs in execution order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrewOutput {
    tasks_output: Option<Vec<TaskOutput>>,
}

impl CrewOutput {
    pub fn new(tasks_output: Vec<TaskOutput>) -> Self {
        Self { tasks_output: Some(tasks_output) }
    }

    /// Output with no stage sequence at all.
    pub fn missing() -> Self {
        Self { tasks_output: None }
    }

    /// Decode a runner response. `tasks_output` that is absent or not an
    /// array leaves the sequence unset.
    pub fn from_value(v: &Value) -> Self {
        let tasks_output = v
            .get("tasks_output")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(TaskOutput::from_value).collect());
        Self { tasks_output }
    }

    pub fn tasks(&self) -> Option<&[TaskOutput]> {
        self.tasks_output.as_deref()
    }
}

/// The final report, whatever JSON the validator agent produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationReport(pub Value);

impl ValidationReport {
    pub fn into_inner(self) -> Value {
        self.0
    }

    /// `viability_score.overall_score` of the usual report layout, if the
    /// model followed it.
    pub fn overall_score(&self) -> Option<f64> {
        self.0
            .pointer("/startup_validation_report/viability_score/overall_score")
            .and_then(Value::as_f64)
    }
}
