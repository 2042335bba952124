use serde_json::Value;

use crate::error::StatsError;
use crate::scoring::StatsReport;

/// Render the report as pretty-printed JSON. Absent optional sections are
/// absent keys, not nulls, and output is identical across runs for the
/// same report.
///
/// The object check guards an internal invariant: the engine always
/// produces a mapping-shaped report. Anything else is a defect and
/// surfaces as [`StatsError::InputShape`].
pub fn render_json(report: &StatsReport) -> Result<String, StatsError> {
    let value =
        serde_json::to_value(report).map_err(|e| StatsError::InputShape(e.to_string()))?;

    if !value.is_object() {
        return Err(StatsError::InputShape(format!(
            "expected a JSON object, got {}",
            type_name(&value)
        )));
    }

    serde_json::to_string_pretty(&value).map_err(|e| StatsError::InputShape(e.to_string()))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
