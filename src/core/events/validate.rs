use serde_json::Value;

/// Check a raw payload against the rules for its event type. Returns a list of
/// error strings; empty means valid. Event types without rules are accepted;
/// the permissive default is intentional.
pub fn validate(payload: &Value, event_type: &str) -> Vec<String> {
    match event_type {
        // The receiver answers pings before validation; accept them here too.
        "ping" => Vec::new(),
        "push" => {
            let mut missing = Vec::new();
            if payload.get("ref").is_none() {
                missing.push("ref");
            }
            if payload.get("after").is_none() {
                missing.push("after");
            }
            combined(missing.into_iter().map(str::to_string).collect())
        }
        "workflow_run" => {
            if payload.get("workflow_run").is_none() {
                return vec!["Missing workflow_run information".to_string()];
            }
            let run = &payload["workflow_run"];
            let mut missing = Vec::new();
            for field in ["id", "name", "status"] {
                if is_blank(run.get(field)) {
                    missing.push(format!("workflow_run.{field}"));
                }
            }
            combined(missing)
        }
        _ => Vec::new(),
    }
}

fn combined(missing: Vec<String>) -> Vec<String> {
    if missing.is_empty() {
        Vec::new()
    } else {
        vec![format!("Missing required fields: {}", missing.join(", "))]
    }
}

// Run ids are numeric on the wire; zero, empty, null, and false all count as
// absent, matching the upstream platform's notion of an unset field.
fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Object(map)) => map.is_empty(),
    }
}
