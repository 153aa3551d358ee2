use atty::Stream;
use color_eyre::Result;
use nppub_core::{CommandStatus, ExecutionOutcome, GlobalOptions};
use serde_json::Value;

use crate::style::Style;

pub fn emit_output(
    global: &GlobalOptions,
    no_color: bool,
    outcome: &ExecutionOutcome,
) -> Result<i32> {
    let code = outcome.exit_code();

    if global.json {
        let payload = nppub_core::to_json_response(outcome);
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(code);
    }
    if global.quiet {
        return Ok(code);
    }

    let style = Style::new(no_color, atty::is(Stream::Stdout));
    let message = nppub_core::format_status_message(&outcome.message);
    println!("{}", style.status(outcome.status, &message));
    match outcome.status {
        CommandStatus::Ok => {
            for line in option_lines(&outcome.details) {
                println!("{}", style.info(&line));
            }
        }
        CommandStatus::UserError | CommandStatus::Failure => {
            if let Some(hint) = hint_from_details(&outcome.details) {
                println!("{}", style.info(&format!("Hint: {hint}")));
            }
        }
    }
    Ok(code)
}

fn hint_from_details(details: &Value) -> Option<&str> {
    details
        .as_object()
        .and_then(|map| map.get("hint"))
        .and_then(Value::as_str)
}

/// One `name: value` line per resolved option, marking fallbacks.
fn option_lines(details: &Value) -> Vec<String> {
    let Some(options) = details.get("options").and_then(Value::as_object) else {
        return Vec::new();
    };
    options
        .iter()
        .map(|(name, value)| match value {
            Value::Object(tracked) => {
                let shown = render_value(tracked.get("value").unwrap_or(&Value::Null));
                let is_default = tracked
                    .get("is_default")
                    .and_then(Value::as_bool)
                    .unwrap_or(false);
                if is_default {
                    format!("  {name}: {shown} (default)")
                } else {
                    format!("  {name}: {shown}")
                }
            }
            other => format!("  {name}: {}", render_value(other)),
        })
        .collect()
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "unset".to_string(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn option_lines_mark_defaults_and_unset_values() {
        let details = json!({
            "options": {
                "access": { "value": null, "is_default": true },
                "registry": "https://registry.npmjs.org/",
                "tag": { "value": "next", "is_default": false },
            }
        });
        let lines = option_lines(&details);
        assert!(lines.contains(&"  access: unset (default)".to_string()), "{lines:?}");
        assert!(lines.contains(&"  registry: https://registry.npmjs.org/".to_string()));
        assert!(lines.contains(&"  tag: next".to_string()));
    }

    #[test]
    fn hint_is_read_from_details() {
        let details = json!({ "hint": "Use --access public." });
        assert_eq!(hint_from_details(&details), Some("Use --access public."));
        assert_eq!(hint_from_details(&json!("plain")), None);
    }
}
