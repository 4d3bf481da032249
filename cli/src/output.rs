//! Output rendering for action results.
//!
//! Every handler produces an [`ActionOutput`] holding both shapes: plain
//! text lines for the terminal and a JSON value for `--json`. Rendering
//! picks one at the very end, so handlers never branch on the flag.

use serde_json::Value;

/// The action catalog: (group, action, summary). Shown when the binary is
/// run without a subcommand.
const ACTIONS: &[(&str, &str, &str)] = &[
    (
        "random",
        "random-text",
        "Generate random strings from character classes or an alphabet",
    ),
    (
        "random",
        "random-number",
        "Draw an integer from an inclusive range",
    ),
    ("random", "uuid", "Mint version-4 UUIDs"),
    ("random", "pick", "Choose one item from a list"),
    ("random", "shuffle", "Reorder a list"),
    (
        "text",
        "case",
        "Recase text (pascal, camel, snake, constant, dash)",
    ),
    (
        "dates",
        "days-between",
        "Whole days between two calendar dates",
    ),
    (
        "dates",
        "shift-date",
        "Move an instant by minutes, hours, days, or weeks",
    ),
    ("dates", "format-date", "Render an instant in a named style"),
    ("web", "fetch-json", "GET a URL and print the JSON response"),
];

/// One action's result in both output shapes.
pub struct ActionOutput {
    pub lines: Vec<String>,
    pub json: Value,
}

impl ActionOutput {
    /// Single-value result: one text line, `{"value": ...}` as JSON.
    pub fn value(value: Value) -> Self {
        let line = match &value {
            // Strings print bare in text mode, without JSON quoting.
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        Self {
            lines: vec![line],
            json: serde_json::json!({ "value": value }),
        }
    }

    /// Multi-value result: one text line per item, `{"values": [...]}` as
    /// JSON.
    pub fn values(items: Vec<String>) -> Self {
        let json = serde_json::json!({ "values": items.clone() });
        Self { lines: items, json }
    }
}

/// The catalog screen: where the actions are and what they do.
pub fn catalog() -> ActionOutput {
    let mut lines = vec![
        "actionkit - utility actions for the shell".to_string(),
        String::new(),
    ];

    let mut current_group = "";
    for (group, action, summary) in ACTIONS {
        if *group != current_group {
            if !current_group.is_empty() {
                lines.push(String::new());
            }
            lines.push(format!("{group}:"));
            current_group = group;
        }
        lines.push(format!("  {action:<14} {summary}"));
    }

    lines.push(String::new());
    lines.push(
        "Run 'actionkit <action> --help' for usage. Global flags: --seed, --json, -v."
            .to_string(),
    );

    let entries: Vec<Value> = ACTIONS
        .iter()
        .map(|(group, action, summary)| {
            serde_json::json!({
                "group": group,
                "action": action,
                "summary": summary,
            })
        })
        .collect();

    ActionOutput {
        lines,
        json: Value::Array(entries),
    }
}

/// Render to stdout in the requested mode.
pub fn print(output: &ActionOutput, as_json: bool) -> Result<(), serde_json::Error> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(&output.json)?);
    } else {
        for line in &output.lines {
            println!("{line}");
        }
    }
    Ok(())
}
