use crate::registry::{self, DIRECTIVE_MARKER};
use crate::splitter;

/// Advisory structural checks over a job script. Accumulates human-readable
/// messages and never fails; an empty report means the script is clean.
/// Blank input short-circuits with a single message.
pub fn validate(script: &str) -> Vec<String> {
    if script.trim().is_empty() {
        return vec!["Script content cannot be empty".to_string()];
    }

    let mut errors = Vec::new();

    let first_line = script.lines().map(str::trim).find(|line| !line.is_empty());
    if !first_line.is_some_and(|line| line.starts_with("#!")) {
        errors.push("Script should start with a shebang (e.g., #!/bin/bash)".to_string());
    }

    let (directives, commands) = splitter::split(script);
    if !directives.contains_key("job_name") {
        errors.push("Job name is required (--job-name)".to_string());
    }
    if commands.is_empty() {
        errors.push("Script must contain executable commands".to_string());
    }

    for (index, raw) in script.lines().enumerate() {
        let line = raw.trim();
        if line.starts_with(DIRECTIVE_MARKER) && registry::recognize(line).is_none() {
            errors.push(format!(
                "Unrecognized directive at line {}: {}",
                index + 1,
                line
            ));
        }
    }

    errors
}
