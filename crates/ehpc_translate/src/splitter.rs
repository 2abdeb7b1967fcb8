use std::collections::HashMap;
use tracing::debug;

use crate::registry::{self, DIRECTIVE_MARKER};

/// Canonical directive name -> raw captured value. One value per directive:
/// when a directive repeats, the last occurrence in line order wins.
pub type ParsedDirectives = HashMap<&'static str, String>;

/// Executable lines in script order.
pub type CommandLines = Vec<String>;

/// Splits a script into recognized directives and command lines.
///
/// Each line is trimmed and classified: blanks and shebangs are dropped,
/// directive-marker lines are dispatched to the registry (unmatched ones are
/// dropped, not treated as commands), remaining comments are dropped, and
/// everything else is kept as a command line in order.
pub fn split(script: &str) -> (ParsedDirectives, CommandLines) {
    let mut directives = ParsedDirectives::new();
    let mut commands = CommandLines::new();

    for raw in script.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with("#!") {
            continue;
        }
        if line.starts_with(DIRECTIVE_MARKER) {
            match registry::recognize(line) {
                Some((name, value)) => {
                    directives.insert(name, value);
                }
                None => debug!(line, "dropping unrecognized directive line"),
            }
            continue;
        }
        if line.starts_with('#') {
            continue;
        }
        commands.push(line.to_string());
    }

    (directives, commands)
}
