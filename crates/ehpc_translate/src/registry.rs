use regex::Regex;
use std::sync::LazyLock;

/// Prefix that marks a scheduler directive line.
pub const DIRECTIVE_MARKER: &str = "#SBATCH";

/// Free-form value.
const CAPTURE_ANY: &str = r"(.+)";
/// Non-negative integer value.
const CAPTURE_INT: &str = r"(\d+)";
/// Integer with optional memory unit suffix.
const CAPTURE_MEM: &str = r"(\d+[KMGkmg]?)";

pub struct DirectivePattern {
    pub name: &'static str,
    regex: Regex,
}

fn value_pattern(
    name: &'static str,
    longs: &[&str],
    shorts: &[&str],
    capture: &str,
) -> DirectivePattern {
    let mut alts = Vec::new();
    for flag in longs {
        alts.push(format!("{flag}="));
        alts.push(format!(r"{flag}\s+"));
    }
    for flag in shorts {
        alts.push(format!(r"{flag}\s+"));
        alts.push(format!("{flag}="));
    }
    let pattern = format!(
        r"^{DIRECTIVE_MARKER}\s+(?:{}){capture}$",
        alts.join("|")
    );
    DirectivePattern {
        name,
        regex: Regex::new(&pattern).expect("static regex must compile"),
    }
}

fn flag_pattern(name: &'static str, long: &str) -> DirectivePattern {
    let pattern = format!(r"^{DIRECTIVE_MARKER}\s+{long}$");
    DirectivePattern {
        name,
        regex: Regex::new(&pattern).expect("static regex must compile"),
    }
}

/// Ordered directive table. Recognition tries each entry top to bottom and
/// the first matching pattern wins, so more specific spellings (e.g.
/// `--ntasks-per-node`) must not be shadowed by a prefix sibling; the `=` /
/// whitespace alternates keep `--mem` from swallowing `--mem-per-cpu`.
static DIRECTIVES: LazyLock<Vec<DirectivePattern>> = LazyLock::new(|| {
    vec![
        value_pattern("job_name", &["--job-name"], &["-J"], CAPTURE_ANY),
        value_pattern("partition", &["--partition"], &["-p"], CAPTURE_ANY),
        value_pattern("nodes", &["--nodes"], &["-N"], CAPTURE_INT),
        value_pattern("ntasks", &["--ntasks"], &["-n"], CAPTURE_INT),
        value_pattern("ntasks_per_node", &["--ntasks-per-node"], &[], CAPTURE_INT),
        value_pattern("cpus_per_task", &["--cpus-per-task"], &["-c"], CAPTURE_INT),
        value_pattern("memory", &["--mem"], &[], CAPTURE_MEM),
        value_pattern("memory_per_cpu", &["--mem-per-cpu"], &[], CAPTURE_MEM),
        value_pattern("time", &["--time"], &["-t"], CAPTURE_ANY),
        value_pattern("output", &["--output"], &["-o"], CAPTURE_ANY),
        value_pattern("error", &["--error"], &["-e"], CAPTURE_ANY),
        value_pattern("workdir", &["--chdir", "--workdir"], &["-D"], CAPTURE_ANY),
        value_pattern("array", &["--array"], &["-a"], CAPTURE_ANY),
        value_pattern("dependency", &["--dependency"], &["-d"], CAPTURE_ANY),
        value_pattern("gres", &["--gres"], &[], CAPTURE_ANY),
        value_pattern("constraint", &["--constraint"], &["-C"], CAPTURE_ANY),
        flag_pattern("exclusive", "--exclusive"),
        value_pattern("mail_type", &["--mail-type"], &[], CAPTURE_ANY),
        value_pattern("mail_user", &["--mail-user"], &[], CAPTURE_ANY),
        value_pattern("account", &["--account"], &["-A"], CAPTURE_ANY),
        value_pattern("qos", &["--qos"], &["-q"], CAPTURE_ANY),
    ]
});

/// Matches a trimmed directive line against the table. Returns the canonical
/// directive name and the raw captured value (empty for bare flags such as
/// `--exclusive`), or `None` when no registered pattern matches. Unmatched
/// lines are not an error at this layer; the validator reports them.
pub fn recognize(line: &str) -> Option<(&'static str, String)> {
    for directive in DIRECTIVES.iter() {
        if let Some(caps) = directive.regex.captures(line) {
            let raw = caps
                .get(1)
                .map(|m| m.as_str().trim_end().to_string())
                .unwrap_or_default();
            return Some((directive.name, raw));
        }
    }
    None
}

/// Canonical directive names in table order.
pub fn supported_directives() -> Vec<&'static str> {
    DIRECTIVES.iter().map(|d| d.name).collect()
}
