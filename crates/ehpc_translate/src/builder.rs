use tracing::debug;

use ehpc_core::{JobDescriptor, ParserConfig, TranslateError, UnitError};

use crate::splitter::{CommandLines, ParsedDirectives};
use crate::units;

/// Composes recognized directives and command lines into a complete job
/// descriptor. Either every field resolves or an error is returned; there is
/// no partial descriptor. Unit failures carry the offending directive name.
pub fn build(
    directives: &ParsedDirectives,
    commands: &CommandLines,
    config: &ParserConfig,
) -> Result<JobDescriptor, TranslateError> {
    if commands.is_empty() {
        return Err(TranslateError::EmptyScript);
    }

    let name = directives
        .get("job_name")
        .cloned()
        .unwrap_or_else(|| "unnamed_job".to_string());

    let command_line = commands.join(" && ");

    let queue = match directives.get("partition") {
        Some(partition) => config
            .queue_mapping
            .get(partition)
            .cloned()
            .unwrap_or_else(|| partition.clone()),
        None => config.default_queue.clone(),
    };

    let node_count = directives
        .get("nodes")
        .map(|raw| count("nodes", raw))
        .transpose()?;

    let task_count = match (directives.get("ntasks"), directives.get("ntasks_per_node")) {
        (Some(raw), _) => Some(count("ntasks", raw)?),
        (None, Some(raw)) => match node_count {
            Some(nodes) => Some(count("ntasks_per_node", raw)?.saturating_mul(nodes)),
            None => None,
        },
        (None, None) => None,
    };

    let thread_count = match directives.get("cpus_per_task") {
        Some(raw) => u32::try_from(count("cpus_per_task", raw)?)
            .map_err(|_| TranslateError::unit("cpus_per_task", UnitError::Count(raw.clone())))?,
        None => config.default_cores,
    };

    // `memory` wins outright; `memory_per_cpu` only applies in its absence
    // and scales with the resolved thread count.
    let memory_mb = match (directives.get("memory"), directives.get("memory_per_cpu")) {
        (Some(raw), _) => units::parse_memory(raw)
            .map_err(|source| TranslateError::unit("memory", source))?,
        (None, Some(raw)) => units::parse_memory(raw)
            .map_err(|source| TranslateError::unit("memory_per_cpu", source))?
            .saturating_mul(u64::from(thread_count)),
        (None, None) => config.default_memory_mb,
    };

    let wall_time_secs = match directives.get("time") {
        Some(raw) => {
            units::parse_time(raw).map_err(|source| TranslateError::unit("time", source))?
        }
        None => config.default_walltime_secs,
    };

    let dependencies = directives
        .get("dependency")
        .map(|raw| parse_dependencies(raw))
        .unwrap_or_default();

    let (gpu_count, gpu_type) = match directives.get("gres") {
        Some(raw) => parse_gres(raw),
        None => (None, None),
    };

    Ok(JobDescriptor {
        name,
        command_line,
        queue,
        working_dir: directives.get("workdir").cloned(),
        stdout_path: directives.get("output").cloned(),
        stderr_path: directives.get("error").cloned(),
        node_count,
        task_count,
        thread_count,
        memory_mb,
        wall_time_secs,
        array_spec: directives.get("array").cloned(),
        dependencies,
        gpu_count,
        gpu_type,
        accounting_id: directives.get("account").cloned(),
        qos: directives.get("qos").cloned(),
        constraints: directives.get("constraint").cloned(),
        exclusive: directives.contains_key("exclusive"),
        mail_type: directives.get("mail_type").cloned(),
        mail_user: directives.get("mail_user").cloned(),
    })
}

/// Normalizes a comma-separated dependency expression. `after:ID` and bare
/// IDs both collapse to `afterok:ID`; order and duplicates are preserved.
fn parse_dependencies(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            for relation in ["afterok", "afternotok", "afterany"] {
                if let Some(id) = token
                    .strip_prefix(relation)
                    .and_then(|rest| rest.strip_prefix(':'))
                {
                    return format!("{relation}:{id}");
                }
            }
            if let Some(id) = token.strip_prefix("after:") {
                return format!("afterok:{id}");
            }
            format!("afterok:{token}")
        })
        .collect()
}

/// Understands GPU generic resources only: `gpu:N` and `gpu:TYPE:N`. Every
/// other gres expression is dropped without complaint.
fn parse_gres(raw: &str) -> (Option<u64>, Option<String>) {
    let fields: Vec<&str> = raw.split(':').collect();
    match fields.as_slice() {
        ["gpu", n] => match n.parse::<u64>() {
            Ok(n) => (Some(n), None),
            Err(_) => {
                debug!(gres = raw, "ignoring gres with non-numeric gpu count");
                (None, None)
            }
        },
        ["gpu", gpu_type, n] => match n.parse::<u64>() {
            Ok(n) => (Some(n), Some((*gpu_type).to_string())),
            Err(_) => {
                debug!(gres = raw, "ignoring gres with non-numeric gpu count");
                (None, None)
            }
        },
        _ => {
            debug!(gres = raw, "ignoring non-gpu gres expression");
            (None, None)
        }
    }
}

/// Fallible integer parse for count directives. The registry already limits
/// these to digit strings, so only overflow can get here.
fn count(directive: &'static str, raw: &str) -> Result<u64, TranslateError> {
    raw.parse::<u64>()
        .map_err(|_| TranslateError::unit(directive, UnitError::Count(raw.to_string())))
}
