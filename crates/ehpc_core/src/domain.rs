use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// Section 0: Primitive Types & Identifiers
pub type JobId = String;

/// Backend-agnostic job state vocabulary, as reported by the submission
/// client for a previously submitted job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobState {
    Queued,
    Running,
    Completed,
    Suspended,
    Undetermined,
}

// Section 1: Translation Configuration
/// Defaults and name mappings applied while building a descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParserConfig {
    pub default_queue: String,
    pub default_memory_mb: u64,
    pub default_walltime_secs: u64,
    pub default_cores: u32,
    /// Scheduler partition name -> backend queue name. Partitions absent
    /// from the map pass through unchanged.
    pub queue_mapping: HashMap<String, String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            default_queue: "normal".to_string(),
            default_memory_mb: 1024,
            default_walltime_secs: 3600,
            default_cores: 1,
            queue_mapping: HashMap::new(),
        }
    }
}

// Section 2: Output Descriptor
/// Normalized job submission request, keyed with the E-HPC wire field names
/// when serialized. Optional fields are omitted entirely when not derivable
/// from the script, never serialized as null.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JobDescriptor {
    #[serde(rename = "Name")]
    pub name: String,
    /// Command lines joined with " && " so the backend runs them as one
    /// fail-fast sequence.
    #[serde(rename = "CommandLine")]
    pub command_line: String,
    #[serde(rename = "JobQueue")]
    pub queue: String,
    #[serde(rename = "WorkingDir", skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<String>,
    #[serde(rename = "StdoutRedirectPath", skip_serializing_if = "Option::is_none")]
    pub stdout_path: Option<String>,
    #[serde(rename = "StderrRedirectPath", skip_serializing_if = "Option::is_none")]
    pub stderr_path: Option<String>,
    #[serde(rename = "Node", skip_serializing_if = "Option::is_none")]
    pub node_count: Option<u64>,
    #[serde(rename = "Task", skip_serializing_if = "Option::is_none")]
    pub task_count: Option<u64>,
    #[serde(rename = "Thread")]
    pub thread_count: u32,
    #[serde(rename = "MemSize")]
    pub memory_mb: u64,
    #[serde(rename = "ClockTime")]
    pub wall_time_secs: u64,
    #[serde(rename = "ArrayRequest", skip_serializing_if = "Option::is_none")]
    pub array_spec: Option<String>,
    /// Normalized "relation:jobid" tokens, script order preserved.
    #[serde(rename = "Dependencies", skip_serializing_if = "Vec::is_empty", default)]
    pub dependencies: Vec<String>,
    #[serde(rename = "Gpu", skip_serializing_if = "Option::is_none")]
    pub gpu_count: Option<u64>,
    #[serde(rename = "GpuType", skip_serializing_if = "Option::is_none")]
    pub gpu_type: Option<String>,
    #[serde(rename = "AccountingId", skip_serializing_if = "Option::is_none")]
    pub accounting_id: Option<String>,
    #[serde(rename = "QoS", skip_serializing_if = "Option::is_none")]
    pub qos: Option<String>,
    #[serde(rename = "Constraints", skip_serializing_if = "Option::is_none")]
    pub constraints: Option<String>,
    #[serde(rename = "Exclusive", skip_serializing_if = "std::ops::Not::not", default)]
    pub exclusive: bool,
    #[serde(rename = "MailType", skip_serializing_if = "Option::is_none")]
    pub mail_type: Option<String>,
    #[serde(rename = "MailUser", skip_serializing_if = "Option::is_none")]
    pub mail_user: Option<String>,
}
