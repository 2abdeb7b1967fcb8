//! Translation engine turning an annotated batch job script into a
//! normalized, backend-agnostic job descriptor.
//!
//! The pipeline is: [`splitter`] separates directive lines from command
//! lines, [`registry`] recognizes each directive, [`units`] normalizes time
//! and memory literals, and [`builder`] composes the final
//! [`JobDescriptor`]. [`validator`] runs the same registry independently to
//! produce an advisory report. Everything is synchronous and allocation-local;
//! the directive table is built once and shared read-only.

pub mod builder;
pub mod registry;
pub mod splitter;
pub mod units;
pub mod validator;

pub use ehpc_core::{JobDescriptor, ParserConfig, TranslateError, UnitError};
pub use registry::supported_directives;

/// Entry point owning the translation configuration.
pub struct ScriptTranslator {
    config: ParserConfig,
}

impl ScriptTranslator {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(ParserConfig::default())
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Translates a script into a descriptor. Blank input and scripts with
    /// no executable commands are fatal; unrecognized directive lines are
    /// skipped (use [`ScriptTranslator::validate`] to surface them).
    pub fn translate(&self, script: &str) -> Result<JobDescriptor, TranslateError> {
        if script.trim().is_empty() {
            return Err(TranslateError::EmptyInput);
        }
        let (directives, commands) = splitter::split(script);
        builder::build(&directives, &commands, &self.config)
    }

    /// Advisory structural report; never fails. The same script may still
    /// translate: validation is strict where building is permissive.
    pub fn validate(&self, script: &str) -> Vec<String> {
        validator::validate(script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MPI_SCRIPT: &str = "#!/bin/bash\n\
        #SBATCH --job-name=mandelbrot_mpi\n\
        #SBATCH --partition=compute\n\
        #SBATCH --nodes=2\n\
        #SBATCH --ntasks-per-node=16\n\
        #SBATCH --cpus-per-task=2\n\
        #SBATCH --mem-per-cpu=512\n\
        #SBATCH --time=1:30\n\
        #SBATCH --output=mandelbrot_%j.out\n\
        #SBATCH --gres=gpu:v100:2\n\
        #SBATCH --dependency=afterok:101,102\n\
        \n\
        module load openmpi\n\
        mpirun ./mandelbrot_mpi\n";

    #[test]
    fn end_to_end_translation() {
        let desc = ScriptTranslator::with_defaults().translate(MPI_SCRIPT).unwrap();

        assert_eq!(desc.name, "mandelbrot_mpi");
        assert_eq!(desc.queue, "compute");
        assert_eq!(desc.node_count, Some(2));
        assert_eq!(desc.task_count, Some(32));
        assert_eq!(desc.thread_count, 2);
        assert_eq!(desc.memory_mb, 1024);
        assert_eq!(desc.wall_time_secs, 5400);
        assert_eq!(desc.stdout_path.as_deref(), Some("mandelbrot_%j.out"));
        assert_eq!(desc.gpu_count, Some(2));
        assert_eq!(desc.gpu_type.as_deref(), Some("v100"));
        assert_eq!(desc.dependencies, vec!["afterok:101", "afterok:102"]);
        assert_eq!(
            desc.command_line,
            "module load openmpi && mpirun ./mandelbrot_mpi"
        );
    }

    #[test]
    fn wire_serialization_of_translated_script() {
        let desc = ScriptTranslator::with_defaults().translate(MPI_SCRIPT).unwrap();
        let json = serde_json::to_value(&desc).unwrap();

        assert_eq!(json["Name"], "mandelbrot_mpi");
        assert_eq!(json["JobQueue"], "compute");
        assert_eq!(json["Node"], 2);
        assert_eq!(json["Task"], 32);
        assert_eq!(json["Thread"], 2);
        assert_eq!(json["MemSize"], 1024);
        assert_eq!(json["ClockTime"], 5400);
        assert!(json.get("Exclusive").is_none());
    }

    #[test]
    fn blank_input_is_empty_input_not_empty_script() {
        let translator = ScriptTranslator::with_defaults();
        assert_eq!(translator.translate("  \n "), Err(TranslateError::EmptyInput));
        assert_eq!(
            translator.translate("#SBATCH --job-name=x\n"),
            Err(TranslateError::EmptyScript)
        );
    }

    #[test]
    fn validation_is_advisory_while_building_is_permissive() {
        let script = "#!/bin/bash\n\
            #SBATCH --job-name=ok\n\
            #SBATCH --unknown-directive=1\n\
            srun ./solver\n";
        let translator = ScriptTranslator::with_defaults();

        let report = translator.validate(script);
        assert_eq!(report.len(), 1);
        assert!(report[0].contains("line 3"));

        // The builder skips the unknown directive and still succeeds.
        let desc = translator.translate(script).unwrap();
        assert_eq!(desc.name, "ok");
    }
}
