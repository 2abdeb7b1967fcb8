use clap::{Parser, Subcommand};
use ehpc_core::ParserConfig;
use ehpc_translate::ScriptTranslator;
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Checks a job script for structural problems
    Validate {
        /// Path to the job script
        script: PathBuf,
    },
    /// Translates a job script into a backend job descriptor (JSON on stdout)
    Translate {
        /// Path to the job script
        script: PathBuf,
        /// Queue used when the script names no partition
        #[arg(short, long, default_value = "normal")]
        queue: String,
        /// Pretty-print the descriptor
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { script } => {
            let content = std::fs::read_to_string(&script)?;
            let report = ScriptTranslator::with_defaults().validate(&content);
            if report.is_empty() {
                println!("{}: OK", script.display());
            } else {
                for entry in &report {
                    println!("{}", entry);
                }
                std::process::exit(1);
            }
        }
        Commands::Translate { script, queue, pretty } => {
            let content = std::fs::read_to_string(&script)?;
            let translator = ScriptTranslator::new(ParserConfig {
                default_queue: queue,
                ..ParserConfig::default()
            });

            // Validation is advisory; report problems but build anyway.
            for entry in translator.validate(&content) {
                warn!(script = %script.display(), "{entry}");
            }

            let descriptor = translator.translate(&content)?;
            let json = if pretty {
                serde_json::to_string_pretty(&descriptor)?
            } else {
                serde_json::to_string(&descriptor)?
            };
            println!("{json}");
        }
    }

    Ok(())
}
