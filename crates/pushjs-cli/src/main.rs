//! pushjs CLI - compile expression trees to pushdown JavaScript
//!
//! Usage:
//!   pushjs compile <expr.json> [--config pushjs.yaml] [--multi] [--output text|json]
//!   pushjs validate [--config pushjs.yaml]
//!
//! Exit status is 2 when the expression cannot be pushed down.

use clap::{Parser, Subcommand, ValueEnum};
use pushjs_codegen::{CompileError, JsCompiler};
use pushjs_ir::Expr;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use tracing::{info, warn};

mod config;
mod logging;

use config::{Config, ConfigError};

#[derive(Parser)]
#[command(name = "pushjs")]
#[command(about = "Compile scalar expressions into per-row JavaScript functions")]
#[command(version)]
struct Cli {
    /// Path to the YAML configuration (column schema, options)
    #[arg(short, long, global = true, default_value = "pushjs.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile an expression (JSON) into a function
    Compile {
        /// Path to the expression JSON file
        file: PathBuf,

        /// Allow more than one input column
        #[arg(long)]
        multi: bool,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Check the column schema in the configuration
    Validate,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read {}: {source}", path.display())]
    ReadExpr {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid expression JSON: {0}")]
    ParseExpr(#[from] serde_json::Error),

    #[error("Cannot push down: {0}")]
    NotPushable(#[from] CompileError),
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading {}: {}", cli.config.display(), e);
            return ExitCode::FAILURE;
        }
    };
    logging::init(&config.logging);

    match run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ CliError::NotPushable(_)) => {
            warn!(reason = %e, "expression rejected");
            eprintln!("{}", e);
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, config: &Config) -> Result<(), CliError> {
    let resolver = config.resolver()?;

    match command {
        Commands::Compile { file, multi, output } => {
            let source = std::fs::read_to_string(&file).map_err(|source| CliError::ReadExpr {
                path: file.clone(),
                source,
            })?;
            let expr: Expr = serde_json::from_str(&source)?;

            let function = JsCompiler::new(&resolver)
                .allow_multiple_inputs(multi || config.compile.allow_multiple_inputs)
                .try_compile(&expr)?;
            info!(
                file = %file.display(),
                parameters = function.parameters.len(),
                statements = function.statements.len(),
                "compiled expression"
            );

            match output {
                OutputFormat::Text => println!("{}", function),
                OutputFormat::Json => {
                    let doc = serde_json::json!({
                        "fingerprint": expr.fingerprint(),
                        "parameters": &function.parameters,
                        "function": function.render(),
                    });
                    println!("{}", serde_json::to_string_pretty(&doc)?);
                }
            }
        }
        Commands::Validate => {
            println!("{} columns OK", resolver.len());
        }
    }

    Ok(())
}
