use crate::loader::{DeclarationLoader, LoadedSchemes};
use crate::runtime_config::RuntimeConfig;
use crate::scheme::SchemeFragment;
use crate::validator::print_issues;
use clap::{Parser, Subcommand, ValueEnum};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;

/// Command-line interface for security scheme declarations
#[derive(Parser)]
#[command(name = "brrtrouter-schemes")]
#[command(about = "Validate and render OpenAPI security schemes", long_about = None)]
pub struct Cli {
    /// Require http(s) URLs with a host for openIdConnectUrl
    /// (also enabled by BRRTR_SCHEMES_STRICT_URLS=true)
    #[arg(long, global = true, default_value_t = false)]
    pub strict_urls: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Validate every declaration in a file and report issues
    Check {
        /// Declaration file (YAML, JSON or TOML; OpenAPI documents accepted)
        #[arg(short, long)]
        file: PathBuf,

        /// Exit successfully even when declarations are rejected
        #[arg(long, default_value_t = false)]
        allow_errors: bool,
    },
    /// Print the rendered securitySchemes entries
    Render {
        /// Declaration file (YAML, JSON or TOML; OpenAPI documents accepted)
        #[arg(short, long)]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
}

/// Output format for `render`
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

fn load(file: &Path, strict_urls: bool) -> anyhow::Result<LoadedSchemes> {
    let config = RuntimeConfig::from_env();
    DeclarationLoader::from_config(&config)
        .strict_urls(config.strict_urls || strict_urls)
        .load(file)
}

/// Render fragments keyed by scheme name
pub fn render_fragments(loaded: &LoadedSchemes, format: OutputFormat) -> anyhow::Result<String> {
    let fragments: BTreeMap<&str, SchemeFragment> = loaded
        .schemes
        .iter()
        .map(|(name, d)| (name.as_str(), d.to_fragment()))
        .collect();

    let out = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&fragments)?,
        OutputFormat::Yaml => serde_yaml::to_string(&fragments)?,
    };
    Ok(out)
}

/// Execute a parsed command line
pub fn run_cli(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Commands::Check { file, allow_errors } => {
            let loaded = load(&file, cli.strict_urls)?;
            for (name, descriptor) in &loaded.schemes {
                info!(scheme = %name, scheme_type = %descriptor.scheme_type(), "ok");
            }
            if loaded.is_valid() {
                println!("✅ {} security scheme(s) valid", loaded.schemes.len());
                return Ok(ExitCode::SUCCESS);
            }
            print_issues(&loaded.issues);
            if allow_errors {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Render { file, format } => {
            let loaded = load(&file, cli.strict_urls)?;
            if !loaded.is_valid() {
                print_issues(&loaded.issues);
                return Ok(ExitCode::FAILURE);
            }
            println!("{}", render_fragments(&loaded, format)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
