//! ups-quality: UPS power quality analysis tool
//!
//! Evaluates SNMP monitoring polls from UPS units and reports power-quality
//! issues, alerts, a health score, and remediation advice as JSON.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::io::{self, Write as _};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ups_quality::{
    cli,
    config::{AppConfig, CONFIG_FILE_NAMES},
    pipeline::exit_codes,
};

#[derive(Parser)]
#[command(name = "ups-quality")]
#[command(version)]
#[command(about = "UPS power quality analysis from SNMP monitoring data", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  All inputs analysed and met the minimum score
    1  A result scored below --min-score
    2  An input could not be analysed (ANALYSIS_FAILED)
    3  Error occurred

EXAMPLES:
    # Analyse one poll
    ups-quality analyze ups-01.json

    # Analyse a fleet in parallel, failing below a score of 70
    ups-quality analyze fleet/*.json --min-score 70 -O report.json

    # Read a poll from stdin with voltage and load detail
    snmp-poller --json | ups-quality analyze - --detailed

    # Inspect a raw SNMP response
    ups-quality parse 'PowerNet-MIB::upsAdvInputLineVoltage.0 = INTEGER: 228'")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "UPS_QUALITY_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `analyze` subcommand
#[derive(Parser)]
struct AnalyzeArgs {
    /// Monitoring data JSON files (`-` reads stdin)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Rated capacity in watts for polls without `capacity_watts`
    #[arg(long)]
    capacity_watts: Option<f64>,

    /// Include voltage and load detail in each result
    #[arg(long)]
    detailed: bool,

    /// Emit single-line JSON
    #[arg(long)]
    compact: bool,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 1 if any result scores below this (0-100)
    #[arg(long)]
    min_score: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse UPS monitoring data
    Analyze(AnalyzeArgs),

    /// Normalize a raw SNMP response and print the value as JSON
    Parse {
        /// Raw response, e.g. `OID = Gauge32: 228`
        raw: String,
    },

    /// Describe a UPS basic output state code
    DecodeState {
        /// State code or raw state response
        code: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate a man page and print it to stdout
    Man,
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .ups-quality.yaml in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_codes::ERROR
        }
    };
    if exit_code != exit_codes::SUCCESS {
        std::process::exit(exit_code);
    }
    Ok(())
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Analyze(args) => {
            let mut overrides = AppConfig::builder()
                .detailed(args.detailed)
                .compact(args.compact)
                .output_file(args.output_file)
                .quiet(cli.quiet);
            if let Some(score) = args.min_score {
                overrides = overrides.min_score(score);
            }

            let (mut config, loaded_from) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides.build());
            // merge cannot tell an explicit --capacity-watts 1000 from the default
            if let Some(watts) = args.capacity_watts {
                config.analysis.capacity_watts = watts;
            }
            if let Some(path) = &loaded_from {
                tracing::debug!("Loaded config from {}", path.display());
            }

            cli::run_analyze(&args.inputs, &config)
        }

        Commands::Parse { raw } => cli::run_parse(&raw),

        Commands::DecodeState { code } => cli::run_decode_state(&code),

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "ups-quality", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = ups_quality::config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) =
                    ups_quality::config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml =
                    serde_yaml_ng::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    dirs::config_dir().map(|p| p.join("ups-quality").display().to_string()),
                    dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match ups_quality::config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".ups-quality.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = ups_quality::config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },

        Commands::Man => {
            let cmd = Cli::command();
            let man = clap_mangen::Man::new(cmd);
            let mut buf = Vec::new();
            man.render(&mut buf).context("failed to render man page")?;
            io::stdout().write_all(&buf)?;
            Ok(exit_codes::SUCCESS)
        }
    }
}
