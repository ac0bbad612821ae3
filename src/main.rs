//! sbom-guard: SBOM license policy auditing and snapshot comparison
//!
//! Classifies the licenses of a `CycloneDX` SBOM against a policy and diffs
//! two SBOM snapshots by component name.

#![allow(clippy::struct_excessive_bools, clippy::needless_pass_by_value)]

use anyhow::{bail, Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use sbom_guard::{
    cli,
    config::{
        default_config_path, generate_full_example_config, generate_json_schema, AppConfig,
        ComparePaths, Validatable, CONFIG_FILE_NAMES,
    },
    pipeline::{self, exit_codes},
    reports::ReportFormat,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the long version string with format support information
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nSupported SBOM Formats:",
        "\n  CycloneDX JSON (components array)",
        "\n\nOutput Formats:",
        "\n  summary, json, markdown, csv",
        "\n\nFeatures:",
        "\n  License policy audit, name-keyed snapshot diff"
    )
}

#[derive(Parser)]
#[command(name = "sbom-guard")]
#[command(author = "Binarly.io")]
#[command(version, long_version = build_long_version())]
#[command(about = "SBOM license policy audit and snapshot comparison", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  No forbidden licenses (analyze) / comparison completed (compare)
    1  Forbidden licenses found, or an input could not be loaded

EXAMPLES:
    # Audit licenses with the built-in policy
    sbom-guard analyze sbom.cdx.json

    # Audit against a custom policy, writing markdown for a PR comment
    sbom-guard analyze sbom.cdx.json --policy policy.yaml -o markdown -O report.md

    # Compare two snapshots
    sbom-guard compare before.cdx.json after.cdx.json

    # Machine-readable diff
    sbom-guard compare before.cdx.json after.cdx.json -o json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only show warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also honors NO_COLOR)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to a config file (defaults to discovery)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Output flags shared by both commands
#[derive(Args)]
struct OutputArgs {
    /// Output format [default: summary, or the config file's format]
    #[arg(short, long, value_enum)]
    output: Option<ReportFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Include the generation time in the report
    #[arg(long)]
    timestamp: bool,
}

#[derive(Parser)]
struct AnalyzeArgs {
    /// SBOM file to audit
    sbom: PathBuf,

    /// License policy file (YAML or JSON), replacing the configured policy
    #[arg(long)]
    policy: Option<PathBuf>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Parser)]
struct CompareArgs {
    /// Old/baseline SBOM file
    old: PathBuf,

    /// New SBOM file
    new: PathBuf,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Audit the licenses of one SBOM against a policy
    Analyze(AnalyzeArgs),

    /// Compare two SBOM snapshots by component name
    Compare(CompareArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the JSON Schema for the config file format
    ConfigSchema {
        /// Write the schema to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Inspect or create configuration files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// List the locations searched for config files
    Path,
    /// Write an example config file
    Init {
        /// Where to write the file [default: ./.sbom-guard.yaml]
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(exit_code) => {
            if exit_code != exit_codes::SUCCESS {
                std::process::exit(exit_code);
            }
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(pipeline::exit_code_for_error(&err));
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Analyze(ref args) => {
            let app_config = load_app_config(&cli, args.policy.clone(), &args.output)?;
            let policy = app_config.resolve_policy()?;

            let config = cli::AnalyzeConfig {
                sbom_path: args.sbom.clone(),
                policy,
                output: app_config.output,
                behavior: app_config.behavior,
            };

            cli::run_analyze(config)
        }

        Commands::Compare(ref args) => {
            let app_config = load_app_config(&cli, None, &args.output)?;

            let config = cli::CompareConfig {
                paths: ComparePaths {
                    old: args.old.clone(),
                    new: args.new.clone(),
                },
                output: app_config.output,
                behavior: app_config.behavior,
            };

            cli::run_compare(config)
        }

        Commands::Completions { shell } => {
            generate(
                shell,
                &mut Cli::command(),
                "sbom-guard",
                &mut std::io::stdout(),
            );
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { ref output } => {
            let schema = generate_json_schema()?;
            match output {
                Some(path) => {
                    std::fs::write(path, &schema)
                        .with_context(|| format!("Failed to write schema to {}", path.display()))?;
                    tracing::info!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { ref action } => run_config_action(&cli, action),
    }
}

/// Layer CLI flags over the discovered config file and validate the result.
fn load_app_config(
    cli: &Cli,
    policy_file: Option<PathBuf>,
    output: &OutputArgs,
) -> Result<AppConfig> {
    let overrides = AppConfig::builder()
        .policy_file(policy_file)
        .output_file(output.output_file.clone())
        .no_color(cli.no_color)
        .timestamp(output.timestamp)
        .quiet(cli.quiet)
        .verbose(cli.verbose)
        .build();

    warn_missing_explicit_config(cli.config.as_deref());
    let (mut app_config, loaded_from) =
        AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
    if let Some(path) = &loaded_from {
        tracing::debug!("Loaded config from {}", path.display());
    }

    // An explicit -o always wins, including `-o summary` over a file format
    if let Some(format) = output.output {
        app_config.output.format = format;
    }

    // Policy issues are checked by the analyze handler against the resolved policy
    let mut errors = Vec::new();
    for issue in app_config
        .validate()
        .into_iter()
        .filter(|issue| !issue.field.starts_with("policy"))
    {
        if issue.advisory {
            tracing::warn!("{issue}");
        } else {
            errors.push(issue.to_string());
        }
    }
    if !errors.is_empty() {
        bail!("Invalid configuration: {}", errors.join("; "));
    }

    Ok(app_config)
}

fn warn_missing_explicit_config(path: Option<&Path>) {
    if let Some(path) = path {
        if !path.exists() {
            tracing::warn!(
                "Config file {} not found, falling back to discovery",
                path.display()
            );
        }
    }
}

fn run_config_action(cli: &Cli, action: &ConfigAction) -> Result<i32> {
    match action {
        ConfigAction::Show => {
            let (config, loaded_from) = AppConfig::from_file_with_overrides(
                cli.config.as_deref(),
                &AppConfig::default(),
            );
            match &loaded_from {
                Some(path) => eprintln!("# Loaded from: {}", path.display()),
                None => eprintln!("# No config file found, showing defaults"),
            }
            for issue in config.validate() {
                eprintln!("# {issue}");
            }
            let yaml =
                serde_yaml::to_string(&config).context("Failed to serialize configuration")?;
            print!("{yaml}");
        }

        ConfigAction::Path => {
            println!("Config file names (first match wins):");
            for name in CONFIG_FILE_NAMES {
                println!("  {name}");
            }
            println!("\nSearch locations:");
            println!("  1. --config <path>");
            println!("  2. Current directory");
            println!("  3. Git repository root");
            if let Some(config_dir) = dirs::config_dir() {
                println!("  4. {}", config_dir.join("sbom-guard").display());
            }
            if let Some(home) = dirs::home_dir() {
                println!("  5. {}", home.display());
            }
        }

        ConfigAction::Init { output, force } => {
            let path = output.clone().unwrap_or_else(default_config_path);
            if path.exists() && !force {
                bail!(
                    "Config file already exists at {} (use --force to overwrite)",
                    path.display()
                );
            }
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create directory {}", parent.display())
                    })?;
                }
            }
            std::fs::write(&path, generate_full_example_config())
                .with_context(|| format!("Failed to write config to {}", path.display()))?;
            println!("Created config file: {}", path.display());
        }
    }

    Ok(exit_codes::SUCCESS)
}
