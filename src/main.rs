use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use stepform::app::App;
use stepform::config::Config;
use stepform::form::{FormData, FormSchema, Step};
use stepform::{logging, sink, ui};

#[derive(Parser)]
#[command(name = "stepform")]
#[command(about = "Multi-step sign-up form with per-step validation")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Write the submitted record to this JSON file instead of stdout
    #[arg(short, long)]
    output: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a JSON record against every field rule
    Validate {
        /// JSON file with name, email, address and password
        file: PathBuf,
    },

    /// List each step's fields and their rules
    Rules,

    /// Write the current configuration to the config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (needed for logging setup)
    // `init` may be pointed at a config file that does not exist yet
    let load_from = match cli.command {
        Some(Commands::Init { .. }) => None,
        _ => cli.config.as_deref(),
    };
    let mut config = Config::load(load_from)?;
    if let Some(output) = cli.output {
        config.output.path = Some(output);
    }

    // Determine if we're running in TUI mode (no subcommand)
    let is_tui_mode = cli.command.is_none();

    // Initialize logging (file-based for TUI, stderr for CLI)
    let logging_handle = logging::init_logging(&config, is_tui_mode, cli.debug)?;

    match cli.command {
        Some(Commands::Validate { file }) => {
            if !cmd_validate(&file)? {
                std::process::exit(1);
            }
        }
        Some(Commands::Rules) => cmd_rules(),
        Some(Commands::Init { force }) => cmd_init(&config, cli.config.as_deref(), force)?,
        None => {
            if let Some(ref path) = logging_handle.log_file_path {
                tracing::info!(path = %path.display(), "Logging to file");
            }
            run_wizard(config).await?;
        }
    }

    Ok(())
}

async fn run_wizard(config: Config) -> Result<()> {
    ui::install_panic_hook();

    let output_path = config.output_path();
    let submission = App::new(config).run().await?;

    match (submission, output_path) {
        (Some(submission), Some(path)) => {
            eprintln!("Submission {} written to {}", submission.id, path.display());
        }
        (Some(submission), None) => {
            println!("{}", sink::render_submission(&submission)?);
        }
        (None, _) => {}
    }

    Ok(())
}

/// Returns whether the record passed
fn cmd_validate(file: &Path) -> Result<bool> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let data: FormData = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {} as a form record", file.display()))?;

    match FormSchema::combined().validate(&data) {
        Ok(()) => {
            println!("ok");
            Ok(true)
        }
        Err(errors) => {
            tracing::debug!(fields = ?errors.fields(), "Record failed validation");
            for (field, message) in errors.iter() {
                println!("{}: {}", field, message);
            }
            Ok(false)
        }
    }
}

/// Write `config` to `--config` if given, else the per-user config file
fn cmd_init(config: &Config, explicit: Option<&str>, force: bool) -> Result<()> {
    let path = match explicit {
        Some(path) => PathBuf::from(path),
        None => Config::user_config_path().context("No config directory on this platform")?,
    };

    if config.write_if_missing(&path, force)? {
        tracing::info!(path = %path.display(), "Wrote config");
        println!("Wrote {}", path.display());
    } else {
        println!("{} already exists (use --force to overwrite)", path.display());
    }
    Ok(())
}

fn cmd_rules() {
    for step in Step::all() {
        println!("{} - {}", step, step.title());
        let schema = FormSchema::for_step(*step);
        if schema.is_empty() {
            println!("  (review and submit)");
        }
        for rule in schema.rules() {
            println!("  {:<10} {}", rule.field.key(), rule.message);
        }
    }
}
