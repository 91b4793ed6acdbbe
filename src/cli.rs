//! The command line interface for the planner.
use crate::input::load_model;
use crate::log;
use crate::output::{create_output_directory, get_output_dir, write_plan};
use crate::plan::compute_plan;
use crate::settings::Settings;
use ::log::{info, warn};
use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::{Path, PathBuf};

pub mod demo;
use demo::DemoSubcommands;

/// The command line interface for the planner.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// The available commands.
    #[command(subcommand)]
    command: Option<Commands>,
    /// Flag to provide the CLI docs as markdown
    #[arg(long, hide = true)]
    markdown_help: bool,
}

/// Options for the run command
#[derive(Args)]
pub struct RunOpts {
    /// Directory for output files
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
    /// Whether to overwrite the output directory if it already exists
    #[arg(long)]
    pub overwrite: bool,
}

/// The available commands.
#[derive(Subcommand)]
enum Commands {
    /// Compute the plan for a model.
    Run {
        /// Path to the model directory.
        model_dir: PathBuf,
        /// Other run options
        #[command(flatten)]
        opts: RunOpts,
    },
    /// Manage demo models.
    Demo {
        /// The available subcommands for managing demo models.
        #[command(subcommand)]
        subcommand: DemoSubcommands,
    },
    /// Validate a model.
    Validate {
        /// The path to the model directory.
        model_dir: PathBuf,
    },
}

impl Commands {
    /// Execute the supplied CLI command
    fn execute(self) -> Result<()> {
        match self {
            Self::Run { model_dir, opts } => handle_run_command(&model_dir, &opts, None),
            Self::Demo { subcommand } => subcommand.execute(),
            Self::Validate { model_dir } => handle_validate_command(&model_dir, None),
        }
    }
}

/// Parse CLI arguments and execute the command
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // Invoked as: `$ chaseplan --markdown-help`
    if cli.markdown_help {
        clap_markdown::print_help_markdown::<Cli>();
        return Ok(());
    }

    let Some(command) = cli.command else {
        // Output program help
        let help_str = Cli::command().render_long_help().to_string();
        println!("{help_str}");
        return Ok(());
    };

    command.execute()
}

/// Handle the `run` command.
pub fn handle_run_command(
    model_path: &Path,
    opts: &RunOpts,
    settings: Option<Settings>,
) -> Result<()> {
    // Load program settings, if not provided
    let settings = if let Some(settings) = settings {
        settings
    } else {
        Settings::load().context("Failed to load settings.")?
    };

    // This setting can be overridden by command-line argument
    let overwrite = opts.overwrite || settings.overwrite;

    // Get path to output folder
    let pathbuf: PathBuf;
    let output_path = if let Some(p) = opts.output_dir.as_deref() {
        p
    } else {
        pathbuf = get_output_dir(model_path)?;
        &pathbuf
    };

    let overwrote = create_output_directory(output_path, overwrite).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            output_path.display()
        )
    })?;

    // Initialise program logger
    log::init(settings.log_level.as_deref(), Some(output_path))
        .context("Failed to initialise logging.")?;

    // Load the model to plan
    let (periods, costs) = load_model(model_path).context("Failed to load model.")?;
    info!("Loaded model from {}", model_path.display());
    info!("Output folder: {}", output_path.display());

    // NB: We have to wait until the logger is initialised to display this warning
    if overwrote {
        warn!("Output folder will be overwritten");
    }

    // Compute the plan and write it out
    let plan = compute_plan(&periods, &costs);
    write_plan(output_path, &plan)?;
    info!("Total cost: {}", plan.total_cost);

    Ok(())
}

/// Handle the `validate` command.
pub fn handle_validate_command(model_path: &Path, settings: Option<Settings>) -> Result<()> {
    // Load program settings, if not provided
    let settings = if let Some(settings) = settings {
        settings
    } else {
        Settings::load().context("Failed to load settings.")?
    };

    // Initialise program logger (we won't save log files when running the validate command)
    log::init(settings.log_level.as_deref(), None).context("Failed to initialise logging.")?;

    // Load/validate the model
    load_model(model_path).context("Failed to validate model.")?;
    info!("Model validation successful!");

    Ok(())
}
