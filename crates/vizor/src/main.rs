use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use vizor::commands::{self, Context};
use vizor::loader::DocumentFormat;
use vizor::{PlanningDefaults, init_logging};

#[derive(Parser, Debug)]
#[command(name = "vizor")]
#[command(about = "Project a household's finances year by year")]
struct Args {
    /// Path to the data directory (default: ~/.vizor/)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "info")]
    log_level: String,

    /// Refuse to project scenarios that fail validation
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

impl From<OutputFormat> for DocumentFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Json => DocumentFormat::Json,
            OutputFormat::Yaml => DocumentFormat::Yaml,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Project a scenario and print the scenario with its ledger
    Calculate {
        scenario: PathBuf,

        /// Write to this file instead of stdout (format follows the extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Format for stdout; not accepted together with --output
        #[arg(short, long, value_enum, default_value = "json", conflicts_with = "output")]
        format: OutputFormat,
    },
    /// Project several scenarios and align their yearly series
    Compare {
        #[arg(required = true)]
        scenarios: Vec<PathBuf>,

        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
    /// Print headline figures for each scenario
    Summary {
        #[arg(required = true)]
        scenarios: Vec<PathBuf>,
    },
    /// Copy a scenario under a new name and project the copy
    Duplicate {
        scenario: PathBuf,

        /// Name of the copy (default: "<name>-copy")
        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        output: PathBuf,
    },
    /// Print the planning defaults in effect
    Defaults {
        /// Also save them to defaults.yaml in the data directory
        #[arg(long)]
        write: bool,
    },
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".vizor")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    let _log_guard = init_logging(&data_dir, &args.log_level)?;

    let ctx = Context {
        defaults: PlanningDefaults::load_or_default(&data_dir),
        strict: args.strict,
    };
    let mut stdout = std::io::stdout().lock();

    let result = match args.command {
        Command::Calculate {
            scenario,
            output,
            format,
        } => commands::calculate(
            &ctx,
            &scenario,
            format.into(),
            output.as_deref(),
            &mut stdout,
        ),
        Command::Compare { scenarios, format } => {
            commands::compare(&ctx, &scenarios, format.into(), &mut stdout)
        }
        Command::Summary { scenarios } => commands::summary(&ctx, &scenarios, &mut stdout),
        Command::Duplicate {
            scenario,
            name,
            output,
        } => commands::duplicate(&ctx, &scenario, name.as_deref(), &output),
        Command::Defaults { write } => commands::defaults(&ctx, &data_dir, write, &mut stdout),
    };

    if let Err(err) = &result {
        tracing::error!("Command failed: {err:#}");
    }
    result
}
