//! Subcommand implementations
//!
//! Each command loads its scenarios, runs the engine, and writes the result
//! to the supplied writer (stdout in the binary) or to a file.

use std::io::Write;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{WrapErr, eyre};
use vizor_core::model::Scenario;

use crate::config::PlanningDefaults;
use crate::loader::{DocumentFormat, ScenarioResponse, load_scenario, write_document};

/// Settings shared by every command
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub defaults: PlanningDefaults,
    /// Reject scenarios that fail validation instead of projecting them
    pub strict: bool,
}

impl Context {
    pub fn load(&self, path: &Path) -> color_eyre::Result<Scenario> {
        let scenario = load_scenario(path, &self.defaults)
            .wrap_err_with(|| format!("Could not load scenario from {}", path.display()))?;

        if let Err(e) = scenario.validate() {
            if self.strict {
                return Err(eyre!("Scenario '{}' is invalid: {e}", scenario.name));
            }
            tracing::warn!(scenario = %scenario.name, error = %e, "Projecting invalid scenario");
        }
        Ok(scenario)
    }

    pub fn load_all(&self, paths: &[PathBuf]) -> color_eyre::Result<Vec<Scenario>> {
        paths.iter().map(|path| self.load(path)).collect()
    }
}

fn emit<T: serde::Serialize>(
    value: &T,
    format: DocumentFormat,
    output: Option<&Path>,
    out: &mut impl Write,
) -> color_eyre::Result<()> {
    match output {
        Some(path) => write_document(path, value)?,
        None => {
            let rendered = format.render(value)?;
            writeln!(out, "{rendered}")?;
        }
    }
    Ok(())
}

/// Project one scenario and emit `{ scenario, calculated }`
pub fn calculate(
    ctx: &Context,
    path: &Path,
    format: DocumentFormat,
    output: Option<&Path>,
    out: &mut impl Write,
) -> color_eyre::Result<()> {
    let scenario = ctx.load(path)?;
    let calculated = vizor_core::calculate(&scenario);

    tracing::info!(
        scenario = %scenario.name,
        years = calculated.years.len(),
        accounts = calculated.account_balances.len(),
        "Calculated scenario"
    );

    let response = ScenarioResponse {
        scenario: &scenario,
        calculated: &calculated,
    };
    emit(&response, format, output, out)
}

/// Project several scenarios side by side
pub fn compare(
    ctx: &Context,
    paths: &[PathBuf],
    format: DocumentFormat,
    out: &mut impl Write,
) -> color_eyre::Result<()> {
    let scenarios = ctx.load_all(paths)?;
    let comparison = vizor_core::compare(&scenarios);

    tracing::info!(scenarios = scenarios.len(), "Compared scenarios");
    emit(&comparison, format, None, out)
}

/// Print one line of headline figures per scenario
pub fn summary(ctx: &Context, paths: &[PathBuf], out: &mut impl Write) -> color_eyre::Result<()> {
    let scenarios = ctx.load_all(paths)?;
    let outputs = vizor_core::calculate_all(&scenarios);

    for (scenario, output) in scenarios.iter().zip(&outputs) {
        let summary = output.summary(scenario.config.cpi_rate);

        let Some(final_cash) = summary.final_cash_on_hand else {
            writeln!(out, "{}: no projected years", summary.scenario_name)?;
            continue;
        };

        write!(
            out,
            "{}: final cash {:.2} (real {:.2}), cumulative net {:.2}, retirement {:.2}",
            summary.scenario_name,
            final_cash,
            summary.final_real_cash_on_hand.unwrap_or(final_cash),
            summary.final_cumulative_net.unwrap_or_default(),
            summary.final_retirement_balance.unwrap_or_default(),
        )?;
        if let Some(low) = summary.lowest_cash_on_hand {
            write!(out, ", lowest {:.2} in {}", low.amount, low.year)?;
        }
        if let Some(year) = summary.first_shortfall_year {
            write!(out, ", shortfall from {year}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Copy a scenario under a new name and project the copy
pub fn duplicate(
    ctx: &Context,
    path: &Path,
    name: Option<&str>,
    output: &Path,
) -> color_eyre::Result<()> {
    let original = ctx.load(path)?;
    let copy = original.duplicate(name);
    let calculated = vizor_core::calculate(&copy);

    tracing::info!(from = %original.name, to = %copy.name, "Duplicated scenario");
    write_document(
        output,
        &ScenarioResponse {
            scenario: &copy,
            calculated: &calculated,
        },
    )?;
    Ok(())
}

/// Print the planning defaults in effect as YAML. With `write`, also save
/// them to `defaults.yaml` so they can be edited by hand.
pub fn defaults(
    ctx: &Context,
    data_dir: &Path,
    write: bool,
    out: &mut impl Write,
) -> color_eyre::Result<()> {
    if write {
        ctx.defaults.save(data_dir)?;
        tracing::info!(
            path = %PlanningDefaults::path(data_dir).display(),
            "Saved planning defaults"
        );
    }
    emit(&ctx.defaults, DocumentFormat::Yaml, None, out)
}
