//! The command line interface for the planner.
use crate::costs::{
    self, CostResult, CostSpec, DesalinationInputs, ElectrolyzerInputs, PcdInputs,
    PlantLcohInputs, RenewableInputs, StorageUnitInputs,
};
use crate::forecast::Forecaster;
use crate::history::HISTORICAL_DEMAND;
use crate::log;
use crate::settings::Settings;
use ::log::info;
use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

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

/// The available commands.
#[derive(Subcommand)]
enum Commands {
    /// Forecast energy demand and required hydrogen production for a month.
    Forecast {
        /// Calendar month to forecast (1-12).
        month: u32,
    },
    /// Estimate costs for one of the plant's subsystems.
    Cost {
        /// The available cost calculators.
        #[command(subcommand)]
        calculator: CostCommands,
    },
}

/// The available cost calculators.
#[derive(Subcommand)]
enum CostCommands {
    /// Electrolyzer capital expenditure.
    Electrolyzer(ElectrolyzerInputs),
    /// Renewable generation capital expenditure.
    Renewable(RenewableInputs),
    /// Purification, compression and drying capital expenditure.
    Pcd(PcdInputs),
    /// Desalination operating expenditure (annualized).
    Desalination(DesalinationInputs),
    /// Hydrogen storage unit financial metrics.
    StorageUnit(StorageUnitInputs),
    /// Plant-level levelized cost of hydrogen.
    PlantLcoh(PlantLcohInputs),
}

impl CostCommands {
    /// Convert the parsed subcommand into a calculator request
    fn into_spec(self) -> CostSpec {
        match self {
            Self::Electrolyzer(inputs) => CostSpec::Electrolyzer(inputs),
            Self::Renewable(inputs) => CostSpec::Renewable(inputs),
            Self::Pcd(inputs) => CostSpec::Pcd(inputs),
            Self::Desalination(inputs) => CostSpec::Desalination(inputs),
            Self::StorageUnit(inputs) => CostSpec::StorageUnit(inputs),
            Self::PlantLcoh(inputs) => CostSpec::PlantLcoh(inputs),
        }
    }
}

impl Commands {
    /// Execute the supplied CLI command
    fn execute(self) -> Result<()> {
        match self {
            Self::Forecast { month } => handle_forecast_command(month, None),
            Self::Cost { calculator } => handle_cost_command(&calculator.into_spec(), None),
        }
    }
}

/// Parse CLI arguments and start h2plan
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // Invoked as: `$ h2plan --markdown-help`
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

/// Load program settings and initialise the logger, unless settings are
/// provided by the caller (as tests do).
fn init_logging(settings: Option<Settings>) -> Result<()> {
    let settings = if let Some(settings) = settings {
        settings
    } else {
        Settings::load().context("Failed to load settings.")?
    };

    log::init(settings.log_level.as_deref()).context("Failed to initialise logging.")?;

    Ok(())
}

/// Handle the `forecast` command.
pub fn handle_forecast_command(month: u32, settings: Option<Settings>) -> Result<()> {
    init_logging(settings)?;

    let result = Forecaster::new(&HISTORICAL_DEMAND)
        .forecast(month)
        .context("Forecast failed.")?;

    info!("Projected energy need: {:.2} MW", result.energy_need.value());
    info!("Prediction accuracy: {:.2}%", result.prediction_accuracy.0);
    info!(
        "Required hydrogen production: {} tons/day",
        result.hydrogen_production
    );
    info!("Capacity increase: {:.2}%", result.percentage_increase.0);

    Ok(())
}

/// Handle the `cost` command.
pub fn handle_cost_command(spec: &CostSpec, settings: Option<Settings>) -> Result<()> {
    init_logging(settings)?;

    let kind = spec.kind();
    let result = costs::compute_cost(spec)
        .with_context(|| format!("{kind} cost calculation failed."))?;

    match result {
        CostResult::Capital(cost) => info!("{kind} capital cost: {:.2}", cost.value()),
        CostResult::Annual(cost) => {
            info!("{kind} operating cost: {:.2} per year", cost.value());
        }
        CostResult::StorageUnit(metrics) => {
            info!("Total storage unit cost: {:.2}", metrics.total_cost.value());
            info!("Levelized cost: {:.3} per kg", metrics.levelized_cost.value());
            info!("Payback period: {:.3} years", metrics.payback_period);
            info!("Internal rate of return: {:.1}%", metrics.internal_rate.0);
        }
        CostResult::PlantLcoh(result) => {
            info!("Oxygen revenue: {:.2}", result.revenue.value());
            info!(
                "Levelized cost of hydrogen: {:.4} per kg",
                result.lcoh.value()
            );
        }
    }

    Ok(())
}
