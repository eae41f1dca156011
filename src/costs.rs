//! Closed-form cost calculators for the plant's subsystems.
//!
//! Each calculator is a pure function of its inputs. The formulas are the
//! facility's agreed estimating conventions: simple linear and ratio
//! estimates, not discounted-cash-flow models. In particular the storage
//! unit's payback and rate-of-return figures are linear proxies and must stay
//! formula-for-formula identical to the reference conventions.
//!
//! Inputs are taken as raw `f64` fields so the CLI (and any config-driven
//! caller) can construct them directly; the calculators wrap them into unit
//! types for the dimensional arithmetic. Bounds validation is the caller's
//! job; the calculators only refuse non-finite values and behave
//! deterministically on zeros.
use crate::error::{CoreError, ensure_finite};
use crate::units::{
    Capacity, Dimensionless, Energy, Mass, Money, MoneyPerCapacity, MoneyPerEnergy, MoneyPerMass,
    MoneyPerVolume, MoneyPerYear, Volume,
};
use clap::Args;
use serde::Deserialize;
use strum::Display;

/// Days per year used to annualize daily operating costs
const DAYS_PER_YEAR: f64 = 365.0;

/// Assumed lifetime hydrogen throughput of a storage unit (kg)
const STORAGE_LIFETIME_OUTPUT_KG: f64 = 200_000.0;

/// Reference cost against which the storage unit's linear rate-of-return
/// proxy is expressed
const STORAGE_IRR_REFERENCE_COST: f64 = 1_000_000.0;

/// Inputs for the electrolyzer capital-expenditure estimate
#[derive(Args, Clone, Debug, Deserialize, PartialEq)]
pub struct ElectrolyzerInputs {
    /// Electrolyzer capacity (kWh)
    #[arg(long)]
    pub capacity: f64,
    /// Equipment price per kWh of capacity
    #[arg(long)]
    pub price_per_kwh: f64,
}

/// Inputs for the renewable-generation capital-expenditure estimate
#[derive(Args, Clone, Debug, Deserialize, PartialEq)]
pub struct RenewableInputs {
    /// Installed solar capacity (MW)
    #[arg(long)]
    pub solar_capacity: f64,
    /// Price per MW of solar capacity
    #[arg(long)]
    pub solar_price: f64,
    /// Installed wind capacity (MW)
    #[arg(long)]
    pub wind_capacity: f64,
    /// Price per MW of wind capacity
    #[arg(long)]
    pub wind_price: f64,
}

/// Inputs for the purification, compression and drying capital-expenditure
/// estimate
#[derive(Args, Clone, Debug, Deserialize, PartialEq)]
pub struct PcdInputs {
    /// Cost of the purification capacity
    #[arg(long)]
    pub capacity_cost: f64,
    /// Cost of compression and drying equipment
    #[arg(long)]
    pub compression_drying_cost: f64,
}

/// Inputs for the desalination operating-expenditure estimate
#[derive(Args, Clone, Debug, Deserialize, PartialEq)]
pub struct DesalinationInputs {
    /// Water requirement of the plant (m³ per day)
    #[arg(long)]
    pub water_requirement: f64,
    /// Desalination cost per m³ of water
    #[arg(long)]
    pub cost_per_m3: f64,
}

/// Inputs for the hydrogen-storage-unit financial metrics
#[derive(Args, Clone, Debug, Deserialize, PartialEq)]
pub struct StorageUnitInputs {
    /// First cost component of the unit
    #[arg(long)]
    pub cost1: f64,
    /// Second cost component of the unit
    #[arg(long)]
    pub cost2: f64,
    /// Third cost component of the unit
    #[arg(long)]
    pub cost3: f64,
}

/// Inputs for the plant-level levelized cost of hydrogen
#[derive(Args, Clone, Debug, Deserialize, PartialEq)]
pub struct PlantLcohInputs {
    /// Quantity of by-product oxygen sold (tons)
    #[arg(long)]
    pub oxygen_quantity: f64,
    /// Sale price per ton of oxygen
    #[arg(long)]
    pub oxygen_price: f64,
    /// Total capital expenditure of the plant
    #[arg(long)]
    pub capex: f64,
    /// Total operational expenditure of the plant
    #[arg(long)]
    pub opex: f64,
    /// Lifetime hydrogen output of the plant (kg)
    #[arg(long)]
    pub lifetime_hydrogen: f64,
}

/// Financial metrics for a hydrogen storage unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StorageUnitMetrics {
    /// Combined cost of the unit
    pub total_cost: Money,
    /// Total cost spread over the unit's lifetime hydrogen throughput
    pub levelized_cost: MoneyPerMass,
    /// Payback proxy in years; shares the levelized-cost formula
    pub payback_period: f64,
    /// Linear rate-of-return proxy (percent)
    pub internal_rate: Dimensionless,
}

/// Plant-level levelized cost of hydrogen, net of oxygen revenue
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlantLcoh {
    /// Revenue from selling by-product oxygen
    pub revenue: Money,
    /// Levelized cost per kg of hydrogen over the plant lifetime
    pub lcoh: MoneyPerMass,
}

/// Capital cost of the electrolyzer: capacity times unit price.
pub fn electrolyzer_capex(inputs: &ElectrolyzerInputs) -> Result<Money, CoreError> {
    ensure_finite("capacity", inputs.capacity)?;
    ensure_finite("price_per_kwh", inputs.price_per_kwh)?;

    Ok(MoneyPerEnergy(inputs.price_per_kwh) * Energy(inputs.capacity))
}

/// Capital cost of renewable generation: solar plus wind, each capacity times
/// unit price.
pub fn renewable_capex(inputs: &RenewableInputs) -> Result<Money, CoreError> {
    ensure_finite("solar_capacity", inputs.solar_capacity)?;
    ensure_finite("solar_price", inputs.solar_price)?;
    ensure_finite("wind_capacity", inputs.wind_capacity)?;
    ensure_finite("wind_price", inputs.wind_price)?;

    let solar = MoneyPerCapacity(inputs.solar_price) * Capacity(inputs.solar_capacity);
    let wind = MoneyPerCapacity(inputs.wind_price) * Capacity(inputs.wind_capacity);
    Ok(solar + wind)
}

/// Capital cost of purification, compression and drying: the sum of the two
/// stage costs.
pub fn pcd_capex(inputs: &PcdInputs) -> Result<Money, CoreError> {
    ensure_finite("capacity_cost", inputs.capacity_cost)?;
    ensure_finite("compression_drying_cost", inputs.compression_drying_cost)?;

    Ok(Money(inputs.capacity_cost) + Money(inputs.compression_drying_cost))
}

/// Annual operating cost of desalination: daily water cost scaled to a year.
pub fn desalination_opex(inputs: &DesalinationInputs) -> Result<MoneyPerYear, CoreError> {
    ensure_finite("water_requirement", inputs.water_requirement)?;
    ensure_finite("cost_per_m3", inputs.cost_per_m3)?;

    let daily = MoneyPerVolume(inputs.cost_per_m3) * Volume(inputs.water_requirement);
    Ok(MoneyPerYear(daily.value() * DAYS_PER_YEAR))
}

/// Financial metrics for a hydrogen storage unit.
///
/// The payback figure reuses the levelized-cost ratio and the rate of return
/// is linear in the total cost; both are fixed estimating conventions, not
/// discounted-cash-flow results.
pub fn storage_unit_metrics(inputs: &StorageUnitInputs) -> Result<StorageUnitMetrics, CoreError> {
    ensure_finite("cost1", inputs.cost1)?;
    ensure_finite("cost2", inputs.cost2)?;
    ensure_finite("cost3", inputs.cost3)?;

    let total_cost = Money(inputs.cost1) + Money(inputs.cost2) + Money(inputs.cost3);
    let levelized_cost = total_cost / Mass(STORAGE_LIFETIME_OUTPUT_KG);
    let payback_period = total_cost.value() / STORAGE_LIFETIME_OUTPUT_KG;
    let internal_rate = Dimensionless(total_cost.value() / STORAGE_IRR_REFERENCE_COST * 100.0);

    Ok(StorageUnitMetrics {
        total_cost,
        levelized_cost,
        payback_period,
        internal_rate,
    })
}

/// Plant-level levelized cost of hydrogen: capital and operating expenditure
/// net of oxygen revenue, spread over the plant's lifetime hydrogen output.
pub fn plant_lcoh(inputs: &PlantLcohInputs) -> Result<PlantLcoh, CoreError> {
    ensure_finite("oxygen_quantity", inputs.oxygen_quantity)?;
    ensure_finite("oxygen_price", inputs.oxygen_price)?;
    ensure_finite("capex", inputs.capex)?;
    ensure_finite("opex", inputs.opex)?;
    ensure_finite("lifetime_hydrogen", inputs.lifetime_hydrogen)?;

    let revenue = MoneyPerMass(inputs.oxygen_price) * Mass(inputs.oxygen_quantity);
    let net_cost = Money(inputs.capex) + Money(inputs.opex) - revenue;
    let lcoh = net_cost / Mass(inputs.lifetime_hydrogen) / Dimensionless(1000.0);

    Ok(PlantLcoh { revenue, lcoh })
}

/// The calculators offered by the cost formula library
#[derive(Debug, Clone, Copy, Display, Eq, PartialEq)]
pub enum CostKind {
    /// Electrolyzer capital expenditure
    Electrolyzer,
    /// Renewable generation capital expenditure
    Renewable,
    /// Purification, compression and drying capital expenditure
    Pcd,
    /// Desalination operating expenditure
    Desalination,
    /// Hydrogen storage unit financial metrics
    StorageUnit,
    /// Plant-level levelized cost of hydrogen
    PlantLcoh,
}

/// A calculator request: one variant per calculator, carrying its inputs
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CostSpec {
    /// Electrolyzer capital expenditure
    Electrolyzer(ElectrolyzerInputs),
    /// Renewable generation capital expenditure
    Renewable(RenewableInputs),
    /// Purification, compression and drying capital expenditure
    Pcd(PcdInputs),
    /// Desalination operating expenditure
    Desalination(DesalinationInputs),
    /// Hydrogen storage unit financial metrics
    StorageUnit(StorageUnitInputs),
    /// Plant-level levelized cost of hydrogen
    PlantLcoh(PlantLcohInputs),
}

impl CostSpec {
    /// The calculator this request targets
    pub fn kind(&self) -> CostKind {
        match self {
            Self::Electrolyzer(_) => CostKind::Electrolyzer,
            Self::Renewable(_) => CostKind::Renewable,
            Self::Pcd(_) => CostKind::Pcd,
            Self::Desalination(_) => CostKind::Desalination,
            Self::StorageUnit(_) => CostKind::StorageUnit,
            Self::PlantLcoh(_) => CostKind::PlantLcoh,
        }
    }
}

/// The result of a cost calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CostResult {
    /// A one-off capital expenditure
    Capital(Money),
    /// An annualized operating expenditure
    Annual(MoneyPerYear),
    /// Storage unit financial metrics
    StorageUnit(StorageUnitMetrics),
    /// Plant-level levelized cost and oxygen revenue
    PlantLcoh(PlantLcoh),
}

/// Dispatch a request to the corresponding calculator.
pub fn compute_cost(spec: &CostSpec) -> Result<CostResult, CoreError> {
    match spec {
        CostSpec::Electrolyzer(inputs) => Ok(CostResult::Capital(electrolyzer_capex(inputs)?)),
        CostSpec::Renewable(inputs) => Ok(CostResult::Capital(renewable_capex(inputs)?)),
        CostSpec::Pcd(inputs) => Ok(CostResult::Capital(pcd_capex(inputs)?)),
        CostSpec::Desalination(inputs) => Ok(CostResult::Annual(desalination_opex(inputs)?)),
        CostSpec::StorageUnit(inputs) => Ok(CostResult::StorageUnit(storage_unit_metrics(inputs)?)),
        CostSpec::PlantLcoh(inputs) => Ok(CostResult::PlantLcoh(plant_lcoh(inputs)?)),
    }
}
