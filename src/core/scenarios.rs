use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::engine::simulate_inputs;
use super::types::{ForecastInputs, ForecastSeries, GrowthRates, ScenarioParameters};

pub const CONSERVATIVE_GROWTH: GrowthRates = GrowthRates::new(3.0, 5.0);
pub const MODERATE_GROWTH: GrowthRates = GrowthRates::new(5.0, 7.0);
pub const AGGRESSIVE_GROWTH: GrowthRates = GrowthRates::new(7.0, 9.0);

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioKind {
    Conservative,
    Moderate,
    Aggressive,
    Custom,
}

impl ScenarioKind {
    pub const PRESETS: [ScenarioKind; 3] = [
        ScenarioKind::Conservative,
        ScenarioKind::Moderate,
        ScenarioKind::Aggressive,
    ];

    pub const ALL: [ScenarioKind; 4] = [
        ScenarioKind::Conservative,
        ScenarioKind::Moderate,
        ScenarioKind::Aggressive,
        ScenarioKind::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScenarioKind::Conservative => "conservative",
            ScenarioKind::Moderate => "moderate",
            ScenarioKind::Aggressive => "aggressive",
            ScenarioKind::Custom => "custom",
        }
    }

    /// Growth assumptions for this profile. `custom` is only consulted for
    /// [`ScenarioKind::Custom`].
    pub fn growth_rates(self, custom: GrowthRates) -> GrowthRates {
        match self {
            ScenarioKind::Conservative => CONSERVATIVE_GROWTH,
            ScenarioKind::Moderate => MODERATE_GROWTH,
            ScenarioKind::Aggressive => AGGRESSIVE_GROWTH,
            ScenarioKind::Custom => custom,
        }
    }

    pub fn parameters(self, dividend_yield_pct: f64, custom: GrowthRates) -> ScenarioParameters {
        let growth = self.growth_rates(custom);
        ScenarioParameters {
            dividend_yield_pct,
            dividend_growth_rate_pct: growth.dividend_growth_rate_pct,
            market_growth_rate_pct: growth.market_growth_rate_pct,
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScenarioKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "conservative" => Ok(ScenarioKind::Conservative),
            "moderate" => Ok(ScenarioKind::Moderate),
            "aggressive" => Ok(ScenarioKind::Aggressive),
            "custom" => Ok(ScenarioKind::Custom),
            other => Err(format!("unknown scenario '{other}'")),
        }
    }
}

pub fn run_scenario(
    kind: ScenarioKind,
    initial_investment: f64,
    dividend_yield_pct: f64,
    horizon_years: u32,
    custom: GrowthRates,
) -> ForecastSeries {
    simulate_inputs(&ForecastInputs::new(
        initial_investment,
        dividend_yield_pct,
        horizon_years,
        kind.growth_rates(custom),
    ))
}

pub fn run_all(
    initial_investment: f64,
    dividend_yield_pct: f64,
    horizon_years: u32,
) -> BTreeMap<ScenarioKind, ForecastSeries> {
    ScenarioKind::PRESETS
        .into_iter()
        .map(|kind| {
            let series = run_scenario(
                kind,
                initial_investment,
                dividend_yield_pct,
                horizon_years,
                MODERATE_GROWTH,
            );
            (kind, series)
        })
        .collect()
}

pub fn run_all_with_custom(
    initial_investment: f64,
    dividend_yield_pct: f64,
    horizon_years: u32,
    custom: GrowthRates,
) -> BTreeMap<ScenarioKind, ForecastSeries> {
    let mut all = run_all(initial_investment, dividend_yield_pct, horizon_years);
    all.insert(
        ScenarioKind::Custom,
        run_scenario(
            ScenarioKind::Custom,
            initial_investment,
            dividend_yield_pct,
            horizon_years,
            custom,
        ),
    );
    all
}
