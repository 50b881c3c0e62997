use serde::{Deserialize, Serialize};

use super::scenarios::MODERATE_GROWTH;

/// Annual growth assumptions, both in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthRates {
    pub dividend_growth_rate_pct: f64,
    pub market_growth_rate_pct: f64,
}

impl GrowthRates {
    pub const fn new(dividend_growth_rate_pct: f64, market_growth_rate_pct: f64) -> Self {
        Self {
            dividend_growth_rate_pct,
            market_growth_rate_pct,
        }
    }
}

impl Default for GrowthRates {
    fn default() -> Self {
        MODERATE_GROWTH
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioParameters {
    pub dividend_yield_pct: f64,
    pub dividend_growth_rate_pct: f64,
    pub market_growth_rate_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastInputs {
    pub initial_investment: f64,
    pub dividend_yield_pct: f64,
    pub horizon_years: u32,
    pub growth: GrowthRates,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    pub period: u32,
    pub portfolio_value: f64,
    pub dividend_income: f64,
    pub cumulative_dividends: f64,
    pub reinvested_amount: f64,
}

impl ForecastPoint {
    pub(crate) fn seed(initial_investment: f64) -> Self {
        Self {
            period: 0,
            portfolio_value: initial_investment,
            dividend_income: 0.0,
            cumulative_dividends: 0.0,
            reinvested_amount: 0.0,
        }
    }
}

/// One simulated path. `inputs` holds the values actually used, after
/// clamping, so callers can tell whether their inputs were replaced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSeries {
    pub inputs: ForecastInputs,
    pub points: Vec<ForecastPoint>,
}

impl ForecastSeries {
    pub fn first(&self) -> Option<&ForecastPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&ForecastPoint> {
        self.points.last()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSummary {
    pub initial_value: f64,
    pub final_value: f64,
    pub total_growth_pct: f64,
    pub total_dividends: f64,
    pub initial_income: f64,
    pub final_income: f64,
    pub income_growth_pct: f64,
    pub yield_on_cost_pct: f64,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContributionStyle {
    #[serde(alias = "lumpSum", alias = "lump_sum", alias = "lump")]
    LumpSum,
    Monthly,
    Yearly,
}

impl ContributionStyle {
    pub fn periods_per_year(self) -> u32 {
        match self {
            ContributionStyle::LumpSum => 0,
            ContributionStyle::Monthly => 12,
            ContributionStyle::Yearly => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvestmentPlanRequest {
    pub target_annual_income: f64,
    pub horizon_years: u32,
    pub yield_pct: f64,
    pub contribution_style: ContributionStyle,
    pub reinvest: bool,
    /// Only the lump-sum reinvestment branch consults these.
    pub growth: GrowthRates,
}

impl InvestmentPlanRequest {
    pub fn new(
        target_annual_income: f64,
        horizon_years: u32,
        yield_pct: f64,
        contribution_style: ContributionStyle,
        reinvest: bool,
    ) -> Self {
        Self {
            target_annual_income,
            horizon_years,
            yield_pct,
            contribution_style,
            reinvest,
            growth: GrowthRates::default(),
        }
    }

    pub fn with_growth(self, growth: GrowthRates) -> Self {
        Self { growth, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanYear {
    pub year: u32,
    pub total_invested: f64,
    pub portfolio_value: f64,
    pub annual_income: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentPlanResult {
    pub target_annual_income: f64,
    pub yield_pct: f64,
    pub contribution_style: ContributionStyle,
    pub reinvest: bool,
    /// Total lump sum for `LumpSum`, otherwise the amount paid each period.
    pub required_contribution: f64,
    pub total_invested: f64,
    pub final_portfolio_value: f64,
    pub initial_annual_income: f64,
    pub final_annual_income: f64,
    pub trajectory: Vec<PlanYear>,
}

/// Live holdings as reported by the portfolio service.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub total_investment: f64,
    pub average_yield_pct: f64,
    pub current_value: f64,
    pub total_dividend_income: f64,
}

impl PortfolioSnapshot {
    /// Seeds a forecast from the holdings. Non-positive values are left for
    /// the simulator to replace with its defaults.
    pub fn forecast_inputs(&self, horizon_years: u32, growth: GrowthRates) -> ForecastInputs {
        let initial_investment = if self.total_investment > 0.0 {
            self.total_investment
        } else {
            self.current_value
        };
        ForecastInputs {
            initial_investment,
            dividend_yield_pct: self.average_yield_pct,
            horizon_years,
            growth,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GapReport {
    pub investment_gap: f64,
    pub income_gap: f64,
    pub percent_complete: f64,
    pub years_to_target: Option<f64>,
}
