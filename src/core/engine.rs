use super::types::{ForecastInputs, ForecastPoint, ForecastSeries, GrowthRates};

pub const DEFAULT_INITIAL_INVESTMENT: f64 = 10_000.0;
pub const DEFAULT_DIVIDEND_YIELD_PCT: f64 = 3.5;
pub const DEFAULT_HORIZON_YEARS: u32 = 10;
pub const MAX_HORIZON_YEARS: u32 = 100;

impl ForecastInputs {
    pub fn new(
        initial_investment: f64,
        dividend_yield_pct: f64,
        horizon_years: u32,
        growth: GrowthRates,
    ) -> Self {
        Self {
            initial_investment,
            dividend_yield_pct,
            horizon_years,
            growth,
        }
    }

    /// Replaces anything the recurrence cannot use with the documented
    /// fallback. Zero growth is a valid assumption and is kept.
    pub fn sanitized(&self) -> Self {
        let defaults = GrowthRates::default();
        let initial_investment = positive_or(self.initial_investment, DEFAULT_INITIAL_INVESTMENT);
        let dividend_yield_pct = positive_or(self.dividend_yield_pct, DEFAULT_DIVIDEND_YIELD_PCT);
        let horizon_years = match self.horizon_years {
            0 => DEFAULT_HORIZON_YEARS,
            years => years.min(MAX_HORIZON_YEARS),
        };
        let growth = GrowthRates {
            dividend_growth_rate_pct: non_negative_or(
                self.growth.dividend_growth_rate_pct,
                defaults.dividend_growth_rate_pct,
            ),
            market_growth_rate_pct: non_negative_or(
                self.growth.market_growth_rate_pct,
                defaults.market_growth_rate_pct,
            ),
        };
        Self {
            initial_investment,
            dividend_yield_pct,
            horizon_years,
            growth,
        }
    }

    pub fn was_clamped(&self) -> bool {
        self.sanitized() != *self
    }
}

fn positive_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

fn non_negative_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        fallback
    }
}

pub fn simulate(
    initial_investment: f64,
    annual_dividend_yield_pct: f64,
    horizon_years: u32,
    dividend_growth_rate_pct: f64,
    market_growth_rate_pct: f64,
) -> ForecastSeries {
    simulate_inputs(&ForecastInputs::new(
        initial_investment,
        annual_dividend_yield_pct,
        horizon_years,
        GrowthRates::new(dividend_growth_rate_pct, market_growth_rate_pct),
    ))
}

/// Annual reinvestment recurrence. Every dividend is reinvested before the
/// market move is applied, and the yield itself compounds by the dividend
/// growth rate. The result is linear in `initial_investment`.
pub fn simulate_inputs(inputs: &ForecastInputs) -> ForecastSeries {
    let inputs = inputs.sanitized();
    let market_factor = 1.0 + inputs.growth.market_growth_rate_pct / 100.0;
    let yield_factor = 1.0 + inputs.growth.dividend_growth_rate_pct / 100.0;

    let mut points = Vec::with_capacity(inputs.horizon_years as usize + 1);
    points.push(ForecastPoint::seed(inputs.initial_investment));

    let mut value = inputs.initial_investment;
    let mut current_yield_pct = inputs.dividend_yield_pct;
    let mut cumulative_dividends = 0.0;

    for period in 1..=inputs.horizon_years {
        let dividend_income = value * current_yield_pct / 100.0;
        cumulative_dividends += dividend_income;
        value += dividend_income;
        value *= market_factor;
        current_yield_pct *= yield_factor;

        points.push(ForecastPoint {
            period,
            portfolio_value: value,
            dividend_income,
            cumulative_dividends,
            reinvested_amount: dividend_income,
        });
    }

    ForecastSeries { inputs, points }
}
