use tracing::trace;

use super::engine::{DEFAULT_INITIAL_INVESTMENT, MAX_HORIZON_YEARS, simulate_inputs};
use super::error::ForecastInputError;
use super::types::{
    ContributionStyle, ForecastInputs, ForecastPoint, InvestmentPlanRequest, InvestmentPlanResult,
    PlanYear,
};

const MONTHS_PER_YEAR: u32 = 12;

/// Seed used to probe the annual model before rescaling to the target.
const UNIT_SEED: f64 = DEFAULT_INITIAL_INVESTMENT;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum SolveBranch {
    LumpSumReinvested,
    LumpSumHeld,
    PeriodicReinvested,
    PeriodicHeld,
}

impl SolveBranch {
    fn for_request(request: &InvestmentPlanRequest) -> Self {
        match (request.contribution_style, request.reinvest) {
            (ContributionStyle::LumpSum, true) => SolveBranch::LumpSumReinvested,
            (ContributionStyle::LumpSum, false) => SolveBranch::LumpSumHeld,
            (_, true) => SolveBranch::PeriodicReinvested,
            (_, false) => SolveBranch::PeriodicHeld,
        }
    }
}

/// Outcome of running a contribution plan forward.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanProjection {
    pub total_invested: f64,
    pub final_value: f64,
    pub final_income: f64,
    pub trajectory: Vec<PlanYear>,
}

pub fn solve(request: &InvestmentPlanRequest) -> Result<InvestmentPlanResult, ForecastInputError> {
    validate_request(request)?;

    let yield_fraction = request.yield_pct / 100.0;
    let unreachable = ForecastInputError::UnreachableTarget {
        yield_pct: request.yield_pct,
    };
    // Portfolio value whose flat yield pays the target.
    let target_value = request.target_annual_income / yield_fraction;
    if !target_value.is_finite() {
        return Err(unreachable);
    }

    let branch = SolveBranch::for_request(request);
    let (required_contribution, projection) = match branch {
        SolveBranch::LumpSumReinvested => {
            let probe = simulate_inputs(&ForecastInputs::new(
                UNIT_SEED,
                request.yield_pct,
                request.horizon_years,
                request.growth,
            ));
            let probe_income = probe.last().map(|p| p.dividend_income).unwrap_or(0.0);
            if !(probe_income.is_finite() && probe_income > 0.0) {
                return Err(unreachable);
            }
            let scale = request.target_annual_income / probe_income;
            let required = scale * UNIT_SEED;
            (
                required,
                project_scaled_series(&probe.points, scale, required, yield_fraction),
            )
        }
        SolveBranch::LumpSumHeld => {
            let required = target_value;
            (required, project_plan(required, request))
        }
        SolveBranch::PeriodicReinvested => {
            let (rate, periods) = periodic_rate_and_count(request);
            let required = annuity_payment(target_value, rate, periods);
            (required, project_plan(required, request))
        }
        SolveBranch::PeriodicHeld => {
            let (_, periods) = periodic_rate_and_count(request);
            let required = target_value / periods as f64;
            (required, project_plan(required, request))
        }
    };

    trace!(
        ?branch,
        target = request.target_annual_income,
        required_contribution,
        "solved investment plan"
    );

    let result = InvestmentPlanResult {
        target_annual_income: request.target_annual_income,
        yield_pct: request.yield_pct,
        contribution_style: request.contribution_style,
        reinvest: request.reinvest,
        required_contribution,
        total_invested: projection.total_invested,
        final_portfolio_value: projection.final_value,
        initial_annual_income: required_contribution * yield_fraction,
        final_annual_income: projection.final_income,
        trajectory: projection.trajectory,
    };

    if is_finite_result(&result) {
        Ok(result)
    } else {
        Err(unreachable)
    }
}

/// Per-period rate and number of periods for a periodic plan. Yearly plans
/// use the effective annual rate of monthly compounding so the closed form
/// agrees with the monthly projection.
fn periodic_rate_and_count(request: &InvestmentPlanRequest) -> (f64, u32) {
    let monthly_rate = request.yield_pct / 100.0 / MONTHS_PER_YEAR as f64;
    let periods = request.horizon_years * request.contribution_style.periods_per_year();
    let rate = match request.contribution_style {
        ContributionStyle::Yearly => (MONTHS_PER_YEAR as f64 * monthly_rate.ln_1p()).exp_m1(),
        ContributionStyle::Monthly | ContributionStyle::LumpSum => monthly_rate,
    };
    (rate, periods)
}

/// Payment per period whose future value after `periods` reaches
/// `future_value`. Falls back to the linear limit when the growth factor
/// vanishes.
pub fn annuity_payment(future_value: f64, rate: f64, periods: u32) -> f64 {
    if periods == 0 {
        return future_value;
    }
    let growth = (periods as f64 * rate.ln_1p()).exp_m1();
    if rate > 0.0 && growth.is_finite() && growth > 0.0 {
        future_value * rate / growth
    } else {
        future_value / periods as f64
    }
}

/// Month-by-month projection of a contribution plan: contribute, then credit
/// a month of dividends when reinvesting. Yearly contributions land in the
/// first month of each year.
pub fn project_plan(contribution: f64, request: &InvestmentPlanRequest) -> PlanProjection {
    let yield_fraction = request.yield_pct / 100.0;
    let horizon_years = request.horizon_years;
    let monthly_rate = yield_fraction / MONTHS_PER_YEAR as f64;
    let mut trajectory = Vec::with_capacity(horizon_years as usize + 1);
    trajectory.push(PlanYear {
        year: 0,
        total_invested: contribution,
        portfolio_value: contribution,
        annual_income: contribution * yield_fraction,
    });

    let mut value = 0.0;
    let mut invested = 0.0;
    for month in 0..horizon_years * MONTHS_PER_YEAR {
        let deposit = match request.contribution_style {
            ContributionStyle::LumpSum if month == 0 => contribution,
            ContributionStyle::LumpSum => 0.0,
            ContributionStyle::Monthly => contribution,
            ContributionStyle::Yearly if month % MONTHS_PER_YEAR == 0 => contribution,
            ContributionStyle::Yearly => 0.0,
        };
        value += deposit;
        invested += deposit;
        if request.reinvest {
            value += value * monthly_rate;
        }

        if (month + 1) % MONTHS_PER_YEAR == 0 {
            trajectory.push(PlanYear {
                year: (month + 1) / MONTHS_PER_YEAR,
                total_invested: invested,
                portfolio_value: value,
                annual_income: value * yield_fraction,
            });
        }
    }

    PlanProjection {
        total_invested: invested,
        final_value: value,
        final_income: value * yield_fraction,
        trajectory,
    }
}

// The lump-sum reinvestment plan was solved against the annual model, so it
// is reported on that same path, rescaled from the unit probe.
fn project_scaled_series(
    probe: &[ForecastPoint],
    scale: f64,
    required: f64,
    yield_fraction: f64,
) -> PlanProjection {
    let trajectory: Vec<PlanYear> = probe
        .iter()
        .map(|point| PlanYear {
            year: point.period,
            total_invested: required,
            portfolio_value: point.portfolio_value * scale,
            annual_income: if point.period == 0 {
                required * yield_fraction
            } else {
                point.dividend_income * scale
            },
        })
        .collect();
    let last = trajectory.last().copied().unwrap_or(PlanYear {
        year: 0,
        total_invested: required,
        portfolio_value: required,
        annual_income: required * yield_fraction,
    });
    PlanProjection {
        total_invested: required,
        final_value: last.portfolio_value,
        final_income: last.annual_income,
        trajectory,
    }
}

fn is_finite_result(result: &InvestmentPlanResult) -> bool {
    [
        result.required_contribution,
        result.total_invested,
        result.final_portfolio_value,
        result.initial_annual_income,
        result.final_annual_income,
    ]
    .iter()
    .all(|v| v.is_finite())
        && result
            .trajectory
            .iter()
            .all(|y| y.portfolio_value.is_finite() && y.annual_income.is_finite())
}

fn validate_request(request: &InvestmentPlanRequest) -> Result<(), ForecastInputError> {
    if !request.target_annual_income.is_finite() {
        return Err(ForecastInputError::NonFinite {
            field: "target_annual_income",
        });
    }
    if request.target_annual_income <= 0.0 {
        return Err(ForecastInputError::NonPositiveTarget(
            request.target_annual_income,
        ));
    }
    if request.horizon_years == 0 {
        return Err(ForecastInputError::ZeroHorizon);
    }
    if request.horizon_years > MAX_HORIZON_YEARS {
        return Err(ForecastInputError::HorizonTooLong {
            years: request.horizon_years,
            max: MAX_HORIZON_YEARS,
        });
    }
    if !request.yield_pct.is_finite() {
        return Err(ForecastInputError::NonFinite { field: "yield_pct" });
    }
    if request.yield_pct < 0.0 {
        return Err(ForecastInputError::NegativeYield(request.yield_pct));
    }
    if request.yield_pct == 0.0 {
        return Err(ForecastInputError::UnreachableTarget { yield_pct: 0.0 });
    }
    if !request.growth.dividend_growth_rate_pct.is_finite() {
        return Err(ForecastInputError::NonFinite {
            field: "dividend_growth_rate_pct",
        });
    }
    if !request.growth.market_growth_rate_pct.is_finite() {
        return Err(ForecastInputError::NonFinite {
            field: "market_growth_rate_pct",
        });
    }
    Ok(())
}
