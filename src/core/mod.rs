mod engine;
mod error;
mod gap;
mod scenarios;
mod solver;
mod summary;
mod types;

pub use engine::{
    DEFAULT_DIVIDEND_YIELD_PCT, DEFAULT_HORIZON_YEARS, DEFAULT_INITIAL_INVESTMENT,
    MAX_HORIZON_YEARS, simulate, simulate_inputs,
};
pub use error::ForecastInputError;
pub use gap::{analyze, analyze_portfolio};
pub use scenarios::{
    AGGRESSIVE_GROWTH, CONSERVATIVE_GROWTH, MODERATE_GROWTH, ScenarioKind, run_all,
    run_all_with_custom, run_scenario,
};
pub use solver::{PlanProjection, annuity_payment, project_plan, solve};
pub use summary::summarize;
pub use types::{
    ContributionStyle, ForecastInputs, ForecastPoint, ForecastSeries, ForecastSummary, GapReport,
    GrowthRates, InvestmentPlanRequest, InvestmentPlanResult, PlanYear, PortfolioSnapshot,
    ScenarioParameters,
};
