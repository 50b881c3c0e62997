use super::types::{ContributionStyle, GapReport, InvestmentPlanResult, PortfolioSnapshot};

/// Compares live holdings against a solved plan.
pub fn analyze(plan: &InvestmentPlanResult, current_value: f64, current_income: f64) -> GapReport {
    let current_value = finite_or_zero(current_value).max(0.0);
    let current_income = finite_or_zero(current_income).max(0.0);

    let required_investment = match plan.contribution_style {
        ContributionStyle::LumpSum => plan.required_contribution,
        ContributionStyle::Monthly | ContributionStyle::Yearly => plan.total_invested,
    };

    let percent_complete = if required_investment > 0.0 {
        (current_value / required_investment * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    GapReport {
        investment_gap: (required_investment - current_value).max(0.0),
        income_gap: (plan.target_annual_income - current_income).max(0.0),
        percent_complete,
        years_to_target: years_to_target(plan, current_value, current_income),
    }
}

pub fn analyze_portfolio(plan: &InvestmentPlanResult, snapshot: &PortfolioSnapshot) -> GapReport {
    analyze(plan, snapshot.current_value, snapshot.total_dividend_income)
}

/// Years of monthly reinvestment at the plan's yield before the current
/// holdings alone pay the target income. `None` when they never will.
fn years_to_target(
    plan: &InvestmentPlanResult,
    current_value: f64,
    current_income: f64,
) -> Option<f64> {
    if current_income >= plan.target_annual_income {
        return Some(0.0);
    }
    let yield_fraction = plan.yield_pct / 100.0;
    if current_value <= 0.0 || yield_fraction <= 0.0 {
        return None;
    }
    let target_value = plan.target_annual_income / yield_fraction;
    if current_value >= target_value {
        return Some(0.0);
    }
    let monthly_growth = (yield_fraction / 12.0).ln_1p();
    let months = (target_value / current_value).ln() / monthly_growth;
    let years = months / 12.0;
    years.is_finite().then_some(years)
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::solver::solve;
    use crate::core::types::InvestmentPlanRequest;

    fn assert_approx_tol(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}, tolerance {tol}"
        );
    }

    fn lump_sum_plan() -> InvestmentPlanResult {
        solve(&InvestmentPlanRequest::new(
            50_000.0,
            10,
            5.0,
            ContributionStyle::LumpSum,
            false,
        ))
        .expect("must solve")
    }

    #[test]
    fn lump_sum_gap_is_against_required_contribution() {
        let report = analyze(&lump_sum_plan(), 250_000.0, 12_500.0);
        assert_approx_tol(report.investment_gap, 750_000.0, 1e-6);
        assert_approx_tol(report.income_gap, 37_500.0, 1e-6);
        assert_approx_tol(report.percent_complete, 25.0, 1e-9);

        // 250k -> 1M at 5%/12 a month.
        let expected_years = 4.0_f64.ln() / (0.05_f64 / 12.0).ln_1p() / 12.0;
        assert_approx_tol(report.years_to_target.expect("reachable"), expected_years, 1e-9);
    }

    #[test]
    fn periodic_gap_is_against_total_invested() {
        let plan = solve(&InvestmentPlanRequest::new(
            6_000.0,
            5,
            4.0,
            ContributionStyle::Monthly,
            false,
        ))
        .expect("must solve");
        let report = analyze(&plan, 30_000.0, 1_200.0);
        assert_approx_tol(report.investment_gap, 120_000.0, 1e-6);
        assert_approx_tol(report.income_gap, 4_800.0, 1e-9);
        assert_approx_tol(report.percent_complete, 20.0, 1e-9);
    }

    #[test]
    fn ahead_of_plan_is_clamped() {
        let report = analyze(&lump_sum_plan(), 2_000_000.0, 100_000.0);
        assert_eq!(report.investment_gap, 0.0);
        assert_eq!(report.income_gap, 0.0);
        assert_eq!(report.percent_complete, 100.0);
        assert_eq!(report.years_to_target, Some(0.0));
    }

    #[test]
    fn empty_portfolio_never_reaches_target() {
        let report = analyze(&lump_sum_plan(), 0.0, 0.0);
        assert_eq!(report.percent_complete, 0.0);
        assert_approx_tol(report.investment_gap, 1_000_000.0, 1e-6);
        assert_eq!(report.years_to_target, None);

        let report = analyze(&lump_sum_plan(), f64::NAN, -5.0);
        assert_eq!(report.percent_complete, 0.0);
        assert_approx_tol(report.income_gap, 50_000.0, 1e-9);
    }

    #[test]
    fn snapshot_feeds_value_and_income() {
        let snapshot = PortfolioSnapshot {
            total_investment: 400_000.0,
            average_yield_pct: 4.5,
            current_value: 500_000.0,
            total_dividend_income: 22_500.0,
        };
        let plan = lump_sum_plan();
        assert_eq!(
            analyze_portfolio(&plan, &snapshot),
            analyze(&plan, 500_000.0, 22_500.0)
        );
    }
}
