use super::types::{ForecastSeries, ForecastSummary};

pub fn summarize(series: &ForecastSeries) -> ForecastSummary {
    let initial_value = series.first().map(|p| p.portfolio_value).unwrap_or(0.0);
    let (final_value, total_dividends, final_income) = series
        .last()
        .map(|p| (p.portfolio_value, p.cumulative_dividends, p.dividend_income))
        .unwrap_or((initial_value, 0.0, 0.0));
    // Period 0 is the seed; the first earned income is period 1.
    let initial_income = series
        .points
        .get(1)
        .map(|p| p.dividend_income)
        .unwrap_or(0.0);

    ForecastSummary {
        initial_value,
        final_value,
        total_growth_pct: percent_change(initial_value, final_value),
        total_dividends,
        initial_income,
        final_income,
        income_growth_pct: percent_change(initial_income, final_income),
        yield_on_cost_pct: ratio_pct(final_income, initial_value),
    }
}

fn percent_change(from: f64, to: f64) -> f64 {
    if from == 0.0 {
        return 0.0;
    }
    (to - from) / from * 100.0
}

fn ratio_pct(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    numerator / denominator * 100.0
}
