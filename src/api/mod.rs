use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use axum::{
    Router,
    extract::{Json, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::core::{
    ContributionStyle, DEFAULT_DIVIDEND_YIELD_PCT, DEFAULT_HORIZON_YEARS,
    DEFAULT_INITIAL_INVESTMENT, ForecastInputs, ForecastPoint, ForecastSummary, GapReport,
    GrowthRates, InvestmentPlanRequest, InvestmentPlanResult, MAX_HORIZON_YEARS,
    MODERATE_GROWTH, ScenarioKind, ScenarioParameters, analyze, solve, summarize,
};

mod cache;

pub use cache::ForecastCache;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliContributionStyle {
    LumpSum,
    Monthly,
    Yearly,
}

impl From<CliContributionStyle> for ContributionStyle {
    fn from(value: CliContributionStyle) -> Self {
        match value {
            CliContributionStyle::LumpSum => ContributionStyle::LumpSum,
            CliContributionStyle::Monthly => ContributionStyle::Monthly,
            CliContributionStyle::Yearly => ContributionStyle::Yearly,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "dividend-forecast",
    about = "Dividend reinvestment forecaster and income-target solver"
)]
pub struct Cli {
    #[arg(
        long,
        env = "RUST_LOG",
        default_value = "info",
        global = true,
        help = "Tracing filter directive, e.g. info or dividend_forecast=debug"
    )]
    pub log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the JSON API.
    Serve(ServeArgs),
    /// Print every scenario's forecast as JSON.
    Forecast(ForecastArgs),
    /// Solve for the investment needed to reach a target income.
    Plan(PlanArgs),
}

#[derive(Args, Debug)]
struct ServeArgs {
    #[arg(
        long,
        env = "DIVIDEND_FORECAST_HOST",
        default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED)
    )]
    host: IpAddr,
    #[arg(long, env = "DIVIDEND_FORECAST_PORT", default_value_t = 8080)]
    port: u16,
}

#[derive(Args, Debug)]
struct ForecastArgs {
    #[arg(long, default_value_t = DEFAULT_INITIAL_INVESTMENT)]
    initial_investment: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_DIVIDEND_YIELD_PCT,
        help = "Dividend yield in percent"
    )]
    dividend_yield: f64,
    #[arg(long, default_value_t = DEFAULT_HORIZON_YEARS)]
    horizon_years: u32,
    #[arg(long, help = "Custom scenario dividend growth rate in percent")]
    dividend_growth_rate: Option<f64>,
    #[arg(long, help = "Custom scenario market growth rate in percent")]
    market_growth_rate: Option<f64>,
}

#[derive(Args, Debug)]
struct PlanArgs {
    #[arg(long)]
    target_annual_income: f64,
    #[arg(long, default_value_t = DEFAULT_HORIZON_YEARS)]
    horizon_years: u32,
    #[arg(
        long,
        default_value_t = DEFAULT_DIVIDEND_YIELD_PCT,
        help = "Dividend yield in percent"
    )]
    dividend_yield: f64,
    #[arg(long, value_enum, default_value_t = CliContributionStyle::Monthly)]
    contribution_style: CliContributionStyle,
    #[arg(long, help = "Withdraw dividends instead of reinvesting them")]
    no_reinvest: bool,
    #[arg(long, help = "Dividend growth rate in percent for lump-sum plans")]
    dividend_growth_rate: Option<f64>,
    #[arg(long, help = "Market growth rate in percent for lump-sum plans")]
    market_growth_rate: Option<f64>,
    #[arg(long, help = "Current portfolio value, enables the gap report")]
    current_value: Option<f64>,
    #[arg(long, help = "Current annual dividend income")]
    current_income: Option<f64>,
}

#[derive(Debug, Clone, Copy)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl From<ServeArgs> for ServerConfig {
    fn from(args: ServeArgs) -> Self {
        Self {
            host: args.host,
            port: args.port,
        }
    }
}

pub fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    // A second initialisation (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub async fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Serve(args) => run_http_server(args.into())
            .await
            .map_err(|e| format!("Server error: {e}")),
        Command::Forecast(args) => {
            let request = forecast_request_from_payload(ForecastPayload {
                initial_investment: Some(args.initial_investment),
                dividend_yield: Some(args.dividend_yield),
                horizon_years: Some(args.horizon_years),
                dividend_growth_rate: args.dividend_growth_rate,
                market_growth_rate: args.market_growth_rate,
            })?;
            let response = build_forecast_response(&request, &ForecastCache::default());
            print_json(&response)
        }
        Command::Plan(args) => {
            let request = plan_request_from_payload(PlanPayload {
                target_annual_income: Some(args.target_annual_income),
                horizon_years: Some(args.horizon_years),
                dividend_yield: Some(args.dividend_yield),
                contribution_style: Some(args.contribution_style.into()),
                reinvest: Some(!args.no_reinvest),
                dividend_growth_rate: args.dividend_growth_rate,
                market_growth_rate: args.market_growth_rate,
                current_value: args.current_value,
                current_income: args.current_income,
            })?;
            let response = build_plan_response(&request)?;
            print_json(&response)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value).map_err(|e| format!("JSON error: {e}"))?;
    println!("{text}");
    Ok(())
}

#[derive(Clone, Default)]
struct AppState {
    cache: Arc<ForecastCache>,
}

pub async fn run_http_server(config: ServerConfig) -> std::io::Result<()> {
    let addr = config.socket_addr();
    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/api/scenarios", get(scenarios_handler))
        .route(
            "/api/forecast",
            get(forecast_get_handler).post(forecast_post_handler),
        )
        .route("/api/plan", get(plan_get_handler).post(plan_post_handler))
        .fallback(not_found_handler)
        .with_state(AppState::default());

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "dividend forecast API listening");

    axum::serve(listener, app).await
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ForecastPayload {
    #[serde(alias = "initialValue")]
    initial_investment: Option<f64>,
    #[serde(alias = "yield", alias = "dividendYieldPct")]
    dividend_yield: Option<f64>,
    #[serde(alias = "years", alias = "horizon")]
    horizon_years: Option<u32>,
    dividend_growth_rate: Option<f64>,
    market_growth_rate: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PlanPayload {
    #[serde(alias = "targetIncome")]
    target_annual_income: Option<f64>,
    #[serde(alias = "years", alias = "horizon")]
    horizon_years: Option<u32>,
    #[serde(alias = "yield", alias = "dividendYieldPct")]
    dividend_yield: Option<f64>,
    contribution_style: Option<ContributionStyle>,
    reinvest: Option<bool>,
    dividend_growth_rate: Option<f64>,
    market_growth_rate: Option<f64>,
    current_value: Option<f64>,
    current_income: Option<f64>,
}

#[derive(Debug, Clone, Copy)]
struct ForecastRequest {
    inputs: ForecastInputs,
    custom: Option<GrowthRates>,
}

#[derive(Debug, Clone, Copy)]
struct PlanRequest {
    plan: InvestmentPlanRequest,
    current_value: Option<f64>,
    current_income: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScenarioEntry {
    scenario: ScenarioKind,
    dividend_growth_rate_pct: Option<f64>,
    market_growth_rate_pct: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScenarioForecast {
    scenario: ScenarioKind,
    parameters: ScenarioParameters,
    clamped: bool,
    summary: ForecastSummary,
    points: Vec<ForecastPoint>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ForecastResponse {
    initial_investment: f64,
    dividend_yield_pct: f64,
    horizon_years: u32,
    scenarios: Vec<ScenarioForecast>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlanResponse {
    plan: InvestmentPlanResult,
    gap: Option<GapReport>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health_handler() -> Response {
    json_response(StatusCode::OK, HealthResponse { status: "ok" })
}

async fn scenarios_handler() -> Response {
    json_response(StatusCode::OK, scenario_catalog())
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn forecast_get_handler(
    State(state): State<AppState>,
    Query(payload): Query<ForecastPayload>,
) -> Response {
    forecast_handler_impl(&state, payload)
}

async fn forecast_post_handler(
    State(state): State<AppState>,
    Json(payload): Json<ForecastPayload>,
) -> Response {
    forecast_handler_impl(&state, payload)
}

fn forecast_handler_impl(state: &AppState, payload: ForecastPayload) -> Response {
    let request = match forecast_request_from_payload(payload) {
        Ok(request) => request,
        Err(msg) => {
            warn!(%msg, "rejected forecast request");
            return error_response(StatusCode::BAD_REQUEST, &msg);
        }
    };
    json_response(
        StatusCode::OK,
        build_forecast_response(&request, &state.cache),
    )
}

async fn plan_get_handler(Query(payload): Query<PlanPayload>) -> Response {
    plan_handler_impl(payload)
}

async fn plan_post_handler(Json(payload): Json<PlanPayload>) -> Response {
    plan_handler_impl(payload)
}

fn plan_handler_impl(payload: PlanPayload) -> Response {
    let response =
        plan_request_from_payload(payload).and_then(|request| build_plan_response(&request));
    match response {
        Ok(response) => json_response(StatusCode::OK, response),
        Err(msg) => {
            warn!(%msg, "rejected plan request");
            error_response(StatusCode::BAD_REQUEST, &msg)
        }
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

fn scenario_catalog() -> Vec<ScenarioEntry> {
    ScenarioKind::ALL
        .into_iter()
        .map(|scenario| {
            let preset = (scenario != ScenarioKind::Custom)
                .then(|| scenario.growth_rates(MODERATE_GROWTH));
            ScenarioEntry {
                scenario,
                dividend_growth_rate_pct: preset.map(|g| g.dividend_growth_rate_pct),
                market_growth_rate_pct: preset.map(|g| g.market_growth_rate_pct),
            }
        })
        .collect()
}

fn require_finite(name: &str, value: Option<f64>) -> Result<Option<f64>, String> {
    match value {
        Some(v) if !v.is_finite() => Err(format!("{name} must be a finite number")),
        other => Ok(other),
    }
}

#[cfg(test)]
fn forecast_request_from_json(json: &str) -> Result<ForecastRequest, String> {
    let payload = serde_json::from_str::<ForecastPayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    forecast_request_from_payload(payload)
}

#[cfg(test)]
fn plan_request_from_json(json: &str) -> Result<PlanRequest, String> {
    let payload = serde_json::from_str::<PlanPayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    plan_request_from_payload(payload)
}

// Non-positive forecast inputs are passed through; the simulator replaces
// them with its defaults and the response flags the clamp.
fn forecast_request_from_payload(payload: ForecastPayload) -> Result<ForecastRequest, String> {
    let initial_investment = require_finite("initialInvestment", payload.initial_investment)?
        .unwrap_or(DEFAULT_INITIAL_INVESTMENT);
    let dividend_yield = require_finite("dividendYield", payload.dividend_yield)?
        .unwrap_or(DEFAULT_DIVIDEND_YIELD_PCT);
    let horizon_years = payload.horizon_years.unwrap_or(DEFAULT_HORIZON_YEARS);
    if horizon_years > MAX_HORIZON_YEARS {
        return Err(format!("horizonYears must be <= {MAX_HORIZON_YEARS}"));
    }

    let dividend_growth = require_finite("dividendGrowthRate", payload.dividend_growth_rate)?;
    let market_growth = require_finite("marketGrowthRate", payload.market_growth_rate)?;
    let custom = match (dividend_growth, market_growth) {
        (Some(dg), Some(mg)) => Some(GrowthRates::new(dg, mg)),
        (None, None) => None,
        _ => {
            return Err(
                "dividendGrowthRate and marketGrowthRate must be supplied together".to_string(),
            );
        }
    };

    Ok(ForecastRequest {
        inputs: ForecastInputs::new(
            initial_investment,
            dividend_yield,
            horizon_years,
            GrowthRates::default(),
        ),
        custom,
    })
}

fn plan_request_from_payload(payload: PlanPayload) -> Result<PlanRequest, String> {
    let Some(target) = require_finite("targetAnnualIncome", payload.target_annual_income)? else {
        return Err("targetAnnualIncome is required".to_string());
    };
    if target <= 0.0 {
        return Err("targetAnnualIncome must be > 0".to_string());
    }

    let horizon_years = payload.horizon_years.unwrap_or(DEFAULT_HORIZON_YEARS);
    if horizon_years == 0 {
        return Err("horizonYears must be > 0".to_string());
    }
    if horizon_years > MAX_HORIZON_YEARS {
        return Err(format!("horizonYears must be <= {MAX_HORIZON_YEARS}"));
    }

    let dividend_yield = require_finite("dividendYield", payload.dividend_yield)?
        .unwrap_or(DEFAULT_DIVIDEND_YIELD_PCT);
    if dividend_yield < 0.0 {
        return Err("dividendYield must be >= 0".to_string());
    }

    let defaults = GrowthRates::default();
    let growth = GrowthRates::new(
        require_finite("dividendGrowthRate", payload.dividend_growth_rate)?
            .unwrap_or(defaults.dividend_growth_rate_pct),
        require_finite("marketGrowthRate", payload.market_growth_rate)?
            .unwrap_or(defaults.market_growth_rate_pct),
    );

    let current_value = require_finite("currentValue", payload.current_value)?;
    let current_income = require_finite("currentIncome", payload.current_income)?.unwrap_or(0.0);
    if current_value.is_some_and(|v| v < 0.0) || current_income < 0.0 {
        return Err("currentValue and currentIncome must be >= 0".to_string());
    }

    let plan = InvestmentPlanRequest::new(
        target,
        horizon_years,
        dividend_yield,
        payload.contribution_style.unwrap_or(ContributionStyle::Monthly),
        payload.reinvest.unwrap_or(true),
    )
    .with_growth(growth);

    Ok(PlanRequest {
        plan,
        current_value,
        current_income,
    })
}

fn build_forecast_response(request: &ForecastRequest, cache: &ForecastCache) -> ForecastResponse {
    let custom = request.custom.unwrap_or(MODERATE_GROWTH);
    let kinds: &[ScenarioKind] = if request.custom.is_some() {
        &ScenarioKind::ALL
    } else {
        &ScenarioKind::PRESETS
    };

    let scenarios = kinds
        .iter()
        .map(|&scenario| {
            let inputs = ForecastInputs {
                growth: scenario.growth_rates(custom),
                ..request.inputs
            };
            let series = cache.get_or_simulate(&inputs);
            ScenarioForecast {
                scenario,
                parameters: scenario.parameters(series.inputs.dividend_yield_pct, custom),
                clamped: inputs.was_clamped(),
                summary: summarize(&series),
                points: series.points.clone(),
            }
        })
        .collect();

    ForecastResponse {
        initial_investment: request.inputs.initial_investment,
        dividend_yield_pct: request.inputs.dividend_yield_pct,
        horizon_years: request.inputs.horizon_years,
        scenarios,
    }
}

fn build_plan_response(request: &PlanRequest) -> Result<PlanResponse, String> {
    let plan = solve(&request.plan).map_err(|e| e.to_string())?;
    let gap = request
        .current_value
        .map(|value| analyze(&plan, value, request.current_income));
    Ok(PlanResponse { plan, gap })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn forecast_payload_defaults_when_empty() {
        let request = forecast_request_from_json("{}").expect("valid payload");
        assert_approx(request.inputs.initial_investment, DEFAULT_INITIAL_INVESTMENT);
        assert_approx(request.inputs.dividend_yield_pct, DEFAULT_DIVIDEND_YIELD_PCT);
        assert_eq!(request.inputs.horizon_years, DEFAULT_HORIZON_YEARS);
        assert!(request.custom.is_none());
    }

    #[test]
    fn forecast_payload_parses_web_keys() {
        let request = forecast_request_from_json(
            r#"{"initialInvestment": 25000, "yield": 4.2, "years": 15,
                "dividendGrowthRate": 2, "marketGrowthRate": 4}"#,
        )
        .expect("valid payload");
        assert_approx(request.inputs.initial_investment, 25_000.0);
        assert_approx(request.inputs.dividend_yield_pct, 4.2);
        assert_eq!(request.inputs.horizon_years, 15);
        assert_eq!(request.custom, Some(GrowthRates::new(2.0, 4.0)));
    }

    #[test]
    fn forecast_payload_rejects_half_custom_scenario() {
        let err = forecast_request_from_json(r#"{"dividendGrowthRate": 2}"#)
            .expect_err("must reject lone growth rate");
        assert!(err.contains("supplied together"));
    }

    #[test]
    fn forecast_payload_rejects_long_horizon() {
        let err = forecast_request_from_json(r#"{"horizonYears": 500}"#)
            .expect_err("must reject horizon");
        assert!(err.contains("horizonYears"));
    }

    #[test]
    fn forecast_response_covers_presets_and_flags_clamping() {
        let cache = ForecastCache::default();
        let request = forecast_request_from_json(r#"{"initialInvestment": 0, "yield": 3.5}"#)
            .expect("valid payload");
        let response = build_forecast_response(&request, &cache);

        assert_eq!(response.scenarios.len(), 3);
        for scenario in &response.scenarios {
            assert!(scenario.clamped);
            assert_approx(scenario.points[0].portfolio_value, DEFAULT_INITIAL_INVESTMENT);
            assert_eq!(scenario.points.len(), DEFAULT_HORIZON_YEARS as usize + 1);
        }
        assert_eq!(cache.len(), 3);

        let again = build_forecast_response(&request, &cache);
        assert_eq!(again.scenarios.len(), 3);
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn forecast_response_includes_custom_when_requested() {
        let request = forecast_request_from_json(
            r#"{"initialInvestment": 1000, "yield": 10, "horizonYears": 2,
                "dividendGrowthRate": 0, "marketGrowthRate": 0}"#,
        )
        .expect("valid payload");
        let response = build_forecast_response(&request, &ForecastCache::default());
        let custom = response
            .scenarios
            .iter()
            .find(|s| s.scenario == ScenarioKind::Custom)
            .expect("custom scenario present");
        assert!(!custom.clamped);
        assert_approx(custom.summary.final_value, 1_210.0);
        assert_approx(custom.parameters.market_growth_rate_pct, 0.0);
    }

    #[test]
    fn plan_payload_parses_style_aliases() {
        let request = plan_request_from_json(
            r#"{"targetIncome": 50000, "yield": 5, "contributionStyle": "lumpSum",
                "reinvest": false, "currentValue": 250000, "currentIncome": 12500}"#,
        )
        .expect("valid payload");
        assert_eq!(request.plan.contribution_style, ContributionStyle::LumpSum);
        assert!(!request.plan.reinvest);
        assert_eq!(request.current_value, Some(250_000.0));

        let response = build_plan_response(&request).expect("must solve");
        assert_approx(response.plan.required_contribution, 1_000_000.0);
        let gap = response.gap.expect("gap requested");
        assert_approx(gap.investment_gap, 750_000.0);
        assert_approx(gap.percent_complete, 25.0);
    }

    #[test]
    fn plan_payload_rejects_invalid_targets() {
        let err = plan_request_from_json("{}").expect_err("target required");
        assert!(err.contains("targetAnnualIncome"));

        let err = plan_request_from_json(r#"{"targetAnnualIncome": -5}"#)
            .expect_err("negative target");
        assert!(err.contains("> 0"));

        let err = plan_request_from_json(r#"{"targetAnnualIncome": 100, "horizonYears": 0}"#)
            .expect_err("zero horizon");
        assert!(err.contains("horizonYears"));

        let err = plan_request_from_json(r#"{"targetAnnualIncome": 100, "dividendYield": -1}"#)
            .expect_err("negative yield");
        assert!(err.contains("dividendYield"));
    }

    #[test]
    fn zero_yield_plan_is_a_bad_request_not_a_nan() {
        let request = plan_request_from_json(r#"{"targetAnnualIncome": 100, "dividendYield": 0}"#)
            .expect("zero yield passes boundary validation");
        let err = build_plan_response(&request).expect_err("unreachable target");
        assert!(err.contains("never produce"));
    }

    #[test]
    fn plan_response_serialization_contains_expected_fields() {
        let request = plan_request_from_json(
            r#"{"targetAnnualIncome": 12000, "horizonYears": 20, "dividendYield": 4,
                "contributionStyle": "monthly"}"#,
        )
        .expect("valid payload");
        let response = build_plan_response(&request).expect("must solve");
        let json = serde_json::to_value(&response).expect("serializes");

        let plan = &json["plan"];
        for key in [
            "requiredContribution",
            "totalInvested",
            "finalPortfolioValue",
            "initialAnnualIncome",
            "finalAnnualIncome",
            "trajectory",
        ] {
            assert!(plan.get(key).is_some(), "missing {key}");
        }
        assert_eq!(plan["contributionStyle"], "monthly");
        assert_eq!(plan["trajectory"].as_array().map(Vec::len), Some(21));
        assert!(json["gap"].is_null());
    }

    #[test]
    fn catalog_lists_custom_without_preset_rates() {
        let catalog = scenario_catalog();
        assert_eq!(catalog.len(), 4);
        let custom = catalog
            .iter()
            .find(|e| e.scenario == ScenarioKind::Custom)
            .expect("custom listed");
        assert!(custom.dividend_growth_rate_pct.is_none());
        let aggressive = catalog
            .iter()
            .find(|e| e.scenario == ScenarioKind::Aggressive)
            .expect("aggressive listed");
        assert_eq!(aggressive.market_growth_rate_pct, Some(9.0));
    }

    #[test]
    fn cli_parses_plan_subcommand() {
        let cli = Cli::try_parse_from([
            "dividend-forecast",
            "plan",
            "--target-annual-income",
            "24000",
            "--contribution-style",
            "lump-sum",
            "--no-reinvest",
        ])
        .expect("valid CLI");
        match cli.command {
            Command::Plan(args) => {
                assert_approx(args.target_annual_income, 24_000.0);
                assert_eq!(args.contribution_style, CliContributionStyle::LumpSum);
                assert!(args.no_reinvest);
                assert_eq!(args.horizon_years, DEFAULT_HORIZON_YEARS);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
