use thiserror::Error;

/// Inputs the solver refuses to work with. Forward simulation never returns
/// these; it clamps instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ForecastInputError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("target annual income must be > 0, got {0}")]
    NonPositiveTarget(f64),
    #[error("horizon must be at least one year")]
    ZeroHorizon,
    #[error("horizon of {years} years exceeds the {max} year limit")]
    HorizonTooLong { years: u32, max: u32 },
    #[error("dividend yield must be >= 0, got {0}")]
    NegativeYield(f64),
    #[error("a {yield_pct}% dividend yield can never produce the target income")]
    UnreachableTarget { yield_pct: f64 },
}
