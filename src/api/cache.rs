use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use crate::core::{ForecastInputs, ForecastSeries, simulate_inputs};

const DEFAULT_CAPACITY: usize = 1_024;

/// Bit-exact key over the effective (clamped) forecast inputs, so raw inputs
/// that clamp to the same values share an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ForecastKey {
    initial_investment: u64,
    dividend_yield_pct: u64,
    horizon_years: u32,
    dividend_growth_rate_pct: u64,
    market_growth_rate_pct: u64,
}

impl From<&ForecastInputs> for ForecastKey {
    fn from(inputs: &ForecastInputs) -> Self {
        Self {
            initial_investment: inputs.initial_investment.to_bits(),
            dividend_yield_pct: inputs.dividend_yield_pct.to_bits(),
            horizon_years: inputs.horizon_years,
            dividend_growth_rate_pct: inputs.growth.dividend_growth_rate_pct.to_bits(),
            market_growth_rate_pct: inputs.growth.market_growth_rate_pct.to_bits(),
        }
    }
}

/// Memoizes forward simulations for the HTTP layer. The engine itself stays
/// pure; this only avoids recomputing identical scenario requests.
#[derive(Debug)]
pub struct ForecastCache {
    entries: DashMap<ForecastKey, Arc<ForecastSeries>>,
    capacity: usize,
}

impl Default for ForecastCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl ForecastCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: DashMap::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get_or_simulate(&self, inputs: &ForecastInputs) -> Arc<ForecastSeries> {
        let key = ForecastKey::from(&inputs.sanitized());
        if let Some(hit) = self.entries.get(&key) {
            debug!(?key, "forecast cache hit");
            return Arc::clone(hit.value());
        }

        // Deterministic outputs make a wholesale reset safe.
        if self.entries.len() >= self.capacity {
            debug!(capacity = self.capacity, "forecast cache full, clearing");
            self.entries.clear();
        }

        let series = Arc::new(simulate_inputs(inputs));
        self.entries.insert(key, Arc::clone(&series));
        series
    }
}
