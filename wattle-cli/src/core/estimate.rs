use serde::Serialize;
use wattle_quantities::energy::KilowattHours;

use crate::core::profile::{HouseSize, Inventory};

/// Breakdown label of the lighting and fan base load.
pub const BASELINE_LABEL: &str = "Lights & Fans";

/// Estimated daily draw with its per-source breakdown.
#[must_use]
#[derive(Clone, Debug, Serialize)]
pub struct Estimate {
    pub daily: KilowattHours,
    pub breakdown: Vec<Contribution>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Contribution {
    pub label: String,
    pub daily: KilowattHours,
}

impl Estimate {
    /// Estimate the household's daily draw.
    ///
    /// The base load always contributes, even with an empty inventory. An
    /// appliance with a zero count contributes nothing and is left out of
    /// the breakdown.
    pub fn new(size: HouseSize, inventory: Inventory) -> Self {
        let mut breakdown =
            vec![Contribution { label: BASELINE_LABEL.to_string(), daily: size.base_load() }];
        for (appliance, count) in inventory.counts() {
            if count == 0 {
                continue;
            }
            let daily = if appliance.scales_with_count() {
                appliance.daily_draw() * f64::from(count)
            } else {
                appliance.daily_draw()
            };
            breakdown.push(Contribution { label: appliance.to_string(), daily });
        }
        let daily = breakdown.iter().map(|contribution| contribution.daily).sum();
        Self { daily, breakdown }
    }
}
