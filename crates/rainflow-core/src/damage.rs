//! Pseudo-damage accumulation via Miner's rule over a Wöhler/Basquin curve.

use rainflow_common::WohlerParameters;

/// Running Miner-sum pseudo-damage total.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DamageAccumulator {
    total: f64,
}

impl DamageAccumulator {
    pub fn new() -> Self {
        Self { total: 0.0 }
    }

    pub fn add_full_cycle(&mut self, wl: &WohlerParameters, sa: f64) {
        self.total += wl.damage_for_full_cycle(sa);
    }

    pub fn add_half_cycle(&mut self, wl: &WohlerParameters, sa: f64) {
        self.total += wl.damage_for_half_cycle(sa);
    }

    pub fn total(&self) -> f64 {
        self.total
    }
}
