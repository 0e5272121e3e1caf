//! Hysteresis + peak/valley filter.
//!
//! Collapses a raw sample stream into turning points: local extrema that
//! survive a hysteresis gate of width `H`. A run of samples that never
//! reverses direction by more than `H` is represented by a single held
//! point, updated in place as the run extends; only when a reversal
//! exceeds `H` is the previous extremum emitted and committed.

use rainflow_common::TurningPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slope {
    /// No direction established yet; `held` is a provisional extremum
    /// that may still move in either direction.
    Undetermined,
    Rising,
    Falling,
}

/// Streaming hysteresis filter. Holds at most one provisional
/// [`TurningPoint`] between calls.
#[derive(Debug, Clone)]
pub struct Filter {
    hysteresis: f64,
    held: Option<TurningPoint>,
    slope: Slope,
}

impl Filter {
    pub fn new(hysteresis: f64) -> Self {
        Self {
            hysteresis,
            held: None,
            slope: Slope::Undetermined,
        }
    }

    /// Whether a provisional point is currently held (engine state is
    /// `BusyInterim` iff this is `true`).
    pub fn is_holding(&self) -> bool {
        self.held.is_some()
    }

    /// Feed one classified raw sample. Returns the turning point that
    /// becomes committed (if any) as a result of this sample.
    pub fn push(&mut self, sample: TurningPoint) -> Option<TurningPoint> {
        let Some(held) = self.held else {
            self.held = Some(sample);
            return None;
        };

        match self.slope {
            Slope::Undetermined => {
                let diff = sample.value - held.value;
                if diff.abs() > self.hysteresis {
                    self.slope = if diff > 0.0 {
                        Slope::Rising
                    } else {
                        Slope::Falling
                    };
                    self.held = Some(sample);
                    Some(held)
                } else {
                    // Run continues without a determined direction yet;
                    // bias the held point to the most recent sample so
                    // its position (and, for exact ties, value) reflects
                    // the latest observation.
                    self.held = Some(sample);
                    None
                }
            }
            Slope::Rising => {
                if sample.value >= held.value {
                    self.held = Some(sample);
                    None
                } else if held.value - sample.value > self.hysteresis {
                    self.slope = Slope::Falling;
                    self.held = Some(sample);
                    Some(held)
                } else {
                    None
                }
            }
            Slope::Falling => {
                if sample.value <= held.value {
                    self.held = Some(sample);
                    None
                } else if sample.value - held.value > self.hysteresis {
                    self.slope = Slope::Rising;
                    self.held = Some(sample);
                    Some(held)
                } else {
                    None
                }
            }
        }
    }

    /// Flush the held point at end-of-stream (part of `finalize`).
    pub fn flush(&mut self) -> Option<TurningPoint> {
        self.held.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tp(value: f64, class: u32, position: usize) -> TurningPoint {
        TurningPoint::new(value, class, position)
    }

    #[test]
    fn holds_first_sample_without_emitting() {
        let mut f = Filter::new(0.99);
        assert_eq!(f.push(tp(1.0, 0, 1)), None);
        assert!(f.is_holding());
    }

    #[test]
    fn emits_on_first_reversal_exceeding_hysteresis() {
        // Rising-then-falling-then-rising run: [1, 3, 2, 4], H = 0.99.
        let mut f = Filter::new(0.99);
        assert_eq!(f.push(tp(1.0, 0, 1)), None);
        assert_eq!(f.push(tp(3.0, 2, 2)), Some(tp(1.0, 0, 1)));
        assert_eq!(f.push(tp(2.0, 1, 3)), Some(tp(3.0, 2, 2)));
        assert_eq!(f.push(tp(4.0, 3, 4)), Some(tp(2.0, 1, 3)));
        assert_eq!(f.flush(), Some(tp(4.0, 3, 4)));
    }

    #[test]
    fn suppresses_reversal_not_exceeding_hysteresis() {
        // H = 1.0 exactly: a dip of magnitude 1.0 needs strict `>` to
        // register as a reversal.
        let mut f = Filter::new(1.0);
        assert_eq!(f.push(tp(1.0, 0, 1)), None);
        assert_eq!(f.push(tp(3.0, 2, 2)), Some(tp(1.0, 0, 1))); // slope becomes Rising
        assert_eq!(f.push(tp(2.0, 1, 3)), None); // drop of 1.0, not > H, suppressed
        assert!(f.is_holding());
    }

    #[test]
    fn extends_run_without_emitting_while_trending() {
        let mut f = Filter::new(0.5);
        assert_eq!(f.push(tp(1.0, 0, 1)), None);
        assert_eq!(f.push(tp(2.0, 1, 2)), Some(tp(1.0, 0, 1)));
        // Still rising: 3.0 extends the held point, no emission.
        assert_eq!(f.push(tp(3.0, 2, 3)), None);
        assert_eq!(f.flush(), Some(tp(3.0, 2, 3)));
    }
}
