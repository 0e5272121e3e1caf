//! Four-point rainflow matcher and residue stack.
//!
//! Turning points accumulate on a stack. After every push, the last four
//! points `A, B, C, D` are tested: if the inner range `[B, C]` nests
//! inside the outer range `[A, D]`, `(B, C)` is a closed cycle — removed
//! from the stack, counted into the matrix, and scored for damage. The
//! test repeats against the new top of stack until it no longer applies,
//! so a single push can close several nested cycles in sequence.

use rainflow_common::{Counter, TurningPoint, WohlerParameters};

use crate::damage::DamageAccumulator;
use crate::matrix::Matrix;

#[derive(Debug, Clone)]
pub struct ResidueStack {
    points: Vec<TurningPoint>,
}

impl ResidueStack {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            points: Vec::with_capacity(cap),
        }
    }

    pub fn as_slice(&self) -> &[TurningPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Push a newly committed turning point and greedily close any
    /// cycles it completes, counting them into `matrix` and `damage`.
    pub fn push_and_match<C: Counter>(
        &mut self,
        point: TurningPoint,
        matrix: &mut Matrix<C>,
        damage: &mut DamageAccumulator,
        wohler: &WohlerParameters,
    ) {
        self.points.push(point);
        self.close_ready_cycles(matrix, damage, wohler);
    }

    fn close_ready_cycles<C: Counter>(
        &mut self,
        matrix: &mut Matrix<C>,
        damage: &mut DamageAccumulator,
        wohler: &WohlerParameters,
    ) {
        loop {
            let n = self.points.len();
            if n < 4 {
                return;
            }
            let a = self.points[n - 4];
            let b = self.points[n - 3];
            let c = self.points[n - 2];
            let d = self.points[n - 1];

            let inner_lo = b.value.min(c.value);
            let inner_hi = b.value.max(c.value);
            let outer_lo = a.value.min(d.value);
            let outer_hi = a.value.max(d.value);

            if inner_lo >= outer_lo && inner_hi <= outer_hi {
                let sa = (b.value - c.value).abs() / 2.0;
                matrix.add_full_cycle(b.class, c.class);
                damage.add_full_cycle(wohler, sa);
                self.points.remove(n - 2); // C
                self.points.remove(n - 3); // B
            } else {
                return;
            }
        }
    }

    /// Apply a residue finalization policy to whatever points remain
    /// after the stream ends.
    pub fn finalize_with<C: Counter>(
        &mut self,
        policy: rainflow_common::ResiduePolicy,
        matrix: &mut Matrix<C>,
        damage: &mut DamageAccumulator,
        wohler: &WohlerParameters,
    ) {
        use rainflow_common::ResiduePolicy as P;
        match policy {
            P::None | P::Ignore => {}
            P::Discard => self.points.clear(),
            P::HalfCycles => {
                for pair in self.points.windows(2) {
                    let (from, to) = (pair[0], pair[1]);
                    let sa = (from.value - to.value).abs() / 2.0;
                    matrix.add_half_cycle(from.class, to.class);
                    damage.add_half_cycle(wohler, sa);
                }
            }
            P::FullCycles => {
                for pair in self.points.windows(2) {
                    let (from, to) = (pair[0], pair[1]);
                    let sa = (from.value - to.value).abs() / 2.0;
                    matrix.add_full_cycle(from.class, to.class);
                    damage.add_full_cycle(wohler, sa);
                }
            }
            P::Repeated => {
                let original = self.points.clone();
                self.points.extend(original);
                self.close_ready_cycles(matrix, damage, wohler);
            }
        }
    }
}

impl Default for ResidueStack {
    fn default() -> Self {
        Self::new()
    }
}
