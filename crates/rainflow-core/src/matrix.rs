//! The rainflow matrix: a `class_count × class_count` table of closed-cycle
//! counts, indexed `[from][to]`.

use rainflow_common::Counter;

/// Square `from → to` cycle count matrix.
#[derive(Debug, Clone)]
pub struct Matrix<C: Counter> {
    class_count: u32,
    cells: Vec<C>,
    /// Sticky flag: once any cell saturates it stays set, even if that
    /// cell is later read or the matrix otherwise mutated.
    any_saturated: bool,
}

impl<C: Counter> Matrix<C> {
    pub fn new(class_count: u32) -> Self {
        Self {
            class_count,
            cells: vec![C::zero(); (class_count as usize) * (class_count as usize)],
            any_saturated: false,
        }
    }

    /// Whether any cell has ever reached its counting ceiling.
    pub fn is_saturated(&self) -> bool {
        self.any_saturated
    }

    fn index(&self, from: u32, to: u32) -> usize {
        from as usize * self.class_count as usize + to as usize
    }

    /// Count a full cycle between classes `from` and `to`.
    ///
    /// Logs a warning (when the `tracing` feature is enabled) the first
    /// time a cell transitions into saturation; subsequent increments of
    /// an already-saturated cell are silent.
    pub fn add_full_cycle(&mut self, from: u32, to: u32) {
        let idx = self.index(from, to);
        let cell = &mut self.cells[idx];
        let was_saturated = cell.is_saturated();
        cell.add_full();
        if !was_saturated && cell.is_saturated() {
            self.any_saturated = true;
            #[cfg(feature = "tracing")]
            tracing::warn!(from, to, "rainflow matrix cell saturated");
        }
    }

    /// Count a half cycle between classes `from` and `to`.
    pub fn add_half_cycle(&mut self, from: u32, to: u32) {
        let idx = self.index(from, to);
        let cell = &mut self.cells[idx];
        let was_saturated = cell.is_saturated();
        cell.add_half();
        if !was_saturated && cell.is_saturated() {
            self.any_saturated = true;
            #[cfg(feature = "tracing")]
            tracing::warn!(from, to, "rainflow matrix cell saturated");
        }
    }

    pub fn class_count(&self) -> u32 {
        self.class_count
    }

    /// Raw count in cycle units at cell `[from][to]`.
    pub fn get(&self, from: u32, to: u32) -> f64 {
        self.cells[self.index(from, to)].to_cycles()
    }

    /// Iterate over all non-zero cells as `(from, to, cycles)`.
    pub fn nonzero_cells(&self) -> impl Iterator<Item = (u32, u32, f64)> + '_ {
        let n = self.class_count;
        (0..n).flat_map(move |from| {
            (0..n).filter_map(move |to| {
                let cycles = self.cells[from as usize * n as usize + to as usize].to_cycles();
                (cycles > 0.0).then_some((from, to, cycles))
            })
        })
    }

    /// Sum of all cycle counts in the matrix.
    pub fn total_cycles(&self) -> f64 {
        self.cells.iter().map(|c| c.to_cycles()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rainflow_common::IntegerCounter;

    #[test]
    fn full_and_half_cycles_accumulate_independently() {
        let mut m = Matrix::<IntegerCounter>::new(4);
        m.add_full_cycle(3, 1);
        m.add_half_cycle(3, 1);
        assert_eq!(m.get(3, 1), 1.5);
        assert_eq!(m.get(1, 3), 0.0);
    }

    #[test]
    fn nonzero_cells_reports_only_populated_entries() {
        let mut m = Matrix::<IntegerCounter>::new(3);
        m.add_full_cycle(2, 1);
        let cells: Vec<_> = m.nonzero_cells().collect();
        assert_eq!(cells, vec![(2, 1, 1.0)]);
    }

    #[test]
    fn total_cycles_sums_all_cells() {
        let mut m = Matrix::<IntegerCounter>::new(3);
        m.add_full_cycle(0, 1);
        m.add_full_cycle(1, 2);
        m.add_half_cycle(2, 0);
        assert_eq!(m.total_cycles(), 2.5);
    }
}
