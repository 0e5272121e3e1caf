//! `TurningPoint`: a local extremum emitted by the hysteresis filter.

/// A single turning point: a local extremum of the filtered signal.
///
/// `class` is assigned once, at emission time, and never recomputed — the
/// class boundary decision stays stable even if the class parameters were
/// (hypothetically) interrogated again later.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurningPoint {
    pub value: f64,
    pub class: u32,
    /// 1-based absolute index in the input stream.
    pub position: usize,
}

impl TurningPoint {
    pub fn new(value: f64, class: u32, position: usize) -> Self {
        Self {
            value,
            class,
            position,
        }
    }
}
