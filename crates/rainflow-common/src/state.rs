//! Engine lifecycle states.

use std::fmt;

/// Where a [`crate`]-family engine sits in its lifecycle.
///
/// A safe Rust value cannot exist in an unallocated-but-constructed state,
/// so there is a single `Init` state covering both "freshly constructed"
/// and "freshly `reset`" — allocation and readiness happen together.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineState {
    /// Constructed (or reset) and ready to feed. No samples processed yet,
    /// or the previous stream was reset without carrying any residue over.
    Init,
    /// Feeding in progress; no provisional turning point is held.
    Busy,
    /// Feeding in progress; one provisional turning point is held and must
    /// be committed or discarded at `finalize`.
    BusyInterim,
    /// `finalize` is running (observable only to a re-entrant caller; the
    /// public API never returns control mid-finalize).
    Finalize,
    /// `finalize` has run; the matrix, residue, and damage are final.
    Finished,
    /// An irrecoverable error occurred during `feed`. Accumulated results
    /// remain readable; only `reset` is accepted from here.
    Error,
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Init => "Init",
            Self::Busy => "Busy",
            Self::BusyInterim => "BusyInterim",
            Self::Finalize => "Finalize",
            Self::Finished => "Finished",
            Self::Error => "Error",
        };
        f.write_str(s)
    }
}

impl EngineState {
    /// Whether `feed` may be called from this state.
    pub fn accepts_feed(self) -> bool {
        matches!(self, Self::Init | Self::Busy | Self::BusyInterim)
    }

    /// Whether `finalize` may be called from this state (idempotent once
    /// `Finished`).
    pub fn accepts_finalize(self) -> bool {
        matches!(
            self,
            Self::Init | Self::Busy | Self::BusyInterim | Self::Finished
        )
    }
}
