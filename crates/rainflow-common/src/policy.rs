//! Residue finalization policies.

/// How `finalize` disposes of the residue left over at end-of-stream.
///
/// `None` and `Ignore` are distinct variants with identical behavior, kept
/// as separate names so either reads naturally at the call site.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResiduePolicy {
    /// Discard the residue without further counting (minimal-core
    /// required behavior).
    #[default]
    None,
    /// Same as `None`.
    Ignore,
    /// Same as `None`, but explicitly clears the residue buffer rather
    /// than leaving it for the caller to inspect.
    Discard,
    /// Count half a cycle for each adjacent residue pair.
    HalfCycles,
    /// Count a full cycle for each adjacent residue pair.
    FullCycles,
    /// Append a copy of the residue to itself and re-run the four-point
    /// matcher on the doubled sequence.
    Repeated,
}
