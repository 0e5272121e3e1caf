//! Streaming rainflow cycle counting engine.
//!
//! Feeds a stream of scalar samples through a hysteresis + peak/valley
//! filter, closes cycles with the four-point rainflow method, and
//! accumulates both a `from → to` class matrix and a Wöhler/Basquin
//! pseudo-damage sum. See [`RainflowEngine`] for the entry point.

pub mod damage;
pub mod engine;
pub mod filter;
pub mod matrix;
pub mod residue;

pub use damage::DamageAccumulator;
pub use engine::RainflowEngine;
pub use matrix::Matrix;
pub use residue::ResidueStack;

pub use rainflow_common::{
    ClassParameters, Counter, EngineState, FloatCounter, IntegerCounter, ResiduePolicy, RfcError,
    TurningPoint, WohlerParameters,
};
