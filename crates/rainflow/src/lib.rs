//! Meta crate that re-exports the rainflow cycle counting stack with
//! sensible defaults. Downstream users can depend on this crate alone and
//! opt into deeper integration (the `rainflow-common`/`rainflow-core`
//! split) only when they need it.

#[cfg(feature = "core")]
pub use rainflow_core as core;

#[cfg(feature = "core")]
pub use rainflow_core::{
    ClassParameters, Counter, DamageAccumulator, EngineState, FloatCounter, IntegerCounter,
    Matrix, RainflowEngine, ResiduePolicy, ResidueStack, RfcError, TurningPoint, WohlerParameters,
};

#[cfg(feature = "core")]
pub mod doc_examples;
