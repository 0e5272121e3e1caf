//! Shared value, error, and parameter types for the rainflow cycle
//! counting engine, used by `rainflow-core` and downstream crates.

pub mod class;
pub mod counter;
pub mod error;
pub mod policy;
pub mod state;
pub mod turning_point;
pub mod wohler;

pub use class::ClassParameters;
pub use counter::{Counter, FloatCounter, IntegerCounter};
pub use error::RfcError;
pub use policy::ResiduePolicy;
pub use state::EngineState;
pub use turning_point::TurningPoint;
pub use wohler::WohlerParameters;
