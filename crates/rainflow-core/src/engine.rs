//! The streaming rainflow engine: lifecycle, sample ingestion, and
//! finalization.

use rainflow_common::{
    ClassParameters, Counter, EngineState, ResiduePolicy, RfcError, TurningPoint, WohlerParameters,
};

use crate::damage::DamageAccumulator;
use crate::filter::Filter;
use crate::matrix::Matrix;
use crate::residue::ResidueStack;

/// A streaming rainflow cycle counter, generic over the matrix's counting
/// representation.
///
/// Construct with [`RainflowEngine::new`], feed samples with
/// [`feed`](Self::feed), and call [`finalize`](Self::finalize) once at
/// end-of-stream to apply the residue policy and freeze the result.
#[derive(Debug, Clone)]
pub struct RainflowEngine<C: Counter> {
    class_params: ClassParameters,
    wohler: WohlerParameters,
    residue_policy: ResiduePolicy,
    state: EngineState,
    filter: Filter,
    residue: ResidueStack,
    matrix: Matrix<C>,
    damage: DamageAccumulator,
    samples_fed: usize,
}

impl<C: Counter> RainflowEngine<C> {
    /// Construct a new engine. Fails if `class_params` is internally
    /// inconsistent with `wohler` construction constraints it does not
    /// itself enforce (currently: never, since both types validate at
    /// their own construction; kept fallible to leave room for future
    /// cross-parameter checks without breaking callers).
    pub fn new(
        class_params: ClassParameters,
        wohler: WohlerParameters,
        residue_policy: ResiduePolicy,
    ) -> Result<Self, RfcError> {
        let class_count = class_params.class_count();
        Ok(Self {
            class_params,
            wohler,
            residue_policy,
            state: EngineState::Init,
            filter: Filter::new(class_params.hysteresis()),
            residue: ResidueStack::with_capacity(2 * class_count as usize + 1),
            matrix: Matrix::new(class_count),
            damage: DamageAccumulator::new(),
            samples_fed: 0,
        })
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn class_params(&self) -> &ClassParameters {
        &self.class_params
    }

    pub fn matrix(&self) -> &Matrix<C> {
        &self.matrix
    }

    pub fn residue(&self) -> &[rainflow_common::TurningPoint] {
        self.residue.as_slice()
    }

    pub fn damage(&self) -> f64 {
        self.damage.total()
    }

    pub fn samples_fed(&self) -> usize {
        self.samples_fed
    }

    /// Feed a batch of raw samples. May be called any number of times
    /// before `finalize`; positions are a running count across all calls.
    ///
    /// Rejects (and leaves the engine in [`EngineState::Error`]) on the
    /// first sample outside `[class_params.lower_bound(), upper_bound())`.
    /// Samples already processed before the rejected one remain counted.
    pub fn feed(&mut self, samples: &[f64]) -> Result<(), RfcError> {
        if !self.state.accepts_feed() {
            return Err(RfcError::invalid_state("Init|Busy|BusyInterim", self.state));
        }
        for &value in samples {
            self.samples_fed += 1;
            let class = match self.class_params.classify(value) {
                Ok(class) => class,
                Err(err) => {
                    self.state = EngineState::Error;
                    #[cfg(feature = "tracing")]
                    tracing::warn!(value, position = self.samples_fed, "sample out of range");
                    return Err(err);
                }
            };
            let point = TurningPoint::new(value, class, self.samples_fed);
            #[cfg(feature = "tracing")]
            tracing::trace!(position = point.position, value, class, "sample fed");
            if let Some(turning_point) = self.filter.push(point) {
                self.residue.push_and_match(
                    turning_point,
                    &mut self.matrix,
                    &mut self.damage,
                    &self.wohler,
                );
            }
        }
        self.state = if self.filter.is_holding() {
            EngineState::BusyInterim
        } else {
            EngineState::Busy
        };
        Ok(())
    }

    /// Flush any held turning point, apply the residue policy, and move
    /// the engine to [`EngineState::Finished`]. Idempotent: calling this
    /// again on an already-finished engine is a no-op.
    pub fn finalize(&mut self) -> Result<(), RfcError> {
        if self.state == EngineState::Finished {
            return Ok(());
        }
        if !self.state.accepts_finalize() {
            return Err(RfcError::invalid_state(
                "Init|Busy|BusyInterim|Finished",
                self.state,
            ));
        }
        self.state = EngineState::Finalize;
        if let Some(point) = self.filter.flush() {
            self.residue.push_and_match(
                point,
                &mut self.matrix,
                &mut self.damage,
                &self.wohler,
            );
        }
        self.residue.finalize_with(
            self.residue_policy,
            &mut self.matrix,
            &mut self.damage,
            &self.wohler,
        );
        self.state = EngineState::Finished;
        #[cfg(feature = "tracing")]
        tracing::trace!(
            samples_fed = self.samples_fed,
            residue_len = self.residue.len(),
            damage = self.damage.total(),
            "finalized"
        );
        Ok(())
    }

    /// Reset the engine to a fresh [`EngineState::Init`], discarding all
    /// accumulated matrix, residue, and damage state. Class and Wöhler
    /// parameters are retained.
    pub fn reset(&mut self) {
        self.state = EngineState::Init;
        self.filter = Filter::new(self.class_params.hysteresis());
        self.residue = ResidueStack::with_capacity(2 * self.class_params.class_count() as usize + 1);
        self.matrix = Matrix::new(self.class_params.class_count());
        self.damage = DamageAccumulator::new();
        self.samples_fed = 0;
    }
}
