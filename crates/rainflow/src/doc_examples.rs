use crate::{ClassParameters, IntegerCounter, RainflowEngine, ResiduePolicy, WohlerParameters};

/// Run a fixed sample stream through a freshly constructed engine and
/// return its total closed-cycle count once finalized.
///
/// This helper exists for documentation examples, to avoid repeating the
/// engine construction boilerplate in every doctest.
///
/// # Example
///
/// ```rust
/// # use rainflow::doc_examples::total_cycles;
/// let cycles = total_cycles(&[1.0, 3.0, 2.0, 4.0], 4, 1.0, 0.5, 0.99)?;
/// assert_eq!(cycles, 1.0);
/// # Ok::<(), Box<dyn std::error::Error + Send + Sync>>(())
/// ```
pub fn total_cycles(
    samples: &[f64],
    class_count: u32,
    class_width: f64,
    class_offset: f64,
    hysteresis: f64,
) -> Result<f64, Box<dyn std::error::Error + Send + Sync>> {
    let class_params = ClassParameters::new(class_count, class_width, class_offset, hysteresis)?;
    let mut engine = RainflowEngine::<IntegerCounter>::new(
        class_params,
        WohlerParameters::default(),
        ResiduePolicy::None,
    )?;
    engine.feed(samples)?;
    engine.finalize()?;
    Ok(engine.matrix().total_cycles())
}
