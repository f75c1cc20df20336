//! Modulator trait - per-frame alpha effects layered on the depth shading
//!
//! Modulators run after projection. They only touch the alpha of a point,
//! never its position, and any randomness comes from the caller's RNG.

use rand::RngCore;

use super::projection::ProjectedPoint;

/// An effect that adjusts a projected point's alpha
pub trait Modulator: Send + Sync {
    /// Modulate one point
    ///
    /// # Arguments
    /// * `point` - The projected point, modified in place
    /// * `frame` - Frames rendered so far, starting at 1
    /// * `rng` - Random source for stochastic effects
    fn modulate(&self, point: &mut ProjectedPoint, frame: u64, rng: &mut dyn RngCore);

    /// Get the name of this modulator (for UI)
    fn name(&self) -> &str;

    /// Whether this modulator is currently enabled
    fn is_enabled(&self) -> bool {
        true
    }
}

/// A boxed modulator for dynamic dispatch
pub type BoxedModulator = Box<dyn Modulator>;

/// Modulators applied in sequence
pub struct ModulationChain {
    modulators: Vec<BoxedModulator>,
}

impl ModulationChain {
    pub fn new() -> Self {
        Self {
            modulators: Vec::new(),
        }
    }

    /// Add a modulator to the chain
    pub fn add<M: Modulator + 'static>(&mut self, modulator: M) -> &mut Self {
        log::debug!("Adding modulator: {}", modulator.name());
        self.modulators.push(Box::new(modulator));
        self
    }

    pub fn len(&self) -> usize {
        self.modulators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modulators.is_empty()
    }

    /// Apply every enabled modulator in order
    pub fn apply(&self, point: &mut ProjectedPoint, frame: u64, rng: &mut dyn RngCore) {
        for modulator in &self.modulators {
            if modulator.is_enabled() {
                modulator.modulate(point, frame, rng);
            }
        }
    }
}

impl Default for ModulationChain {
    fn default() -> Self {
        Self::new()
    }
}
