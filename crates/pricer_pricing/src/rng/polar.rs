//! Marsaglia polar method.
//!
//! Draw (u, v) uniformly in [-1, 1]², set S = u² + v², reject unless
//! 0 < S ≤ 1, then return u·√(-2 ln S / S). Only the first of the two normals
//! the method yields is used.

use super::prng::LibraryNormal;
use super::source::VariateSource;

/// Polar rejection sampler over the uniform stream of a [`LibraryNormal`].
#[derive(Clone, Debug)]
pub struct PolarMarsaglia {
    uniform: LibraryNormal,
}

impl PolarMarsaglia {
    /// Creates a sampler initialised with the given seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            uniform: LibraryNormal::from_seed(seed),
        }
    }

    /// Creates a sampler seeded from operating-system entropy.
    #[inline]
    pub fn from_entropy() -> Self {
        Self {
            uniform: LibraryNormal::from_entropy(),
        }
    }

    #[inline]
    fn symmetric_uniform(&mut self) -> f64 {
        2.0 * self.uniform.gen_uniform() - 1.0
    }
}

impl VariateSource for PolarMarsaglia {
    fn generate(&mut self) -> f64 {
        loop {
            let u = self.symmetric_uniform();
            let v = self.symmetric_uniform();
            let s = u * u + v * v;
            if s > 0.0 && s <= 1.0 {
                return u * (-2.0 * s.ln() / s).sqrt();
            }
        }
    }
}
