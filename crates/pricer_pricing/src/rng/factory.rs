//! Variant selection and per-worker construction of variate sources.

use std::fmt;
use std::str::FromStr;

use pricer_core::types::ConfigError;

use super::box_muller::BoxMuller;
use super::polar::PolarMarsaglia;
use super::prng::LibraryNormal;
use super::source::VariateSource;

/// Golden-ratio increment used to spread stream seeds apart.
const STREAM_INCREMENT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Normal-transform selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum VariateKind {
    /// `StdRng` with `rand_distr::StandardNormal`.
    #[default]
    Library,
    /// Marsaglia polar rejection.
    Polar,
    /// Box-Muller, cosine branch.
    BoxMuller,
}

impl FromStr for VariateKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "library" | "std" => Ok(VariateKind::Library),
            "polar" | "marsaglia" => Ok(VariateKind::Polar),
            "box-muller" | "boxmuller" => Ok(VariateKind::BoxMuller),
            _ => Err(ConfigError::UnknownVariant {
                kind: "variate generator",
                name: s.to_string(),
                expected: "library, polar, box-muller",
            }),
        }
    }
}

impl fmt::Display for VariateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariateKind::Library => write!(f, "library"),
            VariateKind::Polar => write!(f, "polar"),
            VariateKind::BoxMuller => write!(f, "box-muller"),
        }
    }
}

/// Static dispatch over every variate source.
#[derive(Clone, Debug)]
pub enum VariateGenerator {
    /// Library engine.
    Library(LibraryNormal),
    /// Polar rejection.
    Polar(PolarMarsaglia),
    /// Box-Muller.
    BoxMuller(BoxMuller),
}

impl VariateSource for VariateGenerator {
    #[inline]
    fn generate(&mut self) -> f64 {
        match self {
            VariateGenerator::Library(g) => g.generate(),
            VariateGenerator::Polar(g) => g.generate(),
            VariateGenerator::BoxMuller(g) => g.generate(),
        }
    }
}

/// Builds one independent [`VariateGenerator`] per worker.
///
/// With a seed, stream `i` is seeded with `seed + i·φ` (wrapping, φ the
/// 64-bit golden-ratio constant), so a seeded run draws the same streams every
/// time. Without a seed every stream is seeded from OS entropy.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::{VariateFactory, VariateKind, VariateSource};
///
/// let factory = VariateFactory::new(VariateKind::Polar).with_seed(42);
/// let mut a = factory.create(0);
/// let mut b = factory.create(0);
/// assert_eq!(a.generate(), b.generate());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VariateFactory {
    kind: VariateKind,
    seed: Option<u64>,
}

impl VariateFactory {
    /// Unseeded factory for `kind`.
    #[inline]
    pub fn new(kind: VariateKind) -> Self {
        Self { kind, seed: None }
    }

    /// Sets the master seed.
    #[inline]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the master seed.
    #[inline]
    pub fn with_optional_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// The selected transform.
    #[inline]
    pub fn kind(&self) -> VariateKind {
        self.kind
    }

    /// The master seed, if any.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Seed of stream `stream` under a seeded factory.
    #[inline]
    pub fn stream_seed(master: u64, stream: u64) -> u64 {
        master.wrapping_add(stream.wrapping_mul(STREAM_INCREMENT))
    }

    /// Creates the generator for stream `stream`.
    pub fn create(&self, stream: u64) -> VariateGenerator {
        let seed = self.seed.map(|master| Self::stream_seed(master, stream));
        match self.kind {
            VariateKind::Library => VariateGenerator::Library(
                seed.map_or_else(LibraryNormal::from_entropy, LibraryNormal::from_seed),
            ),
            VariateKind::Polar => VariateGenerator::Polar(
                seed.map_or_else(PolarMarsaglia::from_entropy, PolarMarsaglia::from_seed),
            ),
            VariateKind::BoxMuller => VariateGenerator::BoxMuller(
                seed.map_or_else(BoxMuller::from_entropy, BoxMuller::from_seed),
            ),
        }
    }
}
