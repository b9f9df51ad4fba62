//! Uniform time mesh over [0, T].

use pricer_core::types::ConfigError;

/// Ordered time points `t_0 = 0 < t_1 < ... < t_NT ≈ T` with uniform step
/// `Δ = T / NT`.
///
/// Points are accumulated, `t_i = t_{i-1} + Δ`, so `t_NT` matches `T` up to
/// rounding.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::discretisation::TimeMesh;
///
/// let mesh = TimeMesh::new(1.0, 4).unwrap();
/// assert_eq!(mesh.len(), 5);
/// assert_eq!(mesh.step(), 0.25);
/// assert_eq!(mesh.points(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TimeMesh {
    points: Vec<f64>,
    step: f64,
}

impl TimeMesh {
    /// Builds the mesh for `expiry` split into `n_steps` intervals.
    ///
    /// # Errors
    ///
    /// - `ConfigError::InvalidStepCount` if `n_steps` is 0
    /// - `ConfigError::InvalidParameter` if `expiry` is not finite and positive
    pub fn new(expiry: f64, n_steps: usize) -> Result<Self, ConfigError> {
        if n_steps == 0 {
            return Err(ConfigError::InvalidStepCount(n_steps));
        }
        if !(expiry.is_finite() && expiry > 0.0) {
            return Err(ConfigError::invalid(
                "maturity",
                format!("{} is not a positive finite horizon", expiry),
            ));
        }

        let step = expiry / n_steps as f64;
        let mut points = Vec::with_capacity(n_steps + 1);
        points.push(0.0);
        for i in 1..=n_steps {
            points.push(points[i - 1] + step);
        }
        Ok(Self { points, step })
    }

    /// All time points, `NT + 1` of them.
    #[inline]
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Uniform step Δ.
    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of intervals NT.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.points.len() - 1
    }

    /// Number of points, `NT + 1`.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a mesh holds at least two points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Last point, the horizon.
    #[inline]
    pub fn horizon(&self) -> f64 {
        self.points[self.points.len() - 1]
    }
}

impl std::ops::Index<usize> for TimeMesh {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &f64 {
        &self.points[index]
    }
}
