use crate::{
    foundation::core::Vec2,
    foundation::error::{PingalaError, PingalaResult},
    foundation::math::Rng64,
};

/// Axis-aligned box particles are scattered in, plus per-particle look ranges.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScatterBounds {
    /// Minimum corner.
    pub min: Vec2,
    /// Maximum corner.
    pub max: Vec2,
    /// Radius range `[lo, hi)`.
    pub radius: (f64, f64),
    /// Opacity range `[lo, hi)`.
    pub opacity: (f64, f64),
}

impl Default for ScatterBounds {
    fn default() -> Self {
        Self {
            min: Vec2::new(-7.0, -4.0),
            max: Vec2::new(7.0, 4.0),
            radius: (0.02, 0.05),
            opacity: (0.2, 0.6),
        }
    }
}

/// One background particle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Particle {
    /// Centre.
    pub position: Vec2,
    /// Dot radius.
    pub radius: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

/// Deterministic star / spark field.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParticleField {
    /// Particles in generation order.
    pub particles: Vec<Particle>,
}

impl ParticleField {
    /// Scatter `count` particles inside `bounds`. The same seed yields the same field.
    pub fn scatter(count: usize, bounds: ScatterBounds, seed: u64) -> PingalaResult<Self> {
        if bounds.min.x > bounds.max.x || bounds.min.y > bounds.max.y {
            return Err(PingalaError::validation(
                "particle bounds min must be <= max",
            ));
        }
        if bounds.radius.0 > bounds.radius.1 || bounds.radius.0 < 0.0 {
            return Err(PingalaError::validation(
                "particle radius range must be non-negative and ordered",
            ));
        }
        if bounds.opacity.0 > bounds.opacity.1
            || bounds.opacity.0 < 0.0
            || bounds.opacity.1 > 1.0
        {
            return Err(PingalaError::validation(
                "particle opacity range must be ordered within [0, 1]",
            ));
        }

        let mut rng = Rng64::new(seed);
        let particles = (0..count)
            .map(|_| Particle {
                position: Vec2::new(
                    rng.uniform(bounds.min.x, bounds.max.x),
                    rng.uniform(bounds.min.y, bounds.max.y),
                ),
                radius: rng.uniform(bounds.radius.0, bounds.radius.1),
                opacity: rng.uniform(bounds.opacity.0, bounds.opacity.1),
            })
            .collect();
        Ok(Self { particles })
    }

    /// Number of particles.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// `true` when the field has no particles.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/particles.rs"]
mod tests;
