//! Comet tails.
//! A tail is a streak of particles pointing away from the sun,
//! which gets longer the closer the comet is.

use crate::bodies::TailSpec;

use euclid::default::{Point3D, Vector3D};
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// How many particles every tail has, no matter how big the comet is.
pub const PARTICLE_COUNT: usize = 100;
/// How far particles wander off the tail's axis at the very end.
const JITTER: f64 = 0.5;
/// At aphelion the tail is this much shorter than at the sun.
const SHRINK: f64 = 0.7;

/// One bit of a comet's tail.
#[derive(Copy, Clone, Debug)]
pub struct TailParticle {
    /// How far down the tail this is, from 0 at the head to almost 1.
    pub ratio: f64,
    /// Color is stored as 0xRRGGBB
    pub color: u32,
    /// Fades toward the end of the tail.
    pub opacity: f64,
    pub size: f64,
    /// Where it is this tick. Recomputed every update.
    pub pos: Point3D<f64>,
}

/// All the particles behind one comet.
#[derive(Clone, Debug)]
pub struct Tail {
    base_length: f64,
    particles: Vec<TailParticle>,
    rand: SmallRng,
}

impl Tail {
    pub fn new(spec: TailSpec, seed: u64) -> Self {
        let mut rand = SmallRng::seed_from_u64(seed);
        let particles = (0..PARTICLE_COUNT)
            .map(|i| {
                let ratio = i as f64 / PARTICLE_COUNT as f64;
                TailParticle {
                    ratio,
                    color: spec.color,
                    opacity: 1.0 - ratio,
                    size: rand.gen::<f64>() * 0.5 + 0.1,
                    pos: Point3D::origin(),
                }
            })
            .collect();
        Self {
            base_length: spec.length,
            particles,
            rand,
        }
    }

    /// Move every particle to trail behind a comet at `head`.
    /// `aphelion` is the farthest the comet ever gets from the sun.
    pub fn update(&mut self, head: Point3D<f64>, aphelion: f64) {
        let offset = head.to_vector();
        let distance = offset.length();
        let length = tail_length(self.base_length, distance, aphelion);
        let direction = if distance > 0.0 {
            -offset / distance
        } else {
            // Sitting on the sun, there's nowhere to point.
            Vector3D::zero()
        };

        let rand = &mut self.rand;
        for particle in self.particles.iter_mut() {
            let ratio = particle.ratio;
            let jitter = Vector3D::new(
                (rand.gen::<f64>() - 0.5) * ratio * JITTER,
                (rand.gen::<f64>() - 0.5) * ratio * JITTER,
                (rand.gen::<f64>() - 0.5) * ratio * JITTER,
            );
            particle.pos = head + direction * length * ratio + jitter;
        }
    }

    pub fn particles(&self) -> &[TailParticle] {
        &self.particles
    }

}

/// How long a tail is when the comet is `distance` from the sun.
/// Full length at the sun, down to 30% at aphelion and beyond.
pub fn tail_length(base: f64, distance: f64, aphelion: f64) -> f64 {
    let fraction = if aphelion > 0.0 {
        (distance / aphelion).min(1.0)
    } else {
        1.0
    };
    base * (1.0 - fraction * SHRINK)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> TailSpec {
        TailSpec {
            length: 5.0,
            color: 0x88CCFF,
        }
    }

    #[test]
    fn length_at_the_extremes() {
        assert!((tail_length(5.0, 50.0, 50.0) - 1.5).abs() < 1e-12);
        assert!((tail_length(5.0, 0.0, 50.0) - 5.0).abs() < 1e-12);
        // Farther than aphelion doesn't shrink it any more
        assert!((tail_length(5.0, 80.0, 50.0) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn tail_points_away_from_the_sun() {
        let mut tail = Tail::new(spec(), 7);
        tail.update(Point3D::new(20.0, 0.0, 0.0), 50.0);
        let length = tail_length(5.0, 20.0, 50.0);
        for p in tail.particles() {
            // the jitter is at most a quarter unit on each axis
            let expected = 20.0 - length * p.ratio;
            assert!((p.pos.x - expected).abs() <= 0.25 * p.ratio + 1e-12);
            assert!(p.pos.y.abs() <= 0.25 * p.ratio + 1e-12);
        }
        // the head isn't jittered at all
        assert_eq!(tail.particles()[0].pos, Point3D::new(20.0, 0.0, 0.0));
    }

    #[test]
    fn appearance_is_fixed_at_creation() {
        let mut tail = Tail::new(spec(), 3);
        let sizes: Vec<f64> = tail.particles().iter().map(|p| p.size).collect();
        tail.update(Point3D::new(0.0, 3.0, 4.0), 50.0);
        tail.update(Point3D::new(10.0, 3.0, 4.0), 50.0);
        for (p, size) in tail.particles().iter().zip(sizes) {
            assert_eq!(p.size, size);
            assert_eq!(p.color, 0x88CCFF);
            assert!(p.size >= 0.1 && p.size < 0.6);
        }
        assert_eq!(tail.particles().len(), PARTICLE_COUNT);
    }

    #[test]
    fn head_on_the_sun_is_fine() {
        let mut tail = Tail::new(spec(), 1);
        tail.update(Point3D::origin(), 50.0);
        assert!(tail.particles().iter().all(|p| p.pos.x.is_finite()));
    }
}
