//! Where things are on their orbits.
//! Everything in here is pure: give it a phase, get a position.

use euclid::default::Point3D;
use std::f64::consts::PI;

/// How a body goes around its parent (or the origin).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Orbit {
    /// Doesn't go anywhere. The sun, mostly.
    Stationary,
    /// A circle in the x-z plane.
    Circular {
        radius: f64,
        /// Radians per tick
        rate: f64,
        /// Small bodies bob up and down by this much. Planets have None and stay flat.
        inclination: Option<f64>,
    },
    /// An ellipse with the parent at one focus. Used by comets.
    Eccentric {
        /// Closest approach
        perihelion: f64,
        /// Farthest distance
        aphelion: f64,
        inclination: f64,
        /// Radians of true anomaly per tick
        rate: f64,
    },
}

impl Orbit {
    /// A flat circular orbit, like a planet has.
    pub fn circular(radius: f64, rate: f64) -> Self {
        Orbit::Circular {
            radius,
            rate,
            inclination: None,
        }
    }

    /// A circular orbit that is tilted out of the plane.
    pub fn inclined(radius: f64, rate: f64, inclination: f64) -> Self {
        Orbit::Circular {
            radius,
            rate,
            inclination: Some(inclination),
        }
    }

    /// An elliptical orbit.
    /// The two distances get swapped if they come in backwards,
    /// and anything that isn't an ellipse turns into a Stationary orbit.
    pub fn eccentric(perihelion: f64, aphelion: f64, inclination: f64, rate: f64) -> Self {
        let (perihelion, aphelion) = if aphelion < perihelion {
            (aphelion, perihelion)
        } else {
            (perihelion, aphelion)
        };
        if !perihelion.is_finite() || !aphelion.is_finite() || perihelion <= 0.0 {
            return Orbit::Stationary;
        }
        Orbit::Eccentric {
            perihelion,
            aphelion,
            inclination,
            rate,
        }
    }

    /// The same orbit with every distance multiplied by `scale`.
    pub fn scaled(self, scale: f64) -> Self {
        match self {
            Orbit::Stationary => Orbit::Stationary,
            Orbit::Circular {
                radius,
                rate,
                inclination,
            } => Orbit::Circular {
                radius: radius * scale,
                rate,
                inclination,
            },
            Orbit::Eccentric {
                perihelion,
                aphelion,
                inclination,
                rate,
            } => Orbit::eccentric(perihelion * scale, aphelion * scale, inclination, rate),
        }
    }

    /// How fast the phase advances, in radians per tick.
    pub fn rate(&self) -> f64 {
        match *self {
            Orbit::Stationary => 0.0,
            Orbit::Circular { rate, .. } | Orbit::Eccentric { rate, .. } => rate,
        }
    }

    /// Whether this orbit never moves its body.
    pub fn is_stationary(&self) -> bool {
        match *self {
            Orbit::Stationary => true,
            Orbit::Circular { radius, .. } => radius == 0.0,
            Orbit::Eccentric {
                perihelion,
                aphelion,
                ..
            } => perihelion + aphelion <= 0.0,
        }
    }

    /// Half the long axis of the orbit.
    pub fn semi_major_axis(&self) -> f64 {
        match *self {
            Orbit::Stationary => 0.0,
            Orbit::Circular { radius, .. } => radius,
            Orbit::Eccentric {
                perihelion,
                aphelion,
                ..
            } => (perihelion + aphelion) / 2.0,
        }
    }

    /// 0 for circles, approaching 1 for really long ellipses.
    pub fn eccentricity(&self) -> f64 {
        match *self {
            Orbit::Eccentric {
                perihelion,
                aphelion,
                ..
            } if perihelion + aphelion > 0.0 => (aphelion - perihelion) / (aphelion + perihelion),
            _ => 0.0,
        }
    }

    /// The farthest this orbit ever gets from its focus.
    pub fn aphelion(&self) -> f64 {
        match *self {
            Orbit::Stationary => 0.0,
            Orbit::Circular { radius, .. } => radius,
            Orbit::Eccentric { aphelion, .. } => aphelion,
        }
    }

    /// Distance from the focus at the given phase.
    pub fn radius_at(&self, phase: f64) -> f64 {
        match *self {
            Orbit::Stationary => 0.0,
            Orbit::Circular { radius, .. } => radius,
            Orbit::Eccentric { .. } => {
                let a = self.semi_major_axis();
                let e = self.eccentricity();
                // 1 + e cos(theta) is at least 1 - e, which is positive since perihelion > 0.
                let denom = 1.0 + e * wrap(phase).cos();
                if denom <= 0.0 {
                    0.0
                } else {
                    a * (1.0 - e * e) / denom
                }
            }
        }
    }

    /// Position relative to whatever is being orbited.
    pub fn position_at(&self, phase: f64) -> Point3D<f64> {
        let theta = wrap(phase);
        let (sin, cos) = theta.sin_cos();
        match *self {
            Orbit::Stationary => Point3D::origin(),
            Orbit::Circular {
                radius,
                inclination,
                ..
            } => {
                let y = match inclination {
                    Some(inc) => sin * radius * inc.sin(),
                    None => 0.0,
                };
                Point3D::new(cos * radius, y, sin * radius)
            }
            Orbit::Eccentric { inclination, .. } => {
                let r = self.radius_at(theta);
                Point3D::new(
                    r * cos,
                    r * sin * inclination.sin(),
                    r * sin * inclination.cos(),
                )
            }
        }
    }

    /// A closed loop of points tracing the whole orbit, for drawing.
    /// Empty if the body doesn't move.
    pub fn path(&self, segments: usize) -> Vec<Point3D<f64>> {
        if self.is_stationary() || segments == 0 {
            return Vec::new();
        }
        (0..=segments)
            .map(|i| self.position_at(i as f64 / segments as f64 * 2.0 * PI))
            .collect()
    }
}

/// Takes an unbounded phase into [0, 2pi).
pub fn wrap(phase: f64) -> f64 {
    phase.rem_euclid(2.0 * PI)
}

/// How many segments an orbit path gets if you don't care.
pub const PATH_SEGMENTS: usize = 128;
