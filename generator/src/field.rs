//! Point clouds for the galaxy and the stars behind everything.
//! A field never changes once it's made; new parameters mean a whole new field.

use euclid::default::Point3D;
use log::{debug, warn};
use rand::Rng;
use serde::Deserialize;

use std::f64::consts::PI;

/// One star (or speck of galaxy).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldPoint {
    pub pos: Point3D<f64>,
    /// RGB, each in [0, 1]
    pub color: [f32; 3],
}

/// The shape a field gets scattered into.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Distribution {
    /// Evenly filling a ball.
    Spherical { radius: f64 },
    /// A flat disc with spiral arms, lying in the x-z plane.
    SpiralDisk {
        radius: f64,
        /// How far above and below the plane the middle of the disk reaches
        thickness: f64,
        arms: usize,
    },
}

/// Settings for the galaxy, as they appear in a scene file.
#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct GalaxyParams {
    pub count: usize,
    pub radius: f64,
    pub thickness: f64,
    pub arms: usize,
    /// How fast the whole galaxy turns. It turns `rotation_speed * 0.01` radians per frame.
    pub rotation_speed: f64,
}

impl Default for GalaxyParams {
    fn default() -> Self {
        Self {
            count: 10_000,
            radius: 10.0,
            thickness: 2.0,
            arms: 2,
            rotation_speed: 0.05,
        }
    }
}

impl GalaxyParams {
    pub fn distribution(&self) -> Distribution {
        Distribution::SpiralDisk {
            radius: self.radius,
            thickness: self.thickness,
            arms: self.arms,
        }
    }

    /// Radians the galaxy turns in one frame.
    pub fn spin_per_frame(&self) -> f64 {
        self.rotation_speed * 0.01
    }

    /// Move one setting up or down by `steps` notches, staying inside its range.
    pub fn nudged(mut self, setting: GalaxySetting, steps: i32) -> Self {
        let notch = |value: f64, (min, max, step): (f64, f64, f64)| {
            (value + step * steps as f64).max(min).min(max)
        };
        match setting {
            GalaxySetting::Count => {
                self.count = notch(self.count as f64, COUNT_RANGE).round() as usize;
            }
            GalaxySetting::Radius => self.radius = notch(self.radius, RADIUS_RANGE),
            GalaxySetting::Thickness => self.thickness = notch(self.thickness, THICKNESS_RANGE),
            GalaxySetting::RotationSpeed => {
                self.rotation_speed = notch(self.rotation_speed, ROTATION_SPEED_RANGE);
            }
        }
        self
    }

    /// Whether going from `self` to `other` needs a new field.
    /// Turning faster or slower doesn't move any points.
    pub fn reshapes(&self, other: &GalaxyParams) -> bool {
        self.count != other.count || self.distribution() != other.distribution()
    }
}

/// The galaxy settings that can be changed while it's on screen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GalaxySetting {
    Count,
    Radius,
    Thickness,
    RotationSpeed,
}

// (min, max, step)
const COUNT_RANGE: (f64, f64, f64) = (5000.0, 50_000.0, 5000.0);
const RADIUS_RANGE: (f64, f64, f64) = (5.0, 20.0, 1.0);
const THICKNESS_RANGE: (f64, f64, f64) = (0.5, 5.0, 0.5);
const ROTATION_SPEED_RANGE: (f64, f64, f64) = (0.01, 0.1, 0.01);

/// Settings for the background stars, as they appear in a scene file.
#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct StarfieldParams {
    pub count: usize,
    pub radius: f64,
}

impl Default for StarfieldParams {
    fn default() -> Self {
        Self {
            count: 5000,
            radius: 100.0,
        }
    }
}

impl StarfieldParams {
    pub fn distribution(&self) -> Distribution {
        Distribution::Spherical {
            radius: self.radius,
        }
    }
}

/// Color of the middle of the galaxy, #FFFFAA
const CENTER_COLOR: [f32; 3] = [1.0, 1.0, 170.0 / 255.0];
/// Color of the rim of the galaxy, #4444FF
const EDGE_COLOR: [f32; 3] = [68.0 / 255.0, 68.0 / 255.0, 1.0];

/// Scatter `count` points into the given shape.
/// Bad parameters get you an empty field (and a warning) instead of an error.
pub fn generate<R: Rng + ?Sized>(count: usize, shape: &Distribution, rand: &mut R) -> Vec<FieldPoint> {
    if let Err(why) = validate(shape) {
        warn!("Not generating a field of {} points: {}", count, why);
        return Vec::new();
    }
    debug!("Generating {} points in {:?}", count, shape);

    match *shape {
        Distribution::Spherical { radius } => (0..count).map(|_| sphere_point(radius, rand)).collect(),
        Distribution::SpiralDisk {
            radius,
            thickness,
            arms,
        } => (0..count)
            .map(|i| disk_point(i, radius, thickness, arms, rand))
            .collect(),
    }
}

fn validate(shape: &Distribution) -> Result<(), &'static str> {
    let ok = |x: f64| x.is_finite() && x >= 0.0;
    match *shape {
        Distribution::Spherical { radius } if !ok(radius) => Err("radius must be a positive number"),
        Distribution::SpiralDisk { radius, .. } if !ok(radius) => {
            Err("radius must be a positive number")
        }
        Distribution::SpiralDisk { thickness, .. } if !ok(thickness) => {
            Err("thickness must be a positive number")
        }
        Distribution::SpiralDisk { arms: 0, .. } => Err("a galaxy needs at least one arm"),
        _ => Ok(()),
    }
}

fn sphere_point<R: Rng + ?Sized>(radius: f64, rand: &mut R) -> FieldPoint {
    let theta = 2.0 * PI * rand.gen::<f64>();
    // acos of a uniform [-1, 1] keeps the poles from bunching up
    let phi = (2.0 * rand.gen::<f64>() - 1.0).acos();
    // and the cube root keeps the stars from bunching up in the middle
    let r = radius * rand.gen::<f64>().cbrt();
    let pos = Point3D::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    );

    let b = 0.5 + rand.gen::<f32>() * 0.5;
    let color = if rand.gen::<f64>() > 0.8 {
        // yellowish, not many of these
        [b, b * 0.9, b * 0.6]
    } else if rand.gen::<f64>() > 0.6 {
        // white
        [b, b, b]
    } else {
        // bluish white, most of them
        [b * 0.8, b * 0.9, b]
    };
    FieldPoint { pos, color }
}

fn disk_point<R: Rng + ?Sized>(
    idx: usize,
    galaxy_radius: f64,
    thickness: f64,
    arms: usize,
    rand: &mut R,
) -> FieldPoint {
    let r = rand.gen::<f64>() * galaxy_radius;
    let branch = (idx % arms) as f64 * 2.0 * PI / arms as f64;
    let spin = r * 0.5;
    let jitter = rand.gen::<f64>() * 2.0 * PI * 0.3;
    let angle = branch + spin + jitter;

    let edge = if galaxy_radius > 0.0 {
        r / galaxy_radius
    } else {
        0.0
    };
    // Thins out toward the rim
    let height = (rand.gen::<f64>() * 2.0 - 1.0) * thickness * (1.0 - edge * edge * 0.8);

    let t = edge as f32;
    let mut color = [0f32; 3];
    for (c, (center, rim)) in color.iter_mut().zip(CENTER_COLOR.iter().zip(EDGE_COLOR.iter())) {
        *c = center + (rim - center) * t;
    }
    FieldPoint {
        pos: Point3D::new(angle.cos() * r, height, angle.sin() * r),
        color,
    }
}

/// The positions as a flat xyz buffer.
pub fn positions(field: &[FieldPoint]) -> Vec<f32> {
    let mut out = Vec::with_capacity(field.len() * 3);
    for p in field {
        out.extend_from_slice(&[p.pos.x as f32, p.pos.y as f32, p.pos.z as f32]);
    }
    out
}

/// The colors as a flat rgb buffer.
pub fn colors(field: &[FieldPoint]) -> Vec<f32> {
    let mut out = Vec::with_capacity(field.len() * 3);
    for p in field {
        out.extend_from_slice(&p.color);
    }
    out
}
