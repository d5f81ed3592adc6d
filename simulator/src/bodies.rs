//! Handles bodies and such

use crate::orbit::Orbit;

/// Identifies a body inside a SolarSystem.
/// Built-in bodies get the first few numbers, custom ones count up from there
/// and are never reused.
pub type BodyId = usize;

/// The representation of a body, like a star, planet, comet...
/// Doesn't store its position or phase.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub name: String,
    pub radius: f64,
    /// Color is stored as 0xRRGGBB
    pub color: u32,
    /// Which procedural texture to paint it with, like "earth" or "saturnRings".
    pub texture: Option<String>,
    /// Radians per tick. Negative spins it backwards (hi Venus).
    pub rotation_rate: f64,
    /// Axial tilt in radians, applied before the spin.
    pub tilt: f64,
    /// Whether it glows (the sun does).
    pub emissive: bool,
    /// Extra bits that ride along, like rings or clouds.
    pub layers: Vec<Layer>,
}

/// Something that goes wherever its body goes without being a body itself.
#[derive(Clone, Debug, PartialEq)]
pub enum Layer {
    /// A flat ring around the equator, tilted with the body.
    Rings {
        inner: f64,
        outer: f64,
        texture: String,
    },
    /// A see-through shell a bit bigger than the body that spins a bit faster.
    Clouds {
        /// Radius compared to the body's
        scale: f64,
        /// Spin compared to the body's
        spin: f64,
        texture: String,
    },
}

impl Body {
    pub fn new(name: impl Into<String>, radius: f64, color: u32) -> Self {
        Self {
            name: name.into(),
            radius,
            color,
            texture: None,
            rotation_rate: 0.0,
            tilt: 0.0,
            emissive: false,
            layers: Vec::new(),
        }
    }

    pub fn with_texture(mut self, texture: impl Into<String>) -> Self {
        self.texture = Some(texture.into());
        self
    }

    pub fn spinning(mut self, rotation_rate: f64, tilt: f64) -> Self {
        self.rotation_rate = rotation_rate;
        self.tilt = tilt;
        self
    }

    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }
}

/// How a body turns around itself.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Spin {
    /// Around the tilted y axis, like a planet.
    Axial,
    /// On all three axes at once, like a lumpy asteroid.
    Tumbling,
}

/// What a comet's tail looks like when it's created.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TailSpec {
    /// Length of the tail right at the sun.
    pub length: f64,
    /// Color is stored as 0xRRGGBB
    pub color: u32,
}

/// An Orbiter is a combination of a Body and an Orbit.
/// In other words, a thing and how it goes around.
#[derive(Clone, Debug)]
pub struct Orbiter {
    pub body: Body,
    pub orbit: Orbit,
    /// Where on the orbit it starts out.
    pub initial_phase: f64,
    pub spin: Spin,
    /// What this orbits around, if it's not the origin.
    /// Only ever read, never owned.
    pub parent: Option<BodyId>,
    /// Comets carry a tail.
    pub tail: Option<TailSpec>,
}

impl Orbiter {
    pub fn new(body: Body, orbit: Orbit) -> Self {
        Self {
            body,
            orbit,
            initial_phase: 0.0,
            spin: Spin::Axial,
            parent: None,
            tail: None,
        }
    }

    /// Start somewhere other than phase zero.
    pub fn starting_at(mut self, phase: f64) -> Self {
        self.initial_phase = phase;
        self
    }

    pub fn orbiting(mut self, parent: BodyId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn tumbling(mut self) -> Self {
        self.spin = Spin::Tumbling;
        self
    }

    pub fn with_tail(mut self, tail: TailSpec) -> Self {
        self.tail = Some(tail);
        self
    }

    /// Blow up (or shrink) every length: the body, its rings, its orbit and its tail.
    /// Rates and angles stay the same.
    pub fn scaled(mut self, scale: f64) -> Self {
        self.body.radius *= scale;
        for layer in self.body.layers.iter_mut() {
            if let Layer::Rings { inner, outer, .. } = layer {
                *inner *= scale;
                *outer *= scale;
            }
        }
        self.orbit = self.orbit.scaled(scale);
        if let Some(tail) = self.tail.as_mut() {
            tail.length *= scale;
        }
        self
    }
}

/// The orientation of a body this tick.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rotation {
    /// Rotation about x, in radians
    pub x: f64,
    /// Rotation about y, in radians
    pub y: f64,
    /// Rotation about z, in radians
    pub z: f64,
}

/// All the mutable stuff the SolarSystem keeps about one body.
#[derive(Copy, Clone, Debug)]
pub(crate) struct BodyState {
    /// Never wrapped. Gets taken modulo 2pi when it's used.
    pub phase: f64,
    /// How far it has spun around itself
    pub spun: f64,
}

impl BodyState {
    pub fn new(initial_phase: f64) -> Self {
        Self {
            phase: initial_phase,
            spun: 0.0,
        }
    }

    pub fn update(&mut self, dt: f64, rate: f64, rotation_rate: f64) {
        self.phase += rate * dt;
        self.spun += rotation_rate * dt;
    }

    pub fn rotation(&self, body: &Body, spin: Spin) -> Rotation {
        match spin {
            Spin::Axial => Rotation {
                x: body.tilt,
                y: self.spun,
                z: 0.0,
            },
            Spin::Tumbling => Rotation {
                x: body.tilt + self.spun,
                y: self.spun * 0.7,
                z: self.spun * 0.5,
            },
        }
    }
}
