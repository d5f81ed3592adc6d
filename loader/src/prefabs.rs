//! Prefabricated orbiters and solar systems.
//!
//! Sizes and distances are in "Earth units": Earth is 1 big and 10 out.
//! Nothing here is to scale with the real thing, but it looks nice.
//! Rates are radians per frame at 60 frames per second.

pub mod bodies {
    use simulator::bodies::{Body, Layer, Orbiter};
    use simulator::orbit::Orbit;

    // THE SUN

    /// Returns our Sun. Will not move, but it does spin a little.
    pub fn sun() -> Orbiter {
        let mut sun = Body::new("Sun", 3.0, 0xFDB813)
            .with_texture("sun")
            .spinning(0.0003, 0.0);
        sun.emissive = true;
        Orbiter::new(sun, Orbit::Stationary)
    }

    // PLANETS

    /// Returns Mercury.
    pub fn mercury() -> Orbiter {
        planet("Mercury", "mercury", 0.38, 0xB7B7B7, 5.0, 0.013, 0.0013, 0.03)
    }

    /// Returns Venus. It spins the wrong way.
    pub fn venus() -> Orbiter {
        planet("Venus", "venus", 0.95, 0xE6CA9A, 7.0, 0.005, -0.0007, 0.001)
    }

    /// Returns the Earth, clouds included.
    pub fn earth() -> Orbiter {
        let mut earth = planet("Earth", "earth", 1.0, 0x3B8CF2, 10.0, 0.0033, 0.0067, 0.41);
        earth.body.layers.push(Layer::Clouds {
            scale: 1.02,
            spin: 1.2,
            texture: "earthClouds".to_string(),
        });
        earth
    }

    /// Returns Mars
    pub fn mars() -> Orbiter {
        planet("Mars", "mars", 0.53, 0xB22E1C, 15.0, 0.0027, 0.006, 0.44)
    }

    /// Returns Jupiter.
    pub fn jupiter() -> Orbiter {
        planet("Jupiter", "jupiter", 2.0, 0xB5975A, 22.0, 0.0013, 0.013, 0.05)
    }

    /// Returns Saturn, rings and all.
    pub fn saturn() -> Orbiter {
        let mut saturn = planet("Saturn", "saturn", 1.7, 0xE9D496, 30.0, 0.0008, 0.013, 0.47);
        saturn.body.layers.push(Layer::Rings {
            inner: 2.0,
            outer: 3.5,
            texture: "saturnRings".to_string(),
        });
        saturn
    }

    /// Returns Uranus. Lying on its side.
    pub fn uranus() -> Orbiter {
        planet("Uranus", "uranus", 1.4, 0xCAEAE8, 38.0, 0.0003, 0.01, 1.71)
    }

    /// Returns Neptune
    pub fn neptune() -> Orbiter {
        planet("Neptune", "neptune", 1.4, 0x3D58E5, 45.0, 0.0003, 0.01, 0.49)
    }

    // MOONS

    /// Returns our Moon.
    /// Its orbit is around whatever it gets attached to, which ought to be the Earth.
    pub fn moon() -> Orbiter {
        Orbiter::new(
            Body::new("Moon", 0.27, 0xCCCCCC)
                .with_texture("moon")
                .spinning(0.0017, 0.0),
            Orbit::circular(1.5, 0.017),
        )
    }

    /// Same as moon(). For the Latin speakers.
    pub fn luna() -> Orbiter {
        moon()
    }

    // BODY BUILDERS

    /// Returns a planet on a flat circular orbit around the origin.
    #[allow(clippy::too_many_arguments)]
    pub fn planet(
        name: &str,
        texture: &str,
        radius: f64,
        color: u32,
        orbit_radius: f64,
        orbit_rate: f64,
        rotation_rate: f64,
        tilt: f64,
    ) -> Orbiter {
        Orbiter::new(
            Body::new(name, radius, color)
                .with_texture(texture)
                .spinning(rotation_rate, tilt),
            Orbit::circular(orbit_radius, orbit_rate),
        )
    }

    /// The moons a prefab planet comes with if you don't say otherwise.
    pub fn default_moons(name: &str) -> Vec<Orbiter> {
        match name {
            "earth" => vec![moon()],
            _ => Vec::new(),
        }
    }
}

pub mod solar_systems {
    use crate::builder::{SolarSystemBuilder, SolarSystemBuilderEntry as SSBE};
    use crate::prefabs::bodies;
    use rand::Rng;
    use simulator::bodies::Orbiter;
    use std::f64::consts::PI;

    /// Sun, eight planets and the Moon, shrunk (or grown) by `scale`.
    /// Everything but the sun starts somewhere random on its orbit.
    pub fn ours<R: Rng + ?Sized>(scale: f64, rand: &mut R) -> Vec<Orbiter> {
        ours_builder(rand).scaled(scale).construct()
    }

    /// The same as ours(), but you can still add more to it.
    pub fn ours_builder<R: Rng + ?Sized>(rand: &mut R) -> SolarSystemBuilder {
        let mut random_start = |oer: Orbiter| oer.starting_at(rand.gen::<f64>() * 2.0 * PI);

        SolarSystemBuilder::new()
            .add(SSBE::new(bodies::sun()))
            .add(SSBE::new(random_start(bodies::mercury())))
            .add(SSBE::new(random_start(bodies::venus())))
            .add(SSBE::new(random_start(bodies::earth())).moon(random_start(bodies::moon())))
            .add(SSBE::new(random_start(bodies::mars())))
            .add(SSBE::new(random_start(bodies::jupiter())))
            .add(SSBE::new(random_start(bodies::saturn())))
            .add(SSBE::new(random_start(bodies::uranus())))
            .add(SSBE::new(random_start(bodies::neptune())))
    }
}
