//! Lets you construct solar systems with moons more easily.
//!
//! Moons are only one level deep: a planet can have moons, but a moon can't.
//! The entry types make sure of it.

use log::{debug, warn};
use simulator::bodies::*;
use simulator::orbit::Orbit;

/// Use this struct to construct a solar system easily
pub struct SolarSystemBuilder {
    /// The stuff in the solar system
    entries: Vec<SolarSystemBuilderEntry>,
    /// Every length gets multiplied by this
    scale: f64,
}

impl Default for SolarSystemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SolarSystemBuilder {
    /// Make a new empty Builder.
    pub fn new() -> Self {
        SolarSystemBuilder {
            entries: Vec::new(),
            scale: 1.0,
        }
    }

    /// Add an entry to the Builder.
    pub fn add(mut self, ssbe: SolarSystemBuilderEntry) -> Self {
        self.entries.push(ssbe);
        self
    }

    /// Add a whole bunch of entries at once.
    pub fn add_bulk<T: IntoIterator<Item = SolarSystemBuilderEntry>>(mut self, entries: T) -> Self {
        self.entries.extend(entries);
        self
    }

    /// Shrink or grow everything by this much when it's constructed.
    pub fn scaled(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Flattens all the entries into a Vec suitable for passing to SolarSystem::new().
    /// Each moon comes right after its planet and points back at it by index.
    pub fn construct(self) -> Vec<Orbiter> {
        let scale = self.scale;
        let mut out: Vec<Orbiter> = Vec::new();

        for entry in self.entries {
            match entry {
                SolarSystemBuilderEntry::Orbit(oer, moons) => {
                    let parent = out.len();
                    out.push(oer.scaled(scale));
                    out.extend(
                        moons
                            .into_iter()
                            .map(|moon| moon.orbiting(parent).scaled(scale)),
                    );
                }
                SolarSystemBuilderEntry::AsteroidsBuilder {
                    count,
                    min_orbit,
                    max_orbit,
                    standard_dev,
                    seed,
                    clockwise,
                } => {
                    let belt = build_belt(count, min_orbit, max_orbit, standard_dev, seed, clockwise);
                    debug!("Built a belt of {} asteroids from seed {}", belt.len(), seed);
                    out.extend(belt.into_iter().map(|oer| oer.scaled(scale)));
                }
            }
        }

        out
    }
}

/// Makes a belt of random asteroids.
fn build_belt(
    count: usize,
    min_orbit: f64,
    max_orbit: f64,
    standard_dev: f64,
    seed: u64,
    clockwise: bool,
) -> Vec<Orbiter> {
    use rand::{rngs::SmallRng, Rng, SeedableRng};
    use rand_distr::{Distribution, Normal};
    use std::f64::consts::PI;

    // The size when the normal returns 1 (~0.4% chance).
    // Same as a freshly made custom asteroid.
    const SIZE_AT_1: f64 = 0.2;
    // Anything smaller than this you couldn't see anyways
    const MIN_SIZE: f64 = 0.02;
    // How fast something goes around at 25 out. Further out is slower, like Kepler says.
    const RATE_AT_25: f64 = 0.001;

    let normal = match Normal::new(0.0, standard_dev) {
        Ok(normal) => normal,
        Err(why) => {
            warn!("Skipping an asteroid belt with standard_dev {}: {:?}", standard_dev, why);
            return Vec::new();
        }
    };
    let mut rand = SmallRng::seed_from_u64(seed);

    // Generate the prefix name for the asteroid system
    const ASTEROID_SYSTEM_CHARS: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ1234567890";
    let system_name: String = std::iter::once('A')
        .chain((0..rand.gen_range(4, 7)).map(|_| {
            ASTEROID_SYSTEM_CHARS[rand.gen_range(0, ASTEROID_SYSTEM_CHARS.len())] as char
        }))
        .collect();

    (0..count)
        .map(|num| {
            let radius = (normal.sample(&mut rand).abs() * SIZE_AT_1).max(MIN_SIZE);
            // Isn't Wikipedia great? I can read all about the types of asteroids and their % in our asteroid belt!
            let asteroid_kind_id = rand.gen_range(0, 100);
            let (color, id_char) = if asteroid_kind_id < 75 {
                // Carbonaceous asteroids
                (0x4C1505, 'C')
            } else if asteroid_kind_id < 75 + 17 {
                // Silicate asteroids
                (0x819284, 'S')
            } else {
                // Metallic asteroids
                (0xC9D2E4, 'M')
            };
            let name = format!("{}-{:04}{}", system_name, num, id_char);

            // No gen_range here, it panics if the orbit is zero wide
            let orbit_radius = min_orbit + rand.gen::<f64>() * (max_orbit - min_orbit);
            let rate = RATE_AT_25 * (25.0 / orbit_radius.max(1.0)).powf(1.5)
                * if clockwise { -1.0 } else { 1.0 };
            let inclination = rand.gen::<f64>() * 0.2;
            let rotation_rate = rand.gen::<f64>() * 0.009 + 0.001;

            Orbiter::new(
                Body::new(name, radius, color).spinning(rotation_rate, 0.0),
                Orbit::inclined(orbit_radius, rate, inclination),
            )
            .starting_at(rand.gen::<f64>() * 2.0 * PI)
            .tumbling()
        })
        .collect()
}

/// One entry in a SolarSystemBuilder
pub enum SolarSystemBuilderEntry {
    /// A body, and the moons that go around it.
    /// The moons' orbits are relative to the body.
    Orbit(Orbiter, Vec<Orbiter>),
    /// AsteroidsBuilder is a helper to build a ton of asteroids around the middle.
    /// Give it the number of bodies you want.
    AsteroidsBuilder {
        count: usize,
        min_orbit: f64,
        max_orbit: f64,
        /// Spread of the sizes. Bigger means more big ones.
        standard_dev: f64,
        seed: u64,
        clockwise: bool,
    },
}

impl SolarSystemBuilderEntry {
    /// Create a new SolarSystemBuilderEntry::Orbit with no moons yet
    pub fn new(orbiter: Orbiter) -> Self {
        SolarSystemBuilderEntry::Orbit(orbiter, Vec::new())
    }

    /// Create a new SolarSystemBuilderEntry::Orbit from a Body and an Orbit
    pub fn new_parts(body: Body, orbit: Orbit) -> Self {
        Self::new(Orbiter::new(body, orbit))
    }

    /// Add a moon to this one.
    /// Returns itself so you can keep chaining it.
    /// Asteroid belts don't get moons; the moon is dropped with a warning.
    pub fn moon(mut self, moon: Orbiter) -> Self {
        match &mut self {
            SolarSystemBuilderEntry::Orbit(_, ref mut moons) => moons.push(moon),
            SolarSystemBuilderEntry::AsteroidsBuilder { .. } => {
                warn!("Tried to give {} to an asteroid belt", moon.body.name)
            }
        }
        self
    }

    /// Add a whole bunch of moons to this one.
    pub fn moons<T: IntoIterator<Item = Orbiter>>(self, new_moons: T) -> Self {
        new_moons.into_iter().fold(self, |entry, moon| entry.moon(moon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SolarSystemBuilderEntry as SSBE;

    fn belt(seed: u64) -> SSBE {
        SSBE::AsteroidsBuilder {
            count: 40,
            min_orbit: 17.0,
            max_orbit: 20.0,
            standard_dev: 1.0,
            seed,
            clockwise: false,
        }
    }

    #[test]
    fn moons_point_at_their_planet() {
        let built = SolarSystemBuilder::new()
            .add(SSBE::new_parts(Body::new("Star", 2.0, 0xFFFFFF), Orbit::Stationary))
            .add(
                SSBE::new_parts(Body::new("Big", 1.0, 0x00FF00), Orbit::circular(10.0, 0.01))
                    .moon(Orbiter::new(Body::new("A", 0.1, 0), Orbit::circular(1.0, 0.1)))
                    .moon(Orbiter::new(Body::new("B", 0.1, 0), Orbit::circular(2.0, 0.1))),
            )
            .add(SSBE::new_parts(Body::new("Far", 1.0, 0x0000FF), Orbit::circular(20.0, 0.01)))
            .construct();
        let parents: Vec<Option<BodyId>> = built.iter().map(|oer| oer.parent).collect();
        assert_eq!(parents, vec![None, None, Some(1), Some(1), None]);
    }

    #[test]
    fn belts_stay_in_their_lane() {
        let built = SolarSystemBuilder::new().add(belt(3)).construct();
        assert_eq!(built.len(), 40);
        for oer in built.iter() {
            let r = oer.orbit.semi_major_axis();
            assert!(r >= 17.0 && r <= 20.0, "{} is at {}", oer.body.name, r);
            assert!(oer.body.radius > 0.0);
            assert_eq!(oer.spin, Spin::Tumbling);
            assert!(oer.orbit.rate() > 0.0);
        }
    }

    #[test]
    fn belts_are_seeded() {
        let names = |seed| -> Vec<String> {
            SolarSystemBuilder::new()
                .add(belt(seed))
                .construct()
                .into_iter()
                .map(|oer| oer.body.name)
                .collect()
        };
        assert_eq!(names(8), names(8));
        assert_ne!(names(8), names(9));
    }

    #[test]
    fn clockwise_belts_go_backwards() {
        let built = SolarSystemBuilder::new()
            .add(SSBE::AsteroidsBuilder {
                count: 5,
                min_orbit: 30.0,
                max_orbit: 30.0,
                standard_dev: 1.0,
                seed: 0,
                clockwise: true,
            })
            .construct();
        assert!(built.iter().all(|oer| oer.orbit.rate() < 0.0));
    }

    #[test]
    fn bad_spread_means_no_belt() {
        let built = SolarSystemBuilder::new()
            .add(SSBE::AsteroidsBuilder {
                count: 5,
                min_orbit: 30.0,
                max_orbit: 30.0,
                standard_dev: -1.0,
                seed: 0,
                clockwise: false,
            })
            .construct();
        assert!(built.is_empty());
    }
}
