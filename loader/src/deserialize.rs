//! Lets you load a scene from a json5 file.
//!
//! ```json5
//! {
//!   scale: 0.1,
//!   position: [3, 0, 5],
//!   bodies: ["sun", "mercury", { prefab: "earth", moons: ["moon"] }],
//!   comets: [{ name: "Halley", perihelion: 20, aphelion: 50 }],
//! }
//! ```
//!
//! Leave out `bodies` and you get the whole catalog.

use crate::builder::{SolarSystemBuilder, SolarSystemBuilderEntry as SSBE};
use crate::custom::{AsteroidParams, CometParams};
use crate::prefabs;
use generator::field::{GalaxyParams, StarfieldParams};
use log::debug;
use rand::Rng;
use serde::{Deserialize, Deserializer};
use simulator::bodies;
use simulator::orbit::Orbit;
use thiserror::Error;

use std::collections::HashMap;
use std::f64::consts::PI;

/// Why a scene couldn't be loaded.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("couldn't read the scene file: {0}")]
    Parse(#[from] json5::Error),
    #[error("no prefab body named {0:?}")]
    UnknownPrefab(String),
    #[error("{0} is a moon, so it can't have moons of its own")]
    MoonWithMoons(String),
}

/// Everything needed to set up the viewer.
#[derive(Debug)]
pub struct Scene {
    /// Every length in the scene was already multiplied by this.
    /// Keep it around for custom bodies added later.
    pub scale: f64,
    /// Where the sun sits inside the galaxy. Not scaled.
    pub position: [f64; 3],
    pub galaxy: GalaxyParams,
    pub stars: StarfieldParams,
    /// The built-in bodies, ready for SolarSystem::new().
    pub bodies: Vec<bodies::Orbiter>,
    /// Custom asteroids to add once the system is made.
    pub asteroids: Vec<AsteroidParams>,
    /// Custom comets to add once the system is made.
    pub comets: Vec<CometParams>,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawScene {
    scale: f64,
    position: [f64; 3],
    galaxy: GalaxyParams,
    stars: StarfieldParams,
    bodies: Option<Vec<Entry>>,
    asteroids: Vec<AsteroidParams>,
    comets: Vec<CometParams>,
    asteroid_belts: Vec<Belt>,
}

impl Default for RawScene {
    fn default() -> Self {
        Self {
            // Small enough to sit inside the galaxy
            scale: 0.1,
            // Off to the side, in one of the arms
            position: [3.0, 0.0, 5.0],
            galaxy: GalaxyParams::default(),
            stars: StarfieldParams::default(),
            bodies: None,
            asteroids: Vec::new(),
            comets: Vec::new(),
            asteroid_belts: Vec::new(),
        }
    }
}

/// A planet (or sun) and its moons.
#[derive(Deserialize)]
#[serde(untagged)]
enum Entry {
    /// Just a name, like "earth". Comes with the catalog moons.
    Prefab(String),
    /// A catalog body with your pick of moons.
    PrefabWithMoons {
        prefab: String,
        #[serde(default)]
        moons: Vec<Moon>,
    },
    /// Something made up
    Custom(CustomBody),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Moon {
    Prefab(String),
    Custom(CustomBody),
}

/// A made-up body on a circular orbit.
#[derive(Deserialize)]
struct CustomBody {
    name: String,
    size: f64,
    #[serde(deserialize_with = "color")]
    color: u32,
    #[serde(default)]
    orbit_radius: f64,
    #[serde(default)]
    orbit_speed: f64,
    #[serde(default)]
    rotation_speed: f64,
    #[serde(default)]
    tilt: f64,
    #[serde(default)]
    texture: Option<String>,
    #[serde(default)]
    emissive: bool,
    #[serde(default)]
    initial_angle: Option<f64>,
    /// Only planets get to have these
    #[serde(default)]
    moons: Vec<Moon>,
}

#[derive(Deserialize)]
struct Belt {
    count: usize,
    min_orbit: f64,
    max_orbit: f64,
    #[serde(default = "get_one_for_serde")]
    standard_dev: f64,
    #[serde(default)]
    seed: u64,
    #[serde(default)]
    clockwise: bool,
}

/// Returns `1f64` because Serde needs a function
fn get_one_for_serde() -> f64 {
    1f64
}

/// Colors can be written as "#RRGGBB" or as a plain number like 0xRRGGBB.
pub(crate) fn color<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawColor {
        Number(u32),
        Text(String),
    }

    match RawColor::deserialize(deserializer)? {
        RawColor::Number(n) if n <= 0xFFFFFF => Ok(n),
        RawColor::Number(n) => Err(serde::de::Error::custom(format!(
            "{:#X} is too big to be a color",
            n
        ))),
        RawColor::Text(text) => parse_color(&text)
            .ok_or_else(|| serde::de::Error::custom(format!("{:?} isn't a color", text))),
    }
}

/// Reads "#RRGGBB" (the # is optional).
pub fn parse_color(text: &str) -> Option<u32> {
    let hex = text.trim().trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}

/// Loads a scene, with random starting angles.
pub fn load(contents: String) -> Result<Scene, LoadError> {
    load_with(&contents, &mut rand::thread_rng())
}

/// Loads a scene, getting starting angles from `rand`.
pub fn load_with<R: Rng + ?Sized>(contents: &str, rand: &mut R) -> Result<Scene, LoadError> {
    let raw: RawScene = json5::from_str(contents)?;
    let scale = raw.scale;

    let builder = match raw.bodies {
        None => prefabs::solar_systems::ours_builder(rand),
        Some(entries) => {
            let mut builder = SolarSystemBuilder::new();
            for entry in entries {
                builder = builder.add(do_one_entry(entry, rand)?);
            }
            builder
        }
    };
    let bodies = builder
        .add_bulk(raw.asteroid_belts.iter().map(|belt| SSBE::AsteroidsBuilder {
            count: belt.count,
            min_orbit: belt.min_orbit,
            max_orbit: belt.max_orbit,
            standard_dev: belt.standard_dev,
            seed: belt.seed,
            clockwise: belt.clockwise,
        }))
        .scaled(scale)
        .construct();
    debug!(
        "Loaded a scene with {} bodies, {} asteroids and {} comets",
        bodies.len(),
        raw.asteroids.len(),
        raw.comets.len()
    );

    Ok(Scene {
        scale,
        position: raw.position,
        galaxy: raw.galaxy,
        stars: raw.stars,
        bodies,
        asteroids: raw.asteroids,
        comets: raw.comets,
    })
}

/// Helper function to convert from serde to real
fn do_one_entry<R: Rng + ?Sized>(entry: Entry, rand: &mut R) -> Result<SSBE, LoadError> {
    Ok(match entry {
        Entry::Prefab(id) => {
            let moons = prefabs::bodies::default_moons(&id)
                .into_iter()
                .map(|moon| random_start(moon, rand))
                .collect::<Vec<_>>();
            SSBE::new(random_start(get_body_from_id(&id)?, rand)).moons(moons)
        }
        Entry::PrefabWithMoons { prefab, moons } => {
            SSBE::new(random_start(get_body_from_id(&prefab)?, rand)).moons(do_moons(moons, rand)?)
        }
        Entry::Custom(mut body) => {
            let moons = std::mem::take(&mut body.moons);
            SSBE::new(do_custom(body, rand)?).moons(do_moons(moons, rand)?)
        }
    })
}

fn do_moons<R: Rng + ?Sized>(
    moons: Vec<Moon>,
    rand: &mut R,
) -> Result<Vec<bodies::Orbiter>, LoadError> {
    moons
        .into_iter()
        .map(|moon| match moon {
            Moon::Prefab(id) => Ok(random_start(get_body_from_id(&id)?, rand)),
            Moon::Custom(body) => do_custom(body, rand),
        })
        .collect()
}

/// Moons have to be taken out before this, anything left over is a moon's moon.
fn do_custom<R: Rng + ?Sized>(raw: CustomBody, rand: &mut R) -> Result<bodies::Orbiter, LoadError> {
    if !raw.moons.is_empty() {
        return Err(LoadError::MoonWithMoons(raw.name));
    }
    let mut body = bodies::Body::new(raw.name, raw.size, raw.color)
        .spinning(raw.rotation_speed, raw.tilt);
    body.texture = raw.texture;
    body.emissive = raw.emissive;
    let orbit = if raw.orbit_radius == 0.0 {
        Orbit::Stationary
    } else {
        Orbit::circular(raw.orbit_radius, raw.orbit_speed)
    };
    let start = raw
        .initial_angle
        .unwrap_or_else(|| rand.gen::<f64>() * 2.0 * PI);
    Ok(bodies::Orbiter::new(body, orbit).starting_at(start))
}

/// Things that move start somewhere random on their orbit.
fn random_start<R: Rng + ?Sized>(oer: bodies::Orbiter, rand: &mut R) -> bodies::Orbiter {
    if oer.orbit.is_stationary() {
        oer
    } else {
        oer.starting_at(rand.gen::<f64>() * 2.0 * PI)
    }
}

/// Gets a premade Orbiter from a string
fn get_body_from_id(id: &str) -> Result<bodies::Orbiter, LoadError> {
    macro_rules! maker {
        (
            $($name:ident),*
        ) => {
            {
                let mut h: HashMap<&'static str, fn() -> bodies::Orbiter> = HashMap::new();
                $( h.insert(stringify!($name), prefabs::bodies::$name); )*
                h
            }
        };
    }

    lazy_static! {
        static ref BODIES: HashMap<&'static str, fn() -> bodies::Orbiter> = maker![
            sun, mercury, venus, earth, moon, luna, mars, jupiter, saturn, uranus, neptune
        ];
    }

    BODIES
        .get(id)
        .map(|make| make())
        .ok_or_else(|| LoadError::UnknownPrefab(id.to_string()))
}
