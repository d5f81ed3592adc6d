//! User-made asteroids and comets.
//!
//! These are what you fill in before hitting "add". Every field has a sensible
//! default so a scene file (or a keypress) only has to say what's different.

use crate::deserialize::color;
use rand::Rng;
use serde::Deserialize;
use simulator::bodies::{Body, Orbiter, TailSpec};
use simulator::orbit::Orbit;
use std::f64::consts::PI;

/// Everything about a custom asteroid.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct AsteroidParams {
    pub name: String,
    pub size: f64,
    pub orbit_radius: f64,
    /// Radians per frame
    pub orbit_speed: f64,
    pub rotation_speed: f64,
    #[serde(deserialize_with = "color")]
    pub color: u32,
    /// Lumpy instead of round.
    pub irregular: bool,
    /// How far the orbit tips out of the plane, in radians
    pub inclination: f64,
    /// Where on the orbit to start. Random if left out.
    pub initial_angle: Option<f64>,
}

impl Default for AsteroidParams {
    fn default() -> Self {
        Self {
            name: "New Asteroid".to_string(),
            size: 0.2,
            orbit_radius: 25.0,
            orbit_speed: 0.001,
            rotation_speed: 0.005,
            color: 0xC0C0C0,
            irregular: true,
            inclination: 0.1,
            initial_angle: None,
        }
    }
}

impl AsteroidParams {
    /// Make it into something a SolarSystem can take, with every length times `scale`.
    /// Asteroids tumble.
    pub fn into_orbiter<R: Rng + ?Sized>(&self, scale: f64, rand: &mut R) -> Orbiter {
        Orbiter::new(
            Body::new(self.name.clone(), self.size, self.color).spinning(self.rotation_speed, 0.0),
            Orbit::inclined(self.orbit_radius, self.orbit_speed, self.inclination),
        )
        .starting_at(start(self.initial_angle, rand))
        .tumbling()
        .scaled(scale)
    }
}

/// Everything about a custom comet.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct CometParams {
    pub name: String,
    pub size: f64,
    /// Closest it gets to the sun
    pub perihelion: f64,
    /// Farthest it gets from the sun
    pub aphelion: f64,
    pub orbit_speed: f64,
    pub rotation_speed: f64,
    #[serde(deserialize_with = "color")]
    pub color: u32,
    pub inclination: f64,
    /// How long the tail is right next to the sun
    pub tail_length: f64,
    #[serde(deserialize_with = "color")]
    pub tail_color: u32,
    pub initial_angle: Option<f64>,
}

impl Default for CometParams {
    fn default() -> Self {
        Self {
            name: "New Comet".to_string(),
            size: 0.2,
            perihelion: 20.0,
            aphelion: 50.0,
            orbit_speed: 0.001,
            rotation_speed: 0.005,
            color: 0xC0C0C0,
            inclination: 0.1,
            tail_length: 5.0,
            tail_color: 0x88CCFF,
            initial_angle: None,
        }
    }
}

impl CometParams {
    /// Make it into something a SolarSystem can take, with every length times `scale`.
    /// The SolarSystem gives it a tail when it's added.
    pub fn into_orbiter<R: Rng + ?Sized>(&self, scale: f64, rand: &mut R) -> Orbiter {
        Orbiter::new(
            Body::new(self.name.clone(), self.size, self.color).spinning(self.rotation_speed, 0.0),
            Orbit::eccentric(
                self.perihelion,
                self.aphelion,
                self.inclination,
                self.orbit_speed,
            ),
        )
        .starting_at(start(self.initial_angle, rand))
        .with_tail(TailSpec {
            length: self.tail_length,
            color: self.tail_color,
        })
        .scaled(scale)
    }
}

fn start<R: Rng + ?Sized>(initial_angle: Option<f64>, rand: &mut R) -> f64 {
    initial_angle.unwrap_or_else(|| rand.gen::<f64>() * 2.0 * PI)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};
    use simulator::bodies::Spin;

    #[test]
    fn defaults_match_the_editor() {
        let rock = AsteroidParams::default();
        assert_eq!(rock.name, "New Asteroid");
        assert_eq!(rock.color, 0xC0C0C0);
        let comet = CometParams::default();
        assert_eq!(comet.name, "New Comet");
        assert_eq!((comet.perihelion, comet.aphelion), (20.0, 50.0));
        assert_eq!(comet.tail_color, 0x88CCFF);
    }

    #[test]
    fn asteroids_tumble_comets_trail() {
        let mut rand = SmallRng::seed_from_u64(4);
        let rock = AsteroidParams::default().into_orbiter(1.0, &mut rand);
        assert_eq!(rock.spin, Spin::Tumbling);
        assert!(rock.tail.is_none());
        assert_eq!(rock.orbit, Orbit::inclined(25.0, 0.001, 0.1));

        let comet = CometParams::default().into_orbiter(1.0, &mut rand);
        assert_eq!(comet.spin, Spin::Axial);
        assert_eq!(
            comet.tail,
            Some(TailSpec {
                length: 5.0,
                color: 0x88CCFF
            })
        );
    }

    #[test]
    fn random_start_unless_told() {
        let mut rand = SmallRng::seed_from_u64(4);
        let starts: Vec<f64> = (0..20)
            .map(|_| AsteroidParams::default().into_orbiter(1.0, &mut rand).initial_phase)
            .collect();
        assert!(starts.iter().all(|s| *s >= 0.0 && *s < 2.0 * PI));
        assert!(starts.windows(2).any(|w| w[0] != w[1]));

        let pinned = CometParams {
            initial_angle: Some(1.0),
            ..CometParams::default()
        };
        assert_eq!(pinned.into_orbiter(1.0, &mut rand).initial_phase, 1.0);
    }

    #[test]
    fn scale_applies_to_the_tail_too() {
        let mut rand = SmallRng::seed_from_u64(4);
        let comet = CometParams::default().into_orbiter(0.1, &mut rand);
        assert!((comet.body.radius - 0.02).abs() < 1e-12);
        assert!((comet.orbit.aphelion() - 5.0).abs() < 1e-12);
        assert!((comet.tail.map(|t| t.length).unwrap_or(0.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn comets_through_the_sun_stand_still() {
        let mut rand = SmallRng::seed_from_u64(4);
        let comet = CometParams {
            perihelion: -10.0,
            ..CometParams::default()
        }
        .into_orbiter(1.0, &mut rand);
        assert_eq!(comet.orbit, Orbit::Stationary);
    }
}
