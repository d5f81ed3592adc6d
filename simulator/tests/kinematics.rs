use simulator::bodies::{Body, Orbiter, TailSpec};
use simulator::orbit::Orbit;
use simulator::tail::{tail_length, PARTICLE_COUNT};
use simulator::SolarSystem;

use std::f64::consts::PI;

/// Sun, one planet at radius 10 and a moon at 1.5 around it
fn earth_and_moon() -> Vec<Orbiter> {
    vec![
        Orbiter::new(Body::new("Sun", 3.0, 0xFDB813), Orbit::Stationary),
        Orbiter::new(Body::new("Earth", 1.0, 0x3B8CF2), Orbit::circular(10.0, 0.0033))
            .starting_at(0.4),
        Orbiter::new(Body::new("Moon", 0.27, 0xCCCCCC), Orbit::circular(1.5, 0.017))
            .starting_at(2.0)
            .orbiting(1),
    ]
}

fn comet(perihelion: f64, aphelion: f64, rate: f64) -> Orbiter {
    Orbiter::new(
        Body::new("New Comet", 0.2, 0xFFFFFF),
        Orbit::eccentric(perihelion, aphelion, 0.3, rate),
    )
    .with_tail(TailSpec {
        length: 5.0,
        color: 0x88CCFF,
    })
}

fn asteroid(name: &str) -> Orbiter {
    let mut body = Body::new(name, 0.2, 0xC0C0C0);
    body.rotation_rate = 0.005;
    Orbiter::new(body, Orbit::inclined(25.0, 0.001, 0.1)).tumbling()
}

// ==================================================================================
// Orbits
// ==================================================================================

#[test]
fn the_sun_stays_put() {
    let mut system = SolarSystem::with_seed(earth_and_moon(), 1);
    for _ in 0..100 {
        system.update(1.0);
    }
    let sun = system.position_of(0).unwrap();
    assert_eq!(sun.to_vector().length(), 0.0);
    assert!(system.orbit_path(0, 128).is_empty());
}

#[test]
fn planets_keep_their_distance() {
    let mut system = SolarSystem::with_seed(earth_and_moon(), 1);
    for _ in 0..500 {
        system.update(3.0);
        let earth = system.position_of(1).unwrap();
        assert!((earth.to_vector().length() - 10.0).abs() < 1e-9);
    }
}

#[test]
fn phase_advances_by_rate_times_dt() {
    let mut system = SolarSystem::with_seed(earth_and_moon(), 1);
    system.update(2.5);
    assert!((system.phase_of(1).unwrap() - (0.4 + 0.0033 * 2.5)).abs() < 1e-12);
    assert!((system.phase_of(2).unwrap() - (2.0 + 0.017 * 2.5)).abs() < 1e-12);
}

#[test]
fn moons_follow_their_planet() {
    let mut system = SolarSystem::with_seed(earth_and_moon(), 1);
    for _ in 0..100 {
        system.update(1.7);
        let earth = system.position_of(1).unwrap();
        let moon = system.position_of(2).unwrap();
        assert!(((moon - earth).length() - 1.5).abs() < 1e-9);
    }
}

#[test]
fn a_planet_period_cancels_out() {
    let mut system = SolarSystem::with_seed(earth_and_moon(), 1);
    let moon_orbit = Orbit::circular(1.5, 0.017);

    let before = system.position_of(2).unwrap();
    let moon_phase_before = system.phase_of(2).unwrap();

    // exactly one full turn of the planet
    let period = 2.0 * PI / 0.0033;
    system.update(period);

    let after = system.position_of(2).unwrap();
    let moon_phase_after = system.phase_of(2).unwrap();

    let own = moon_orbit.position_at(moon_phase_after) - moon_orbit.position_at(moon_phase_before);
    assert!(((after - before) - own).length() < 1e-6);
}

#[test]
fn comet_sweeps_out_monotonically() {
    let mut system = SolarSystem::with_seed(vec![comet(20.0, 50.0, PI / 1000.0)], 9);
    let mut last = system.position_of(0).unwrap().to_vector().length();
    assert!((last - 20.0).abs() < 1e-9);
    for _ in 0..1000 {
        system.update(1.0);
        let now = system.position_of(0).unwrap().to_vector().length();
        assert!(now >= last - 1e-9, "{} went back to {}", last, now);
        last = now;
    }
    assert!((last - 50.0).abs() < 1e-6);
}

#[test]
fn orbit_paths_follow_the_parent() {
    let mut system = SolarSystem::with_seed(earth_and_moon(), 1);
    system.update(12.0);
    let earth = system.position_of(1).unwrap();
    let path = system.orbit_path(2, 64);
    assert_eq!(path.len(), 65);
    for p in path {
        assert!(((p - earth).length() - 1.5).abs() < 1e-9);
    }
}

// ==================================================================================
// Tails
// ==================================================================================

#[test]
fn comets_get_tails_and_nothing_else_does() {
    let mut bodies = earth_and_moon();
    bodies.push(comet(20.0, 50.0, 0.001));
    let system = SolarSystem::with_seed(bodies, 4);
    assert!(system.tail(1).is_none());
    let tail = system.tail(3).unwrap();
    assert_eq!(tail.particles().len(), PARTICLE_COUNT);
}

#[test]
fn tails_grow_near_the_sun() {
    let mut system = SolarSystem::with_seed(vec![comet(20.0, 50.0, 0.01)], 4);
    system.update(0.0);
    let head = system.position_of(0).unwrap();
    let tail = system.tail(0).unwrap();
    let last = tail.particles().last().unwrap();
    let expected = tail_length(5.0, 20.0, 50.0) * last.ratio;
    // the far end sits about `expected` behind the head, give or take the jitter
    assert!(((last.pos - head).length() - expected).abs() < 0.5);
    // and it's farther from the sun than the head is
    assert!(last.pos.to_vector().length() > head.to_vector().length());
}

// ==================================================================================
// Custom bodies
// ==================================================================================

#[test]
fn removing_keeps_the_order() {
    let mut system = SolarSystem::with_seed(earth_and_moon(), 1);
    let a = system.add_custom(asteroid("A"));
    let b = system.add_custom(comet(20.0, 50.0, 0.001));
    let c = system.add_custom(asteroid("C"));
    assert_eq!(system.custom_bodies(), &[a, b, c]);

    assert!(system.remove_custom(b));
    assert_eq!(system.custom_bodies(), &[a, c]);
    assert!(system.tail(b).is_none());
    assert!(system.position_of(b).is_none());
    assert_eq!(system.len(), 5);
}

#[test]
fn removing_nothing_is_fine() {
    let mut system = SolarSystem::with_seed(earth_and_moon(), 1);
    let a = system.add_custom(asteroid("A"));
    assert!(!system.remove_custom(a + 100));
    // built-in bodies can't be removed this way
    assert!(!system.remove_custom(1));
    assert_eq!(system.custom_bodies(), &[a]);
    assert_eq!(system.len(), 4);
}

#[test]
fn ids_are_never_reused() {
    let mut system = SolarSystem::with_seed(earth_and_moon(), 1);
    let a = system.add_custom(asteroid("A"));
    system.remove_custom(a);
    let b = system.add_custom(asteroid("B"));
    assert_ne!(a, b);
}

#[test]
fn placements_cover_every_body() {
    let mut system = SolarSystem::with_seed(earth_and_moon(), 1);
    system.add_custom(asteroid("A"));
    system.update(1.0);
    let placements = system.placements();
    let ids: Vec<usize> = placements.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![0, 1, 2, 3]);
    // the asteroid tumbles
    let rock = placements[3].rotation;
    assert!((rock.x - 0.005).abs() < 1e-12);
    assert!((rock.y - 0.0035).abs() < 1e-12);
    assert!((rock.z - 0.0025).abs() < 1e-12);
}
