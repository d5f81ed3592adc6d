use loader::{load_with, LoadError};
use rand::{rngs::SmallRng, SeedableRng};
use simulator::bodies::Spin;
use simulator::SolarSystem;

fn load(contents: &str) -> Result<loader::Scene, LoadError> {
    load_with(contents, &mut SmallRng::seed_from_u64(11))
}

// ==============================================
// Defaults
// ==============================================

#[test]
fn empty_scene_is_the_whole_catalog() {
    let scene = load("{}").unwrap();
    assert_eq!(scene.scale, 0.1);
    assert_eq!(scene.position, [3.0, 0.0, 5.0]);
    assert_eq!(scene.bodies.len(), 10);
    assert_eq!(scene.galaxy.count, 10_000);
    assert_eq!(scene.galaxy.arms, 2);
    assert_eq!(scene.stars.count, 5000);
    assert!(scene.asteroids.is_empty());
    assert!(scene.comets.is_empty());
    // scaled down
    assert!((scene.bodies[0].body.radius - 0.3).abs() < 1e-12);
}

#[test]
fn the_system_can_sit_anywhere() {
    let scene = load("{ position: [-4, 0.5, 2] }").unwrap();
    assert_eq!(scene.position, [-4.0, 0.5, 2.0]);
    // the offset isn't scaled along with the bodies
    assert_eq!(scene.scale, 0.1);
}

#[test]
fn partial_settings_keep_the_rest() {
    let scene = load("{ galaxy: { arms: 4 }, stars: { radius: 50 } }").unwrap();
    assert_eq!(scene.galaxy.arms, 4);
    assert_eq!(scene.galaxy.radius, 10.0);
    assert_eq!(scene.stars.radius, 50.0);
    assert_eq!(scene.stars.count, 5000);
}

// ==============================================
// Bodies
// ==============================================

#[test]
fn prefabs_and_custom_bodies_mix() {
    let scene = load(
        r##"{
            scale: 1,
            bodies: [
                "sun",
                "earth",
                { prefab: "mars", moons: [
                    { name: "Phobos", size: 0.05, color: "#8B7355", orbit_radius: 0.8, orbit_speed: 0.03 },
                ] },
                { name: "Vulcan", size: 0.3, color: 0xFF4400, orbit_radius: 3, orbit_speed: 0.02 },
            ],
        }"##,
    )
    .unwrap();
    let names: Vec<&str> = scene.bodies.iter().map(|o| o.body.name.as_str()).collect();
    assert_eq!(names, vec!["Sun", "Earth", "Moon", "Mars", "Phobos", "Vulcan"]);
    assert_eq!(scene.bodies[2].parent, Some(1));
    assert_eq!(scene.bodies[4].parent, Some(3));
    assert_eq!(scene.bodies[4].body.color, 0x8B7355);
    assert_eq!(scene.bodies[5].body.color, 0xFF4400);
    assert_eq!(scene.bodies[5].orbit.semi_major_axis(), 3.0);
}

#[test]
fn moons_cant_have_moons() {
    let result = load(
        r##"{ bodies: [ { prefab: "earth", moons: [
            { name: "Moonmoon", size: 0.1, color: "#FFFFFF", orbit_radius: 1, moons: ["moon"] },
        ] } ] }"##,
    );
    match result {
        Err(LoadError::MoonWithMoons(name)) => assert_eq!(name, "Moonmoon"),
        other => panic!("expected a moon with moons, got {:?}", other),
    }
}

#[test]
fn unknown_moons_are_an_error_too() {
    let result = load(r#"{ bodies: [ { prefab: "jupiter", moons: ["io"] } ] }"#);
    assert!(matches!(result, Err(LoadError::UnknownPrefab(ref name)) if name == "io"));
}

#[test]
fn bad_colors_dont_load() {
    let result = load(r#"{ comets: [ { tail_color: "blue" } ] }"#);
    assert!(matches!(result, Err(LoadError::Parse(_))));
}

// ==============================================
// Custom bodies and belts
// ==============================================

#[test]
fn custom_bodies_fill_in_defaults() {
    let scene = load(
        r##"{
            asteroids: [ { name: "Ceres", orbit_radius: 28 } ],
            comets: [ { name: "Halley", tail_color: "#FFFFFF" } ],
        }"##,
    )
    .unwrap();
    let ceres = &scene.asteroids[0];
    assert_eq!(ceres.name, "Ceres");
    assert_eq!(ceres.orbit_radius, 28.0);
    assert_eq!(ceres.size, 0.2);
    let halley = &scene.comets[0];
    assert_eq!(halley.tail_color, 0xFFFFFF);
    assert_eq!(halley.aphelion, 50.0);
}

#[test]
fn belts_end_up_with_the_built_ins() {
    let scene = load(
        r#"{
            scale: 1,
            bodies: ["sun"],
            asteroid_belts: [ { count: 12, min_orbit: 17, max_orbit: 20, seed: 3 } ],
        }"#,
    )
    .unwrap();
    assert_eq!(scene.bodies.len(), 13);
    assert!(scene.bodies[1..].iter().all(|o| o.spin == Spin::Tumbling));
}

#[test]
fn a_loaded_scene_runs() {
    let scene = load(
        r#"{
            bodies: ["sun", "earth"],
            comets: [ { name: "Halley" } ],
            asteroids: [ {}, {} ],
        }"#,
    )
    .unwrap();
    let mut rand = SmallRng::seed_from_u64(0);
    let mut system = SolarSystem::with_seed(scene.bodies, 5);
    for comet in scene.comets.iter() {
        system.add_custom(comet.into_orbiter(scene.scale, &mut rand));
    }
    for rock in scene.asteroids.iter() {
        system.add_custom(rock.into_orbiter(scene.scale, &mut rand));
    }
    assert_eq!(system.custom_bodies().len(), 3);
    assert!(system.tail(system.custom_bodies()[0]).is_some());
    for _ in 0..100 {
        system.update(1.0);
    }
    assert!(system
        .placements()
        .iter()
        .all(|p| p.pos.x.is_finite() && p.pos.y.is_finite() && p.pos.z.is_finite()));
}

// ==============================================
// The shipped scenes
// ==============================================

#[test]
fn shipped_scenes_load() {
    let default = load(include_str!("../../systems/default.json5")).unwrap();
    // 10 catalog bodies and a 60 rock belt
    assert_eq!(default.bodies.len(), 70);
    assert_eq!(default.asteroids[0].name, "Ceres");
    assert!(!default.asteroids[0].irregular);

    let inner = load(include_str!("../../systems/inner.json5")).unwrap();
    let names: Vec<&str> = inner.bodies.iter().map(|o| o.body.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Sun", "Mercury", "Venus", "Earth", "Moon", "Mars", "Phobos", "Deimos", "Vulcan"]
    );
    assert_eq!(inner.bodies[7].body.color, 0x9C8E7E);
    assert_eq!(inner.galaxy.arms, 3);
    assert_eq!(inner.galaxy.radius, 10.0);
    assert_eq!(inner.position, [-6.0, 0.0, 2.0]);
}
