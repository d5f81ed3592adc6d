//! Handles the simulation of the solar system

pub mod bodies;
pub mod orbit;
pub mod tail;

use crate::bodies::{BodyId, BodyState, Orbiter, Rotation};
use crate::tail::Tail;
use euclid::default::Point3D;
use log::debug;
use rand::{rngs::SmallRng, Rng, SeedableRng};

use std::collections::{BTreeMap, HashMap};

pub struct SolarSystem {
    /// Every body that's alive, by ID.
    /// IDs only ever go up, so iterating this goes in order of creation.
    orbiters: BTreeMap<BodyId, Orbiter>,
    /// Phase and spin of every body. Only the SolarSystem touches these.
    states: HashMap<BodyId, BodyState>,
    /// Comet tails, by the ID of the comet.
    tails: HashMap<BodyId, Tail>,
    /// The user-made asteroids and comets, in the order they were added.
    custom: Vec<BodyId>,
    next_id: BodyId,
    /// Seeds the tails of new comets.
    rand: SmallRng,
}

/// Where a body is and how it's turned, this tick.
#[derive(Copy, Clone, Debug)]
pub struct Placement {
    pub id: BodyId,
    pub pos: Point3D<f64>,
    pub rotation: Rotation,
}

impl SolarSystem {
    /// Make a solar system out of the built-in bodies.
    /// They get IDs 0, 1, 2... in order, and `parent`s refer to those.
    pub fn new(orbiters: Vec<Orbiter>) -> Self {
        Self::with_rand(orbiters, SmallRng::from_entropy())
    }

    /// Like `new`, but the comet tails always jitter the same way.
    pub fn with_seed(orbiters: Vec<Orbiter>, seed: u64) -> Self {
        Self::with_rand(orbiters, SmallRng::seed_from_u64(seed))
    }

    fn with_rand(orbiters: Vec<Orbiter>, rand: SmallRng) -> Self {
        let mut system = SolarSystem {
            orbiters: BTreeMap::new(),
            states: HashMap::with_capacity(orbiters.len()),
            tails: HashMap::new(),
            custom: Vec::new(),
            next_id: 0,
            rand,
        };
        for orbiter in orbiters {
            system.insert(orbiter);
        }
        // Get the tails pointing the right way before the first frame
        system.update_tails();
        system
    }

    /// Advance everything by `dt` ticks.
    /// Nothing clamps `dt`, so don't hand it a huge one after the window's been asleep.
    pub fn update(&mut self, dt: f64) {
        for (id, oer) in self.orbiters.iter() {
            if let Some(state) = self.states.get_mut(id) {
                state.update(dt, oer.orbit.rate(), oer.body.rotation_rate);
            }
        }
        self.update_tails();
    }

    fn update_tails(&mut self) {
        let heads: Vec<(BodyId, Point3D<f64>, f64)> = self
            .tails
            .keys()
            .filter_map(|&id| {
                let aphelion = self.orbiters.get(&id)?.orbit.aphelion();
                Some((id, self.position_of(id)?, aphelion))
            })
            .collect();
        for (id, head, aphelion) in heads {
            if let Some(tail) = self.tails.get_mut(&id) {
                tail.update(head, aphelion);
            }
        }
    }

    fn insert(&mut self, oer: Orbiter) -> BodyId {
        let id = self.next_id;
        self.next_id += 1;
        if let Some(spec) = oer.tail {
            let seed = self.rand.gen();
            self.tails.insert(id, Tail::new(spec, seed));
        }
        self.states.insert(id, BodyState::new(oer.initial_phase));
        debug!("Added {} as body #{}", oer.body.name, id);
        self.orbiters.insert(id, oer);
        id
    }

    /// Add a user-made asteroid or comet. Returns its brand new ID.
    pub fn add_custom(&mut self, oer: Orbiter) -> BodyId {
        let id = self.insert(oer);
        self.custom.push(id);
        if let Some(head) = self.position_of(id) {
            let aphelion = self.orbiters[&id].orbit.aphelion();
            if let Some(tail) = self.tails.get_mut(&id) {
                tail.update(head, aphelion);
            }
        }
        id
    }

    /// Remove a user-made body.
    /// Returns whether anything was removed; IDs that aren't custom bodies are left alone.
    pub fn remove_custom(&mut self, id: BodyId) -> bool {
        match self.custom.iter().position(|&custom_id| custom_id == id) {
            Some(idx) => {
                self.custom.remove(idx);
                self.states.remove(&id);
                self.tails.remove(&id);
                if let Some(oer) = self.orbiters.remove(&id) {
                    debug!("Removed {} (body #{})", oer.body.name, id);
                }
                true
            }
            None => false,
        }
    }

    /// IDs of the user-made bodies in the order they were added.
    pub fn custom_bodies(&self) -> &[BodyId] {
        &self.custom
    }

    pub fn orbiter(&self, id: BodyId) -> Option<&Orbiter> {
        self.orbiters.get(&id)
    }

    /// Every live body, in order of creation.
    pub fn orbiters(&self) -> impl Iterator<Item = (BodyId, &Orbiter)> {
        self.orbiters.iter().map(|(&id, oer)| (id, oer))
    }

    pub fn len(&self) -> usize {
        self.orbiters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orbiters.is_empty()
    }

    /// The unwrapped phase of a body.
    pub fn phase_of(&self, id: BodyId) -> Option<f64> {
        self.states.get(&id).map(|s| s.phase)
    }

    /// Where the body's parent is right now, or the origin if it has none.
    /// Only the parent's own orbit counts; grandparents are ignored.
    fn origin_of(&self, oer: &Orbiter) -> Point3D<f64> {
        oer.parent
            .and_then(|parent_id| {
                let parent = self.orbiters.get(&parent_id)?;
                let parent_phase = self.states.get(&parent_id)?.phase;
                Some(parent.orbit.position_at(parent_phase))
            })
            .unwrap_or_else(Point3D::origin)
    }

    /// World position of a body.
    pub fn position_of(&self, id: BodyId) -> Option<Point3D<f64>> {
        let oer = self.orbiters.get(&id)?;
        let state = self.states.get(&id)?;
        let local = oer.orbit.position_at(state.phase);
        Some(self.origin_of(oer) + local.to_vector())
    }

    /// Where everything is and how it's turned.
    pub fn placements(&self) -> Vec<Placement> {
        self.orbiters
            .iter()
            .filter_map(|(&id, oer)| {
                let state = self.states.get(&id)?;
                Some(Placement {
                    id,
                    pos: self.position_of(id)?,
                    rotation: state.rotation(&oer.body, oer.spin),
                })
            })
            .collect()
    }

    /// A comet's tail. None for everything that isn't a comet.
    pub fn tail(&self, id: BodyId) -> Option<&Tail> {
        self.tails.get(&id)
    }

    /// The orbit of a body as a loop of world-space points,
    /// centered on wherever its parent is right now.
    pub fn orbit_path(&self, id: BodyId, segments: usize) -> Vec<Point3D<f64>> {
        match self.orbiters.get(&id) {
            Some(oer) => {
                let origin = self.origin_of(oer).to_vector();
                oer.orbit
                    .path(segments)
                    .into_iter()
                    .map(|p| p + origin)
                    .collect()
            }
            None => Vec::new(),
        }
    }
}
