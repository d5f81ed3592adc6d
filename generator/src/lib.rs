//! Things that get made once and then looked at:
//! star fields, planet textures and asteroid shapes.
//!
//! None of these hold any state of their own. Hand them an RNG,
//! get a fresh result back. Seed the RNG if you need the same result twice.

pub mod field;
pub mod shape;
pub mod texture;

pub use field::{Distribution, FieldPoint, GalaxyParams, StarfieldParams};
pub use texture::{synthesize, synthesize_kind, BodyKind};
