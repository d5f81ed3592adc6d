//! Procedural surface textures for every kind of body.
//!
//! Every call rolls new dice, so painting the same planet twice gives two
//! different pictures. Keep the result around if you want it to stay put.
//! Nothing in here ever fails outward: if a texture can't be painted you get
//! a flat, slightly noisy one in the body's usual color instead.

pub mod canvas;
mod rules;

use canvas::{Canvas, Paint};

use image::RgbaImage;
use log::warn;
use rand::Rng;
use thiserror::Error;

use std::str::FromStr;

/// Size of the fallback texture when the asked-for size is no good.
pub const FALLBACK_SIZE: u32 = 256;
/// Anything bigger than this on a side is refused.
pub const MAX_SIZE: u32 = 8192;

/// The kinds of texture we know how to paint.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BodyKind {
    Sun,
    Mercury,
    Venus,
    Earth,
    /// The see-through cloud layer that goes over Earth
    EarthClouds,
    Mars,
    Jupiter,
    Saturn,
    /// The see-through rings, meant for a flat ring mesh
    SaturnRings,
    Uranus,
    Neptune,
    Moon,
    /// Anything else, painted in the given 0xRRGGBB color
    Other(u32),
}

impl BodyKind {
    /// The flat color each body falls back to.
    pub fn catalog_color(&self) -> u32 {
        use BodyKind::*;
        match *self {
            Sun => 0xFDB813,
            Mercury => 0xB7B7B7,
            Venus => 0xE6CA9A,
            Earth => 0x3B8CF2,
            Mars => 0xB22E1C,
            Jupiter => 0xB5975A,
            Saturn => 0xE9D496,
            Uranus => 0xCAEAE8,
            Neptune => 0x3D58E5,
            Moon => 0xCCCCCC,
            EarthClouds | SaturnRings => 0xFFFFFF,
            Other(color) => color,
        }
    }

    /// Whether the texture is supposed to have see-through parts.
    pub fn is_layer(&self) -> bool {
        match self {
            BodyKind::EarthClouds | BodyKind::SaturnRings => true,
            _ => false,
        }
    }
}

impl FromStr for BodyKind {
    type Err = SynthesisError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        use BodyKind::*;
        Ok(match tag {
            "sun" => Sun,
            "mercury" => Mercury,
            "venus" => Venus,
            "earth" => Earth,
            "earthClouds" => EarthClouds,
            "mars" => Mars,
            "jupiter" => Jupiter,
            "saturn" => Saturn,
            "saturnRings" => SaturnRings,
            "uranus" => Uranus,
            "neptune" => Neptune,
            "moon" => Moon,
            _ => return Err(SynthesisError::UnknownBody(tag.to_string())),
        })
    }
}

/// Why a texture couldn't be painted.
#[derive(Error, Debug, PartialEq)]
pub enum SynthesisError {
    #[error("no texture rule for a body called {0:?}")]
    UnknownBody(String),
    #[error("can't paint a {width}x{height} texture")]
    BadSize { width: u32, height: u32 },
}

/// Paint the texture for a body tag like "earth" or "saturnRings".
/// Unknown tags get the fallback in `color`, the body's own 0xRRGGBB.
pub fn synthesize<R: Rng + ?Sized>(
    tag: &str,
    color: u32,
    width: u32,
    height: u32,
    rand: &mut R,
) -> RgbaImage {
    match tag.parse::<BodyKind>() {
        Ok(kind) => synthesize_kind(kind, width, height, rand),
        Err(why) => {
            warn!("Using a plain texture for {:?}: {}", tag, why);
            fallback(color, width, height, rand)
        }
    }
}

/// Paint the texture for a kind of body.
pub fn synthesize_kind<R: Rng + ?Sized>(
    kind: BodyKind,
    width: u32,
    height: u32,
    rand: &mut R,
) -> RgbaImage {
    match try_synthesize(kind, width, height, rand) {
        Ok(img) => img,
        Err(why) => {
            warn!("Using a plain texture for {:?}: {}", kind, why);
            fallback(kind.catalog_color(), width, height, rand)
        }
    }
}

/// Like `synthesize_kind` but tells you when it didn't work instead of falling back.
pub fn try_synthesize<R: Rng + ?Sized>(
    kind: BodyKind,
    width: u32,
    height: u32,
    rand: &mut R,
) -> Result<RgbaImage, SynthesisError> {
    if !usable(width, height) {
        return Err(SynthesisError::BadSize { width, height });
    }
    let mut canvas = Canvas::new(width, height);
    rules::paint(kind, &mut canvas, rand);
    Ok(canvas.into_image())
}

fn usable(width: u32, height: u32) -> bool {
    width > 0 && height > 0 && width <= MAX_SIZE && height <= MAX_SIZE
}

/// A flat color with a little bit of light noise on every pixel.
/// Falls back to FALLBACK_SIZE if the size doesn't work either.
pub fn fallback<R: Rng + ?Sized>(color: u32, width: u32, height: u32, rand: &mut R) -> RgbaImage {
    let (width, height) = if usable(width, height) {
        (width, height)
    } else {
        (FALLBACK_SIZE, FALLBACK_SIZE)
    };
    let base = Paint::hex(color);
    let white = Paint::hex(0xFFFFFF);
    let mut img = RgbaImage::new(width, height);
    for px in img.pixels_mut() {
        let speck = base.lerp(white, rand.gen::<f32>() * 0.06);
        let q = |c: f32| (c.max(0.0).min(1.0) * 255.0).round() as u8;
        *px = image::Rgba([q(speck.r), q(speck.g), q(speck.b), 255]);
    }
    img
}

/// The soft round dot every star and galaxy point is drawn with.
/// White, fading out from the middle.
pub fn point_sprite(size: u32) -> RgbaImage {
    let mut sprite = Canvas::new(size, size);
    let center = size as f64 / 2.0;
    let radius = (center - 1.0).max(0.5);
    let white = |a: f32| Paint::rgba(255, 255, 255, a);
    let stops = [(0.0, white(1.0)), (0.8, white(0.3)), (1.0, white(0.0))];
    for y in 0..size {
        for x in 0..size {
            let dx = x as f64 + 0.5 - center;
            let dy = y as f64 + 0.5 - center;
            let d = (dx * dx + dy * dy).sqrt();
            if d <= radius {
                sprite.blend(
                    x,
                    y,
                    canvas::sample(&stops, (d / radius) as f32),
                    canvas::Blend::Over,
                );
            }
        }
    }
    sprite.into_image()
}
