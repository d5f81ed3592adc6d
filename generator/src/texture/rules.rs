//! What each body looks like.
//! All the sizes in here are for a 512 pixel wide texture and get scaled to fit.

use super::canvas::{Blend, Canvas, Paint};
use super::BodyKind;

use rand::Rng;
use std::f64::consts::PI;

/// Paint `kind` onto a fresh canvas.
pub(super) fn paint<R: Rng + ?Sized>(kind: BodyKind, canvas: &mut Canvas, rand: &mut R) {
    let scale = canvas.width() as f64 / 512.0;
    let w = canvas.width() as f64;
    let h = canvas.height() as f64;

    match kind {
        BodyKind::Sun => {
            canvas.radial_fill(
                w / 2.0,
                h / 2.0,
                w / 2.0,
                &[
                    (0.0, Paint::hex(0xFFF3B0)),
                    (0.5, Paint::hex(0xFDB813)),
                    (1.0, Paint::hex(0xFF7B00)),
                ],
            );
            // flares
            for _ in 0..50 {
                let (x, y) = (rand.gen::<f64>() * w, rand.gen::<f64>() * h);
                let radius = (rand.gen::<f64>() * 40.0 + 10.0) * scale;
                canvas.soft_disc(
                    x,
                    y,
                    radius,
                    Paint::rgba(255, 255, 255, 0.8),
                    Paint::rgba(255, 200, 0, 0.0),
                    Blend::Add,
                );
            }
        }
        BodyKind::Mercury => {
            canvas.fill(Paint::hex(0xB7B7B7));
            craters(canvas, rand, 2000, 1.0, 5.0, (80, 80, 80), 0.2, 0.5, scale);
        }
        BodyKind::Venus => {
            canvas.fill(Paint::hex(0xE6CA9A));
            // swirly clouds
            for _ in 0..10 {
                let (x, y) = (rand.gen::<f64>() * w, rand.gen::<f64>() * h);
                let radius = (rand.gen::<f64>() * 100.0 + 50.0) * scale;
                canvas.soft_disc(
                    x,
                    y,
                    radius,
                    Paint::rgba(255, 215, 155, 0.7),
                    Paint::rgba(230, 202, 154, 0.0),
                    Blend::Over,
                );
            }
        }
        BodyKind::Earth => {
            canvas.fill(Paint::hex(0x2756B2));
            for _ in 0..7 {
                continent(canvas, rand, Paint::hex(0x4EA64E), scale);
            }
            polar_caps(canvas, Paint::hex(0xFFFFFF));
        }
        BodyKind::EarthClouds => {
            canvas.clear();
            for _ in 0..50 {
                let (x, y) = (rand.gen::<f64>() * w, rand.gen::<f64>() * h);
                let radius = (rand.gen::<f64>() * 50.0 + 20.0) * scale;
                canvas.soft_disc(
                    x,
                    y,
                    radius,
                    Paint::rgba(255, 255, 255, 0.8),
                    Paint::rgba(255, 255, 255, 0.0),
                    Blend::Over,
                );
            }
        }
        BodyKind::Mars => {
            canvas.fill(Paint::hex(0xB22E1C));
            // dusty patches
            craters(canvas, rand, 1000, 2.0, 10.0, (170, 60, 30), 0.2, 0.5, scale);
            polar_caps(canvas, Paint::hex(0xFFFFFF));
        }
        BodyKind::Jupiter => {
            canvas.banded_fill(&[
                (0.0, Paint::hex(0xB5975A)),
                (0.2, Paint::hex(0xD9C7A0)),
                (0.3, Paint::hex(0xB5975A)),
                (0.5, Paint::hex(0xA97A47)),
                (0.7, Paint::hex(0xB5975A)),
                (0.8, Paint::hex(0xD9C7A0)),
                (1.0, Paint::hex(0xB5975A)),
            ]);
            // the big red spot
            canvas.ellipse(w * 0.7, h * 0.4, w * 0.15, h * 0.08, Paint::hex(0xCF6B42));
        }
        BodyKind::Saturn => {
            canvas.banded_fill(&[
                (0.0, Paint::hex(0xE9D496)),
                (0.2, Paint::hex(0xF0E6B0)),
                (0.3, Paint::hex(0xE9D496)),
                (0.5, Paint::hex(0xD9BC69)),
                (0.7, Paint::hex(0xE9D496)),
                (0.8, Paint::hex(0xF0E6B0)),
                (1.0, Paint::hex(0xE9D496)),
            ]);
        }
        BodyKind::SaturnRings => {
            canvas.clear();
            for row in 0..canvas.height() {
                let y = row as f64;
                let opacity = rand.gen::<f32>() * 0.3 + 0.7;
                canvas.fill_rect(0.0, y, w, 1.0, Paint::rgba(230, 220, 180, opacity));
                // every now and then a dark gap
                if rand.gen::<f64>() < 0.05 {
                    canvas.fill_rect(0.0, y, w, 1.0, Paint::rgba(0, 0, 0, 0.7));
                }
            }
        }
        BodyKind::Uranus => {
            canvas.fill(Paint::hex(0xCAEAE8));
            bands(canvas, rand, 20, 5.0, 20.0, Paint::rgba(180, 240, 235, 0.3), scale);
        }
        BodyKind::Neptune => {
            canvas.fill(Paint::hex(0x3D58E5));
            // the great dark spot
            canvas.disc(w * 0.3, h * 0.6, w * 0.1, Paint::hex(0x20379C));
            bands(canvas, rand, 30, 3.0, 15.0, Paint::rgba(100, 150, 255, 0.3), scale);
        }
        BodyKind::Moon => {
            canvas.fill(Paint::hex(0xCCCCCC));
            craters(canvas, rand, 1000, 1.0, 8.0, (90, 90, 90), 0.2, 0.6, scale);
        }
        BodyKind::Other(color) => {
            canvas.fill(Paint::hex(color));
            // a little noise
            for _ in 0..1000 {
                let (x, y) = (rand.gen::<f64>() * w, rand.gen::<f64>() * h);
                let radius = (rand.gen::<f64>() * 2.0 + 0.5) * scale.max(1.0);
                let alpha = rand.gen::<f32>() * 0.2;
                canvas.disc(x, y, radius, Paint::rgba(255, 255, 255, alpha));
            }
        }
    }
}

/// Scatter `count` round spots of random size and random opacity.
#[allow(clippy::too_many_arguments)]
fn craters<R: Rng + ?Sized>(
    canvas: &mut Canvas,
    rand: &mut R,
    count: usize,
    min_radius: f64,
    radius_spread: f64,
    (r, g, b): (u8, u8, u8),
    min_alpha: f32,
    alpha_spread: f32,
    scale: f64,
) {
    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    for _ in 0..count {
        let (x, y) = (rand.gen::<f64>() * w, rand.gen::<f64>() * h);
        let radius = (rand.gen::<f64>() * radius_spread + min_radius) * scale;
        let alpha = rand.gen::<f32>() * alpha_spread + min_alpha;
        canvas.disc(x, y, radius, Paint::rgba(r, g, b, alpha));
    }
}

/// Stripes all the way across, at random heights.
fn bands<R: Rng + ?Sized>(
    canvas: &mut Canvas,
    rand: &mut R,
    count: usize,
    min_height: f64,
    height_spread: f64,
    paint: Paint,
    scale: f64,
) {
    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    for _ in 0..count {
        let y = rand.gen::<f64>() * h;
        let band = (rand.gen::<f64>() * height_spread + min_height) * scale;
        canvas.fill_rect(0.0, y, w, band, paint);
    }
}

/// A lumpy blob of land.
fn continent<R: Rng + ?Sized>(canvas: &mut Canvas, rand: &mut R, paint: Paint, scale: f64) {
    let cx = rand.gen::<f64>() * canvas.width() as f64;
    let cy = rand.gen::<f64>() * canvas.height() as f64;
    let corners: usize = rand.gen_range(10, 20);
    let max_radius = (rand.gen::<f64>() * 150.0 + 50.0) * scale;

    let outline: Vec<(f64, f64)> = (0..corners)
        .map(|i| {
            let angle = i as f64 / corners as f64 * 2.0 * PI;
            let radius = rand.gen::<f64>() * max_radius + max_radius / 2.0;
            (cx + angle.cos() * radius, cy + angle.sin() * radius)
        })
        .collect();
    canvas.polygon(&outline, paint);
}

/// Ice on the top and bottom tenth.
fn polar_caps(canvas: &mut Canvas, paint: Paint) {
    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    canvas.fill_rect(0.0, 0.0, w, 0.1 * h, paint);
    canvas.fill_rect(0.0, 0.9 * h, w, 0.1 * h, paint);
}
