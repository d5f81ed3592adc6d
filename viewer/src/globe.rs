//! Wraps a flat map texture around a ball, the way it looks from the camera.

use euclid::default::Vector3D;
use image::{Rgba, RgbaImage};
use std::f64::consts::PI;

/// How bright the night side is.
const AMBIENT: f64 = 0.25;

/// Render a `size` by `size` picture of a ball wearing `texture`.
/// `spin` turns the map around the ball's axis and `tilt` leans the axis over.
/// `light` is the view-space direction toward the sun; None lights it evenly.
/// Everything outside the ball is transparent.
pub fn globe(
    texture: &RgbaImage,
    size: u32,
    spin: f64,
    tilt: f64,
    light: Option<Vector3D<f64>>,
) -> RgbaImage {
    let mut out = RgbaImage::new(size, size);
    let (tw, th) = texture.dimensions();
    if tw == 0 || th == 0 {
        return out;
    }
    let half = size as f64 / 2.0;
    let (st, ct) = tilt.sin_cos();

    for (px, py, pixel) in out.enumerate_pixels_mut() {
        let nx = (px as f64 + 0.5 - half) / half;
        let ny = (half - py as f64 - 0.5) / half;
        let rr = nx * nx + ny * ny;
        if rr > 1.0 {
            continue;
        }
        // Pointing at the viewer
        let nz = (1.0 - rr).sqrt();

        // Undo the tilt to find where on the map this is
        let (mx, my) = (nx * ct + ny * st, -nx * st + ny * ct);
        let lon = mx.atan2(nz) + spin;
        let lat = my.max(-1.0).min(1.0).asin();
        let u = (lon / (2.0 * PI)).rem_euclid(1.0);
        let v = 0.5 - lat / PI;
        let tx = ((u * tw as f64) as u32).min(tw - 1);
        let ty = ((v * th as f64) as u32).min(th - 1);
        let Rgba([r, g, b, a]) = *texture.get_pixel(tx, ty);

        let shade = match light {
            // View-space z points away from the viewer, the normal points toward them
            Some(l) => AMBIENT + (1.0 - AMBIENT) * (nx * l.x + ny * l.y - nz * l.z).max(0.0),
            None => 1.0,
        };
        let lit = |c: u8| (c as f64 * shade).round().min(255.0) as u8;
        *pixel = Rgba([lit(r), lit(g), lit(b), a]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(color: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(64, 32, Rgba(color))
    }

    #[test]
    fn round_and_see_through_outside() {
        let ball = globe(&flat([200, 10, 10, 255]), 32, 0.0, 0.0, None);
        assert_eq!(ball.dimensions(), (32, 32));
        assert_eq!(ball.get_pixel(0, 0).0[3], 0);
        assert_eq!(ball.get_pixel(31, 31).0[3], 0);
        assert_eq!(ball.get_pixel(16, 16).0, [200, 10, 10, 255]);
    }

    #[test]
    fn dark_side_is_dim() {
        let tex = flat([200, 200, 200, 255]);
        // Sun off to the right
        let ball = globe(&tex, 32, 0.0, 0.0, Some(Vector3D::new(1.0, 0.0, 0.0)));
        let lit = ball.get_pixel(28, 16).0[0];
        let dark = ball.get_pixel(3, 16).0[0];
        assert!(lit > dark);
        assert_eq!(dark, (200.0 * AMBIENT).round() as u8);
    }

    #[test]
    fn spinning_moves_the_map() {
        // Left half red, right half blue
        let mut tex = flat([255, 0, 0, 255]);
        for y in 0..32 {
            for x in 32..64 {
                tex.put_pixel(x, y, Rgba([0, 0, 255, 255]));
            }
        }
        let a = globe(&tex, 16, 0.1, 0.0, None);
        let b = globe(&tex, 16, 0.1 + PI, 0.0, None);
        assert_ne!(a.get_pixel(8, 8), b.get_pixel(8, 8));
    }

    #[test]
    fn layers_keep_their_alpha() {
        let clouds = flat([255, 255, 255, 80]);
        let ball = globe(&clouds, 16, 0.0, 0.3, None);
        assert_eq!(ball.get_pixel(8, 8).0[3], 80);
    }
}
