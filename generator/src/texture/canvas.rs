//! A tiny software canvas, just enough to paint planets with.
//! Shapes cover a pixel when the pixel's center is inside them.

use image::{Rgba, RgbaImage};

/// A color with straight (not premultiplied) alpha, every channel in [0, 1].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Paint {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Paint {
    pub const TRANSPARENT: Paint = Paint {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// An opaque color from 0xRRGGBB
    pub fn hex(color: u32) -> Self {
        Self::rgba(
            (color >> 16) as u8,
            (color >> 8) as u8,
            color as u8,
            1.0,
        )
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a.max(0.0).min(1.0),
        }
    }

    pub fn lerp(self, other: Paint, t: f32) -> Self {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    fn from_pixel(px: &Rgba<u8>) -> Self {
        Self::rgba(px[0], px[1], px[2], px[3] as f32 / 255.0)
    }

    fn to_pixel(self) -> Rgba<u8> {
        let q = |c: f32| (c.max(0.0).min(1.0) * 255.0).round() as u8;
        Rgba([q(self.r), q(self.g), q(self.b), q(self.a)])
    }
}

/// How a new color lands on what's already there.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Blend {
    /// Normal painting: the new color covers the old one by its alpha.
    Over,
    /// Light adds up. Good for glows.
    Add,
}

/// A list of (offset, color) pairs, offsets going up from 0 to 1.
pub type Stops<'a> = &'a [(f32, Paint)];

/// The color of a gradient at `t`. Past the ends it sticks to the end colors.
pub fn sample(stops: Stops, t: f32) -> Paint {
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Paint::TRANSPARENT,
    };
    if t <= first.0 {
        return first.1;
    }
    for pair in stops.windows(2) {
        let (t0, c0) = pair[0];
        let (t1, c1) = pair[1];
        if t <= t1 {
            let span = t1 - t0;
            return if span > 0.0 {
                c0.lerp(c1, (t - t0) / span)
            } else {
                c1
            };
        }
    }
    last.1
}

pub struct Canvas {
    img: RgbaImage,
}

impl Canvas {
    /// A fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            img: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    pub fn into_image(self) -> RgbaImage {
        self.img
    }

    /// Replace every pixel with `paint`. No blending.
    pub fn fill(&mut self, paint: Paint) {
        let px = paint.to_pixel();
        for p in self.img.pixels_mut() {
            *p = px;
        }
    }

    pub fn clear(&mut self) {
        self.fill(Paint::TRANSPARENT);
    }

    /// Paint one pixel.
    pub fn blend(&mut self, x: u32, y: u32, paint: Paint, mode: Blend) {
        if x >= self.width() || y >= self.height() || paint.a <= 0.0 {
            return;
        }
        let px = self.img.get_pixel_mut(x, y);
        let dst = Paint::from_pixel(px);
        let sa = paint.a;
        let out = match mode {
            Blend::Over => {
                let oa = sa + dst.a * (1.0 - sa);
                if oa <= 0.0 {
                    Paint::TRANSPARENT
                } else {
                    let mix = |s: f32, d: f32| (s * sa + d * dst.a * (1.0 - sa)) / oa;
                    Paint {
                        r: mix(paint.r, dst.r),
                        g: mix(paint.g, dst.g),
                        b: mix(paint.b, dst.b),
                        a: oa,
                    }
                }
            }
            Blend::Add => Paint {
                r: dst.r + paint.r * sa,
                g: dst.g + paint.g * sa,
                b: dst.b + paint.b * sa,
                a: dst.a + sa,
            },
        };
        *px = out.to_pixel();
    }

    /// The pixels whose centers might be inside the box, clamped to the canvas.
    fn span(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> (u32, u32, u32, u32) {
        let clamp_x = |v: f64| v.max(0.0).min(self.width() as f64) as u32;
        let clamp_y = |v: f64| v.max(0.0).min(self.height() as f64) as u32;
        (
            clamp_x((x0 - 0.5).ceil()),
            clamp_y((y0 - 0.5).ceil()),
            clamp_x((x1 - 0.5).floor() + 1.0),
            clamp_y((y1 - 0.5).floor() + 1.0),
        )
    }

    pub fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, paint: Paint) {
        let (x0, y0, x1, y1) = self.span(x, y, x + w, y + h);
        for py in y0..y1 {
            for px in x0..x1 {
                // the span rounds outward, check the edges properly
                let (cx, cy) = (px as f64 + 0.5, py as f64 + 0.5);
                if cx >= x && cx < x + w && cy >= y && cy < y + h {
                    self.blend(px, py, paint, Blend::Over);
                }
            }
        }
    }

    /// Every pixel gets a color by how far it is from (cx, cy), out to `radius`.
    /// Pixels farther away get the last stop.
    pub fn radial_fill(&mut self, cx: f64, cy: f64, radius: f64, stops: Stops) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                let t = if radius > 0.0 {
                    (distance(x, y, cx, cy) / radius) as f32
                } else {
                    1.0
                };
                self.blend(x, y, sample(stops, t), Blend::Over);
            }
        }
    }

    /// Horizontal bands: every row gets a color by how far down the canvas it is.
    pub fn banded_fill(&mut self, stops: Stops) {
        let height = self.height() as f32;
        for y in 0..self.height() {
            let paint = sample(stops, (y as f32 + 0.5) / height);
            for x in 0..self.width() {
                self.blend(x, y, paint, Blend::Over);
            }
        }
    }

    /// A disc fading from `inner` at the center to `outer` at the rim.
    pub fn soft_disc(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        inner: Paint,
        outer: Paint,
        mode: Blend,
    ) {
        if radius <= 0.0 {
            return;
        }
        let (x0, y0, x1, y1) = self.span(cx - radius, cy - radius, cx + radius, cy + radius);
        for y in y0..y1 {
            for x in x0..x1 {
                let d = distance(x, y, cx, cy);
                if d <= radius {
                    self.blend(x, y, inner.lerp(outer, (d / radius) as f32), mode);
                }
            }
        }
    }

    pub fn disc(&mut self, cx: f64, cy: f64, radius: f64, paint: Paint) {
        self.ellipse(cx, cy, radius, radius, paint);
    }

    pub fn ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, paint: Paint) {
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let (x0, y0, x1, y1) = self.span(cx - rx, cy - ry, cx + rx, cy + ry);
        for y in y0..y1 {
            for x in x0..x1 {
                let dx = (x as f64 + 0.5 - cx) / rx;
                let dy = (y as f64 + 0.5 - cy) / ry;
                if dx * dx + dy * dy <= 1.0 {
                    self.blend(x, y, paint, Blend::Over);
                }
            }
        }
    }

    /// A closed polygon, filled with the even-odd rule.
    pub fn polygon(&mut self, points: &[(f64, f64)], paint: Paint) {
        if points.len() < 3 {
            return;
        }
        let top = points.iter().map(|p| p.1).fold(std::f64::INFINITY, f64::min);
        let bottom = points.iter().map(|p| p.1).fold(std::f64::NEG_INFINITY, f64::max);
        let (_, y0, _, y1) = self.span(0.0, top, 0.0, bottom);

        let mut crossings: Vec<f64> = Vec::new();
        for y in y0..y1 {
            let cy = y as f64 + 0.5;
            crossings.clear();
            for (i, &(ax, ay)) in points.iter().enumerate() {
                let (bx, by) = points[(i + 1) % points.len()];
                if (ay <= cy) != (by <= cy) {
                    crossings.push(ax + (cy - ay) / (by - ay) * (bx - ax));
                }
            }
            crossings.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            for pair in crossings.chunks(2) {
                if let [left, right] = pair {
                    let (x0, _, x1, _) = self.span(*left, 0.0, *right, 0.0);
                    for x in x0..x1 {
                        self.blend(x, y, paint, Blend::Over);
                    }
                }
            }
        }
    }
}

fn distance(x: u32, y: u32, cx: f64, cy: f64) -> f64 {
    let dx = x as f64 + 0.5 - cx;
    let dy = y as f64 + 0.5 - cy;
    (dx * dx + dy * dy).sqrt()
}
