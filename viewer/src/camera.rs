//! Turns 3D points into pixels.
//! The camera orbits whatever it's looking at: yaw swings it around the y axis,
//! pitch tips it up and down.

use euclid::default::{Point3D, Vector3D};
use simulator::bodies::Rotation;

/// Anything closer to the camera than this doesn't get drawn.
const NEAR: f64 = 0.05;
/// Focal length, as a fraction of the window's height.
const FOCAL: f64 = 1.2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    pub yaw: f64,
    pub pitch: f64,
    /// How far back from the target it sits
    pub distance: f64,
    /// The point it looks at and turns around
    pub target: Point3D<f64>,
}

/// Where a point ended up on screen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projected {
    pub x: f32,
    pub y: f32,
    /// Pixels per world unit at this depth
    pub scale: f32,
    /// Distance in front of the camera. Bigger is farther.
    pub depth: f64,
}

impl Camera {
    pub fn new(distance: f64, target: Point3D<f64>) -> Self {
        Self {
            yaw: 0.0,
            pitch: DEFAULT_PITCH,
            distance,
            target,
        }
    }

    /// A point in view space: x right, y up, z away from the camera.
    pub fn to_view(&self, p: Point3D<f64>) -> Point3D<f64> {
        let p = p - self.target.to_vector();
        let (sy, cy) = self.yaw.sin_cos();
        let x = p.x * cy - p.z * sy;
        let z = p.x * sy + p.z * cy;
        let (sp, cp) = self.pitch.sin_cos();
        let y = p.y * cp - z * sp;
        let z = p.y * sp + z * cp;
        Point3D::new(x, y, z + self.distance)
    }

    /// None if it's behind the camera.
    pub fn project(&self, p: Point3D<f64>, (width, height): (f32, f32)) -> Option<Projected> {
        let v = self.to_view(p);
        if v.z < NEAR {
            return None;
        }
        let scale = height as f64 * FOCAL / v.z;
        Some(Projected {
            x: width / 2.0 + (v.x * scale) as f32,
            y: height / 2.0 - (v.y * scale) as f32,
            scale: scale as f32,
            depth: v.z,
        })
    }

    /// Which way the light comes from when looking at `body` lit by `light`, in view space.
    pub fn light_dir(&self, body: Point3D<f64>, light: Point3D<f64>) -> Option<Vector3D<f64>> {
        let dir = self.to_view(light) - self.to_view(body);
        if dir.length() > 0.0 {
            Some(dir.normalize())
        } else {
            None
        }
    }
}

const DEFAULT_PITCH: f64 = 0.5;

/// Turn a model-space point: x first, then y, then z.
pub fn rotate(p: Point3D<f64>, rot: &Rotation) -> Point3D<f64> {
    let (sx, cx) = rot.x.sin_cos();
    let (y, z) = (p.y * cx - p.z * sx, p.y * sx + p.z * cx);
    let (sy, cy) = rot.y.sin_cos();
    let (x, z) = (p.x * cy + z * sy, -p.x * sy + z * cy);
    let (sz, cz) = rot.z.sin_cos();
    let (x, y) = (x * cz - y * sz, x * sz + y * cz);
    Point3D::new(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: (f32, f32) = (800.0, 600.0);

    #[test]
    fn origin_is_the_middle() {
        let cam = Camera::new(10.0, Point3D::origin());
        let p = cam.project(Point3D::origin(), SCREEN).unwrap();
        assert!((p.x - 400.0).abs() < 1e-3);
        assert!((p.y - 300.0).abs() < 1e-3);
        assert!((p.depth - 10.0).abs() < 1e-12);
    }

    #[test]
    fn farther_is_smaller() {
        let cam = Camera {
            yaw: 0.0,
            pitch: 0.0,
            distance: 10.0,
            target: Point3D::origin(),
        };
        let near = cam.project(Point3D::new(0.0, 0.0, -5.0), SCREEN).unwrap();
        let far = cam.project(Point3D::new(0.0, 0.0, 5.0), SCREEN).unwrap();
        assert!(near.scale > far.scale);
        assert!(far.depth > near.depth);
    }

    #[test]
    fn behind_the_camera_is_culled() {
        let cam = Camera {
            yaw: 0.0,
            pitch: 0.0,
            distance: 10.0,
            target: Point3D::origin(),
        };
        assert_eq!(cam.project(Point3D::new(0.0, 0.0, -20.0), SCREEN), None);
    }

    #[test]
    fn up_is_up() {
        let cam = Camera {
            yaw: 0.3,
            pitch: 0.0,
            distance: 10.0,
            target: Point3D::origin(),
        };
        let p = cam.project(Point3D::new(0.0, 1.0, 0.0), SCREEN).unwrap();
        assert!(p.y < 300.0);
    }

    #[test]
    fn target_is_the_middle() {
        let target = Point3D::new(3.0, 0.0, 5.0);
        let cam = Camera::new(10.0, target);
        let p = cam.project(target, SCREEN).unwrap();
        assert!((p.x - 400.0).abs() < 1e-3);
        assert!((p.y - 300.0).abs() < 1e-3);
        assert!((p.depth - 10.0).abs() < 1e-12);
        // and the galaxy's middle is somewhere else
        let middle = cam.project(Point3D::origin(), SCREEN).unwrap();
        assert!((middle.x - 400.0).abs() > 1.0);
    }

    #[test]
    fn rotation_keeps_length() {
        let rot = Rotation {
            x: 0.4,
            y: 1.3,
            z: -2.0,
        };
        let p = Point3D::new(1.0, 2.0, 3.0);
        let turned = rotate(p, &rot);
        assert!((turned.to_vector().length() - p.to_vector().length()).abs() < 1e-9);
        assert_eq!(rotate(p, &Rotation::default()), p);
    }
}
