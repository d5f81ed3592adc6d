//! Lumpy rocks.

use euclid::default::Point3D;
use rand::Rng;

/// A closed triangle mesh.
#[derive(Clone, Debug)]
pub struct Shape {
    pub vertices: Vec<Point3D<f64>>,
    /// Indices into `vertices`, three per triangle, counter-clockwise from outside.
    pub faces: Vec<[usize; 3]>,
}

const FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// An icosahedron of radius `size`.
/// If it's `irregular`, every corner gets pushed out by a random 20% to 50%.
pub fn asteroid_shape<R: Rng + ?Sized>(size: f64, irregular: bool, rand: &mut R) -> Shape {
    let t = (1.0 + 5f64.sqrt()) / 2.0;
    let corners = [
        (-1.0, t, 0.0),
        (1.0, t, 0.0),
        (-1.0, -t, 0.0),
        (1.0, -t, 0.0),
        (0.0, -1.0, t),
        (0.0, 1.0, t),
        (0.0, -1.0, -t),
        (0.0, 1.0, -t),
        (t, 0.0, -1.0),
        (t, 0.0, 1.0),
        (-t, 0.0, -1.0),
        (-t, 0.0, 1.0),
    ];
    let unit = (1.0 + t * t).sqrt();

    let vertices = corners
        .iter()
        .map(|&(x, y, z)| {
            let stretch = if irregular {
                1.0 + 0.2 + rand.gen::<f64>() * 0.3
            } else {
                1.0
            };
            let k = size / unit * stretch;
            Point3D::new(x * k, y * k, z * k)
        })
        .collect();

    Shape {
        vertices,
        faces: FACES.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn smooth_rocks_are_round() {
        let mut rand = SmallRng::seed_from_u64(0);
        let rock = asteroid_shape(0.2, false, &mut rand);
        assert_eq!(rock.vertices.len(), 12);
        assert_eq!(rock.faces.len(), 20);
        for v in &rock.vertices {
            assert!((v.to_vector().length() - 0.2).abs() < 1e-12);
        }
    }

    #[test]
    fn lumpy_rocks_bulge_out() {
        let mut rand = SmallRng::seed_from_u64(0);
        let rock = asteroid_shape(1.0, true, &mut rand);
        for v in &rock.vertices {
            let r = v.to_vector().length();
            assert!(r >= 1.2 - 1e-12 && r < 1.5 + 1e-12);
        }
        // every vertex is used
        for i in 0..12 {
            assert!(rock.faces.iter().any(|f| f.contains(&i)));
        }
    }
}
