use ordered_float::OrderedFloat;

use crate::{Point, Triangle, area};

type Key = (OrderedFloat<f64>, OrderedFloat<f64>);

/// Triangles as sorted corner sets, in sorted order, so that two triangulations can be compared
/// regardless of emission order and winding
pub fn canonical_triangles(triangles: &[Triangle<f64>]) -> Vec<[Key; 3]> {
    let mut output: Vec<[Key; 3]> = triangles.iter().map(|t| {
        let mut corners = [key(&t[0]), key(&t[1]), key(&t[2])];
        corners.sort();
        corners
    }).collect();
    output.sort();
    output
}

fn key(p: &Point<f64>) -> Key {
    (OrderedFloat(p.x()), OrderedFloat(p.y()))
}

/// Crossing-number test for `p` against the closed ring through `ring`
pub fn ring_contains(ring: &[[f64; 2]], p: [f64; 2]) -> bool {
    let mut inside = false;
    for (i, a) in ring.iter().enumerate() {
        let b = &ring[(i + 1) % ring.len()];
        if (a[1] > p[1]) != (b[1] > p[1]) {
            let x = a[0] + (p[1] - a[1]) / (b[1] - a[1]) * (b[0] - a[0]);
            if p[0] < x {
                inside = !inside;
            }
        }
    }
    inside
}

fn strictly_contains(t: &Triangle<f64>, p: &Point<f64>) -> bool {
    let sides = [
        Triangle::new(t[0], t[1], *p).signed_area(),
        Triangle::new(t[1], t[2], *p).signed_area(),
        Triangle::new(t[2], t[0], *p).signed_area(),
    ];
    sides.iter().all(|&s| s > 0.) || sides.iter().all(|&s| s < 0.)
}

/// Asserts the properties every triangulation of a simple ring must have: `n - 2` triangles, each
/// with positive area, whose areas sum to the ring's, and which tile the ring's interior.
pub fn assert_valid_triangulation(ring: &[[f64; 2]], triangles: &[Triangle<f64>]) {
    assert_eq!(triangles.len(), ring.len() - 2, "Wrong triangle count");

    for t in triangles {
        assert!(t.area() > 0., "Degenerate triangle {}", t);
    }

    let expected = area(ring).abs();
    let actual: f64 = triangles.iter().map(|t| t.area()).sum();
    assert!((expected - actual).abs() <= 1e-9 * expected.max(1.), "Area mismatch: ring {} vs triangles {}", expected, actual);

    let (mut x_min, mut x_max, mut y_min, mut y_max) = (f64::MAX, f64::MIN, f64::MAX, f64::MIN);
    for [x, y] in ring {
        x_min = x_min.min(*x);
        x_max = x_max.max(*x);
        y_min = y_min.min(*y);
        y_max = y_max.max(*y);
    }

    // Offsets keep the samples off the integer lattice most fixtures are drawn on, and off the
    // bounding box diagonals
    let steps = 37;
    for i in 0..steps {
        for j in 0..steps {
            let x = x_min + (x_max - x_min) * (i as f64 + 0.382) / steps as f64;
            let y = y_min + (y_max - y_min) * (j as f64 + 0.291) / steps as f64;
            if !ring_contains(ring, [x, y]) {
                continue;
            }
            let p = Point::new(x, y);
            let touching = triangles.iter().filter(|t| t.contains(&p)).count();
            let strict = triangles.iter().filter(|t| strictly_contains(t, &p)).count();
            assert!(touching >= 1, "Gap at {}", p);
            // A point on a shared edge may touch both triangles
            assert!(strict <= 1, "Overlap at {}", p);
        }
    }
}
