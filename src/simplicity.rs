use num_traits::real::Real;

use crate::{Kernel, Point, idx::{self, Idx}};

struct Edge;

/// Checks that the closed ring through `points` is simple. O(n²).
///
/// Every edge must have non-zero length, consecutive edges must not fold back over each other, and
/// no two non-adjacent edges may touch.
pub(crate) fn is_simple<C: Real>(points: &[Point<C>], kernel: &Kernel<C>) -> bool {
    let n = points.len();
    let end = |e: Idx<Edge>| (&points[e.usize()], &points[(e.usize() + 1) % n]);

    for e in idx::indices::<Edge>(n) {
        let (a, b) = end(e);
        if a == b {
            return false;
        }

        // The shared vertex of e and its successor sits between the other two endpoints when the
        // ring doubles back on itself
        let (_, c) = end(Idx::new((e.usize() + 1) % n));
        if kernel.between(a, b, c) || kernel.between(b, c, a) {
            return false;
        }
    }

    // A triangle only has adjacent edges
    if n == 3 {
        return true;
    }

    for e in idx::indices::<Edge>(n) {
        let (a, b) = end(e);
        for f in idx::indices::<Edge>(n).skip(e.usize() + 2) {
            // The first and last edges share vertex 0
            if e.usize() == 0 && f.usize() == n - 1 {
                continue;
            }
            let (c, d) = end(f);
            if kernel.intersect(a, b, c, d) {
                return false;
            }
        }
    }

    true
}
