use rand::Rng;

/// A random star-shaped polygon with `n` vertices around the origin, counter-clockwise.
///
/// Vertex `i` sits at an angle jittered within the `i`th of `n` equal sectors, at a radius in
/// `[0.1, 1.0)`. Angles strictly increase, so the ring is always simple.
pub fn random_star<R: Rng>(rng: &mut R, n: usize) -> Vec<[f64; 2]> {
    let sector = std::f64::consts::PI * 2. / (n as f64);
    (0..n).map(|i| {
        let theta = sector * (i as f64 + rng.gen_range(0.0..0.8));
        let r = rng.gen_range(0.1..1.0);
        let (y, x) = theta.sin_cos();
        [x * r, y * r]
    }).collect()
}
