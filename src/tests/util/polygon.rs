use super::vtest::VTest;

/// (0, 0) to (4, 4), counter-clockwise
pub fn square() -> Vec<[f64; 2]> {
    vec![[0., 0.], [4., 0.], [4., 4.], [0., 4.]]
}

pub fn triangle() -> Vec<[f64; 2]> {
    vec![[0., 0.], [3., 0.], [0., 2.]]
}

pub fn star() -> Vec<[f64; 2]> {
    vec![
        [1.0, 0.0],
        [2.0, 2.0],
        [0.0, 1.0],
        [-2.0, 2.0],
        [-1.0, 0.0],
        [-2.0, -2.0],
        [0.0, -1.0],
        [2.0, -2.0],
    ]
}

/// A thin L-shaped strip, clockwise
pub fn half_frame() -> Vec<[f64; 2]> {
    vec![[0., 0.], [0.05, 0.05], [0.95, 0.05], [0.95, 0.95], [1., 1.], [1., 0.]]
}

/// Three teeth standing on a base. Area 11.
pub fn comb() -> Vec<[f64; 2]> {
    vec![
        [0., 0.], [5., 0.], [5., 3.], [4., 3.], [4., 1.], [3., 1.],
        [3., 3.], [2., 3.], [2., 1.], [1., 1.], [1., 3.], [0., 3.],
    ]
}

/// The square with an extra vertex in the middle of its bottom edge
pub fn square_with_collinear() -> Vec<[f64; 2]> {
    vec![[0., 0.], [2., 0.], [4., 0.], [4., 4.], [0., 4.]]
}

/// Two crossing edges enclosing no net area
///
/// ```text
/// x   x
/// |\ /|
/// | x |
/// |/ \|
/// x   x
/// ```
pub fn bowtie() -> Vec<[f64; 2]> {
    vec![[0., 0.], [2., 2.], [2., 0.], [0., 2.]]
}

/// A bowtie with unequal lobes, so its signed area is non-zero
pub fn lopsided_bowtie() -> Vec<[f64; 2]> {
    vec![[0., 0.], [4., 4.], [4., 0.], [0., 2.]]
}

/// The star in `f32` test vertices
pub fn star_vtest() -> Vec<VTest> {
    star().into_iter().map(|[x, y]| (x as f32, y as f32).into()).collect()
}

/// A regular `n`-gon of radius `r` centred on the origin, counter-clockwise
pub fn regular(n: usize, r: f64) -> Vec<[f64; 2]> {
    (0..n).map(|i| {
        let theta = std::f64::consts::PI * 2. * (i as f64) / (n as f64);
        let (y, x) = theta.sin_cos();
        [x * r, y * r]
    }).collect()
}

/// Every simple fixture
pub fn all() -> Vec<Vec<[f64; 2]>> {
    vec![square(), triangle(), star(), half_frame(), comb(), square_with_collinear(), regular(17, 10.)]
}
