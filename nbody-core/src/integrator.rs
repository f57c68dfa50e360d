use crate::engine::Body;

/// Iterate over every unordered pair `(i, j)` with `i < j` exactly once,
/// in the canonical order `(0,1), (0,2), ..., (n-2, n-1)`.
pub fn pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
}

/// Step the bodies forward by dt using semi-implicit Euler integration.
///
/// All pairwise velocity kicks are applied before any position moves, so the
/// drift always uses velocities that include every other body's pull.
/// Coincident bodies give `r = 0` and the resulting Inf/NaN is left to
/// propagate.
pub fn step(bodies: &mut [Body], dt: f64) {
    // Kick: v_i -= d * m_j * dt / r^3, v_j += d * m_i * dt / r^3
    for (i, j) in pairs(bodies.len()) {
        let d = bodies[i].pos - bodies[j].pos;
        let r = d.length();
        let mag = dt / (r * r * r);

        let mass_i = bodies[i].mass;
        let mass_j = bodies[j].mass;
        bodies[i].vel -= d * (mass_j * mag);
        bodies[j].vel += d * (mass_i * mag);
    }

    // Drift
    for body in bodies.iter_mut() {
        body.pos += body.vel * dt;
    }
}
