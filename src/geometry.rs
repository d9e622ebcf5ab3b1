//! Closed-form point sampling shared by the logo designs.
//!
//! Every design is a fixed parameter sweep: radii, angles and warp factors
//! are hardcoded constants evaluated over a loop range. The helpers here
//! keep those sweeps readable; no state is carried between calls.

/// A 2D point in canvas coordinates (y grows downward).
pub type Point = (f64, f64);

/// Point at polar offset `(r, angle_rad)` from `(cx, cy)`.
pub fn polar(cx: f64, cy: f64, r: f64, angle_rad: f64) -> Point {
    (cx + r * angle_rad.cos(), cy + r * angle_rad.sin())
}

/// `n` evenly spaced points on the circle of radius `r` around `(cx, cy)`.
pub fn circle_points(cx: f64, cy: f64, r: f64, n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| polar(cx, cy, r, (i as f64 / n as f64) * std::f64::consts::TAU))
        .collect()
}

/// Rotate `(x, y)` around the origin by `angle_rad`.
pub fn rotate(x: f64, y: f64, angle_rad: f64) -> Point {
    let (s, c) = angle_rad.sin_cos();
    (x * c - y * s, x * s + y * c)
}

/// Radial pull toward `(cx, cy)` with strength falling off as a Lorentzian
/// of the distance. Used by the warped-grid designs.
pub fn gravity_offset(px: f64, py: f64, cx: f64, cy: f64, strength: f64, sigma: f64) -> Point {
    let dx = px - cx;
    let dy = py - cy;
    let dist = (dx * dx + dy * dy).sqrt() + 1e-9;
    let pull = strength / (1.0 + (dist / sigma).powi(2));
    (-dx / dist * pull, -dy / dist * pull)
}

/// Height of Flamm's paraboloid at radial coordinate `r` for Schwarzschild
/// radius `rs`: `z = 2 * sqrt(rs * (r - rs))`. Zero inside the horizon.
pub fn flamm_z(rs: f64, r: f64) -> f64 {
    if r <= rs {
        0.0
    } else {
        2.0 * (rs * (r - rs)).sqrt()
    }
}
