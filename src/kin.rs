//! Kinematic quantities derived from three-momenta.
//!
//! The angles use the fixed formulas `theta = asin(pt / p)` and
//! `phi = acos(px / pt)`. Neither guards against vanishing denominators:
//! a zero three-momentum yields NaN for both angles, and a momentum pointing
//! purely along z yields NaN for [`phi`].

/// Magnitude of a three-momentum.
pub fn momentum(p: [f64; 3]) -> f64 {
    (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt()
}

/// Polar angle `asin(pt / p)`.
pub fn theta(p: [f64; 3]) -> f64 {
    let pt = (p[0] * p[0] + p[1] * p[1]).sqrt();
    (pt / momentum(p)).asin()
}

/// Azimuthal angle `acos(px / pt)`.
///
/// Folds into the interval [0, π]; the sign of the y component is not kept.
pub fn phi(p: [f64; 3]) -> f64 {
    let pt = (p[0] * p[0] + p[1] * p[1]).sqrt();
    (p[0] / pt).acos()
}
